use crate::config::GenOptions;
use crate::error::IdError;
use crate::facade::bare_number;
use crate::format::{FormatDescriptor, IdKind};
use crate::{formatter, generator, registry, validator};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Company registration numbers, keyed by country.
pub struct CompanyId;

/// EU style VAT numbers, keyed by country.
pub struct VatId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyResult {
    pub country: String,
    pub name: String,
    /// Canonical form. Only the numbers that double as VAT numbers keep a country
    /// prefix.
    pub code: String,
    /// The national number, without a letter marker such as `CHE`.
    pub number: String,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatResult {
    pub country: String,
    /// Canonical form, with the VAT prefix (`EL` for Greece).
    pub code: String,
    /// The national part, without the prefix.
    pub number: String,
    pub formatted: String,
}

fn generate_normalized<R: Rng + ?Sized>(
    kind: IdKind,
    country: &str,
    rng: &mut R,
) -> Result<(&'static FormatDescriptor, String), IdError> {
    let descriptor = registry::lookup(kind, country)?;
    let value = generator::generate(descriptor, rng, &GenOptions::default())?;
    Ok((descriptor, value.normalized))
}

fn country_of(descriptor: &FormatDescriptor) -> String {
    descriptor.scope.to_string()
}

impl CompanyId {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<CompanyResult, IdError> {
        let (descriptor, code) = generate_normalized(IdKind::CompanyId, country, rng)?;
        Ok(CompanyResult {
            country: country_of(descriptor),
            name: descriptor.name.to_string(),
            number: bare_number(descriptor, &code),
            formatted: formatter::format(descriptor, &code),
            code,
        })
    }

    /// Accepts the number with or without a leading country code.
    pub fn validate(country: &str, value: &str) -> bool {
        registry::lookup(IdKind::CompanyId, country)
            .map(|descriptor| validator::validate(descriptor, value).is_valid())
            .unwrap_or(false)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::CompanyId)
    }
}

impl VatId {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<VatResult, IdError> {
        let (descriptor, code) = generate_normalized(IdKind::VatId, country, rng)?;
        Ok(VatResult {
            country: country_of(descriptor),
            number: bare_number(descriptor, &code),
            formatted: formatter::format(descriptor, &code),
            code,
        })
    }

    /// Accepts the number with or without its VAT prefix.
    pub fn validate(country: &str, value: &str) -> bool {
        registry::lookup(IdKind::VatId, country)
            .map(|descriptor| validator::validate(descriptor, value).is_valid())
            .unwrap_or(false)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::VatId)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_vat_ids() {
        let valid_ids = vec![
            ("FR", "FR40303265045"),
            ("FR", "40303265045"),
            ("FR", "fr 40 303 265 045"),
            ("DE", "DE136695976"),
            ("GB", "GB980780684"),
            ("PL", "PL1234563218"),
            ("ES", "ES12345678Z"),
            ("NL", "NL111222333B01"),
            ("HR", "HR69435151530"),
            ("GR", "EL094259216"),
            ("GR", "094259216"),
            ("GR", "GR094259216"),
            ("GB", "GB100000034"),
            ("GB", "GB930000200"),
            ("ES", "ESX1234567L"),
            ("ES", "ESA58818501"),
            ("ES", "ESQ2826000H"),
            ("AT", "ATU13585627"),
            ("AT", "U13585627"),
            ("BG", "BG175074752"),
            ("BG", "BG7523169263"),
            ("CY", "CY10259033P"),
            ("CZ", "CZ25123891"),
            ("IE", "IE6433435F"),
            ("IE", "IE6433435OA"),
            ("LT", "LT119511515"),
            ("LT", "LT100001919017"),
            ("LV", "LV40003521600"),
            ("MT", "MT11679112"),
            ("RO", "RO18547290"),
            ("RO", "16306155"),
            ("SK", "SK2022749619"),
        ];
        for (country, id) in valid_ids {
            println!("{country}: {id}");
            assert!(VatId::validate(country, id));
        }
    }

    #[test]
    fn test_invalid_vat_ids() {
        let invalid_ids = vec![
            ("FR", "FR41303265045"),
            ("FR", "FR40303265046"),
            ("DE", "DE136695977"),
            ("NL", "NL111222333B00"),
            ("GB", "GB980780685"),
            ("GB", "GB100000035"),
            ("ES", "ESX1234567M"),
            ("ES", "ESA58818502"),
            ("AT", "ATU13585628"),
            ("BG", "BG175074753"),
            ("CY", "CY10259033Q"),
            ("CZ", "CZ25123892"),
            ("IE", "IE6433435G"),
            ("LT", "LT119511525"),
            ("LV", "LV40003521601"),
            ("MT", "MT11679113"),
            ("RO", "RO18547291"),
            ("SK", "SK2022749618"),
            ("ZZ", "ZZ123"),
        ];
        for (country, id) in invalid_ids {
            println!("{country}: {id}");
            assert!(!VatId::validate(country, id));
        }
    }

    #[test]
    fn test_company_ids() {
        assert!(CompanyId::validate("FR", "303 265 045"));
        assert!(CompanyId::validate("FR", "FR303265045"));
        assert!(CompanyId::validate("PL", "123456785"));
        assert!(CompanyId::validate("BR", "11.222.333/0001-81"));
        assert!(!CompanyId::validate("BR", "11.222.333/0001-82"));
        assert!(!CompanyId::validate("GB", "SC123456"));
    }

    #[test]
    fn test_vat_style_company_ids() {
        let valid_ids = vec![
            ("DE", "DE136695976"),
            ("DE", "136695976"),
            ("GB", "GB980780684"),
            ("GB", "GB100000034"),
            ("AT", "ATU13585627"),
            ("ES", "ESQ2826000H"),
            ("ES", "A58818501"),
            ("GR", "EL094259216"),
            ("GR", "GR094259216"),
            ("GR", "94259216"),
            ("IE", "IE6433435F"),
        ];
        for (country, id) in valid_ids {
            println!("{country}: {id}");
            assert!(CompanyId::validate(country, id));
        }
        assert!(!CompanyId::validate("DE", "DE136695977"));
        assert!(!CompanyId::validate("ES", "ESX1234567L"));
    }

    #[test]
    fn generated_records() {
        let mut rng = StdRng::seed_from_u64(11);
        for country in CompanyId::countries() {
            let company = CompanyId::generate(&country, &mut rng).unwrap();
            assert_eq!(company.country, country);
            assert!(CompanyId::validate(&country, &company.code), "{company:?}");
            assert!(CompanyId::validate(&country, &company.formatted), "{company:?}");
        }
        for country in VatId::countries() {
            let vat = VatId::generate(&country, &mut rng).unwrap();
            assert!(vat.code.ends_with(&vat.number));
            assert!(VatId::validate(&country, &vat.code), "{vat:?}");
            assert!(VatId::validate(&country, &vat.number), "{vat:?}");
        }

        let uid = CompanyId::generate("CH", &mut rng).unwrap();
        assert!(uid.code.starts_with("CHE"));
        assert_eq!(uid.number.len(), 9);
        assert_eq!(uid.formatted.len(), 15);

        let greek = VatId::generate("GR", &mut rng).unwrap();
        assert!(greek.code.starts_with("EL"));
        assert_eq!(greek.number.len(), 9);
    }
}
