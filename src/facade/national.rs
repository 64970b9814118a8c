use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::{Gender, IdKind, SegmentRole};
use crate::{generator, registry, validator};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// National identity numbers (SSN, CPF, PESEL...).
pub struct PersonalId;

/// Tax identification numbers of individuals.
pub struct TaxId;

pub struct Passport;

pub struct DriverLicense;

/// What a personal identifier says about its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResult {
    pub country: String,
    /// Canonical form.
    pub code: String,
    /// `None` when the format does not encode it.
    pub gender: Option<Gender>,
    /// Date of birth, for formats that embed one.
    pub dob: Option<NaiveDate>,
    pub valid: bool,
}

fn generate_code<R: Rng + ?Sized>(kind: IdKind, country: &str, rng: &mut R) -> Result<String, IdError> {
    let descriptor = registry::lookup(kind, country)?;
    Ok(generator::generate(descriptor, rng, &GenOptions::default())?.normalized)
}

fn validate_code(kind: IdKind, country: &str, value: &str) -> bool {
    registry::lookup(kind, country)
        .map(|descriptor| validator::validate(descriptor, value).is_valid())
        .unwrap_or(false)
}

impl PersonalId {
    /// A random valid number in its compact form.
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<String, IdError> {
        generate_code(IdKind::PersonalId, country, rng)
    }

    /// As [`PersonalId::generate`], for a holder of the given gender or birth year when
    /// the format encodes them.
    pub fn generate_with<R: Rng + ?Sized>(
        country: &str,
        options: &GenOptions,
        rng: &mut R,
    ) -> Result<String, IdError> {
        let descriptor = registry::lookup(IdKind::PersonalId, country)?;
        Ok(generator::generate(descriptor, rng, options)?.normalized)
    }

    /// Accepts the compact and the display form.
    pub fn validate(country: &str, value: &str) -> bool {
        validate_code(IdKind::PersonalId, country, value)
    }

    /// Reads the gender and date of birth encoded in `value`. Fields of an invalid number
    /// are still read when it has one of the format's lengths.
    pub fn parse(country: &str, value: &str) -> Result<PersonResult, IdError> {
        let descriptor = registry::lookup(IdKind::PersonalId, country)?;
        let valid = validator::validate(descriptor, value).is_valid();
        let code = validator::normalize(descriptor, value);
        let (gender, dob) = match validator::matching_layout(descriptor, &code) {
            Some((layout, parts)) => {
                let fields = || layout.segments.iter().zip(parts.iter());
                (
                    fields().find_map(|(segment, part)| segment.gender_of(part)),
                    fields().find_map(|(segment, part)| match &segment.role {
                        SegmentRole::Date(date) => date.birth_date(part),
                        _ => None,
                    }),
                )
            }
            None => (None, None),
        };
        Ok(PersonResult {
            country: descriptor.scope.to_string(),
            code,
            gender,
            dob,
            valid,
        })
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::PersonalId)
    }
}

impl TaxId {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<String, IdError> {
        generate_code(IdKind::TaxId, country, rng)
    }

    pub fn validate(country: &str, value: &str) -> bool {
        validate_code(IdKind::TaxId, country, value)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::TaxId)
    }
}

impl Passport {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<String, IdError> {
        generate_code(IdKind::Passport, country, rng)
    }

    pub fn validate(country: &str, value: &str) -> bool {
        validate_code(IdKind::Passport, country, value)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::Passport)
    }
}

impl DriverLicense {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<String, IdError> {
        generate_code(IdKind::DriverLicense, country, rng)
    }

    pub fn validate(country: &str, value: &str) -> bool {
        validate_code(IdKind::DriverLicense, country, value)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::DriverLicense)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_personal_ids() {
        let valid_ids = vec![
            ("US", "123-45-6789"),
            ("BR", "529.982.247-25"),
            ("PL", "44051401359"),
            ("IT", "RSSMRA85T10A562S"),
            ("IT", "rssmra85t10a562s"),
            ("ES", "12345678Z"),
            ("NL", "111222333"),
            ("CA", "130 692 544"),
            ("CN", "11010519491231002X"),
            ("HR", "69435151530"),
            ("FI", "131052-308T"),
            ("SE", "811218-9876"),
        ];
        for (country, id) in valid_ids {
            println!("{country}: {id}");
            assert!(PersonalId::validate(country, id));
        }
    }

    #[test]
    fn test_invalid_personal_ids() {
        let invalid_ids = vec![
            ("US", "000-45-6789"),
            ("US", "123-45-678"),
            ("BR", "529.982.247-26"),
            ("PL", "44051401358"),
            ("IT", "RSSMRA85T10A562T"),
            ("ES", "12345678A"),
            ("CN", "110105194912310021"),
            ("HR", "69435151531"),
            ("FI", "131052-308U"),
            ("ZZ", "123456789"),
        ];
        for (country, id) in invalid_ids {
            println!("{country}: {id}");
            assert!(!PersonalId::validate(country, id));
        }
    }

    #[test]
    fn test_century_variants() {
        let valid_ids = vec![
            ("BE", "85073003328"),
            ("BE", "01020312345"),
            ("BE", "01.02.03-123.45"),
            ("FI", "131052-308T"),
            ("FI", "131052Y308T"),
            ("FI", "131052U308T"),
            ("FI", "010101A123N"),
            ("FI", "010101B123N"),
            ("FI", "010101F123N"),
            ("FI", "010190+123M"),
            ("CL", "7.654.321-6"),
            ("CL", "76543216"),
            ("CL", "07.654.321-6"),
            ("CL", "12.345.678-5"),
            ("EE", "37605030299"),
            ("EE", "50001010006"),
            ("RO", "1800101221144"),
        ];
        for (country, id) in valid_ids {
            println!("{country}: {id}");
            assert!(PersonalId::validate(country, id));
        }

        let invalid_ids = vec![
            // born after 1999 but checked the old way
            ("BE", "01020312346"),
            ("FI", "010101G123N"),
            ("FI", "131052Z308T"),
            ("CL", "7.654.321-7"),
            ("EE", "77605030299"),
        ];
        for (country, id) in invalid_ids {
            println!("{country}: {id}");
            assert!(!PersonalId::validate(country, id));
        }
    }

    #[test]
    fn parse_reads_gender_and_birth_date() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);

        let pesel = PersonalId::parse("PL", "44051401359").unwrap();
        assert!(pesel.valid);
        assert_eq!(pesel.gender, Some(Gender::Male));
        assert_eq!(pesel.dob, date(1944, 5, 14));

        let hetu = PersonalId::parse("FI", "010101A123N").unwrap();
        assert_eq!(hetu.gender, Some(Gender::Male));
        assert_eq!(hetu.dob, date(2001, 1, 1));
        let old = PersonalId::parse("FI", "010190+123M").unwrap();
        assert_eq!(old.dob, date(1890, 1, 1));

        let belgian = PersonalId::parse("BE", "01020312345").unwrap();
        assert_eq!(belgian.dob, date(2001, 2, 3));
        assert_eq!(belgian.gender, Some(Gender::Male));

        let isikukood = PersonalId::parse("EE", "47101010033").unwrap();
        assert_eq!(isikukood.gender, Some(Gender::Female));
        assert_eq!(isikukood.dob, date(1971, 1, 1));

        let codice = PersonalId::parse("IT", "RSSMRA85T10A562S").unwrap();
        assert_eq!(codice.gender, Some(Gender::Male));
        assert_eq!(codice.dob, None);

        let ssn = PersonalId::parse("US", "123-45-6789").unwrap();
        assert_eq!((ssn.gender, ssn.dob), (None, None));

        let invalid = PersonalId::parse("PL", "44051401358").unwrap();
        assert!(!invalid.valid);
        assert_eq!(invalid.dob, date(1944, 5, 14));

        assert!(PersonalId::parse("ZZ", "123").is_err());
    }

    #[test]
    fn generation_honors_gender_and_year() {
        let mut rng = StdRng::seed_from_u64(8);
        let female_1985 = GenOptions::default().gender(Gender::Female).year(1985);
        let male_2008 = GenOptions::default().gender(Gender::Male).year(2008);
        for country in ["PL", "FI", "BE", "EE", "LT", "RO", "SE", "NO", "CZ", "ZA", "CN"] {
            for (options, gender, year) in [(&female_1985, Gender::Female, 1985), (&male_2008, Gender::Male, 2008)] {
                let id = PersonalId::generate_with(country, options, &mut rng).unwrap();
                let person = PersonalId::parse(country, &id).unwrap();
                println!("{country}: {id} {person:?}");
                assert!(person.valid);
                assert_eq!(person.gender, Some(gender));
                assert_eq!(person.dob.map(|dob| dob.year()), Some(year));
            }
        }
        for country in ["FR", "IT", "DK"] {
            let id = PersonalId::generate_with(country, &female_1985, &mut rng).unwrap();
            assert_eq!(PersonalId::parse(country, &id).unwrap().gender, Some(Gender::Female));
        }
    }

    #[test]
    fn generated_values_validate() {
        let mut rng = StdRng::seed_from_u64(5);
        for country in PersonalId::countries() {
            let id = PersonalId::generate(&country, &mut rng).unwrap();
            assert!(PersonalId::validate(&country, &id), "{country}: {id}");
        }
        for country in TaxId::countries() {
            let id = TaxId::generate(&country, &mut rng).unwrap();
            assert!(TaxId::validate(&country, &id), "{country}: {id}");
        }
        for country in Passport::countries() {
            let id = Passport::generate(&country, &mut rng).unwrap();
            assert!(Passport::validate(&country, &id), "{country}: {id}");
        }
        for country in DriverLicense::countries() {
            let id = DriverLicense::generate(&country, &mut rng).unwrap();
            assert!(DriverLicense::validate(&country, &id), "{country}: {id}");
        }
    }

    #[test]
    fn test_document_numbers() {
        assert!(Passport::validate("DE", "C01X00T478"));
        assert!(!Passport::validate("DE", "C01X00T479"));
        assert!(TaxId::validate("PL", "123-456-32-18"));
        assert!(TaxId::validate("IT", "RSSMRA85T10A562S"));
        assert!(DriverLicense::validate("ES", "12345678Z"));
        assert_eq!(
            Passport::generate("ZZ", &mut StdRng::seed_from_u64(0)),
            Err(IdError::UnsupportedFormat {
                kind: IdKind::Passport,
                country: "ZZ".to_string()
            })
        );
    }
}
