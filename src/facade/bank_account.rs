use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::{FormatDescriptor, IdKind};
use crate::registry::AccountFields;
use crate::{formatter, generator, registry, validator};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Domestic bank account numbers, for countries where they are not written as IBANs.
pub struct BankAccount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResult {
    pub country: String,
    pub name: String,
    /// Canonical form, without separators.
    pub code: String,
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub account_number: String,
    pub formatted: String,
    pub valid: bool,
}

impl BankAccount {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<AccountResult, IdError> {
        let descriptor = registry::lookup(IdKind::BankAccount, country)?;
        let value = generator::generate(descriptor, rng, &GenOptions::default())?;
        Ok(describe(descriptor, value.normalized, true))
    }

    /// Accepts the compact and the display form.
    pub fn validate(country: &str, value: &str) -> bool {
        registry::lookup(IdKind::BankAccount, country)
            .map(|descriptor| validator::validate(descriptor, value).is_valid())
            .unwrap_or(false)
    }

    /// Splits `value` into its bank, branch and account fields. An invalid number is still
    /// split when it has one of the format's lengths.
    pub fn parse(country: &str, value: &str) -> Result<AccountResult, IdError> {
        let descriptor = registry::lookup(IdKind::BankAccount, country)?;
        let valid = validator::validate(descriptor, value).is_valid();
        Ok(describe(descriptor, validator::normalize(descriptor, value), valid))
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::BankAccount)
    }
}

fn describe(descriptor: &FormatDescriptor, code: String, valid: bool) -> AccountResult {
    let parts = validator::split(descriptor, &code).unwrap_or_default();
    let fields = descriptor.country().and_then(registry::account_fields);
    let join = |pick: fn(&AccountFields) -> &'static [usize]| -> Option<String> {
        let indices = pick(fields.as_ref()?);
        let joined: String = indices.iter().filter_map(|i| parts.get(*i)).map(String::as_str).collect();
        (!joined.is_empty()).then_some(joined)
    };
    AccountResult {
        country: descriptor.scope.to_string(),
        name: descriptor.name.to_string(),
        bank_code: join(|fields| fields.bank),
        branch_code: join(|fields| fields.branch),
        account_number: join(|fields| fields.account).unwrap_or_else(|| code.clone()),
        formatted: formatter::format(descriptor, &code),
        code,
        valid,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_bank_accounts() {
        let valid_ids = vec![
            ("US", "021000021 12345678"),
            ("MX", "032180000118359719"),
            ("AR", "2850590940090418135201"),
            ("NG", "0581520368"),
            ("BR", "001 1234-3 123456-0"),
            ("NZ", "01-0902-0068389-000"),
            ("nz", "0109020068389000"),
            ("GB", "200000 55779911"),
            ("AU", "062-000 12345678"),
        ];
        for (country, id) in valid_ids {
            println!("{country}: {id}");
            assert!(BankAccount::validate(country, id));
        }
    }

    #[test]
    fn test_invalid_bank_accounts() {
        let invalid_ids = vec![
            ("US", "021000022 12345678"),
            ("MX", "032180000118359718"),
            ("NG", "0581520369"),
            ("GB", "200000 5577991"),
            ("FR", "30006000011234567890189"),
            ("ZZ", "123456789"),
        ];
        for (country, id) in invalid_ids {
            println!("{country}: {id}");
            assert!(!BankAccount::validate(country, id));
        }
    }

    #[test]
    fn fields_are_split_out() {
        let cbu = BankAccount::parse("AR", "28505909 40090418135201").unwrap();
        assert!(cbu.valid);
        assert_eq!(cbu.code, "2850590940090418135201");
        assert_eq!(cbu.bank_code.as_deref(), Some("285"));
        assert_eq!(cbu.branch_code.as_deref(), Some("0590"));
        assert_eq!(cbu.account_number, "4009041813520");
        assert_eq!(cbu.formatted, "28505909 40090418135201");

        let routing = BankAccount::parse("US", "02100002112345678").unwrap();
        assert_eq!(routing.bank_code.as_deref(), Some("021000021"));
        assert_eq!(routing.branch_code, None);
        assert_eq!(routing.account_number, "12345678");
        assert_eq!(routing.formatted, "021000021 12345678");

        let wrong = BankAccount::parse("US", "02100002212345678").unwrap();
        assert!(!wrong.valid);
        assert_eq!(wrong.account_number, "12345678");

        assert!(BankAccount::parse("ZZ", "123").is_err());
    }

    #[test]
    fn generated_accounts() {
        let mut rng = StdRng::seed_from_u64(3);
        for country in BankAccount::countries() {
            for _ in 0..20 {
                let account = BankAccount::generate(&country, &mut rng).unwrap();
                assert!(account.valid);
                assert!(BankAccount::validate(&country, &account.code), "{account:?}");
                assert!(BankAccount::validate(&country, &account.formatted), "{account:?}");
                assert!(account.code.contains(&account.account_number), "{account:?}");
            }
        }
    }
}
