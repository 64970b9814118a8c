//! Per-kind entry points over the registry, generator, validator and formatter.

mod bank_account;
mod company;
mod credit_card;
mod iban;
mod legal_entity;
mod national;
mod swift;

pub use bank_account::{AccountResult, BankAccount};
pub use company::{CompanyId, CompanyResult, VatId, VatResult};
pub use credit_card::{CardResult, CreditCard};
pub use iban::{format_iban, generate_iban, iban_countries, validate_iban};
pub use legal_entity::{LegalEntityId, LeiResult};
pub use national::{DriverLicense, Passport, PersonResult, PersonalId, TaxId};
pub use swift::{Swift, SwiftResult};

use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::{CardBrand, FormatDescriptor, IdKind};
use crate::identifier::IdentifierValue;
use crate::{formatter, generator, registry, validator};
use rand::Rng;
use std::str::FromStr;

/// The descriptor for `kind` in `country`. Credit cards take a brand name instead of a
/// country.
pub fn descriptor(kind: IdKind, country: &str) -> Result<&'static FormatDescriptor, IdError> {
    if kind != IdKind::CreditCard {
        return registry::lookup(kind, country);
    }
    CardBrand::from_str(&country.to_ascii_lowercase())
        .map_err(|_| IdError::UnsupportedFormat {
            kind,
            country: country.to_string(),
        })
        .and_then(registry::card)
}

pub fn generate<R: Rng + ?Sized>(
    kind: IdKind,
    country: &str,
    rng: &mut R,
) -> Result<IdentifierValue, IdError> {
    generate_with(kind, country, &GenOptions::default(), rng)
}

pub fn generate_with<R: Rng + ?Sized>(
    kind: IdKind,
    country: &str,
    options: &GenOptions,
    rng: &mut R,
) -> Result<IdentifierValue, IdError> {
    generator::generate(descriptor(kind, country)?, rng, options)
}

/// `false` for anything that does not validate, including unsupported formats.
pub fn validate(kind: IdKind, country: &str, raw: &str) -> bool {
    descriptor(kind, country)
        .map(|descriptor| validator::validate(descriptor, raw).is_valid())
        .unwrap_or(false)
}

pub fn normalize(kind: IdKind, country: &str, raw: &str) -> Result<String, IdError> {
    Ok(validator::normalize(descriptor(kind, country)?, raw))
}

/// Display form of `raw`. Input that does not fit the display pattern is returned
/// normalized.
pub fn format(kind: IdKind, country: &str, raw: &str) -> Result<String, IdError> {
    let descriptor = descriptor(kind, country)?;
    Ok(formatter::format(
        descriptor,
        &validator::normalize(descriptor, raw),
    ))
}

pub fn inspect(kind: IdKind, country: &str, raw: &str) -> Result<IdentifierValue, IdError> {
    Ok(validator::inspect(descriptor(kind, country)?, raw))
}

/// The canonical value without a leading letter marker (`CHE`, `FR`, `EL`).
fn bare_number(descriptor: &FormatDescriptor, normalized: &str) -> String {
    descriptor
        .leading_literal()
        .filter(|literal| literal.chars().all(|c| c.is_ascii_alphabetic()))
        .and_then(|literal| normalized.strip_prefix(literal))
        .unwrap_or(normalized)
        .to_string()
}
