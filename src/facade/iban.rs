use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::{FormatDescriptor, IdKind};
use crate::{formatter, generator, registry, validator};
use rand::Rng;
use std::collections::BTreeSet;

/// Generates an IBAN for `country` in its compact form.
pub fn generate_iban<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<String, IdError> {
    let descriptor = registry::lookup(IdKind::Iban, country)?;
    Ok(generator::generate(descriptor, rng, &GenOptions::default())?.normalized)
}

/// The country is read from the first two characters.
pub fn validate_iban(iban: &str) -> bool {
    descriptor_of(iban)
        .map(|descriptor| validator::validate(descriptor, iban).is_valid())
        .unwrap_or(false)
}

/// Groups an IBAN in blocks of four. Input from an unknown country is returned unchanged.
pub fn format_iban(iban: &str) -> String {
    match descriptor_of(iban) {
        Some(descriptor) => formatter::format(descriptor, &validator::normalize(descriptor, iban)),
        None => iban.to_string(),
    }
}

pub fn iban_countries() -> BTreeSet<String> {
    registry::supported_countries(IdKind::Iban)
}

fn descriptor_of(iban: &str) -> Option<&'static FormatDescriptor> {
    let country: String = iban
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .take(2)
        .collect();
    registry::lookup(IdKind::Iban, &country).ok()
}
