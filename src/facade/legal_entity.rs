use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::IdKind;
use crate::{generator, registry, validator};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// ISO 17442 Legal Entity Identifiers. The country picks the issuing LOU.
pub struct LegalEntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeiResult {
    pub code: String,
    /// Prefix of the Local Operating Unit that issued the code.
    pub lou: String,
    /// Entity-specific part, between the reserved zeros and the check digits.
    pub entity: String,
}

impl LegalEntityId {
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<LeiResult, IdError> {
        let descriptor = registry::lookup(IdKind::LegalEntityId, country)?;
        let value = generator::generate(descriptor, rng, &GenOptions::default())?;
        let mut segments = value.segments_resolved.into_iter();
        let lou = segments.next().unwrap_or_default();
        let entity = segments.nth(1).unwrap_or_default();
        Ok(LeiResult {
            code: value.normalized,
            lou,
            entity,
        })
    }

    pub fn validate(country: &str, value: &str) -> bool {
        registry::lookup(IdKind::LegalEntityId, country)
            .map(|descriptor| validator::validate(descriptor, value).is_valid())
            .unwrap_or(false)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::LegalEntityId)
    }
}
