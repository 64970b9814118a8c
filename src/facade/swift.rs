use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::IdKind;
use crate::{generator, registry, validator};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// ISO 9362 business identifier codes.
pub struct Swift;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftResult {
    pub code: String,
    pub bank: String,
    pub country: String,
    pub location: String,
    pub branch: Option<String>,
}

impl SwiftResult {
    fn from_segments(code: String, mut segments: Vec<String>) -> Option<Self> {
        let branch = if segments.len() == 4 { segments.pop() } else { None };
        let location = segments.pop()?;
        let country = segments.pop()?;
        let bank = segments.pop()?;
        Some(Self {
            code,
            bank,
            country,
            location,
            branch,
        })
    }
}

impl Swift {
    /// An 8 or 11 character code, the branch being a coin toss.
    pub fn generate<R: Rng + ?Sized>(country: &str, rng: &mut R) -> Result<SwiftResult, IdError> {
        Self::generate_with(country, &GenOptions::default(), rng)
    }

    /// `options.include_branch` decides whether the branch code is emitted.
    pub fn generate_with<R: Rng + ?Sized>(
        country: &str,
        options: &GenOptions,
        rng: &mut R,
    ) -> Result<SwiftResult, IdError> {
        let descriptor = registry::lookup(IdKind::Swift, country)?;
        let value = generator::generate(descriptor, rng, options)?;
        SwiftResult::from_segments(value.normalized, value.segments_resolved).ok_or_else(|| {
            IdError::MalformedInput(format!("{} is not a SWIFT layout", descriptor.name))
        })
    }

    pub fn validate(country: &str, value: &str) -> bool {
        registry::lookup(IdKind::Swift, country)
            .map(|descriptor| validator::validate(descriptor, value).is_valid())
            .unwrap_or(false)
    }

    /// Splits a valid code into its parts.
    pub fn parse(country: &str, value: &str) -> Option<SwiftResult> {
        let descriptor = registry::lookup(IdKind::Swift, country).ok()?;
        let normalized = validator::validate(descriptor, value).normalized()?.to_string();
        let segments = validator::split(descriptor, &normalized)?;
        SwiftResult::from_segments(normalized, segments)
    }

    pub fn countries() -> BTreeSet<String> {
        registry::supported_countries(IdKind::Swift)
    }
}
