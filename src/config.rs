use crate::error::IdError;
use crate::format::{CardBrand, Gender};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_EXPIRY_BASE_YEAR: i32 = 2026;

/// Knobs for generation. Every field has a default, so a partial JSON object is enough to
/// configure it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GenOptions {
    /// Brand of generated card numbers. A random brand when unset.
    pub card_brand: Option<CardBrand>,
    /// Whether optional trailing segments (the SWIFT branch code) are emitted. A coin toss
    /// when unset.
    pub include_branch: Option<bool>,
    /// Draws allowed before giving up on a body with no representable check value.
    pub max_attempts: u32,
    /// Card expiry dates fall within the five years after this one.
    pub expiry_base_year: i32,
    /// Gender of the holder of generated personal identifiers that encode one.
    pub gender: Option<Gender>,
    /// Birth year of generated personal identifiers that embed a date. Ignored when the
    /// format cannot express it.
    pub year: Option<i32>,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            card_brand: None,
            include_branch: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            expiry_base_year: DEFAULT_EXPIRY_BASE_YEAR,
            gender: None,
            year: None,
        }
    }
}

impl GenOptions {
    /// Reads options from a JSON object. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, IdError> {
        serde_json::from_str(text).map_err(|err| IdError::MalformedInput(err.to_string()))
    }

    pub fn card_brand(&self, card_brand: CardBrand) -> Self {
        self.mutate_clone(|x| x.card_brand = Some(card_brand))
    }

    pub fn include_branch(&self, include_branch: bool) -> Self {
        self.mutate_clone(|x| x.include_branch = Some(include_branch))
    }

    pub fn max_attempts(&self, max_attempts: u32) -> Self {
        self.mutate_clone(|x| x.max_attempts = max_attempts)
    }

    pub fn expiry_base_year(&self, expiry_base_year: i32) -> Self {
        self.mutate_clone(|x| x.expiry_base_year = expiry_base_year)
    }

    pub fn gender(&self, gender: Gender) -> Self {
        self.mutate_clone(|x| x.gender = Some(gender))
    }

    pub fn year(&self, year: i32) -> Self {
        self.mutate_clone(|x| x.year = Some(year))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
