use crate::format::{IdKind, Scope};
use serde::{Deserialize, Serialize};

/// A generated or inspected identifier. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierValue {
    /// The input as given, or the display form of a generated value.
    pub raw: String,
    /// Canonical form: no separators, uppercase, country marker handled per the format.
    pub normalized: String,
    pub kind: IdKind,
    pub scope: Scope,
    pub valid: bool,
    /// The normalized value split along the format's segments. Empty when the input does
    /// not have one of the format's lengths.
    pub segments_resolved: Vec<String>,
}
