use crate::checksum::ChecksumError;
use crate::format::IdKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("no {kind} format is registered for {country:?}")]
    UnsupportedFormat { kind: IdKind, country: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("check value does not match")]
    ChecksumMismatch,

    /// Every draw had an unrepresentable check value. This points at a broken descriptor.
    #[error("could not generate a valid {kind} for {country} within the attempt limit")]
    GenerationExhausted { kind: IdKind, country: String },
}

impl From<ChecksumError> for IdError {
    fn from(err: ChecksumError) -> Self {
        match err {
            ChecksumError::MalformedInput(reason) => IdError::MalformedInput(reason),
            ChecksumError::Unrepresentable => IdError::ChecksumMismatch,
        }
    }
}

/// Why an input does not validate. Checks run in declaration order and the first
/// failing one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ValidationFailure {
    #[error("expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid character at position {position}")]
    InvalidCharacter { position: usize },

    #[error("segment {segment} is out of range")]
    OutOfRange { segment: usize },

    #[error("check segment {segment} does not match")]
    ChecksumMismatch { segment: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    Valid { normalized: String },
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    pub fn normalized(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid { normalized } => Some(normalized),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// Name used as the `outcome` metric label.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            ValidationOutcome::Valid { .. } => "valid",
            ValidationOutcome::Invalid(ValidationFailure::LengthMismatch { .. }) => "length_mismatch",
            ValidationOutcome::Invalid(ValidationFailure::InvalidCharacter { .. }) => {
                "invalid_character"
            }
            ValidationOutcome::Invalid(ValidationFailure::OutOfRange { .. }) => "out_of_range",
            ValidationOutcome::Invalid(ValidationFailure::ChecksumMismatch { .. }) => {
                "checksum_mismatch"
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn checksum_errors_convert() {
        assert_eq!(
            IdError::from(ChecksumError::Unrepresentable),
            IdError::ChecksumMismatch
        );
        assert!(matches!(
            IdError::from(ChecksumError::MalformedInput("x".to_string())),
            IdError::MalformedInput(_)
        ));
    }

    #[test]
    fn error_messages() {
        let err = IdError::UnsupportedFormat {
            kind: IdKind::Iban,
            country: "ZZ".to_string(),
        };
        assert_eq!(err.to_string(), "no iban format is registered for \"ZZ\"");
        assert_eq!(
            ValidationFailure::LengthMismatch {
                expected: 22,
                actual: 21
            }
            .to_string(),
            "expected 22 characters, got 21"
        );
    }

    #[test]
    fn outcomes_serialize() {
        assert_tokens(
            &ValidationOutcome::Invalid(ValidationFailure::OutOfRange { segment: 2 }),
            &[
                Token::NewtypeVariant {
                    name: "ValidationOutcome",
                    variant: "Invalid",
                },
                Token::StructVariant {
                    name: "ValidationFailure",
                    variant: "OutOfRange",
                    len: 1,
                },
                Token::Str("segment"),
                Token::U64(2),
                Token::StructVariantEnd,
            ],
        );
        assert_tokens(
            &ValidationOutcome::Valid {
                normalized: "DE89".to_string(),
            },
            &[
                Token::StructVariant {
                    name: "ValidationOutcome",
                    variant: "Valid",
                    len: 1,
                },
                Token::Str("normalized"),
                Token::Str("DE89"),
                Token::StructVariantEnd,
            ],
        );
    }
}
