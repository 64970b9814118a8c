// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod batch;
mod checksum;
mod config;
mod error;
mod facade;
mod format;
mod formatter;
mod generator;
mod identifier;
mod observability;
mod registry;
mod stats;
mod validator;

// This is the public API of the idforge library
pub use batch::generate_batch;
pub use checksum::{CheckEncoding, CheckTransform, ChecksumAlgorithm, ChecksumError, Weights};
pub use config::GenOptions;
pub use error::{IdError, ValidationFailure, ValidationOutcome};
pub use facade::{
    descriptor, format, format_iban, generate, generate_iban, generate_with, iban_countries,
    inspect, normalize, validate, validate_iban, AccountResult, BankAccount, CardResult,
    CompanyId, CompanyResult, CreditCard, DriverLicense, LegalEntityId, LeiResult, Passport,
    PersonResult, PersonalId, Swift, SwiftResult, TaxId, VatId, VatResult,
};
pub use format::{
    CardBrand, CheckSpec, Cover, DateLayout, DateOrder, FormatDescriptor, Gender, GenderCode,
    Grouping, IdKind, Layout, LayoutRef, MonthEncoding, PrefixPolicy, Scope, SegmentRole,
    SegmentSpec,
};
pub use identifier::IdentifierValue;
pub use observability::labels::Labels;
pub use registry::{account_fields, card, descriptors, lookup, supported_countries, AccountFields};
pub use stats::{GENERATED, REGISTRY_DESCRIPTORS, VALIDATED};

/// Descriptor-level operations, for callers holding a [`FormatDescriptor`].
pub mod engine {
    pub use crate::formatter::format;
    pub use crate::generator::generate;
    pub use crate::validator::{inspect, normalize, validate};
}
