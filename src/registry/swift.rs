use crate::format::{IdKind, SegmentSpec};
use crate::registry::Registry;

const SWIFT_COUNTRIES: &[&str] = &[
    "AT", "AU", "BE", "BR", "CA", "CH", "CN", "CZ", "DE", "DK", "ES", "FI", "FR", "GB", "GR",
    "HK", "HU", "IE", "IN", "IT", "JP", "KR", "LU", "MX", "NL", "NO", "PL", "PT", "RO", "SE",
    "SG", "US", "ZA",
];

/// ISO 9362 business identifier code: bank, country, location and an optional branch.
/// There is no check character, so validation is structural.
pub(super) fn register(registry: &mut Registry) {
    for &country in SWIFT_COUNTRIES {
        registry.register_country(
            IdKind::Swift,
            country,
            "BIC",
            vec![
                SegmentSpec::letters(4),
                SegmentSpec::literal(country),
                SegmentSpec::alnum(2),
                SegmentSpec::alnum(3).optional(),
            ],
        );
    }
}
