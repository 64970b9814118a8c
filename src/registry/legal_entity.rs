use crate::checksum::ChecksumAlgorithm;
use crate::format::{Cover, FormatDescriptor, IdKind, Scope, SegmentSpec};
use crate::registry::Registry;

/// A Local Operating Unit prefix per country.
const LOU_PREFIXES: &[(&str, &str)] = &[
    ("DE", "5299"),
    ("FR", "9695"),
    ("GB", "2138"),
    ("US", "5493"),
    ("IT", "8156"),
    ("NL", "7245"),
    ("JP", "3538"),
    ("CH", "5067"),
    ("ES", "9598"),
];

/// ISO 17442 LEI: LOU prefix, two reserved zeros, entity part and MOD 97-10 check digits.
/// Codes are generated under the country's LOU, but an entity may register with any LOU,
/// and since 2020 the reserved zeros are part of the entity code, so every country accepts
/// any 18 characters followed by valid check digits.
pub(super) fn register(registry: &mut Registry) {
    for &(country, lou) in LOU_PREFIXES {
        registry.register(
            FormatDescriptor::new(
                IdKind::LegalEntityId,
                Scope::country(country),
                "LEI",
                vec![
                    SegmentSpec::literal(lou),
                    SegmentSpec::literal("00"),
                    SegmentSpec::alnum(12),
                    SegmentSpec::check(ChecksumAlgorithm::Mod97_10, Cover::Preceding),
                ],
            )
            .accepting(vec![
                SegmentSpec::alnum(18),
                SegmentSpec::check(ChecksumAlgorithm::Mod97_10, Cover::Preceding),
            ]),
        );
    }
}
