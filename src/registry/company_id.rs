use crate::format::{Cover, FormatDescriptor, Grouping, IdKind, PrefixPolicy, Scope, SegmentSpec};
use crate::registry::algorithms::*;
use crate::registry::{vat_id, Registry};

/// Company numbers are bare national numbers, a leading ISO country code is accepted on
/// input and dropped.
fn company(country: &'static str, name: &'static str, segments: Vec<SegmentSpec>) -> FormatDescriptor {
    FormatDescriptor::new(IdKind::CompanyId, Scope::country(country), name, segments)
        .prefix(PrefixPolicy::Tolerated(country))
}

/// A company number that is the VAT number itself, prefix included.
fn from_vat(vat: FormatDescriptor, name: &'static str) -> FormatDescriptor {
    FormatDescriptor {
        kind: IdKind::CompanyId,
        name,
        ..vat
    }
}

/// Italian partita IVA: company number, provincial office code and a Luhn digit.
pub(super) fn partita_iva() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::digits(7),
        SegmentSpec::range(&[(1, 100), (120, 121)], 3),
        SegmentSpec::check(LUHN, Cover::Preceding),
    ]
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(
        company(
            "FR",
            "SIREN",
            vec![
                SegmentSpec::digits(8),
                SegmentSpec::check(LUHN, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("### ### ###")),
    );
    registry.register(from_vat(vat_id::british(), "VAT registration number"));
    registry.register(from_vat(vat_id::german(), "USt-IdNr."));
    registry.register(from_vat(vat_id::austrian(), "UID-Nummer"));
    registry.register(from_vat(vat_id::spanish_cif(), "CIF"));
    registry.register(from_vat(vat_id::greek(), "AFM"));
    registry.register(from_vat(vat_id::irish(), "CRO VAT number"));
    registry.register(company("IT", "Partita IVA", partita_iva()));
    registry.register(
        company(
            "BE",
            "Ondernemingsnummer",
            vec![
                SegmentSpec::one_of(&["0", "1"]),
                SegmentSpec::digits(7),
                SegmentSpec::check(MOD97_COMPLEMENT, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("####.###.###")),
    );
    registry.register(company(
        "DK",
        "CVR-nummer",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(6),
            SegmentSpec::check(DK_CVR, Cover::Preceding),
        ],
    ));
    registry.register(company(
        "EE",
        "Registrikood",
        vec![
            SegmentSpec::one_of(&["1", "7", "8", "9"]),
            SegmentSpec::digits(6),
            SegmentSpec::check(EE_REGISTRY_CODE, Cover::Preceding),
        ],
    ));
    registry.register(
        company(
            "FI",
            "Y-tunnus",
            vec![
                SegmentSpec::digits(7),
                SegmentSpec::check(FI_BUSINESS_ID, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("#######-#")),
    );
    registry.register(
        company(
            "NO",
            "Organisasjonsnummer",
            vec![
                SegmentSpec::one_of(&["8", "9"]),
                SegmentSpec::digits(7),
                SegmentSpec::check(NO_ORGANISATION, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("### ### ###")),
    );
    registry.register(company(
        "PL",
        "REGON",
        vec![
            SegmentSpec::digits(8),
            SegmentSpec::check(PL_REGON, Cover::Preceding),
        ],
    ));
    registry.register(
        company(
            "BR",
            "CNPJ",
            vec![
                SegmentSpec::digits(8),
                // head office
                SegmentSpec::literal("0001"),
                SegmentSpec::check(BR_CNPJ, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("##.###.###/####-##")),
    );
    registry.register(
        company(
            "US",
            "Employer Identification Number",
            vec![
                // IRS campus prefixes
                SegmentSpec::range(
                    &[
                        (1, 6),
                        (10, 16),
                        (20, 27),
                        (30, 39),
                        (40, 48),
                        (50, 68),
                        (71, 77),
                        (80, 88),
                        (90, 95),
                        (98, 99),
                    ],
                    2,
                ),
                SegmentSpec::digits(7),
            ],
        )
        .grouping(Grouping::Pattern("##-#######")),
    );
    registry.register(
        FormatDescriptor::new(
            IdKind::CompanyId,
            Scope::country("CH"),
            "UID",
            vec![
                SegmentSpec::literal("CHE"),
                SegmentSpec::digits(8),
                SegmentSpec::check(CH_UID, Cover::Only(&[1])),
            ],
        )
        .grouping(Grouping::Pattern("###-###.###.###")),
    );
    registry.register(company(
        "NL",
        "KvK-nummer",
        vec![SegmentSpec::range(&[(10_000_000, 99_999_999)], 8)],
    ));
}
