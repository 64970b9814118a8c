use crate::checksum::ChecksumAlgorithm;
use crate::format::{Cover, FormatDescriptor, IdKind, Layout, PrefixPolicy, Scope, SegmentSpec};
use crate::registry::algorithms::*;
use crate::registry::personal_id::RODNE_CISLO_DATE;
use crate::registry::Registry;

const PT_NIF_LEADING: &[&str] = &["1", "2", "3", "5", "6", "8", "9"];

/// First letters of a Spanish CIF, by how the control character is written. Either form
/// is read for every letter.
const ES_CIF_LETTER_FIRST: &[&str] = &["N", "P", "Q", "R", "S", "W"];
const ES_CIF_DIGIT_FIRST: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "J", "U", "V"];
const ES_CIF_FIRST: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "J", "N", "P", "Q", "R", "S", "U", "V", "W",
];

/// VAT numbers carry their prefix (the ISO code, `EL` for Greece) as the first segment.
/// Input without it is accepted.
fn vat(
    country: &'static str,
    vat_prefix: &'static str,
    segments: Vec<SegmentSpec>,
) -> FormatDescriptor {
    FormatDescriptor::new(
        IdKind::VatId,
        Scope::country(country),
        "VAT number",
        prefixed(vat_prefix, segments),
    )
    .prefix(PrefixPolicy::Implied)
}

fn prefixed(vat_prefix: &'static str, segments: Vec<SegmentSpec>) -> Vec<SegmentSpec> {
    let mut all = vec![SegmentSpec::literal(vat_prefix)];
    all.extend(segments);
    all
}

// indices in `Cover::Only` count the prefix as segment 0

pub(super) fn german() -> FormatDescriptor {
    vat(
        "DE",
        "DE",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(7),
            SegmentSpec::check(MOD_11_10, Cover::Only(&[1, 2])),
        ],
    )
}

pub(super) fn austrian() -> FormatDescriptor {
    vat(
        "AT",
        "AT",
        vec![
            SegmentSpec::literal("U"),
            SegmentSpec::digits(7),
            SegmentSpec::check(AT_VAT, Cover::Only(&[2])),
        ],
    )
}

/// Standard numbers, the post-2010 "9755" series and the `00` form of a zero remainder.
pub(super) fn british() -> FormatDescriptor {
    let layout = |algorithm| {
        prefixed(
            "GB",
            vec![
                SegmentSpec::digits(7),
                SegmentSpec::check(algorithm, Cover::Only(&[1])),
            ],
        )
    };
    vat(
        "GB",
        "GB",
        vec![
            SegmentSpec::digits(7),
            SegmentSpec::check(GB_VAT, Cover::Only(&[1])),
        ],
    )
    .alternate(layout(GB_VAT_9755))
    .accepting(layout(GB_VAT_ZERO))
}

/// DNI for residents, NIE for foreigners (`X`, `Y` and `Z` stand for 0, 1 and 2 in the
/// check) and CIF for legal entities.
pub(super) fn spanish() -> FormatDescriptor {
    let nie = |letter, algorithm| {
        prefixed(
            "ES",
            vec![
                SegmentSpec::literal(letter),
                SegmentSpec::digits(7),
                SegmentSpec::check(algorithm, Cover::Only(&[2])),
            ],
        )
    };
    vat(
        "ES",
        "ES",
        vec![
            SegmentSpec::digits(8),
            SegmentSpec::check(ES_DNI, Cover::Only(&[1])),
        ],
    )
    .alternate(nie("X", ES_NIE_X))
    .alternate(nie("Y", ES_NIE_Y))
    .alternate(nie("Z", ES_NIE_Z))
    .with_layouts(cif_layouts("ES"))
}

/// The Spanish CIF on its own, as used for companies.
pub(super) fn spanish_cif() -> FormatDescriptor {
    let mut layouts = cif_layouts("ES");
    let primary = layouts.remove(0);
    FormatDescriptor::new(IdKind::VatId, Scope::country("ES"), "CIF", primary.segments)
        .prefix(PrefixPolicy::Implied)
        .with_layouts(layouts)
}

/// CIF layouts behind `prefix`: the customary control form of each entity type is
/// generated, the other one is read.
fn cif_layouts(prefix: &'static str) -> Vec<Layout> {
    let cif = |first, algorithm| {
        prefixed(
            prefix,
            vec![
                SegmentSpec::one_of(first),
                SegmentSpec::digits(7),
                SegmentSpec::check(algorithm, Cover::Only(&[2])),
            ],
        )
    };
    vec![
        Layout::new(cif(ES_CIF_LETTER_FIRST, ES_CIF_LETTER)),
        Layout::new(cif(ES_CIF_DIGIT_FIRST, ES_CIF_DIGIT)),
        Layout::new(cif(ES_CIF_FIRST, ES_CIF_LETTER)).accepted_only(),
        Layout::new(cif(ES_CIF_FIRST, ES_CIF_DIGIT)).accepted_only(),
    ]
}

/// `GR` is read as the `EL` prefix. Eight-digit numbers have dropped a leading zero.
pub(super) fn greek() -> FormatDescriptor {
    vat(
        "GR",
        "EL",
        vec![
            SegmentSpec::digits(8),
            SegmentSpec::check(GR_AFM, Cover::Only(&[1])),
        ],
    )
    .accepting(prefixed(
        "EL",
        vec![
            SegmentSpec::digits(7),
            SegmentSpec::check(GR_AFM_SHORT, Cover::Only(&[1])),
        ],
    ))
    .prefix(PrefixPolicy::Aliased("GR"))
}

/// Seven digits and a check letter, optionally followed by a second letter that the
/// check also covers.
pub(super) fn irish() -> FormatDescriptor {
    vat(
        "IE",
        "IE",
        vec![
            SegmentSpec::digits(7),
            SegmentSpec::check(IE_VAT, Cover::Only(&[1])),
        ],
    )
    .accepting(prefixed(
        "IE",
        vec![
            SegmentSpec::digits(7),
            SegmentSpec::check(IE_VAT_TWO_LETTERS, Cover::Only(&[1, 3])),
            SegmentSpec::letters(1),
        ],
    ))
}

/// Companies have eight digits. Individuals use their birth number, nine or ten digits,
/// which is read without a check.
fn czech() -> FormatDescriptor {
    vat(
        "CZ",
        "CZ",
        vec![
            SegmentSpec::range(&[(1, 8)], 1),
            SegmentSpec::digits(6),
            SegmentSpec::check(CZ_VAT, Cover::Only(&[1, 2])),
        ],
    )
    .alternate(prefixed(
        "CZ",
        vec![
            SegmentSpec::date(RODNE_CISLO_DATE),
            SegmentSpec::digits(3),
            SegmentSpec::check(CZ_BIRTH_NUMBER, Cover::Only(&[1, 2])),
        ],
    ))
    .accepting(prefixed("CZ", vec![SegmentSpec::digits(9)]))
    .accepting(prefixed("CZ", vec![SegmentSpec::digits(10)]))
}

/// Between two and ten digits, the check weighted from the right.
fn romanian() -> FormatDescriptor {
    let layout = |payload: usize| {
        let mut segments = vec![SegmentSpec::range(&[(1, 9)], 1)];
        if payload > 1 {
            segments.push(SegmentSpec::digits(payload - 1));
            segments.push(SegmentSpec::check(ro_vat(payload), Cover::Only(&[1, 2])));
        } else {
            segments.push(SegmentSpec::check(ro_vat(payload), Cover::Only(&[1])));
        }
        prefixed("RO", segments)
    };
    let mut descriptor =
        FormatDescriptor::new(IdKind::VatId, Scope::country("RO"), "VAT number", layout(8))
            .prefix(PrefixPolicy::Implied);
    for payload in (1..=9).filter(|payload| *payload != 8) {
        descriptor = descriptor.alternate(layout(payload));
    }
    descriptor
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(german());
    registry.register(austrian());
    registry.register(british());
    registry.register(spanish());
    registry.register(greek());
    registry.register(irish());
    registry.register(czech());
    registry.register(romanian());
    registry.register(vat(
        "FR",
        "FR",
        vec![
            SegmentSpec::check(FR_VAT_KEY, Cover::Only(&[2, 3])),
            SegmentSpec::digits(8),
            SegmentSpec::check(LUHN, Cover::Only(&[2])),
        ],
    ));
    registry.register(vat(
        "IT",
        "IT",
        vec![
            SegmentSpec::digits(7),
            SegmentSpec::range(&[(1, 100), (120, 121)], 3),
            SegmentSpec::check(LUHN, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "NL",
        "NL",
        vec![
            SegmentSpec::digits(8),
            SegmentSpec::check(NL_ELEVEN_TEST, Cover::Only(&[1])),
            SegmentSpec::literal("B"),
            SegmentSpec::range(&[(1, 99)], 2),
        ],
    ));
    registry.register(vat(
        "BE",
        "BE",
        vec![
            SegmentSpec::one_of(&["0", "1"]),
            SegmentSpec::digits(7),
            SegmentSpec::check(MOD97_COMPLEMENT, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(
        vat(
            "BG",
            "BG",
            vec![
                SegmentSpec::digits(8),
                SegmentSpec::check(BG_VAT, Cover::Only(&[1])),
            ],
        )
        .alternate(prefixed(
            "BG",
            vec![
                SegmentSpec::digits(9),
                SegmentSpec::check(BG_EGN, Cover::Only(&[1])),
            ],
        )),
    );
    registry.register(vat(
        "CY",
        "CY",
        vec![
            SegmentSpec::digits(8),
            SegmentSpec::check(ChecksumAlgorithm::FiscalCode, Cover::Only(&[1])),
        ],
    ));
    registry.register(vat(
        "DK",
        "DK",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(6),
            SegmentSpec::check(DK_CVR, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "FI",
        "FI",
        vec![
            SegmentSpec::digits(7),
            SegmentSpec::check(FI_BUSINESS_ID, Cover::Only(&[1])),
        ],
    ));
    registry.register(
        vat(
            "LT",
            "LT",
            vec![
                SegmentSpec::digits(7),
                SegmentSpec::literal("1"),
                SegmentSpec::check(LT_VAT, Cover::Only(&[1, 2])),
            ],
        )
        .alternate(prefixed(
            "LT",
            vec![
                SegmentSpec::digits(10),
                SegmentSpec::literal("1"),
                SegmentSpec::check(LT_VAT_TEMPORARY, Cover::Only(&[1, 2])),
            ],
        )),
    );
    registry.register(
        vat(
            "LV",
            "LV",
            vec![
                SegmentSpec::one_of(&["4", "5", "6", "9"]),
                SegmentSpec::digits(9),
                SegmentSpec::check(LV_VAT, Cover::Only(&[1, 2])),
            ],
        )
        // individuals, checked for format only
        .accepting(prefixed(
            "LV",
            vec![SegmentSpec::one_of(&["0", "1", "2", "3"]), SegmentSpec::digits(10)],
        )),
    );
    registry.register(
        vat(
            "MT",
            "MT",
            vec![
                SegmentSpec::range(&[(1, 9)], 1),
                SegmentSpec::digits(5),
                SegmentSpec::check(MT_VAT, Cover::Only(&[1, 2])),
            ],
        )
        .accepting(prefixed(
            "MT",
            vec![
                SegmentSpec::literal("0"),
                SegmentSpec::digits(5),
                SegmentSpec::check(MT_VAT, Cover::Only(&[1, 2])),
            ],
        )),
    );
    registry.register(vat(
        "PL",
        "PL",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(8),
            SegmentSpec::check(PL_NIP, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "PT",
        "PT",
        vec![
            SegmentSpec::one_of(PT_NIF_LEADING),
            SegmentSpec::digits(7),
            SegmentSpec::check(PT_NIF, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "SE",
        "SE",
        vec![
            SegmentSpec::digits(9),
            SegmentSpec::check(LUHN, Cover::Only(&[1])),
            SegmentSpec::literal("01"),
        ],
    ));
    registry.register(vat(
        "EE",
        "EE",
        vec![
            SegmentSpec::literal("10"),
            SegmentSpec::digits(6),
            SegmentSpec::check(EE_VAT, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "LU",
        "LU",
        vec![
            SegmentSpec::digits(6),
            SegmentSpec::check(LU_VAT, Cover::Only(&[1])),
        ],
    ));
    registry.register(vat(
        "HR",
        "HR",
        vec![
            SegmentSpec::digits(10),
            SegmentSpec::check(MOD_11_10, Cover::Only(&[1])),
        ],
    ));
    registry.register(vat(
        "SI",
        "SI",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(6),
            SegmentSpec::check(SI_TAX_NUMBER, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "HU",
        "HU",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(6),
            SegmentSpec::check(HU_VAT, Cover::Only(&[1, 2])),
        ],
    ));
    registry.register(vat(
        "SK",
        "SK",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(1),
            SegmentSpec::one_of(&["2", "3", "4", "7", "8", "9"]),
            SegmentSpec::digits(6),
            SegmentSpec::check(SK_VAT, Cover::Only(&[1, 2, 3, 4])),
        ],
    ));
}
