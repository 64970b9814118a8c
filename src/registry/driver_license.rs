use crate::format::{Cover, DateLayout, DateOrder, IdKind, SegmentSpec};
use crate::registry::algorithms::LUHN;
use crate::registry::personal_id::dni;
use crate::registry::Registry;

const IN_STATES: &[&str] = &[
    "AP", "AS", "BR", "CG", "DL", "GA", "GJ", "HR", "HP", "JH", "KA", "KL", "MP", "MH", "OD",
    "PB", "RJ", "TN", "TS", "UP", "UK", "WB",
];

pub(super) fn register(registry: &mut Registry) {
    let licenses: Vec<(&'static str, &'static str, Vec<SegmentSpec>)> = vec![
        (
            "US",
            "Driver License",
            vec![SegmentSpec::letters(1), SegmentSpec::digits(12)],
        ),
        (
            "GB",
            "DVLA driving licence number",
            vec![
                // surname, padded with 9
                SegmentSpec::charset("ABCDEFGHIJKLMNOPQRSTUVWXYZ9", 5),
                SegmentSpec::digits(1),
                // birth month, plus 50 for women
                SegmentSpec::range(&[(1, 12), (51, 62)], 2),
                SegmentSpec::range(&[(1, 28)], 2),
                SegmentSpec::digits(1),
                SegmentSpec::letters(2),
                SegmentSpec::digits(1),
                SegmentSpec::letters(2),
            ],
        ),
        ("DE", "Führerschein", vec![SegmentSpec::alnum(11)]),
        (
            "FR",
            "Permis de conduire",
            vec![SegmentSpec::digits(2), SegmentSpec::letters(2), SegmentSpec::digits(8)],
        ),
        (
            "IT",
            "Patente di guida",
            vec![
                SegmentSpec::letters(2),
                SegmentSpec::digits(7),
                SegmentSpec::letters(1),
            ],
        ),
        ("ES", "Permiso de conducción", dni()),
        (
            "NL",
            "Rijbewijs",
            vec![SegmentSpec::range(&[(1, 9)], 1), SegmentSpec::digits(9)],
        ),
        (
            "SE",
            "Körkort",
            vec![
                SegmentSpec::date(DateLayout::new(DateOrder::Ymd, 2)),
                SegmentSpec::digits(3),
                SegmentSpec::check(LUHN, Cover::Preceding),
            ],
        ),
        (
            "IN",
            "Driving Licence",
            vec![
                SegmentSpec::one_of(IN_STATES),
                SegmentSpec::range(&[(1, 99)], 2),
                SegmentSpec::range(&[(1990, 2025)], 4),
                SegmentSpec::digits(7),
            ],
        ),
        (
            "IE",
            "Driving Licence",
            vec![SegmentSpec::range(&[(1, 9)], 1), SegmentSpec::digits(8)],
        ),
    ];
    for (country, name, segments) in licenses {
        registry.register_country(IdKind::DriverLicense, country, name, segments);
    }
}
