use crate::format::{Cover, IdKind, SegmentSpec};
use crate::registry::algorithms::ICAO_9303;
use crate::registry::Registry;

// German document numbers avoid vowels and easily confused letters
const DE_SERIAL: &str = "CFGHJKLMNPRTVWXYZ0123456789";
const NL_LETTERS: &str = "ABCDEFGHIJKLMNPQRSTUVWXYZ";
const NL_SERIAL: &str = "ABCDEFGHIJKLMNPQRSTUVWXYZ0123456789";

pub(super) fn register(registry: &mut Registry) {
    let passports: Vec<(&'static str, &'static str, Vec<SegmentSpec>)> = vec![
        ("US", "Passport", vec![SegmentSpec::digits(9)]),
        ("GB", "Passport", vec![SegmentSpec::digits(9)]),
        (
            "DE",
            "Reisepass",
            vec![
                SegmentSpec::charset("CFGHJK", 1),
                SegmentSpec::charset(DE_SERIAL, 8),
                SegmentSpec::check(ICAO_9303, Cover::Preceding),
            ],
        ),
        (
            "NL",
            "Paspoort",
            vec![
                SegmentSpec::charset(NL_LETTERS, 2),
                SegmentSpec::charset(NL_SERIAL, 6),
                SegmentSpec::check(ICAO_9303, Cover::Preceding),
            ],
        ),
        (
            "FR",
            "Passeport",
            vec![
                SegmentSpec::digits(2),
                SegmentSpec::letters(2),
                SegmentSpec::digits(5),
            ],
        ),
        (
            "IT",
            "Passaporto",
            vec![SegmentSpec::letters(2), SegmentSpec::digits(7)],
        ),
        (
            "ES",
            "Pasaporte",
            vec![SegmentSpec::letters(3), SegmentSpec::digits(6)],
        ),
        (
            "CA",
            "Passport",
            vec![SegmentSpec::letters(2), SegmentSpec::digits(6)],
        ),
        (
            "AU",
            "Passport",
            vec![SegmentSpec::letters(1), SegmentSpec::digits(7)],
        ),
        (
            "IN",
            "Passport",
            vec![
                SegmentSpec::charset("ABCDEFGHIJKLMNOPRSTUVWY", 1),
                SegmentSpec::range(&[(1_000_000, 9_999_999)], 7),
            ],
        ),
        (
            "JP",
            "Passport",
            vec![SegmentSpec::letters(2), SegmentSpec::digits(7)],
        ),
        (
            "CN",
            "Passport",
            vec![SegmentSpec::one_of(&["E", "G"]), SegmentSpec::digits(8)],
        ),
    ];
    for (country, name, segments) in passports {
        registry.register_country(IdKind::Passport, country, name, segments);
    }
}
