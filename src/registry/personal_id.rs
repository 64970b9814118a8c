use crate::checksum::ChecksumAlgorithm;
use crate::format::{
    Cover, DateLayout, DateOrder, FormatDescriptor, Gender, GenderCode, Grouping, IdKind, Layout,
    MonthEncoding, Scope, SegmentSpec,
};
use crate::registry::algorithms::*;
use crate::registry::Registry;

const YYMMDD: DateLayout = DateLayout::new(DateOrder::Ymd, 2);
const DDMMYY: DateLayout = DateLayout::new(DateOrder::Dmy, 2);
const YYYYMMDD: DateLayout = DateLayout::new(DateOrder::Ymd, 4);

// Polish PESEL moves the century into the month
const PESEL_DATE: DateLayout = YYMMDD.month(MonthEncoding::Century(&[
    (1800, 80),
    (1900, 0),
    (2000, 20),
    (2100, 40),
    (2200, 60),
]));

// Czech and Slovak women add 50 to the month
pub(super) const RODNE_CISLO_DATE: DateLayout = YYMMDD.month(MonthEncoding::Alternates(&[50]));

// the leading digit of the Baltic codes and the Romanian CNP gives gender and century
const BALTIC_GENDER: GenderCode = GenderCode::Options {
    male: &["1", "3", "5"],
    female: &["2", "4", "6"],
};

const FI_1900S_SIGNS: &[&str] = &["Y", "X", "W", "V", "U"];
const FI_2000S_SIGNS: &[&str] = &["B", "C", "D", "E", "F"];

const CODICE_FISCALE_MONTHS: &[&str] = &["A", "B", "C", "D", "E", "H", "L", "M", "P", "R", "S", "T"];

fn personal(country: &'static str, name: &'static str, segments: Vec<SegmentSpec>) -> FormatDescriptor {
    FormatDescriptor::new(IdKind::PersonalId, Scope::country(country), name, segments)
}

/// Codice fiscale, also used as the Italian tax id.
pub(super) fn codice_fiscale() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::letters(6),
        SegmentSpec::digits(2),
        SegmentSpec::one_of(CODICE_FISCALE_MONTHS),
        // women add 40 to the day
        SegmentSpec::range(&[(1, 31), (41, 71)], 2).gendered(GenderCode::AtLeast {
            bound: 41,
            gender: Gender::Female,
        }),
        SegmentSpec::letters(1),
        SegmentSpec::digits(3),
        SegmentSpec::check(ChecksumAlgorithm::FiscalCode, Cover::Preceding),
    ]
}

/// Brazilian CPF, also used as the tax id.
pub(super) fn cpf() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::digits(9),
        SegmentSpec::check(BR_CPF, Cover::Preceding),
    ]
}

/// Spanish DNI number and control letter.
pub(super) fn dni() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::digits(8),
        SegmentSpec::check(ES_DNI, Cover::Preceding),
    ]
}

/// Dutch burgerservicenummer.
pub(super) fn bsn() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::digits(8),
        SegmentSpec::check(NL_ELEVEN_TEST, Cover::Preceding),
    ]
}

/// Leading century and gender digit followed by the date of birth, as in the Estonian
/// isikukood.
fn baltic(first: &'static [&'static str], first_year: i32) -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::one_of(first).gendered(BALTIC_GENDER),
        SegmentSpec::date(YYMMDD.within(first_year, first_year + 99)),
        SegmentSpec::digits(3),
        SegmentSpec::check(BALTIC_PERSONAL_CODE, Cover::Preceding),
    ]
}

fn baltic_descriptor(country: &'static str, name: &'static str) -> FormatDescriptor {
    personal(country, name, baltic(&["3", "4"], 1900))
        .alternate(baltic(&["5", "6"], 2000))
        .accepting(baltic(&["1", "2"], 1800))
}

/// Date, century sign, individual number and check character. The sign is not covered
/// by the check.
fn hetu(signs: &'static [&'static str], first_year: i32) -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::date(DDMMYY.within(first_year, first_year + 99)),
        SegmentSpec::one_of(signs),
        SegmentSpec::range(&[(2, 899)], 3).gendered(GenderCode::Parity),
        SegmentSpec::check(FI_HETU, Cover::Only(&[0, 2])),
    ]
}

/// Date and serial, checked mod 97. Those born from 2000 on prefix a `2` to the checked
/// number.
fn rijksregister(first_year: i32, check: ChecksumAlgorithm) -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::date(YYMMDD.within(first_year, first_year + 99)),
        SegmentSpec::range(&[(1, 998)], 3).gendered(GenderCode::Parity),
        SegmentSpec::check(check, Cover::Preceding),
    ]
}

fn cnp(first: &'static [&'static str], first_year: i32) -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::one_of(first).gendered(BALTIC_GENDER),
        SegmentSpec::date(YYMMDD.within(first_year, first_year + 99)),
        SegmentSpec::range(&[(1, 46), (51, 52)], 2),
        SegmentSpec::range(&[(1, 999)], 3),
        SegmentSpec::check(RO_CNP, Cover::Preceding),
    ]
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(
        personal(
            "US",
            "Social Security Number",
            vec![
                SegmentSpec::range(&[(1, 665), (667, 899)], 3),
                SegmentSpec::range(&[(1, 99)], 2),
                SegmentSpec::range(&[(1, 9999)], 4),
            ],
        )
        .grouping(Grouping::Pattern("###-##-####")),
    );
    registry.register(personal("BR", "CPF", cpf()).grouping(Grouping::Pattern("###.###.###-##")));
    registry.register(baltic_descriptor("EE", "Isikukood"));
    registry.register(baltic_descriptor("LT", "Asmens kodas"));
    registry.register_country(IdKind::PersonalId, "IT", "Codice Fiscale", codice_fiscale());
    registry.register(
        personal(
            "FR",
            "NIR",
            vec![
                SegmentSpec::one_of(&["1", "2"]).gendered(GenderCode::Options {
                    male: &["1"],
                    female: &["2"],
                }),
                SegmentSpec::digits(2),
                SegmentSpec::range(&[(1, 12)], 2),
                SegmentSpec::range(&[(1, 19), (21, 95)], 2),
                SegmentSpec::digits(3),
                SegmentSpec::range(&[(1, 999)], 3),
                SegmentSpec::check(MOD97_COMPLEMENT, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("# ## ## ## ### ### ##")),
    );
    registry.register_country(IdKind::PersonalId, "ES", "DNI", dni());
    registry.register(
        personal(
            "GB",
            "National Insurance Number",
            vec![
                SegmentSpec::charset("ABCEGHJKLMNOPRSTWXYZ", 1),
                SegmentSpec::charset("ABCEGHJKLMNPRSTWXYZ", 1),
                SegmentSpec::digits(6),
                SegmentSpec::charset("ABCD", 1),
            ],
        )
        .grouping(Grouping::Pattern("## ## ## ## #")),
    );
    registry.register_country(
        IdKind::PersonalId,
        "TR",
        "T.C. Kimlik No",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(8),
            SegmentSpec::check(TR_IDENTITY, Cover::Preceding),
        ],
    );
    registry.register_country(
        IdKind::PersonalId,
        "PL",
        "PESEL",
        vec![
            SegmentSpec::date(PESEL_DATE),
            SegmentSpec::digits(4).gendered(GenderCode::Parity),
            SegmentSpec::check(PL_PESEL, Cover::Preceding),
        ],
    );
    registry.register(
        personal("FI", "Henkilötunnus", hetu(&["-"], 1900))
            .alternate(hetu(&["A"], 2000))
            // signs introduced in 2023, and the 1800s
            .accepting(hetu(FI_1900S_SIGNS, 1900))
            .accepting(hetu(FI_2000S_SIGNS, 2000))
            .accepting(hetu(&["+"], 1800)),
    );
    registry.register_country(
        IdKind::PersonalId,
        "NO",
        "Fødselsnummer",
        vec![
            SegmentSpec::date(DDMMYY),
            SegmentSpec::digits(3).gendered(GenderCode::Parity),
            SegmentSpec::check(NO_BIRTH_NUMBER, Cover::Preceding),
        ],
    );
    registry.register(
        personal(
            "IN",
            "Aadhaar",
            vec![
                SegmentSpec::range(&[(2, 9)], 1),
                SegmentSpec::digits(10),
                SegmentSpec::check(ChecksumAlgorithm::Verhoeff, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("#### #### ####")),
    );
    registry.register(
        personal(
            "DK",
            "CPR-nummer",
            vec![
                SegmentSpec::date(DDMMYY),
                SegmentSpec::digits(4).gendered(GenderCode::Parity),
            ],
        )
        .grouping(Grouping::Pattern("######-####")),
    );
    registry.register(
        personal(
            "SE",
            "Personnummer",
            vec![
                SegmentSpec::date(YYMMDD),
                SegmentSpec::digits(3).gendered(GenderCode::Parity),
                SegmentSpec::check(LUHN, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("######-####"))
        .separators("+"),
    );
    registry.register(personal("NL", "BSN", bsn()).grouping(Grouping::Pattern("####.##.###")));
    registry.register(
        personal(
            "CA",
            "Social Insurance Number",
            vec![
                SegmentSpec::range(&[(1, 7), (9, 9)], 1),
                SegmentSpec::digits(7),
                SegmentSpec::check(LUHN, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("###-###-###")),
    );
    registry.register(
        personal(
            "CL",
            "RUT",
            vec![
                SegmentSpec::range(&[(10_000_000, 29_999_999)], 8),
                SegmentSpec::check(CL_RUT, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("##.###.###-#"))
        .layout(
            Layout::new(vec![
                SegmentSpec::range(&[(1_000_000, 9_999_999)], 7),
                SegmentSpec::check(CL_RUT, Cover::Preceding),
            ])
            .grouping(Grouping::Pattern("#.###.###-#")),
        )
        // older numbers written with a leading zero
        .accepting(vec![
            SegmentSpec::literal("0"),
            SegmentSpec::range(&[(1_000_000, 9_999_999)], 7),
            SegmentSpec::check(CL_RUT, Cover::Preceding),
        ]),
    );
    registry.register_country(
        IdKind::PersonalId,
        "HR",
        "OIB",
        vec![
            SegmentSpec::digits(10),
            SegmentSpec::check(MOD_11_10, Cover::Preceding),
        ],
    );
    registry.register(
        personal(
            "IS",
            "Kennitala",
            vec![
                SegmentSpec::date(DDMMYY),
                SegmentSpec::range(&[(20, 99)], 2),
                SegmentSpec::check(IS_KENNITALA, Cover::Preceding),
                // century: 9 for the 1900s, 0 for the 2000s
                SegmentSpec::one_of(&["9", "0"]),
            ],
        )
        .grouping(Grouping::Pattern("######-####")),
    );
    registry.register(
        personal(
            "BE",
            "Rijksregisternummer",
            rijksregister(1900, MOD97_COMPLEMENT),
        )
        .alternate(rijksregister(2000, BE_BORN_AFTER_1999))
        .grouping(Grouping::Pattern("##.##.##-###.##")),
    );
    registry.register(
        personal("RO", "CNP", cnp(&["1", "2"], 1900))
            .alternate(cnp(&["5", "6"], 2000))
            .accepting(cnp(&["3", "4"], 1800)),
    );
    registry.register(
        personal(
            "CZ",
            "Rodné číslo",
            vec![
                SegmentSpec::date(RODNE_CISLO_DATE).gendered(GenderCode::MonthOffset),
                SegmentSpec::digits(3),
                SegmentSpec::check(CZ_BIRTH_NUMBER, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("######/####")),
    );
    registry.register_country(
        IdKind::PersonalId,
        "ZA",
        "Identity Number",
        vec![
            SegmentSpec::date(YYMMDD),
            // 5000 and up for men
            SegmentSpec::digits(4).gendered(GenderCode::AtLeast {
                bound: 5000,
                gender: Gender::Male,
            }),
            SegmentSpec::one_of(&["0", "1"]),
            SegmentSpec::digits(1),
            SegmentSpec::check(LUHN, Cover::Preceding),
        ],
    );
    registry.register_country(
        IdKind::PersonalId,
        "CN",
        "Resident Identity Card",
        vec![
            SegmentSpec::range(&[(110_000, 659_999)], 6),
            SegmentSpec::date(YYYYMMDD),
            SegmentSpec::digits(3).gendered(GenderCode::Parity),
            SegmentSpec::check(CN_RESIDENT_ID, Cover::Preceding),
        ],
    );
    registry.register_country(
        IdKind::PersonalId,
        "DE",
        "Personalausweis",
        vec![
            SegmentSpec::charset("CFGHJKLMNPRTVWXYZ", 1),
            SegmentSpec::charset("CFGHJKLMNPRTVWXYZ0123456789", 8),
            SegmentSpec::check(ICAO_9303, Cover::Preceding),
        ],
    );
}
