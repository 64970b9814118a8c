use crate::format::{Cover, FormatDescriptor, Grouping, IdKind, Layout, Scope, SegmentSpec};
use crate::registry::algorithms::*;
use crate::registry::Registry;
use std::ops::RangeInclusive;

/// Segments of a domestic account number that hold its bank code, branch code and
/// account number. Every layout of a country shares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountFields {
    pub bank: &'static [usize],
    pub branch: &'static [usize],
    pub account: &'static [usize],
}

const fn fields(
    bank: &'static [usize],
    branch: &'static [usize],
    account: &'static [usize],
) -> AccountFields {
    AccountFields {
        bank,
        branch,
        account,
    }
}

static ACCOUNT_FIELDS: &[(&str, AccountFields)] = &[
    ("US", fields(&[0, 1, 2], &[], &[3])),
    ("CA", fields(&[0], &[1], &[2])),
    ("MX", fields(&[0], &[1], &[2])),
    ("AU", fields(&[0], &[1], &[2])),
    ("IN", fields(&[0], &[2], &[3])),
    ("CN", fields(&[], &[], &[0, 1, 2])),
    ("ZA", fields(&[], &[0], &[1])),
    ("SG", fields(&[0], &[1], &[2])),
    ("HK", fields(&[0], &[], &[1])),
    ("KR", fields(&[], &[], &[0, 1])),
    ("GB", fields(&[0], &[], &[1])),
    ("AR", fields(&[0], &[1], &[3])),
    ("NG", fields(&[0], &[], &[1, 2])),
    ("BR", fields(&[0], &[1, 2], &[3, 4])),
    ("NZ", fields(&[0], &[1], &[2, 3])),
];

pub fn account_fields(country: &str) -> Option<AccountFields> {
    ACCOUNT_FIELDS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country))
        .map(|(_, fields)| *fields)
}

// Banxico participant codes
const MX_BANKS: &[&str] = &[
    "002", "006", "009", "012", "014", "019", "021", "022", "030", "032", "036", "037", "042",
    "044", "058", "059", "060", "062", "072", "102", "103", "106", "108", "110", "112", "113",
    "116", "124", "126", "127", "128", "129", "130", "131", "132", "133", "134", "135", "136",
    "137", "138", "139", "140", "141", "143", "145", "147", "148", "150", "151", "152", "154",
    "155", "156", "157", "158", "159", "160", "166", "167", "168",
];

// New Zealand banks by account check
const NZ_BANKS_BRANCH_CHECKED: &[&str] = &[
    "01", "02", "03", "04", "06", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "27", "30", "35", "38",
];
const NZ_BANKS_MOD11: &[&str] = &["08"];
const NZ_BANKS_MOD10: &[&str] = &["25", "33"];
const NZ_BANKS_UNCHECKED: &[&str] = &["31"];

fn account(country: &'static str, name: &'static str, segments: Vec<SegmentSpec>) -> FormatDescriptor {
    FormatDescriptor::new(IdKind::BankAccount, Scope::country(country), name, segments)
}

/// One layout per length of the variable part, all of them generated. The display
/// grouping of the first layout becomes the descriptor's.
fn per_length(
    country: &'static str,
    name: &'static str,
    lengths: RangeInclusive<usize>,
    layout: impl Fn(usize) -> Layout,
) -> FormatDescriptor {
    let mut layouts: Vec<Layout> = lengths.map(layout).collect();
    let primary = layouts.remove(0);
    account(country, name, primary.segments)
        .grouping(primary.grouping.unwrap_or(Grouping::None))
        .with_layouts(layouts)
}

/// Routing number (district, institution, check digit) followed by the account.
fn american() -> FormatDescriptor {
    per_length("US", "ABA routing and account", 8..=17, |length| {
        Layout::new(vec![
            SegmentSpec::range(&[(1, 12), (21, 32), (61, 72), (80, 80)], 2),
            SegmentSpec::digits(6),
            SegmentSpec::check(ABA_ROUTING, Cover::Only(&[0, 1])),
            SegmentSpec::digits(length),
        ])
    })
    .grouping(Grouping::Fields(&[(2, " ")]))
}

/// Korean accounts have no fixed structure, only a customary grouping per length.
fn korean() -> FormatDescriptor {
    per_length("KR", "Bank account", 11..=14, |length| {
        let pattern = match length {
            11 => "###-##-######",
            12 => "###-###-######",
            13 => "###-####-####-##",
            _ => "###-####-####-###",
        };
        Layout::new(vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(length - 1),
        ])
        .grouping(Grouping::Pattern(pattern))
    })
}

/// Agency and account, each with a mod-11 check digit.
fn brazilian() -> FormatDescriptor {
    per_length("BR", "Bank, agency and account", 6..=10, |length| {
        Layout::new(vec![
            SegmentSpec::range(&[(1, 999)], 3),
            SegmentSpec::digits(4),
            SegmentSpec::check(BR_AGENCY, Cover::Only(&[1])),
            SegmentSpec::digits(length),
            SegmentSpec::check(BR_ACCOUNT, Cover::Only(&[3])),
        ])
    })
    .grouping(Grouping::Fields(&[(0, " "), (1, "-"), (2, " "), (3, "-")]))
}

/// Bank, branch, seven-digit account and suffix. The check depends on the bank, and on
/// the account number for most banks.
fn new_zealand() -> FormatDescriptor {
    let layout = |banks, head: SegmentSpec, check: SegmentSpec| {
        vec![
            SegmentSpec::one_of(banks),
            SegmentSpec::range(&[(1, 9999)], 4),
            head,
            check,
            SegmentSpec::digits(3),
        ]
    };
    account(
        "NZ",
        "Bank, branch, account and suffix",
        layout(
            NZ_BANKS_BRANCH_CHECKED,
            SegmentSpec::range(&[(0, 98_999)], 6),
            SegmentSpec::check(NZ_BRANCH_ACCOUNT, Cover::Only(&[1, 2])),
        ),
    )
    .alternate(layout(
        NZ_BANKS_BRANCH_CHECKED,
        SegmentSpec::range(&[(99_000, 999_999)], 6),
        SegmentSpec::check(NZ_HIGH_ACCOUNT, Cover::Only(&[2])),
    ))
    .alternate(layout(
        NZ_BANKS_MOD11,
        SegmentSpec::digits(6),
        SegmentSpec::check(NZ_ACCOUNT_11, Cover::Only(&[2])),
    ))
    .alternate(layout(
        NZ_BANKS_MOD10,
        SegmentSpec::digits(6),
        SegmentSpec::check(NZ_ACCOUNT_10, Cover::Only(&[2])),
    ))
    .alternate(layout(
        NZ_BANKS_UNCHECKED,
        SegmentSpec::digits(6),
        SegmentSpec::digits(1),
    ))
    .grouping(Grouping::Fields(&[(0, "-"), (1, "-"), (3, "-")]))
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(american());
    registry.register(
        per_length("CA", "Institution, transit and account", 7..=12, |length| {
            Layout::new(vec![
                SegmentSpec::range(&[(1, 999)], 3),
                SegmentSpec::range(&[(1, 99_999)], 5),
                SegmentSpec::digits(length),
            ])
        })
        .grouping(Grouping::Fields(&[(0, "-"), (1, "-")])),
    );
    registry.register(account(
        "MX",
        "CLABE",
        vec![
            SegmentSpec::one_of(MX_BANKS),
            // plaza
            SegmentSpec::digits(3),
            SegmentSpec::digits(11),
            SegmentSpec::check(MX_CLABE, Cover::Preceding),
        ],
    ));
    registry.register(
        per_length("AU", "BSB and account", 5..=9, |length| {
            Layout::new(vec![
                SegmentSpec::digits(3),
                SegmentSpec::digits(3),
                SegmentSpec::digits(length),
            ])
        })
        .grouping(Grouping::Fields(&[(0, "-"), (1, " ")])),
    );
    registry.register(
        per_length("IN", "IFSC and account", 9..=18, |length| {
            Layout::new(vec![
                SegmentSpec::letters(4),
                SegmentSpec::literal("0"),
                SegmentSpec::alnum(6),
                SegmentSpec::digits(length),
            ])
        })
        .grouping(Grouping::Fields(&[(2, " ")])),
    );
    registry.register(
        per_length("CN", "Bank card account", 16..=19, |length| {
            Layout::new(vec![
                SegmentSpec::range(&[(1, 9)], 1),
                SegmentSpec::digits(length - 2),
                SegmentSpec::check(LUHN, Cover::Preceding),
            ])
        })
        .grouping(Grouping::Blocks {
            size: 4,
            separator: ' ',
        }),
    );
    registry.register(
        per_length("ZA", "Branch and account", 7..=11, |length| {
            Layout::new(vec![SegmentSpec::digits(6), SegmentSpec::digits(length)])
        })
        .grouping(Grouping::Fields(&[(0, " ")])),
    );
    registry.register(
        per_length("SG", "Bank, branch and account", 6..=10, |length| {
            Layout::new(vec![
                SegmentSpec::range(&[(1, 9999)], 4),
                SegmentSpec::range(&[(1, 999)], 3),
                SegmentSpec::digits(length),
            ])
        })
        .grouping(Grouping::Fields(&[(0, "-"), (1, "-")])),
    );
    registry.register(
        per_length("HK", "Bank and account", 9..=12, |length| {
            Layout::new(vec![
                SegmentSpec::range(&[(1, 999)], 3),
                SegmentSpec::digits(length),
            ])
        })
        .grouping(Grouping::Fields(&[(0, "-")])),
    );
    registry.register(korean());
    registry.register(
        account(
            "GB",
            "Sort code and account",
            vec![SegmentSpec::digits(6), SegmentSpec::digits(8)],
        )
        .grouping(Grouping::Pattern("##-##-## ########")),
    );
    registry.register(
        account(
            "AR",
            "CBU",
            vec![
                SegmentSpec::range(&[(1, 999)], 3),
                SegmentSpec::range(&[(1, 9999)], 4),
                SegmentSpec::check(AR_CBU, Cover::Only(&[0, 1])),
                SegmentSpec::digits(13),
                SegmentSpec::check(AR_CBU, Cover::Only(&[3])),
            ],
        )
        .grouping(Grouping::Fields(&[(2, " ")])),
    );
    registry.register(
        account(
            "NG",
            "NUBAN",
            vec![
                SegmentSpec::range(&[(1, 999)], 3),
                SegmentSpec::digits(6),
                SegmentSpec::check(NG_NUBAN, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Fields(&[(0, " ")])),
    );
    registry.register(brazilian());
    registry.register(new_zealand());
}
