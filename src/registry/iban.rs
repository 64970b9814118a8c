use crate::checksum::ChecksumAlgorithm;
use crate::format::{Cover, FormatDescriptor, Grouping, IdKind, Scope, SegmentSpec};
use crate::registry::algorithms::*;
use crate::registry::Registry;

/// BBAN layouts from the ISO 13616 registry: `n` digits, `a` uppercase letters, `c` both.
const BBAN_LAYOUTS: &[(&str, &str)] = &[
    ("AD", "4n4n12c"),
    ("AE", "3n16n"),
    ("AL", "8n16c"),
    ("AT", "5n11n"),
    ("AZ", "4a20c"),
    ("BA", "3n3n8n2n"),
    ("BE", "3n7n2n"),
    ("BG", "4a4n2n8c"),
    ("BH", "4a14c"),
    ("BI", "5n5n11n2n"),
    ("BR", "8n5n10n1a1c"),
    ("BY", "4c4n16c"),
    ("CH", "5n12c"),
    ("CR", "4n14n"),
    ("CY", "3n5n16c"),
    ("CZ", "4n6n10n"),
    ("DE", "8n10n"),
    ("DJ", "5n5n11n2n"),
    ("DK", "4n9n1n"),
    ("DO", "4c20n"),
    ("EE", "2n2n11n1n"),
    ("EG", "4n4n17n"),
    ("ES", "4n4n1n1n10n"),
    ("FI", "3n11n"),
    ("FK", "2a12n"),
    ("FO", "4n9n1n"),
    ("FR", "5n5n11c2n"),
    ("GB", "4a6n8n"),
    ("GE", "2a16n"),
    ("GI", "4a15c"),
    ("GL", "4n9n1n"),
    ("GR", "3n4n16c"),
    ("GT", "4c20c"),
    ("HR", "7n10n"),
    ("HU", "3n4n1n15n1n"),
    ("IE", "4a6n8n"),
    ("IL", "3n3n13n"),
    ("IQ", "4a3n12n"),
    ("IS", "4n2n6n10n"),
    ("IT", "1a5n5n12c"),
    ("JO", "4a4n18c"),
    ("KW", "4a22c"),
    ("KZ", "3n13c"),
    ("LB", "4n20c"),
    ("LC", "4a24c"),
    ("LI", "5n12c"),
    ("LT", "5n11n"),
    ("LU", "3n13c"),
    ("LV", "4a13c"),
    ("LY", "3n3n15n"),
    ("MC", "5n5n11c2n"),
    ("MD", "2c18c"),
    ("ME", "3n13n2n"),
    ("MK", "3n10c2n"),
    ("MN", "4n12n"),
    ("MR", "5n5n11n2n"),
    ("MT", "4a5n18c"),
    ("MU", "4a2n2n12n3n3a"),
    ("NI", "4a20n"),
    ("NL", "4a10n"),
    ("NO", "4n6n1n"),
    ("OM", "3n16c"),
    ("PK", "4a16c"),
    ("PL", "8n16n"),
    ("PS", "4a21c"),
    ("PT", "4n4n11n2n"),
    ("QA", "4a21c"),
    ("RO", "4a16c"),
    ("RS", "3n13n2n"),
    ("RU", "9n5n15c"),
    ("SA", "2n18c"),
    ("SC", "4a2n2n16n3a"),
    ("SD", "2n12n"),
    ("SE", "3n16n1n"),
    ("SI", "5n8n2n"),
    ("SK", "4n6n10n"),
    ("SM", "1a5n5n12c"),
    ("SO", "4n3n12n"),
    ("ST", "4n4n11n2n"),
    ("SV", "4a20n"),
    ("TL", "3n14n2n"),
    ("TN", "2n3n13n2n"),
    ("TR", "5n1n16c"),
    ("UA", "6n19c"),
    ("VA", "3n15n"),
    ("VG", "4a16n"),
    ("XK", "4n10n2n"),
];

/// Splits a layout such as `4a6n8n` into segments.
fn bban_segments(layout: &str) -> Result<Vec<SegmentSpec>, String> {
    let mut segments = vec![];
    let mut length = 0usize;
    for c in layout.chars() {
        if let Some(digit) = c.to_digit(10) {
            length = length * 10 + digit as usize;
            continue;
        }
        if length == 0 {
            return Err(format!("missing length before {c:?} in {layout}"));
        }
        segments.push(match c {
            'n' => SegmentSpec::digits(length),
            'a' => SegmentSpec::letters(length),
            'c' => SegmentSpec::alnum(length),
            _ => return Err(format!("unknown character class {c:?} in {layout}")),
        });
        length = 0;
    }
    if length != 0 || segments.is_empty() {
        return Err(format!("incomplete layout {layout}"));
    }
    Ok(segments)
}

/// BBANs that carry national check digits. Segment 0 of the IBAN is the country code and
/// segment 1 the IBAN check, so the BBAN starts at index 2.
fn national_bban(country: &str) -> Option<Vec<SegmentSpec>> {
    fn mod97_10(covered: &'static [usize]) -> SegmentSpec {
        SegmentSpec::check(ChecksumAlgorithm::Mod97_10, Cover::Only(covered))
    }
    Some(match country {
        "NO" => vec![
            SegmentSpec::digits(4),
            SegmentSpec::digits(6),
            SegmentSpec::check(NO_ACCOUNT, Cover::Only(&[2, 3])),
        ],
        "EE" => vec![
            SegmentSpec::digits(2),
            SegmentSpec::digits(2),
            SegmentSpec::digits(11),
            SegmentSpec::check(EE_ACCOUNT, Cover::Only(&[3, 4])),
        ],
        "BE" => vec![
            SegmentSpec::digits(3),
            SegmentSpec::digits(7),
            SegmentSpec::check(BE_ACCOUNT, Cover::Only(&[2, 3])),
        ],
        "BA" => vec![
            SegmentSpec::digits(3),
            SegmentSpec::digits(3),
            SegmentSpec::digits(8),
            mod97_10(&[2, 3, 4]),
        ],
        "ME" | "RS" => vec![
            SegmentSpec::digits(3),
            SegmentSpec::digits(13),
            mod97_10(&[2, 3]),
        ],
        "MK" => vec![
            SegmentSpec::digits(3),
            SegmentSpec::alnum(10),
            mod97_10(&[2, 3]),
        ],
        "PT" => vec![
            SegmentSpec::digits(4),
            SegmentSpec::digits(4),
            SegmentSpec::digits(11),
            mod97_10(&[2, 3, 4]),
        ],
        "SI" => vec![
            SegmentSpec::digits(5),
            SegmentSpec::digits(8),
            mod97_10(&[2, 3]),
        ],
        "PL" => vec![
            SegmentSpec::digits(7),
            SegmentSpec::check(PL_BANK, Cover::Only(&[2])),
            SegmentSpec::digits(16),
        ],
        "ES" => vec![
            SegmentSpec::digits(4),
            SegmentSpec::digits(4),
            SegmentSpec::check(ES_BANK_BRANCH, Cover::Only(&[2, 3])),
            SegmentSpec::check(ES_ACCOUNT, Cover::Only(&[6])),
            SegmentSpec::digits(10),
        ],
        "HR" => vec![
            SegmentSpec::digits(6),
            SegmentSpec::check(MOD_11_10, Cover::Only(&[2])),
            SegmentSpec::digits(9),
            SegmentSpec::check(MOD_11_10, Cover::Only(&[4])),
        ],
        "CZ" | "SK" => vec![
            SegmentSpec::digits(4),
            SegmentSpec::digits(5),
            SegmentSpec::check(CZ_ACCOUNT_PREFIX, Cover::Only(&[3])),
            SegmentSpec::digits(9),
            SegmentSpec::check(CZ_ACCOUNT_NUMBER, Cover::Only(&[5])),
        ],
        "FR" | "MC" => vec![
            SegmentSpec::digits(5),
            SegmentSpec::digits(5),
            SegmentSpec::alnum(11),
            SegmentSpec::check(ChecksumAlgorithm::RibKey, Cover::Only(&[2, 3, 4])),
        ],
        "HU" => vec![
            SegmentSpec::digits(3),
            SegmentSpec::digits(4),
            SegmentSpec::check(HU_VAT, Cover::Only(&[2, 3])),
            SegmentSpec::digits(15),
            SegmentSpec::check(HU_ACCOUNT, Cover::Only(&[5])),
        ],
        _ => return None,
    })
}

fn descriptor(country: &'static str, layout: &str) -> Result<FormatDescriptor, String> {
    let mut segments = vec![
        SegmentSpec::literal(country),
        SegmentSpec::check(ChecksumAlgorithm::Mod97Iban, Cover::Others),
    ];
    let plain = bban_segments(layout)?;
    match national_bban(country) {
        Some(national) => {
            let length = |segments: &[SegmentSpec]| segments.iter().map(|s| s.length).sum::<usize>();
            if length(&national) != length(&plain) {
                return Err(format!("national checks do not fit {layout}"));
            }
            segments.extend(national);
        }
        None => segments.extend(plain),
    }
    Ok(
        FormatDescriptor::new(IdKind::Iban, Scope::country(country), "IBAN", segments)
            .grouping(Grouping::Blocks {
                size: 4,
                separator: ' ',
            })
            .separators("-"),
    )
}

pub(super) fn register(registry: &mut Registry) {
    for &(country, layout) in BBAN_LAYOUTS {
        match descriptor(country, layout) {
            Ok(descriptor) => registry.register(descriptor),
            Err(reason) => panic!("invalid BBAN layout for {country}: {reason}"),
        }
    }
}
