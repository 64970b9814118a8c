use crate::checksum::ChecksumAlgorithm;
use crate::format::date::DateLayout;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DIGITS: &str = "0123456789";
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALNUM: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Which segments a check value is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cover {
    /// Every segment before the check.
    Preceding,
    /// Every segment after the check.
    Following,
    /// Every segment except the check itself, in order.
    Others,
    /// The listed segment indices, in the order given.
    Only(&'static [usize]),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSpec {
    pub algorithm: ChecksumAlgorithm,
    pub cover: Cover,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SegmentRole {
    Literal(&'static str),
    Digits,
    Letters,
    Alnum,
    Charset(&'static str),
    /// Zero-padded decimal value within one of the inclusive ranges.
    Range(&'static [(u32, u32)]),
    OneOf(&'static [&'static str]),
    Date(DateLayout),
    Check(CheckSpec),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// How a segment of a personal identifier carries the holder's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenderCode {
    /// Odd last digit for men, even for women.
    Parity,
    /// Fixed codes for each gender.
    Options {
        male: &'static [&'static str],
        female: &'static [&'static str],
    },
    /// Values at or above `bound` belong to `gender`, those below to the other one.
    AtLeast { bound: u32, gender: Gender },
    /// A date whose month field is pushed past 12 for women.
    MonthOffset,
}

impl Gender {
    pub fn other(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

impl GenderCode {
    pub fn decode(&self, part: &str, role: &SegmentRole) -> Option<Gender> {
        match self {
            GenderCode::Parity => {
                let last = part.chars().last()?.to_digit(10)?;
                Some(if last % 2 == 1 {
                    Gender::Male
                } else {
                    Gender::Female
                })
            }
            GenderCode::Options { male, female } => {
                if male.contains(&part) {
                    Some(Gender::Male)
                } else if female.contains(&part) {
                    Some(Gender::Female)
                } else {
                    None
                }
            }
            GenderCode::AtLeast { bound, gender } => {
                let value: u32 = part.parse().ok()?;
                Some(if value >= *bound { *gender } else { gender.other() })
            }
            GenderCode::MonthOffset => match role {
                SegmentRole::Date(layout) => {
                    let month = layout.month_field(part)?;
                    Some(if month > 12 {
                        Gender::Female
                    } else {
                        Gender::Male
                    })
                }
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSpec {
    pub role: SegmentRole,
    pub length: usize,
    pub optional: bool,
    /// Set on the segment of a personal identifier that encodes gender.
    pub gender: Option<GenderCode>,
}

impl SegmentSpec {
    fn new(role: SegmentRole, length: usize) -> Self {
        Self {
            role,
            length,
            optional: false,
            gender: None,
        }
    }

    pub fn literal(text: &'static str) -> Self {
        Self::new(SegmentRole::Literal(text), text.len())
    }

    pub fn digits(length: usize) -> Self {
        Self::new(SegmentRole::Digits, length)
    }

    pub fn letters(length: usize) -> Self {
        Self::new(SegmentRole::Letters, length)
    }

    pub fn alnum(length: usize) -> Self {
        Self::new(SegmentRole::Alnum, length)
    }

    pub fn charset(alphabet: &'static str, length: usize) -> Self {
        Self::new(SegmentRole::Charset(alphabet), length)
    }

    pub fn range(ranges: &'static [(u32, u32)], length: usize) -> Self {
        Self::new(SegmentRole::Range(ranges), length)
    }

    /// All options must share one length.
    pub fn one_of(options: &'static [&'static str]) -> Self {
        let length = options.first().map(|o| o.len()).unwrap_or_default();
        Self::new(SegmentRole::OneOf(options), length)
    }

    pub fn date(layout: DateLayout) -> Self {
        Self::new(SegmentRole::Date(layout), layout.width())
    }

    pub fn check(algorithm: ChecksumAlgorithm, cover: Cover) -> Self {
        let length = algorithm.check_len();
        Self::new(SegmentRole::Check(CheckSpec { algorithm, cover }), length)
    }

    pub fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    pub fn gendered(self, code: GenderCode) -> Self {
        Self {
            gender: Some(code),
            ..self
        }
    }

    /// The gender `part` encodes, for a gendered segment.
    pub fn gender_of(&self, part: &str) -> Option<Gender> {
        self.gender?.decode(part, &self.role)
    }

    /// Characters a random draw of this segment is taken from.
    pub fn alphabet(&self) -> Option<&'static str> {
        match self.role {
            SegmentRole::Digits | SegmentRole::Range(_) | SegmentRole::Date(_) => Some(DIGITS),
            SegmentRole::Letters => Some(LETTERS),
            SegmentRole::Alnum => Some(ALNUM),
            SegmentRole::Charset(alphabet) => Some(alphabet),
            SegmentRole::Literal(_) | SegmentRole::OneOf(_) | SegmentRole::Check(_) => None,
        }
    }

    pub fn is_check(&self) -> bool {
        matches!(self.role, SegmentRole::Check(_))
    }
}

impl Cover {
    /// Segment indices covered by a check at `position` among `count` segments.
    pub fn indices(&self, position: usize, count: usize) -> Vec<usize> {
        match self {
            Cover::Preceding => (0..position).collect(),
            Cover::Following => (position + 1..count).collect(),
            Cover::Others => (0..count).filter(|i| *i != position).collect(),
            Cover::Only(indices) => indices.to_vec(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cover_indices() {
        assert_eq!(Cover::Preceding.indices(2, 4), vec![0, 1]);
        assert_eq!(Cover::Following.indices(1, 4), vec![2, 3]);
        assert_eq!(Cover::Others.indices(1, 4), vec![0, 2, 3]);
        assert_eq!(Cover::Only(&[3, 0]).indices(1, 4), vec![3, 0]);
    }

    #[test]
    fn segment_lengths() {
        assert_eq!(SegmentSpec::literal("DE").length, 2);
        assert_eq!(SegmentSpec::one_of(&["1", "2"]).length, 1);
        assert_eq!(
            SegmentSpec::check(ChecksumAlgorithm::Mod97Iban, Cover::Others).length,
            2
        );
        assert!(SegmentSpec::alnum(3).optional().optional);
    }

    #[test]
    fn gender_codes() {
        let serial = SegmentSpec::digits(3).gendered(GenderCode::Parity);
        assert_eq!(serial.gender_of("123"), Some(Gender::Male));
        assert_eq!(serial.gender_of("124"), Some(Gender::Female));
        assert_eq!(SegmentSpec::digits(3).gender_of("123"), None);

        let century = SegmentSpec::one_of(&["3", "4"]).gendered(GenderCode::Options {
            male: &["3"],
            female: &["4"],
        });
        assert_eq!(century.gender_of("4"), Some(Gender::Female));
        assert_eq!(century.gender_of("5"), None);

        let sequence = SegmentSpec::digits(4).gendered(GenderCode::AtLeast {
            bound: 5000,
            gender: Gender::Male,
        });
        assert_eq!(sequence.gender_of("5000"), Some(Gender::Male));
        assert_eq!(sequence.gender_of("4999"), Some(Gender::Female));

        let birth = SegmentSpec::date(
            DateLayout::new(crate::format::DateOrder::Ymd, 2)
                .month(crate::format::MonthEncoding::Alternates(&[50])),
        )
        .gendered(GenderCode::MonthOffset);
        assert_eq!(birth.gender_of("855210"), Some(Gender::Female));
        assert_eq!(birth.gender_of("850210"), Some(Gender::Male));
    }

    #[test]
    fn genders_use_snake_case() {
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }
}
