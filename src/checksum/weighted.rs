use crate::checksum::{char_value, decimal_digits, ChecksumError};
use serde::Serialize;

/// How body characters are weighted before taking the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weights {
    /// One weight per body character, left to right. The body length must match.
    Fixed(&'static [u32]),
    /// Weights repeated from the leftmost character.
    Cycle(&'static [u32]),
    /// Weights repeated from the rightmost character.
    CycleFromRight(&'static [u32]),
    /// The body read as a base-10 number.
    Positional,
    /// Fixed weights over decimal digits, each product reduced to the sum of its digits
    /// (the Luhn doubling with arbitrary weights).
    DigitSum(&'static [u32]),
    /// Weights repeated from the leftmost digit, keeping only the last digit of each
    /// product (Mexican CLABE).
    UnitDigit(&'static [u32]),
}

/// How the remainder `r` of a modulus `m` becomes the check value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckTransform {
    /// `r`
    Remainder,
    /// `(m - r) % m`
    Complement,
    /// `m - r`, in `1..=m`
    ComplementRaw,
    /// `(r + k) % m`
    Offset(u32),
    /// `(m - (r + k) % m) % m`
    ComplementOffset(u32),
    /// `r`, with 0 written as `m`
    RemainderOrModulus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckEncoding {
    /// Zero-padded decimal digits.
    Decimal { width: usize },
    /// The value indexes this alphabet.
    Table(&'static str),
}

impl Weights {
    pub(crate) fn remainder(&self, body: &str, modulus: u32) -> Result<u32, ChecksumError> {
        let modulus = u64::from(modulus);
        match self {
            Weights::Positional => {
                let remainder = decimal_digits(body)?
                    .fold(0u64, |acc, digit| (acc * 10 + u64::from(digit)) % modulus);
                Ok(remainder as u32)
            }
            Weights::Fixed(weights) => {
                if weights.len() != body.len() {
                    return Err(ChecksumError::MalformedInput(format!(
                        "expected {} characters, got {}",
                        weights.len(),
                        body.len()
                    )));
                }
                weighted_sum(body.chars(), weights.iter().copied(), modulus)
            }
            Weights::Cycle(weights) => {
                weighted_sum(body.chars(), weights.iter().copied().cycle(), modulus)
            }
            Weights::CycleFromRight(weights) => {
                weighted_sum(body.chars().rev(), weights.iter().copied().cycle(), modulus)
            }
            Weights::DigitSum(weights) => {
                let digits: Vec<u32> = decimal_digits(body)?.collect();
                if weights.len() != digits.len() {
                    return Err(ChecksumError::MalformedInput(format!(
                        "expected {} digits, got {}",
                        weights.len(),
                        digits.len()
                    )));
                }
                let sum: u64 = digits
                    .iter()
                    .zip(weights.iter())
                    .map(|(digit, weight)| u64::from(digit_sum(digit * weight)))
                    .sum();
                Ok((sum % modulus) as u32)
            }
            Weights::UnitDigit(weights) => {
                let sum: u64 = decimal_digits(body)?
                    .zip(weights.iter().cycle())
                    .map(|(digit, weight)| u64::from(digit * weight % 10))
                    .sum();
                Ok((sum % modulus) as u32)
            }
        }
    }
}

fn weighted_sum(
    chars: impl Iterator<Item = char>,
    weights: impl Iterator<Item = u32>,
    modulus: u64,
) -> Result<u32, ChecksumError> {
    let mut sum = 0u64;
    let mut seen = false;
    for (c, weight) in chars.zip(weights) {
        let value = char_value(c).ok_or_else(|| {
            ChecksumError::MalformedInput(format!("unexpected character {c:?}"))
        })?;
        sum += u64::from(value) * u64::from(weight);
        seen = true;
    }
    if !seen {
        return Err(ChecksumError::MalformedInput("empty body".to_string()));
    }
    Ok((sum % modulus) as u32)
}

fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

impl CheckTransform {
    pub(crate) fn apply(&self, remainder: u32, modulus: u32) -> u32 {
        match self {
            CheckTransform::Remainder => remainder,
            CheckTransform::Complement => (modulus - remainder) % modulus,
            CheckTransform::ComplementRaw => modulus - remainder,
            CheckTransform::Offset(offset) => (remainder + offset) % modulus,
            CheckTransform::ComplementOffset(offset) => {
                (modulus - (remainder + offset) % modulus) % modulus
            }
            CheckTransform::RemainderOrModulus if remainder == 0 => modulus,
            CheckTransform::RemainderOrModulus => remainder,
        }
    }
}

impl CheckEncoding {
    pub(crate) fn encode(&self, value: u32) -> Result<String, ChecksumError> {
        match self {
            CheckEncoding::Decimal { width } => {
                let digits = value.to_string();
                if digits.len() > *width {
                    return Err(ChecksumError::Unrepresentable);
                }
                Ok(format!("{value:0width$}"))
            }
            CheckEncoding::Table(table) => table
                .chars()
                .nth(value as usize)
                .map(String::from)
                .ok_or(ChecksumError::Unrepresentable),
        }
    }

    pub(crate) fn width(&self) -> usize {
        match self {
            CheckEncoding::Decimal { width } => *width,
            CheckEncoding::Table(_) => 1,
        }
    }
}
