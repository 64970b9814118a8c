use crate::checksum::ChecksumError;
use ahash::AHashMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref ODD_CHARACTERS_MAPPING: AHashMap<char, u32> = AHashMap::from_iter([
        ('0', 1),
        ('1', 0),
        ('2', 5),
        ('3', 7),
        ('4', 9),
        ('5', 13),
        ('6', 15),
        ('7', 17),
        ('8', 19),
        ('9', 21),
        ('A', 1),
        ('B', 0),
        ('C', 5),
        ('D', 7),
        ('E', 9),
        ('F', 13),
        ('G', 15),
        ('H', 17),
        ('I', 19),
        ('J', 21),
        ('K', 2),
        ('L', 4),
        ('M', 18),
        ('N', 20),
        ('O', 11),
        ('P', 3),
        ('Q', 6),
        ('R', 8),
        ('S', 12),
        ('T', 14),
        ('U', 16),
        ('V', 10),
        ('W', 22),
        ('X', 25),
        ('Y', 24),
        ('Z', 23),
    ]);
}

/// Control letter over `body`: the first 15 characters of an Italian codice fiscale, or
/// the 8 digits of a Cypriot VAT number.
pub(crate) fn check_letter(body: &str) -> Result<char, ChecksumError> {
    if body.is_empty() {
        return Err(ChecksumError::MalformedInput("empty body".to_string()));
    }

    let mut checksum_value = 0;
    for (idx, c) in body.chars().enumerate() {
        let position = idx + 1;
        if position % 2 == 1 {
            checksum_value += ODD_CHARACTERS_MAPPING.get(&c).ok_or_else(|| {
                ChecksumError::MalformedInput(format!("unexpected character {c:?}"))
            })?;
        } else if let Some(digit) = c.to_digit(10) {
            checksum_value += digit
        } else if c.is_ascii_uppercase() {
            // Letters count from A=0
            checksum_value += (c as u8 - b'A') as u32;
        } else {
            return Err(ChecksumError::MalformedInput(format!(
                "unexpected character {c:?}"
            )));
        }
    }

    Ok((b'A' + (checksum_value % 26) as u8) as char)
}
