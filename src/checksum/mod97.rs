use crate::checksum::{char_value, ChecksumError};

/// Streams `chars` into a running remainder modulo 97. Letters count as two decimal
/// digits (A=10 to Z=35), so no big integer is ever built.
fn stream_remainder(chars: impl Iterator<Item = char>, mut remainder: u32) -> Result<u32, ChecksumError> {
    for c in chars {
        let value = match c {
            '0'..='9' | 'A'..='Z' => char_value(c),
            _ => None,
        }
        .ok_or_else(|| ChecksumError::MalformedInput(format!("unexpected character {c:?}")))?;
        remainder = if value > 9 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }
    Ok(remainder)
}

/// IBAN check digits for `body`, the country code followed by the BBAN.
///
/// The country code and the `00` placeholder move to the end before the remainder is taken.
pub(crate) fn iban_check_digits(body: &str) -> Result<String, ChecksumError> {
    if body.len() < 3 || !body.is_ascii() {
        return Err(ChecksumError::MalformedInput(format!(
            "expected a country code and a BBAN, got {body:?}"
        )));
    }
    let (country, bban) = body.split_at(2);
    let rearranged = bban.chars().chain(country.chars()).chain("00".chars());
    let remainder = stream_remainder(rearranged, 0)?;
    Ok(format!("{:02}", 98 - remainder))
}

/// ISO 7064 MOD 97-10 check digits appended after `body`.
pub(crate) fn iso_check_digits(body: &str) -> Result<String, ChecksumError> {
    if body.is_empty() {
        return Err(ChecksumError::MalformedInput("empty body".to_string()));
    }
    let remainder = stream_remainder(body.chars().chain("00".chars()), 0)?;
    Ok(format!("{:02}", 98 - remainder))
}

/// French RIB key over the bank, branch and account numbers. Account letters are
/// transliterated to digits first.
pub(crate) fn rib_key(body: &str) -> Result<String, ChecksumError> {
    if body.is_empty() {
        return Err(ChecksumError::MalformedInput("empty body".to_string()));
    }
    let digits = body.chars().map(rib_digit).collect::<Result<Vec<char>, _>>()?;
    let remainder = stream_remainder(digits.into_iter().chain("00".chars()), 0)?;
    Ok(format!("{:02}", (97 - remainder) % 97))
}

fn rib_digit(c: char) -> Result<char, ChecksumError> {
    let value = match c {
        '0'..='9' => return Ok(c),
        'A'..='I' => c as u32 - 'A' as u32 + 1,
        'J'..='R' => c as u32 - 'J' as u32 + 1,
        'S'..='Z' => c as u32 - 'S' as u32 + 2,
        _ => {
            return Err(ChecksumError::MalformedInput(format!(
                "unexpected character {c:?}"
            )))
        }
    };
    char::from_digit(value, 10)
        .ok_or_else(|| ChecksumError::MalformedInput(format!("unexpected character {c:?}")))
}

#[cfg(test)]
mod test {
    use crate::checksum::ChecksumAlgorithm;

    #[test]
    fn test_valid_ibans() {
        let valid_ibans = vec![
            ("DE370400440532013000", "89"),
            ("DE500105175407324931", "44"),
            ("GBNWBK60161331926819", "29"),
        ];
        for (body, check) in valid_ibans {
            assert_eq!(ChecksumAlgorithm::Mod97Iban.compute(body).unwrap(), check);
            assert!(ChecksumAlgorithm::Mod97Iban.verify(body, check).unwrap());
        }
    }

    #[test]
    fn test_invalid_ibans() {
        assert!(!ChecksumAlgorithm::Mod97Iban
            .verify("DE500105175407324931", "45")
            .unwrap());
        assert!(ChecksumAlgorithm::Mod97Iban.compute("DE").is_err());
        assert!(ChecksumAlgorithm::Mod97Iban.compute("de500105175407324931").is_err());
    }

    #[test]
    fn legal_entity_identifier() {
        assert_eq!(
            ChecksumAlgorithm::Mod97_10
                .compute("5493001KJTIIGC8Y1R")
                .unwrap(),
            "12"
        );
        assert!(!ChecksumAlgorithm::Mod97_10
            .verify("5493001KJTIIGC8Y1R", "21")
            .unwrap());
    }

    #[test]
    fn french_rib_key() {
        // FR14 20041 01005 0500013M026 06
        assert_eq!(
            ChecksumAlgorithm::RibKey.compute("20041010050500013M026").unwrap(),
            "06"
        );
        assert_eq!(
            ChecksumAlgorithm::RibKey.compute("20041010050500013M026"),
            ChecksumAlgorithm::RibKey.compute("200410100505000134026")
        );
        assert!(ChecksumAlgorithm::RibKey.compute("2004101005050001-M026").is_err());
    }
}
