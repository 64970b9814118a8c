use crate::checksum::{decimal_digits, ChecksumError};

/// Luhn check digit for `body`, the number without its check digit.
///
/// The rightmost body digit sits next to the check digit, so it is the first one doubled.
pub(crate) fn check_digit(body: &str) -> Result<u32, ChecksumError> {
    let digits: Vec<u32> = decimal_digits(body)?.collect();
    let mut sum: u32 = 0;
    let mut is_odd = false;
    for digit in digits.into_iter().rev() {
        if is_odd {
            sum += digit
        } else if digit > 4 {
            sum += digit * 2 - 9;
        } else {
            sum += digit * 2
        }
        is_odd = !is_odd;
    }
    Ok((10 - (sum % 10)) % 10)
}

#[cfg(test)]
mod test {
    use crate::checksum::ChecksumAlgorithm;

    #[test]
    fn validate_various_credit_cards() {
        let credit_cards = vec![
            // source https://www.paypalobjects.com/en_AU/vhelp/paypalmanager_help/credit_card_numbers.htm
            // American Express
            "378282246310005",
            "371449635398431",
            // Australian BankCard
            "5610591081018250",
            // Diners Club
            "30569309025904",
            // Discover
            "6011111111111117",
            // JCB
            "3530111333300000",
            // MasterCard
            "5555555555554444",
            "5105105105105100",
            // Visa
            "4111111111111111",
            "4012888888881881",
            "4222222222222",
        ];
        for credit_card in credit_cards {
            let (body, check) = credit_card.split_at(credit_card.len() - 1);
            assert!(ChecksumAlgorithm::LuhnMod10.verify(body, check).unwrap());

            let wrong_check = (check.parse::<u32>().unwrap() + 1) % 10;
            assert!(!ChecksumAlgorithm::LuhnMod10
                .verify(body, &wrong_check.to_string())
                .unwrap());
        }
    }

    #[test]
    fn national_numbers_using_luhn() {
        // Swedish personnummer, Canadian SIN, French SIREN
        for number in ["8112189876", "046454286", "732829320"] {
            let (body, check) = number.split_at(number.len() - 1);
            assert_eq!(ChecksumAlgorithm::LuhnMod10.compute(body).unwrap(), check);
        }
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(ChecksumAlgorithm::LuhnMod10.compute("3782 8224").is_err());
        assert!(ChecksumAlgorithm::LuhnMod10.compute("").is_err());
    }
}
