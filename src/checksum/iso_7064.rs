use crate::checksum::{decimal_digits, ChecksumError};

/// ISO 7064 MOD 11,10 hybrid check digit for a decimal `body`.
pub(crate) fn mod_11_10_check_digit(body: &str) -> Result<u32, ChecksumError> {
    let mut product = 10;
    for digit in decimal_digits(body)? {
        let mut sum = (product + digit) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }
    Ok((11 - product) % 10)
}
