use crate::checksum::{decimal_digits, ChecksumError};

const MULT_TABLE: [[usize; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERM_TABLE: [[usize; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INV_TABLE: [usize; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

pub(crate) fn check_digit(body: &str) -> Result<u32, ChecksumError> {
    let digits: Vec<u32> = decimal_digits(body)?.collect();
    let mut c = 0;
    // The check digit will take position 0, so body digits start at position 1.
    for (i, digit) in digits.into_iter().rev().enumerate() {
        c = MULT_TABLE[c][PERM_TABLE[(i + 1) % 8][digit as usize]];
    }
    Ok(INV_TABLE[c] as u32)
}

#[cfg(test)]
mod test {
    use crate::checksum::ChecksumAlgorithm;

    #[test]
    fn validate_verhoeff_checksum() {
        let valid_numbers = vec![
            "199009301238",
            "199310281454",
            "200112030877",
            "197912200328",
            "196605150762",
            // Aadhaar
            "234123412346",
        ];
        for number in valid_numbers {
            let (body, check) = number.split_at(number.len() - 1);
            assert_eq!(ChecksumAlgorithm::Verhoeff.compute(body).unwrap(), check);

            let invalid_check = (check.parse::<u32>().unwrap() + 1) % 10;
            assert!(!ChecksumAlgorithm::Verhoeff
                .verify(body, &invalid_check.to_string())
                .unwrap());
        }
    }
}
