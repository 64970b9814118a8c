use crate::checksum::ChecksumAlgorithm;
use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::CardBrand;
use crate::{generator, registry};
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

const MIN_CARD_LENGTH: usize = 12;
const MAX_CARD_LENGTH: usize = 19;

/// Payment card numbers. Cards are scoped by brand rather than country.
pub struct CreditCard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResult {
    pub brand: CardBrand,
    pub number: String,
    pub formatted: String,
    pub cvv: String,
    /// `MM/YY`
    pub expiry: String,
}

impl CreditCard {
    /// A card of a random brand.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<CardResult, IdError> {
        Self::generate_with(&GenOptions::default(), rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        options: &GenOptions,
        rng: &mut R,
    ) -> Result<CardResult, IdError> {
        let brand = match options.card_brand {
            Some(brand) => brand,
            None => CardBrand::iter()
                .choose(rng)
                .ok_or_else(|| IdError::MalformedInput("no card brand is registered".to_string()))?,
        };
        let value = generator::generate(registry::card(brand)?, rng, options)?;

        let cvv_digits = if brand == CardBrand::Amex { 4 } else { 3 };
        let cvv = format!(
            "{:0width$}",
            rng.gen_range(0..10u32.pow(cvv_digits)),
            width = cvv_digits as usize
        );
        let month = rng.gen_range(1..=12);
        let year = rng.gen_range(options.expiry_base_year + 1..=options.expiry_base_year + 5);
        Ok(CardResult {
            brand,
            number: value.normalized,
            formatted: value.raw,
            cvv,
            expiry: format!("{month:02}/{:02}", year.rem_euclid(100)),
        })
    }

    /// Luhn check of a 12 to 19 digit number. Spaces and dashes are ignored and the brand
    /// is not checked.
    pub fn validate(number: &str) -> bool {
        let digits: String = number.chars().filter(|c| *c != ' ' && *c != '-').collect();
        if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&digits.len())
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
        let (body, check) = digits.split_at(digits.len() - 1);
        ChecksumAlgorithm::LuhnMod10
            .verify(body, check)
            .unwrap_or(false)
    }

    pub fn brands() -> Vec<CardBrand> {
        CardBrand::iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_card_numbers() {
        let valid_cards = vec![
            "4111111111111111",
            "4111 1111 1111 1111",
            "4111-1111-1111-1111",
            "5555555555554444",
            "378282246310005",
            "6011111111111117",
            "3530111333300000",
            "30569309025904",
            "4222222222222",
        ];
        for card in valid_cards {
            println!("card number: {card}");
            assert!(CreditCard::validate(card));
        }
    }

    #[test]
    fn test_invalid_card_numbers() {
        let invalid_cards = vec![
            "",
            "4111111111111112",
            "411111111111",
            "41111111111111111111",
            "4111_1111_1111_1111",
            "411111111111111a",
            "٤١١١١١١١١١١١١١١١",
        ];
        for card in invalid_cards {
            println!("card number: {card}");
            assert!(!CreditCard::validate(card));
        }
    }

    #[test]
    fn generated_cards() {
        let mut rng = StdRng::seed_from_u64(23);
        for brand in CreditCard::brands() {
            let options = GenOptions::default().card_brand(brand);
            let card = CreditCard::generate_with(&options, &mut rng).unwrap();
            println!("{card:?}");
            assert_eq!(card.brand, brand);
            assert!(CreditCard::validate(&card.number));
            assert!(CreditCard::validate(&card.formatted));
            let expected_cvv = if brand == CardBrand::Amex { 4 } else { 3 };
            assert_eq!(card.cvv.len(), expected_cvv);

            let (month, year) = card.expiry.split_once('/').unwrap();
            assert!((1..=12).contains(&month.parse::<u32>().unwrap()));
            assert!((27..=31).contains(&year.parse::<u32>().unwrap()));
        }
        assert!(CreditCard::generate(&mut rng).is_ok());
    }

    #[test]
    fn brand_prefixes() {
        let mut rng = StdRng::seed_from_u64(1);
        let prefixes = [
            (CardBrand::Visa, "4"),
            (CardBrand::Amex, "3"),
            (CardBrand::Discover, "6"),
            (CardBrand::Diners, "36"),
            (CardBrand::UnionPay, "62"),
        ];
        for (brand, prefix) in prefixes {
            let options = GenOptions::default().card_brand(brand);
            let card = CreditCard::generate_with(&options, &mut rng).unwrap();
            assert!(card.number.starts_with(prefix), "{card:?}");
        }
    }

    #[test]
    fn brand_ranges() {
        let cards = vec![
            (CardBrand::Mastercard, "5555555555554444", true),
            (CardBrand::Mastercard, "2221000000000009", true),
            (CardBrand::Mastercard, "2720990000000007", true),
            (CardBrand::Mastercard, "2220990000000002", false),
            (CardBrand::Mastercard, "2721000000000004", false),
            (CardBrand::Discover, "6011111111111117", true),
            (CardBrand::Discover, "6445644564456445", true),
            (CardBrand::Discover, "6490123456789019", true),
            (CardBrand::Discover, "6500000000000002", true),
            (CardBrand::Discover, "6430000000000007", false),
            (CardBrand::Discover, "6600000000000001", false),
        ];
        for (brand, number, expected) in cards {
            println!("{brand}: {number}");
            let descriptor = registry::card(brand).unwrap();
            assert_eq!(crate::validator::validate(descriptor, number).is_valid(), expected);
        }
    }
}
