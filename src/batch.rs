use crate::config::GenOptions;
use crate::error::IdError;
use crate::facade::descriptor;
use crate::format::IdKind;
use crate::generator;
use crate::identifier::IdentifierValue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Generates `count` identifiers in parallel.
///
/// Item `i` is drawn from its own `StdRng`, seeded from `seed` and `i` through
/// [`item_seed`], so a batch is reproducible from its seed regardless of how the work is
/// split across threads, and batches with neighbouring seeds share no items.
pub fn generate_batch(
    kind: IdKind,
    country: &str,
    count: usize,
    seed: u64,
    options: &GenOptions,
) -> Result<Vec<IdentifierValue>, IdError> {
    let descriptor = descriptor(kind, country)?;
    (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(item_seed(seed, i as u64));
            generator::generate(descriptor, &mut rng, options)
        })
        .collect()
}

/// SplitMix64 over the batch seed, then over the item index.
fn item_seed(seed: u64, index: u64) -> u64 {
    splitmix(splitmix(seed) ^ index)
}

fn splitmix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::validator::validate;

    #[test]
    fn batches_are_reproducible() {
        let options = GenOptions::default();
        let first = generate_batch(IdKind::Iban, "FR", 64, 1234, &options).unwrap();
        let second = generate_batch(IdKind::Iban, "FR", 64, 1234, &options).unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(first, second);

        let other = generate_batch(IdKind::Iban, "FR", 64, 4321, &options).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn neighbouring_seeds_do_not_overlap() {
        let options = GenOptions::default();
        for seed in [0, 1, 99, u64::MAX - 1] {
            let batch = generate_batch(IdKind::Iban, "DE", 4, seed, &options).unwrap();
            let next = generate_batch(IdKind::Iban, "DE", 4, seed.wrapping_add(1), &options).unwrap();
            println!("{seed}: {} {}", batch[1].normalized, next[0].normalized);
            assert_ne!(batch[1], next[0]);
            assert!(batch.iter().all(|value| !next.contains(value)));
        }
        assert_ne!(item_seed(5, 1), item_seed(6, 0));
    }

    #[test]
    fn batch_items_validate() {
        let descriptor = descriptor(IdKind::PersonalId, "CN").unwrap();
        let batch =
            generate_batch(IdKind::PersonalId, "CN", 200, 0, &GenOptions::default()).unwrap();
        for value in batch {
            assert!(validate(descriptor, &value.normalized).is_valid());
        }
    }

    #[test]
    fn unsupported_batch() {
        assert!(generate_batch(IdKind::Passport, "ZZ", 3, 0, &GenOptions::default()).is_err());
        assert!(generate_batch(IdKind::Passport, "US", 0, 0, &GenOptions::default())
            .unwrap()
            .is_empty());
    }
}
