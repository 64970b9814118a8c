use afl::fuzz;
use idforge::{engine, inspect, validate, GenOptions, IdKind};
use rand::{rngs::StdRng, SeedableRng};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

/// Input layout: `<kind byte><country>,<candidate>,<seed bytes>`.
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (selector, bytes) = split_bytes_once(bytes)?;
    let (input, rand_seed) = split_bytes_once(bytes)?;

    let (kind_byte, country) = selector.split_first()?;
    let kinds: Vec<IdKind> = IdKind::iter().collect();
    let kind = kinds[*kind_byte as usize % kinds.len()];
    let country_str = std::str::from_utf8(country).ok()?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    run_fuzz(kind, country_str, input_str, StdRng::seed_from_u64(rng_seed));
    Some(())
}

fn run_fuzz(kind: IdKind, country: &str, input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Kind: {kind}");
        println!("Country: {country:?}");
        println!("Input: {input:?}");
    }

    let valid = validate(kind, country, input);
    if let Ok(value) = inspect(kind, country, input) {
        assert_eq!(value.valid, valid);
    }

    // anything generated for a supported format has to validate
    if let Ok(descriptor) = idforge::descriptor(kind, country) {
        let value = engine::generate(descriptor, &mut rng, &GenOptions::default())
            .expect("registered formats always generate");
        #[cfg(feature = "manual_test")]
        println!("Generated: {:?}", value.raw);
        assert!(engine::validate(descriptor, &value.raw).is_valid());
    }
}
