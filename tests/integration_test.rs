use idforge::{
    descriptors, engine, generate, generate_iban, validate, validate_iban, ChecksumAlgorithm,
    GenOptions, IdError, IdKind, LegalEntityId, PersonalId, Scope, SegmentRole, VatId,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUND_TRIPS: usize = 1000;

#[test]
fn every_descriptor_round_trips() {
    let options = GenOptions::default();
    for descriptor in descriptors() {
        let mut rng = StdRng::seed_from_u64(0x1d_f0_49e);
        for _ in 0..ROUND_TRIPS {
            let value = engine::generate(descriptor, &mut rng, &options).unwrap();
            assert!(value.valid);
            assert_eq!(value.segments_resolved.concat(), value.normalized);
            let outcome = engine::validate(descriptor, &value.normalized);
            assert!(
                outcome.is_valid(),
                "{} {}: {} -> {:?}",
                descriptor.kind,
                descriptor.scope,
                value.normalized,
                outcome
            );
            assert!(engine::validate(descriptor, &value.raw).is_valid());
            assert_eq!(engine::normalize(descriptor, &value.raw), value.normalized);
        }
    }
}

/// Replaces the character at `position` with a different one from the same class.
fn mutate(value: &str, position: usize, rng: &mut StdRng) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    let original = chars[position];
    let replacement = loop {
        let candidate = if original.is_ascii_digit() {
            char::from(b'0' + rng.gen_range(0..10))
        } else {
            char::from(b'A' + rng.gen_range(0..26))
        };
        if candidate != original {
            break candidate;
        }
    };
    chars[position] = replacement;
    chars.into_iter().collect()
}

#[test]
fn single_substitutions_are_detected() {
    let detecting = |algorithm: &ChecksumAlgorithm| {
        matches!(
            algorithm,
            ChecksumAlgorithm::LuhnMod10
                | ChecksumAlgorithm::Mod97Iban
                | ChecksumAlgorithm::Mod97_10
                | ChecksumAlgorithm::Verhoeff
                | ChecksumAlgorithm::Iso7064Mod11_10
        )
    };
    let mut rng = StdRng::seed_from_u64(99);
    let mut checked = 0;
    for descriptor in descriptors() {
        let algorithms = descriptor.checksum_algorithms();
        if algorithms.is_empty() || !algorithms.iter().all(|a| detecting(a)) {
            continue;
        }
        for _ in 0..50 {
            let value = engine::generate(descriptor, &mut rng, &GenOptions::default()).unwrap();
            // mutate a digit of a random, non-literal segment of the layout it was built from
            let parts = &value.segments_resolved;
            let Some(layout) = descriptor.layouts().into_iter().find(|layout| {
                layout.segments.len() >= parts.len()
                    && layout.segments.iter().zip(parts).all(|(s, p)| s.length == p.len())
            }) else {
                continue;
            };
            let mut offset = 0;
            let mut candidates = vec![];
            for (segment, part) in layout.segments.iter().zip(parts) {
                if matches!(segment.role, SegmentRole::Digits) {
                    candidates.extend(offset..offset + part.len());
                }
                offset += part.len();
            }
            if candidates.is_empty() {
                continue;
            }
            let position = candidates[rng.gen_range(0..candidates.len())];
            let mutated = mutate(&value.normalized, position, &mut rng);
            assert!(
                !engine::validate(descriptor, &mutated).is_valid(),
                "{} {}: {} -> {}",
                descriptor.kind,
                descriptor.scope,
                value.normalized,
                mutated
            );
            checked += 1;
        }
    }
    assert!(checked > 1000);
}

#[test]
fn german_iban_scenario() {
    let mut rng = StdRng::seed_from_u64(2024);
    let iban = generate_iban("DE", &mut rng).unwrap();
    assert_eq!(iban.len(), 22);
    assert!(iban.starts_with("DE"));
    assert!(validate_iban(&iban));

    let mut mutated: Vec<char> = iban.chars().collect();
    let last = mutated[21].to_digit(10).unwrap();
    mutated[21] = char::from_digit((last + 1) % 10, 10).unwrap();
    assert!(!validate_iban(&mutated.into_iter().collect::<String>()));
}

#[test]
fn unsupported_country() {
    let mut rng = StdRng::seed_from_u64(0);
    for kind in [
        IdKind::Iban,
        IdKind::PersonalId,
        IdKind::CompanyId,
        IdKind::VatId,
        IdKind::TaxId,
        IdKind::Passport,
        IdKind::DriverLicense,
        IdKind::Swift,
        IdKind::LegalEntityId,
    ] {
        assert_eq!(
            generate(kind, "ZZ", &mut rng),
            Err(IdError::UnsupportedFormat {
                kind,
                country: "ZZ".to_string()
            })
        );
        assert!(!validate(kind, "ZZ", "DE89370400440532013000"));
    }
}

#[test]
fn luhn_examples() {
    let descriptor = idforge::card(idforge::CardBrand::Visa).unwrap();
    assert!(engine::validate(descriptor, "4111 1111 1111 1111").is_valid());
    assert!(!engine::validate(descriptor, "4111 1111 1111 1112").is_valid());
    assert!(idforge::CreditCard::validate("4111111111111111"));
    assert!(!idforge::CreditCard::validate("4111111111111112"));
}

#[test]
fn ibans_parse_with_iban_validate() {
    let mut rng = StdRng::seed_from_u64(7);
    for country in ["DE", "GB", "NL", "AT", "CH", "PL", "DK", "IE", "SE"] {
        for _ in 0..100 {
            let code = generate_iban(country, &mut rng).unwrap();
            let parsed = code.parse::<iban::Iban>();
            assert!(parsed.is_ok(), "{code}: {parsed:?}");
        }
    }
}

#[test]
fn leis_pass_iso_7064() {
    use iso_iec_7064::{System, MOD_97_10};

    // letters count as two digits, A=10 to Z=35
    let expand = |code: &str| -> String {
        code.chars()
            .map(|c| c.to_digit(36).unwrap().to_string())
            .collect()
    };
    let mut rng = StdRng::seed_from_u64(8);
    for country in LegalEntityId::countries() {
        for _ in 0..100 {
            let lei = LegalEntityId::generate(&country, &mut rng).unwrap();
            assert!(MOD_97_10.validate_string(&expand(&lei.code)), "{}", lei.code);
        }
    }
}

#[test]
fn croatian_and_chinese_ids_pass_iso_7064() {
    use iso_iec_7064::{System, MOD_11_10, MOD_11_2};

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..500 {
        let oib = PersonalId::generate("HR", &mut rng).unwrap();
        assert!(MOD_11_10.validate_string(&oib), "{oib}");

        let vat = VatId::generate("HR", &mut rng).unwrap();
        assert!(MOD_11_10.validate_string(&vat.number), "{vat:?}");

        let resident = PersonalId::generate("CN", &mut rng).unwrap();
        assert!(MOD_11_2.validate_string(&resident), "{resident}");
    }
}

#[test]
fn scopes_are_consistent() {
    for descriptor in descriptors() {
        match &descriptor.scope {
            Scope::Country(code) => {
                assert_eq!(code.len(), 2);
                assert_ne!(descriptor.kind, IdKind::CreditCard);
            }
            Scope::Brand(_) => assert_eq!(descriptor.kind, IdKind::CreditCard),
        }
    }
}
