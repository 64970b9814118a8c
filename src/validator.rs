use crate::checksum::char_value;
use crate::error::{ValidationFailure, ValidationOutcome};
use crate::format::{FormatDescriptor, LayoutRef, PrefixPolicy, SegmentRole, SegmentSpec};
use crate::identifier::IdentifierValue;
use crate::stats::record_validated;

/// Strips display formatting from `raw`: whitespace and the separators of the format are
/// dropped, letters are uppercased and the country marker is handled per the format's
/// prefix policy.
pub fn normalize(descriptor: &FormatDescriptor, raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !descriptor.is_separator(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let fits = |length: usize| descriptor.accepts_length(length);
    let length = stripped.chars().count();
    match descriptor.prefix {
        PrefixPolicy::Strict => stripped,
        PrefixPolicy::Implied => imply_prefix(descriptor, stripped, fits),
        PrefixPolicy::Aliased(alias) => match (stripped.strip_prefix(alias), descriptor.leading_literal()) {
            (Some(rest), Some(prefix)) if fits(rest.chars().count() + prefix.len()) => {
                format!("{prefix}{rest}")
            }
            _ => imply_prefix(descriptor, stripped, fits),
        },
        PrefixPolicy::Tolerated(marker) => match stripped.strip_prefix(marker) {
            Some(rest) if !fits(length) && fits(length - marker.len()) => rest.to_string(),
            _ => stripped,
        },
    }
}

fn imply_prefix(
    descriptor: &FormatDescriptor,
    stripped: String,
    fits: impl Fn(usize) -> bool,
) -> String {
    match descriptor.leading_literal() {
        Some(prefix)
            if !stripped.starts_with(prefix) && fits(stripped.chars().count() + prefix.len()) =>
        {
            format!("{prefix}{stripped}")
        }
        _ => stripped,
    }
}

/// Validates `raw` against `descriptor`. Never panics, whatever the input.
pub fn validate(descriptor: &FormatDescriptor, raw: &str) -> ValidationOutcome {
    let normalized = normalize(descriptor, raw);
    let outcome = match check(descriptor, &normalized) {
        Ok(()) => ValidationOutcome::Valid { normalized },
        Err(failure) => ValidationOutcome::Invalid(failure),
    };
    record_validated(descriptor, &outcome);
    outcome
}

/// Validates `raw` and returns it with its canonical form and segments.
pub fn inspect(descriptor: &FormatDescriptor, raw: &str) -> IdentifierValue {
    let outcome = validate(descriptor, raw);
    let normalized = normalize(descriptor, raw);
    IdentifierValue {
        raw: raw.to_string(),
        segments_resolved: split(descriptor, &normalized).unwrap_or_default(),
        normalized,
        kind: descriptor.kind,
        scope: descriptor.scope.clone(),
        valid: outcome.is_valid(),
    }
}

/// The layout a normalized value is read with and its segments: the first layout it is
/// valid under, else the first one of its length.
pub(crate) fn matching_layout<'a>(
    descriptor: &'a FormatDescriptor,
    normalized: &str,
) -> Option<(LayoutRef<'a>, Vec<String>)> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut fallback = None;
    for layout in descriptor.layouts() {
        let Some(segments) = layout.active(chars.len()) else {
            continue;
        };
        let parts = split_chars(segments, &chars);
        if check_segments(segments, &chars).is_ok() {
            return Some((layout, parts));
        }
        fallback.get_or_insert((layout, parts));
    }
    fallback
}

/// Splits a normalized value along the segments of the format, or `None` when its length
/// does not match.
pub(crate) fn split(descriptor: &FormatDescriptor, normalized: &str) -> Option<Vec<String>> {
    matching_layout(descriptor, normalized).map(|(_, parts)| parts)
}

fn split_chars(segments: &[SegmentSpec], chars: &[char]) -> Vec<String> {
    let mut offset = 0;
    segments
        .iter()
        .map(|segment| {
            let end = (offset + segment.length).min(chars.len());
            let part = chars[offset.min(end)..end].iter().collect();
            offset = end;
            part
        })
        .collect()
}

/// Valid when some layout accepts the value. Otherwise the failure reported is that of the
/// first layout of the right length, or a length mismatch against the primary layout.
fn check(descriptor: &FormatDescriptor, normalized: &str) -> Result<(), ValidationFailure> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut first_failure = None;
    for layout in descriptor.layouts() {
        let Some(segments) = layout.active(chars.len()) else {
            continue;
        };
        match check_segments(segments, &chars) {
            Ok(()) => return Ok(()),
            Err(failure) => {
                first_failure.get_or_insert(failure);
            }
        }
    }
    Err(first_failure.unwrap_or_else(|| {
        let (required, full) = descriptor.lengths();
        let actual = chars.len();
        let expected = if actual < required { required } else { full };
        ValidationFailure::LengthMismatch { expected, actual }
    }))
}

fn check_segments(segments: &[SegmentSpec], chars: &[char]) -> Result<(), ValidationFailure> {
    let mut position = 0;
    for segment in segments {
        for (i, c) in chars[position..position + segment.length].iter().enumerate() {
            if !accepts(segment, i, *c) {
                return Err(ValidationFailure::InvalidCharacter { position: position + i });
            }
        }
        position += segment.length;
    }

    let parts = split_chars(segments, chars);
    for (index, (segment, part)) in segments.iter().zip(&parts).enumerate() {
        if !in_range(segment, part) {
            return Err(ValidationFailure::OutOfRange { segment: index });
        }
    }

    for (index, segment) in segments.iter().enumerate() {
        let SegmentRole::Check(spec) = &segment.role else {
            continue;
        };
        let body: Option<String> = spec
            .cover
            .indices(index, segments.len())
            .iter()
            .map(|i| parts.get(*i).cloned())
            .collect();
        let verified = body
            .map(|body| spec.algorithm.verify(&body, &parts[index]).unwrap_or(false))
            .unwrap_or(false);
        if !verified {
            return Err(ValidationFailure::ChecksumMismatch { segment: index });
        }
    }
    Ok(())
}

/// Whether `c` may appear at offset `i` of `segment`.
fn accepts(segment: &SegmentSpec, i: usize, c: char) -> bool {
    match &segment.role {
        SegmentRole::Literal(text) => text.chars().nth(i) == Some(c),
        SegmentRole::OneOf(options) => options.iter().any(|o| o.chars().nth(i) == Some(c)),
        SegmentRole::Check(_) => char_value(c).is_some(),
        _ => segment
            .alphabet()
            .map(|alphabet| alphabet.contains(c))
            .unwrap_or(false),
    }
}

/// Bounds of the segments that carry a value: numeric ranges, dates and fixed option sets.
fn in_range(segment: &SegmentSpec, part: &str) -> bool {
    match &segment.role {
        SegmentRole::Range(ranges) => part
            .parse::<u32>()
            .map(|value| ranges.iter().any(|(low, high)| (*low..=*high).contains(&value)))
            .unwrap_or(false),
        SegmentRole::Date(layout) => !layout.parse(part).is_empty(),
        SegmentRole::OneOf(options) => options.iter().any(|option| *option == part),
        _ => true,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::format::IdKind;
    use crate::registry::lookup;

    #[test]
    fn test_valid_values() {
        let valid_ids = vec![
            (IdKind::Iban, "DE", "DE89370400440532013000"),
            (IdKind::Iban, "DE", "de89 3704 0044 0532 0130 00"),
            (IdKind::Iban, "GB", "GB29 NWBK 6016 1331 9268 19"),
            (IdKind::PersonalId, "US", "123-45-6789"),
            (IdKind::PersonalId, "BR", "529.982.247-25"),
            (IdKind::PersonalId, "PL", "44051401359"),
            (IdKind::PersonalId, "IT", "RSSMRA85T10A562S"),
            (IdKind::PersonalId, "ES", "12345678Z"),
            (IdKind::VatId, "FR", "FR40303265045"),
            (IdKind::CompanyId, "FR", "303 265 045"),
            (IdKind::LegalEntityId, "US", "5493001KJTIIGC8Y1R12"),
        ];
        for (kind, country, id) in valid_ids {
            println!("{kind} {country}: {id}");
            let descriptor = lookup(kind, country).unwrap();
            assert!(validate(descriptor, id).is_valid());
        }
    }

    #[test]
    fn normalization() {
        let iban = lookup(IdKind::Iban, "DE").unwrap();
        assert_eq!(
            normalize(iban, " de89-3704 0044 0532 0130 00 "),
            "DE89370400440532013000"
        );

        let vat = lookup(IdKind::VatId, "FR").unwrap();
        assert_eq!(normalize(vat, "40303265045"), "FR40303265045");
        assert_eq!(normalize(vat, "fr40303265045"), "FR40303265045");
        assert!(validate(vat, "40 303 265 045").is_valid());

        let siren = lookup(IdKind::CompanyId, "FR").unwrap();
        assert_eq!(normalize(siren, "FR303265045"), "303265045");
        assert_eq!(normalize(siren, "303265045"), "303265045");
    }

    #[test]
    fn failures_are_reported_in_order() {
        let iban = lookup(IdKind::Iban, "DE").unwrap();
        assert_eq!(
            validate(iban, "DE8937040044053201300"),
            ValidationOutcome::Invalid(ValidationFailure::LengthMismatch {
                expected: 22,
                actual: 21
            })
        );
        assert_eq!(
            validate(iban, "DE89370400440532013000000"),
            ValidationOutcome::Invalid(ValidationFailure::LengthMismatch {
                expected: 22,
                actual: 25
            })
        );
        assert_eq!(
            validate(iban, "DE8937040044053201300X"),
            ValidationOutcome::Invalid(ValidationFailure::InvalidCharacter { position: 21 })
        );
        assert_eq!(
            validate(iban, "FR89370400440532013000"),
            ValidationOutcome::Invalid(ValidationFailure::InvalidCharacter { position: 0 })
        );
        assert_eq!(
            validate(iban, "DE89370400440532013001"),
            ValidationOutcome::Invalid(ValidationFailure::ChecksumMismatch { segment: 1 })
        );

        let ssn = lookup(IdKind::PersonalId, "US").unwrap();
        assert_eq!(
            validate(ssn, "666-45-6789"),
            ValidationOutcome::Invalid(ValidationFailure::OutOfRange { segment: 0 })
        );
        assert_eq!(
            validate(ssn, "123-00-6789"),
            ValidationOutcome::Invalid(ValidationFailure::OutOfRange { segment: 1 })
        );

        let pesel = lookup(IdKind::PersonalId, "PL").unwrap();
        assert_eq!(
            validate(pesel, "44053401359"),
            ValidationOutcome::Invalid(ValidationFailure::OutOfRange { segment: 0 })
        );
    }

    #[test]
    fn optional_branch() {
        let swift = lookup(IdKind::Swift, "DE").unwrap();
        assert!(validate(swift, "DEUTDEFF").is_valid());
        assert!(validate(swift, "DEUTDEFF500").is_valid());
        assert!(validate(swift, "deut de ff 500").is_valid());
        assert_eq!(
            validate(swift, "DEUTDEFF5"),
            ValidationOutcome::Invalid(ValidationFailure::LengthMismatch {
                expected: 11,
                actual: 9
            })
        );
        assert!(!validate(swift, "DEUTFRFF").is_valid());
        assert!(!validate(swift, "DEU1DEFF").is_valid());
    }

    #[test]
    fn garbage_never_panics() {
        let inputs = ["", " ", "ÄÖÜßÄÖÜßÄÖÜßÄÖÜßÄÖÜßÄÖ", "DE89😀", "\u{0}\u{1}", "--__--"];
        for descriptor in crate::registry::descriptors() {
            for input in inputs {
                assert!(!validate(descriptor, input).is_valid());
            }
        }
    }

    #[test]
    fn inspect_splits_segments() {
        let swift = lookup(IdKind::Swift, "DE").unwrap();
        let value = inspect(swift, "deutdeff500");
        assert!(value.valid);
        assert_eq!(value.raw, "deutdeff500");
        assert_eq!(value.normalized, "DEUTDEFF500");
        assert_eq!(value.segments_resolved, vec!["DEUT", "DE", "FF", "500"]);

        let short = inspect(swift, "DEUT");
        assert!(!short.valid);
        assert!(short.segments_resolved.is_empty());
    }

    #[test]
    fn alternates_are_tried_in_order() {
        let bulgarian = lookup(IdKind::VatId, "BG").unwrap();
        assert!(validate(bulgarian, "BG175074752").is_valid());
        assert!(validate(bulgarian, "BG7523169263").is_valid());
        assert_eq!(
            validate(bulgarian, "BG7523169264"),
            ValidationOutcome::Invalid(ValidationFailure::ChecksumMismatch { segment: 2 })
        );
        assert_eq!(
            validate(bulgarian, "BG17507475"),
            ValidationOutcome::Invalid(ValidationFailure::LengthMismatch {
                expected: 11,
                actual: 10
            })
        );

        let value = inspect(bulgarian, "7523169263");
        assert!(value.valid);
        assert_eq!(value.segments_resolved, vec!["BG", "752316926", "3"]);
    }
}
