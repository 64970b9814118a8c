use crate::checksum::ChecksumError;
use crate::config::GenOptions;
use crate::error::IdError;
use crate::format::{FormatDescriptor, LayoutRef, SegmentRole, SegmentSpec};
use crate::formatter;
use crate::identifier::IdentifierValue;
use crate::stats::record_generated;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates a random identifier satisfying `descriptor`.
///
/// A layout is picked among the generated ones, its segments are drawn left to right, then
/// every check segment is computed over the segments it covers. A draw whose check value
/// cannot be written is discarded and redrawn, up to `options.max_attempts` times.
pub fn generate<R: Rng + ?Sized>(
    descriptor: &FormatDescriptor,
    rng: &mut R,
    options: &GenOptions,
) -> Result<IdentifierValue, IdError> {
    let layouts = candidate_layouts(descriptor, options);
    for _ in 0..options.max_attempts.max(1) {
        let Some(layout) = layouts.choose(rng) else {
            break;
        };
        let segments = active_segments(layout, rng, options);
        let mut parts: Vec<Option<String>> = segments
            .iter()
            .map(|segment| draw(segment, rng, options))
            .collect();

        match resolve_checks(segments, &mut parts) {
            Ok(()) => {}
            Err(ChecksumError::Unrepresentable) => continue,
            Err(err) => {
                record_generated(descriptor, "malformed");
                return Err(err.into());
            }
        }

        let segments_resolved: Vec<String> = parts.into_iter().flatten().collect();
        let normalized = segments_resolved.concat();
        record_generated(descriptor, "generated");
        return Ok(IdentifierValue {
            raw: formatter::format(descriptor, &normalized),
            normalized,
            kind: descriptor.kind,
            scope: descriptor.scope.clone(),
            valid: true,
            segments_resolved,
        });
    }

    record_generated(descriptor, "exhausted");
    Err(IdError::GenerationExhausted {
        kind: descriptor.kind,
        country: descriptor.scope.to_string(),
    })
}

/// The generated layouts, narrowed to those whose dates can fall in the requested year
/// when some can.
fn candidate_layouts<'a>(descriptor: &'a FormatDescriptor, options: &GenOptions) -> Vec<LayoutRef<'a>> {
    let generated: Vec<LayoutRef> = descriptor
        .layouts()
        .into_iter()
        .filter(|layout| layout.generated)
        .collect();
    let Some(year) = options.year else {
        return generated;
    };
    let admitting: Vec<LayoutRef> = generated
        .iter()
        .filter(|layout| {
            layout.segments.iter().all(|segment| match &segment.role {
                SegmentRole::Date(date) => date.admits(year),
                _ => true,
            })
        })
        .copied()
        .collect();
    if admitting.is_empty() {
        generated
    } else {
        admitting
    }
}

/// The segments of this draw: all of them, or the required ones when the optional tail
/// is left out.
fn active_segments<'a, R: Rng + ?Sized>(
    layout: &LayoutRef<'a>,
    rng: &mut R,
    options: &GenOptions,
) -> &'a [SegmentSpec] {
    let required = layout
        .segments
        .iter()
        .take_while(|segment| !segment.optional)
        .count();
    if required == layout.segments.len() {
        return layout.segments;
    }
    let include = options.include_branch.unwrap_or_else(|| rng.gen_bool(0.5));
    if include {
        layout.segments
    } else {
        &layout.segments[..required]
    }
}

/// A random value for `segment`, or `None` for a check segment that is computed later. A
/// gendered segment is redrawn until it encodes the requested gender, when it can.
fn draw<R: Rng + ?Sized>(segment: &SegmentSpec, rng: &mut R, options: &GenOptions) -> Option<String> {
    let (Some(gender), Some(_)) = (options.gender, segment.gender) else {
        return draw_once(segment, rng, options);
    };
    let mut value = draw_once(segment, rng, options);
    for _ in 0..GENDER_REDRAWS {
        if value.as_deref().and_then(|part| segment.gender_of(part)) == Some(gender) {
            break;
        }
        value = draw_once(segment, rng, options);
    }
    value
}

const GENDER_REDRAWS: usize = 64;

fn draw_once<R: Rng + ?Sized>(
    segment: &SegmentSpec,
    rng: &mut R,
    options: &GenOptions,
) -> Option<String> {
    match &segment.role {
        SegmentRole::Literal(text) => Some(text.to_string()),
        SegmentRole::OneOf(choices) => choices.choose(rng).map(|choice| choice.to_string()),
        SegmentRole::Range(ranges) => {
            let (low, high) = *ranges.choose(rng)?;
            let value = rng.gen_range(low..=high);
            Some(format!("{value:0width$}", width = segment.length))
        }
        SegmentRole::Date(layout) => Some(layout.random(rng, options.year)),
        SegmentRole::Digits
        | SegmentRole::Letters
        | SegmentRole::Alnum
        | SegmentRole::Charset(_) => {
            let alphabet = segment.alphabet()?.as_bytes();
            (0..segment.length)
                .map(|_| alphabet.choose(rng).map(|b| char::from(*b)))
                .collect()
        }
        SegmentRole::Check(_) => None,
    }
}

/// Fills in every check segment. A check may cover another check (the French VAT key
/// covers the SIREN with its Luhn digit), so checks are resolved once everything they
/// cover is known.
fn resolve_checks(
    segments: &[SegmentSpec],
    parts: &mut [Option<String>],
) -> Result<(), ChecksumError> {
    loop {
        let mut pending = false;
        let mut progressed = false;
        for (index, segment) in segments.iter().enumerate() {
            let SegmentRole::Check(spec) = &segment.role else {
                continue;
            };
            if parts[index].is_some() {
                continue;
            }
            let body: Option<String> = spec
                .cover
                .indices(index, segments.len())
                .iter()
                .map(|i| parts.get(*i).cloned().flatten())
                .collect();
            match body {
                Some(body) => {
                    parts[index] = Some(spec.algorithm.compute(&body)?);
                    progressed = true;
                }
                None => pending = true,
            }
        }
        if !pending {
            return Ok(());
        }
        if !progressed {
            return Err(ChecksumError::MalformedInput(
                "check segments cover each other".to_string(),
            ));
        }
    }
}
