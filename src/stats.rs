use crate::error::ValidationOutcome;
use crate::format::FormatDescriptor;
use crate::observability::labels::{Labels, OUTCOME};
use lazy_static::lazy_static;
use metrics::{counter, gauge, Gauge};

pub const GENERATED: &str = "idforge.generated";
pub const VALIDATED: &str = "idforge.validated";
pub const REGISTRY_DESCRIPTORS: &str = "idforge.registry.descriptors";

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    // Number of descriptors in the registry, set once when it is built
    registry_descriptors: Gauge,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            registry_descriptors: gauge!(REGISTRY_DESCRIPTORS),
        }
    }

    pub fn set_registry_descriptors(&self, count: usize) {
        self.registry_descriptors.set(count as f64);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts one generation attempt for `descriptor`. `outcome` is `generated` or the reason it
/// failed.
pub fn record_generated(descriptor: &FormatDescriptor, outcome: &'static str) {
    counter!(
        GENERATED,
        Labels::for_format(descriptor).clone_with_labels(&[(OUTCOME, outcome)])
    )
    .increment(1);
}

pub fn record_validated(descriptor: &FormatDescriptor, outcome: &ValidationOutcome) {
    counter!(
        VALIDATED,
        Labels::for_format(descriptor).clone_with_labels(&[(OUTCOME, outcome.label())])
    )
    .increment(1);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::GenOptions;
    use crate::format::IdKind;
    use crate::observability::labels::{KIND, SCOPE};
    use crate::registry::lookup;
    use crate::{generator, validator};
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key(
        name: &'static str,
        kind: &'static str,
        scope: &'static str,
        outcome: &'static str,
    ) -> CompositeKey {
        CompositeKey::new(
            Counter,
            Key::from_parts(
                name,
                vec![
                    Label::new(KIND, kind),
                    Label::new(SCOPE, scope),
                    Label::new(OUTCOME, outcome),
                ],
            ),
        )
    }

    #[test]
    fn should_submit_generation_and_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let passport = lookup(IdKind::Passport, "US").unwrap();
            let mut rng = StdRng::seed_from_u64(0);
            for _ in 0..3 {
                generator::generate(passport, &mut rng, &GenOptions::default()).unwrap();
            }
            validator::validate(passport, "123456789");
            validator::validate(passport, "12345678");
            validator::validate(passport, "12345678X");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let metric_value = snapshot
            .get(&key(GENERATED, "passport", "US", "generated"))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(3)));

        for outcome in ["valid", "length_mismatch", "invalid_character"] {
            let metric_value = snapshot
                .get(&key(VALIDATED, "passport", "US", outcome))
                .expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
        }
        assert!(!snapshot.contains_key(&key(VALIDATED, "passport", "US", "checksum_mismatch")));
    }
}
