use std::env;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;

const DEFAULT_SEED: u64 = 0xF1A7_6E0;

/// Bench sizing read from `FLATGEO_BENCH_TIER` (`quick` unless set to `full`),
/// with the input seed overridable through `FLATGEO_BENCH_SEED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

impl BenchTier {
    pub fn from_env() -> Self {
        match env::var("FLATGEO_BENCH_TIER").as_deref() {
            Ok("full") => Self::Full,
            _ => Self::Quick,
        }
    }

    pub fn seed(self) -> u64 {
        env::var("FLATGEO_BENCH_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SEED)
    }

    pub fn pick<'a, T>(self, quick: &'a [T], full: &'a [T]) -> &'a [T] {
        match self {
            Self::Quick => quick,
            Self::Full => full,
        }
    }

    /// Flattening and filtering are cheap per iteration; keep samples short.
    pub fn configure<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        let (samples, secs) = match self {
            Self::Quick => (20, 2),
            Self::Full => (40, 5),
        };
        group.sample_size(samples);
        group.measurement_time(Duration::from_secs(secs));
    }
}
