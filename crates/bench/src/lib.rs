use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const BENCH_SIZES: [usize; 4] = [1024, 16384, 65536, 262144];

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_RUNTIME_THRESHOLD: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size < LARGE_RUNTIME_THRESHOLD {
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` keys drawn from `0..distinct`; `distinct == 0` means the full `u64`
/// range.
pub fn random_keys<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    (0..len)
        .map(|_| {
            if distinct == 0 {
                rng.random::<u64>()
            } else {
                rng.random_range(0..distinct)
            }
        })
        .collect()
}

pub fn random_floats<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1e6..1e6)).collect()
}
