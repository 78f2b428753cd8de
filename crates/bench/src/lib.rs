use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `size` distinct keys `0, stride, 2 * stride, ...` in random order, leaving
/// gaps so that absent-key lookups can land between present keys.
pub fn shuffled_keys<R: Rng + ?Sized>(rng: &mut R, size: usize, stride: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..size as u64).map(|i| i * stride).collect();
    keys.shuffle(rng);
    keys
}

/// Queries drawn uniformly from `[0, size * stride)`, hitting present keys
/// roughly once every `stride` draws.
pub fn random_queries<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    size: usize,
    stride: u64,
) -> Vec<u64> {
    let upper = (size as u64).saturating_mul(stride).max(1);
    (0..count).map(|_| rng.random_range(0..upper)).collect()
}
