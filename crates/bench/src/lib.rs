use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::SamplingMode;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 100;
const MEASURE_MS_SMALL: u64 = 150;
const MEASURE_MS_LARGE: u64 = 400;
const MEASURE_MS_XL: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;

// Thread-pool setup dominates small inputs, so parallel-sort groups get a
// flat sampling mode and longer measurement windows as sizes grow.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if len <= 16_384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if len <= 131_072 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
