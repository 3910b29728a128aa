use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataCase {
    UniformUnit,
    UniformWide,
    AlreadySorted,
    Reversed,
    ManyDuplicates,
    BucketBoundaries,
}

pub const ALL_CASES: [DataCase; 6] = [
    DataCase::UniformUnit,
    DataCase::UniformWide,
    DataCase::AlreadySorted,
    DataCase::Reversed,
    DataCase::ManyDuplicates,
    DataCase::BucketBoundaries,
];

impl DataCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::UniformUnit => "uniform_unit",
            Self::UniformWide => "uniform_wide",
            Self::AlreadySorted => "already_sorted",
            Self::Reversed => "reversed",
            Self::ManyDuplicates => "many_duplicates",
            Self::BucketBoundaries => "bucket_boundaries",
        }
    }
}

pub fn generate_case(case: DataCase, size: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    match case {
        DataCase::UniformUnit => (0..size).map(|_| rng.random::<f32>()).collect(),
        DataCase::UniformWide => (0..size).map(|_| rng.random::<f32>() * 4.0).collect(),
        DataCase::AlreadySorted => {
            let mut data: Vec<f32> = (0..size).map(|_| rng.random::<f32>()).collect();
            data.sort_by(f32::total_cmp);
            data
        }
        DataCase::Reversed => {
            let mut data: Vec<f32> = (0..size).map(|_| rng.random::<f32>()).collect();
            data.sort_by(|a, b| b.total_cmp(a));
            data
        }
        DataCase::ManyDuplicates => (0..size)
            .map(|_| rng.random_range(0..16) as f32 * 0.0625)
            .collect(),
        DataCase::BucketBoundaries => (0..size)
            .map(|_| rng.random_range(0..=10) as f32 * 0.1)
            .collect(),
    }
}
