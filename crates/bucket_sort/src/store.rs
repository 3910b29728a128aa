use log::error;

use crate::SortError;

// Fixed number of sub-ranges per unit of value, independent of the bucket
// count. Values below `0.1 * bucket_count` map to `floor(value * 10)`,
// everything else lands in the overflow bucket.
const SUBRANGES_PER_UNIT: f32 = 10.0;

pub(crate) struct BucketStore {
    buckets: Vec<Vec<f32>>,
    limit: f32,
}

impl BucketStore {
    fn new(bucket_count: usize) -> Result<Self, SortError> {
        debug_assert!(bucket_count >= 2);
        let mut buckets = Vec::new();
        if let Err(err) = buckets.try_reserve_exact(bucket_count) {
            error!("failed to allocate {bucket_count} bucket heads: {err}");
            return Err(err.into());
        }
        buckets.resize_with(bucket_count, Vec::new);

        Ok(Self {
            limit: 0.1 * bucket_count as f32,
            buckets,
        })
    }

    #[inline]
    fn bucket_index(&self, value: f32) -> usize {
        let last = self.buckets.len() - 1;
        if value < self.limit {
            // The min() keeps the value == limit float boundary in range.
            ((value * SUBRANGES_PER_UNIT) as usize).min(last)
        } else {
            last
        }
    }

    fn push(&mut self, value: f32) -> Result<(), SortError> {
        let index = self.bucket_index(value);
        let bucket = &mut self.buckets[index];
        if bucket.len() == bucket.capacity() {
            if let Err(err) = bucket.try_reserve(1) {
                error!("failed to grow bucket {index}: {err}");
                return Err(err.into());
            }
        }
        bucket.push(value);
        Ok(())
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn into_buckets(self) -> Vec<Vec<f32>> {
        self.buckets
    }
}

pub(crate) fn fill_buckets(data: &[f32], bucket_count: usize) -> Result<BucketStore, SortError> {
    let mut store = BucketStore::new(bucket_count)?;
    for &value in data {
        if !value.is_finite() || value < 0.0 {
            error!("invalid input value {value}: only finite non-negative floats are sortable");
            return Err(SortError::InvalidInput { value });
        }
        store.push(value)?;
    }
    Ok(store)
}

// Turns one bucket's collected values into a dense array presized from the
// recorded count, consuming the bucket storage.
pub(crate) fn materialize(chain: Vec<f32>) -> Result<Vec<f32>, SortError> {
    let mut dense = Vec::new();
    if let Err(err) = dense.try_reserve_exact(chain.len()) {
        error!("failed to materialize a bucket of {} values: {err}", chain.len());
        return Err(err.into());
    }
    dense.extend_from_slice(&chain);
    Ok(dense)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn zero_goes_to_first_bucket() {
        let store = fill_buckets(&[0.0], 10).unwrap();
        let buckets = store.into_buckets();
        assert_eq!(buckets[0], vec![0.0]);
        assert!(buckets[1..].iter().all(Vec::is_empty));
    }

    #[test]
    fn limit_boundary_goes_to_last_bucket() {
        for &bucket_count in &[2_usize, 4, 10, 16] {
            let limit = 0.1 * bucket_count as f32;
            let store = fill_buckets(&[limit], bucket_count).unwrap();
            let buckets = store.into_buckets();
            assert_eq!(
                buckets[bucket_count - 1],
                vec![limit],
                "bucket_count={bucket_count}"
            );
        }
    }

    #[test]
    fn values_beyond_limit_overflow_to_last_bucket() {
        let store = fill_buckets(&[1.5, 27.0, 1e20], 10).unwrap();
        let buckets = store.into_buckets();
        assert_eq!(buckets[9].len(), 3);
    }

    #[test]
    fn sub_limit_values_map_by_tenths() {
        let store = fill_buckets(&[0.05, 0.15, 0.55, 0.95], 10).unwrap();
        let buckets = store.into_buckets();
        assert_eq!(buckets[0], vec![0.05]);
        assert_eq!(buckets[1], vec![0.15]);
        assert_eq!(buckets[5], vec![0.55]);
        assert_eq!(buckets[9], vec![0.95]);
    }

    #[test]
    fn classification_is_monotone_across_buckets() {
        let mut rng = StdRng::seed_from_u64(0x5EED_02);
        let data: Vec<f32> = (0..4096).map(|_| rng.random::<f32>() * 2.0).collect();
        let buckets = fill_buckets(&data, 12).unwrap().into_buckets();

        let mut previous_max = f32::NEG_INFINITY;
        for bucket in &buckets {
            if bucket.is_empty() {
                continue;
            }
            let min = bucket.iter().copied().fold(f32::INFINITY, f32::min);
            let max = bucket.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            assert!(previous_max <= min);
            previous_max = max;
        }
    }

    #[test]
    fn counts_cover_the_input() {
        let mut rng = StdRng::seed_from_u64(0x5EED_03);
        let data: Vec<f32> = (0..1000).map(|_| rng.random::<f32>()).collect();
        let store = fill_buckets(&data, 7).unwrap();
        let total: usize = store.into_buckets().iter().map(Vec::len).sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn negative_value_is_rejected() {
        let result = fill_buckets(&[0.5, -0.1, 0.3], 2);
        assert_eq!(result.err(), Some(SortError::InvalidInput { value: -0.1 }));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(fill_buckets(&[0.5, f32::NAN], 2).is_err());
        assert!(fill_buckets(&[f32::INFINITY, 0.5], 2).is_err());
        assert!(fill_buckets(&[f32::NEG_INFINITY], 2).is_err());
    }

    #[test]
    fn materialize_copies_and_presizes() {
        let chain = vec![0.3, 0.1, 0.2];
        let dense = materialize(chain).unwrap();
        assert_eq!(dense, vec![0.3, 0.1, 0.2]);
        assert_eq!(dense.capacity(), 3);
    }
}
