use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::store::{self, BucketStore};
use crate::{InnerSort, SortError, merge, partitioned, task_recursive};

pub(crate) fn dispatch_buckets(
    data: &mut [f32],
    buckets: BucketStore,
    thread_count: usize,
    inner: InnerSort,
) -> Result<(), SortError> {
    let bucket_count = buckets.bucket_count();
    let workers = thread_count.min(bucket_count);
    debug!("dispatching {bucket_count} buckets on {workers} workers ({inner:?})");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|err| {
            error!("failed to build a dispatch pool of {workers} threads: {err}");
            SortError::AllocationFailure
        })?;

    // The flag only ever goes false -> true. Workers check it before
    // starting bucket-local work; buckets already in flight run to
    // completion (cooperative early exit, no preemption).
    let failed = AtomicBool::new(false);
    let outcomes: Vec<Result<Vec<f32>, SortError>> = pool.install(|| {
        buckets
            .into_buckets()
            .into_par_iter()
            .map(|chain| {
                if failed.load(Ordering::Acquire) {
                    return Err(SortError::AllocationFailure);
                }
                let outcome = sort_one_bucket(chain, inner);
                if outcome.is_err() {
                    failed.store(true, Ordering::Release);
                }
                outcome
            })
            .collect()
    });

    let mut sorted = Vec::with_capacity(bucket_count);
    for outcome in outcomes {
        match outcome {
            Ok(array) => sorted.push(array),
            Err(err) => {
                // Dropping `sorted` and the remaining outcomes frees every
                // array that was materialized before the failure.
                error!("bucket dispatch aborted: {err}");
                return Err(err);
            }
        }
    }

    concatenate(data, sorted);
    Ok(())
}

fn sort_one_bucket(chain: Vec<f32>, inner: InnerSort) -> Result<Vec<f32>, SortError> {
    let mut array = store::materialize(chain)?;
    match inner {
        InnerSort::Sequential => merge::sort_sequential(&mut array),
        InnerSort::TaskRecursive => task_recursive::sort_task_recursive(&mut array),
        InnerSort::Partitioned { threads } => partitioned::sort_partitioned(&mut array, threads),
    }
    Ok(array)
}

// Ascending bucket index is ascending value range; writing the arrays back
// in that order is what makes the whole slice sorted.
fn concatenate(data: &mut [f32], sorted: Vec<Vec<f32>>) {
    let mut offset = 0;
    for array in sorted {
        data[offset..offset + array.len()].copy_from_slice(&array);
        offset += array.len();
    }
    debug_assert_eq!(offset, data.len());
}
