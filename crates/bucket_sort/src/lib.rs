mod dispatch;
mod merge;
mod partitioned;
mod store;
mod task_recursive;

pub mod generator;

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

use log::error;

pub use merge::sort_sequential;
pub use partitioned::sort_partitioned;
pub use task_recursive::sort_task_recursive;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InnerSort {
    Sequential,
    TaskRecursive,
    Partitioned { threads: usize },
}

impl InnerSort {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::TaskRecursive => "task_recursive",
            Self::Partitioned { .. } => "partitioned",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SortConfig {
    pub bucket_count: usize,
    pub thread_count: usize,
    pub inner: InnerSort,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            bucket_count: 10,
            thread_count: 8,
            inner: InnerSort::Sequential,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortError {
    InvalidParameters {
        bucket_count: usize,
        thread_count: usize,
        len: usize,
    },
    InvalidInput {
        value: f32,
    },
    AllocationFailure,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters {
                bucket_count,
                thread_count,
                len,
            } => write!(
                f,
                "invalid parameters: bucket_count={bucket_count} thread_count={thread_count} \
                 for {len} values"
            ),
            Self::InvalidInput { value } => {
                write!(f, "invalid input value {value}: must be finite and non-negative")
            }
            Self::AllocationFailure => write!(f, "memory allocation failed"),
        }
    }
}

impl Error for SortError {}

impl From<TryReserveError> for SortError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailure
    }
}

// Sorts `data` ascending in place. On any error the slice must be treated
// as unusable: later failure paths do not roll partial work back.
pub fn sort_floats(data: &mut [f32], config: &SortConfig) -> Result<(), SortError> {
    let SortConfig {
        bucket_count,
        thread_count,
        inner,
    } = *config;

    if bucket_count < 1 || thread_count < 1 || bucket_count > data.len() {
        let err = SortError::InvalidParameters {
            bucket_count,
            thread_count,
            len: data.len(),
        };
        error!("{err}");
        return Err(err);
    }
    if bucket_count == 1 {
        // One bucket spans the whole range: plain sequential sort, no
        // buckets and no threads.
        merge::sort_sequential(data);
        return Ok(());
    }

    let buckets = store::fill_buckets(data, bucket_count)?;
    dispatch::dispatch_buckets(data, buckets, thread_count, inner)
}
