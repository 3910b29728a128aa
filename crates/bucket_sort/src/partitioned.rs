use std::mem;
use std::thread;

use crate::merge;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Partition {
    pub start: usize,
    pub len: usize,
}

// Contiguous, non-overlapping shares covering `len` exactly once; the
// remainder is spread one element each over the first `len % threads` ranks.
pub(crate) fn partitions(len: usize, threads: usize) -> Vec<Partition> {
    debug_assert!(threads >= 1);
    let portion = len / threads;
    let remainder = len % threads;

    let mut parts = Vec::with_capacity(threads);
    let mut start = 0;
    for rank in 0..threads {
        let part_len = portion + usize::from(rank < remainder);
        parts.push(Partition {
            start,
            len: part_len,
        });
        start += part_len;
    }
    parts
}

pub fn sort_partitioned(data: &mut [f32], threads: usize) {
    if threads < 2 || data.len() < 2 {
        merge::sort_sequential(data);
        return;
    }

    // More threads than elements would only add empty partitions.
    let threads = threads.min(data.len());
    let parts = partitions(data.len(), threads);

    thread::scope(|scope| {
        let mut rest = &mut *data;
        for part in &parts {
            let (chunk, tail) = mem::take(&mut rest).split_at_mut(part.len);
            rest = tail;
            scope.spawn(move || merge::sort_sequential(chunk));
        }
    });

    // Deterministic merge chain in ascending rank order: the accumulated
    // run (everything before part.start) absorbs one partition at a time,
    // threads - 1 merges total.
    for part in &parts[1..] {
        merge::merge_runs(&mut data[..part.start + part.len], part.start);
    }
}
