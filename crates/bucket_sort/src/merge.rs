pub(crate) fn merge_runs(data: &mut [f32], mid: usize) {
    debug_assert!(mid <= data.len());
    if mid == 0 || mid == data.len() {
        return;
    }

    // Scratch copies sized exactly to each run; freed when the call returns.
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left.len() && j < right.len() {
        // <= keeps the left run's element first on ties.
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        data[k..].copy_from_slice(&left[i..]);
    } else if j < right.len() {
        data[k..].copy_from_slice(&right[j..]);
    }
}

pub fn sort_sequential(data: &mut [f32]) {
    if data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let (left, right) = data.split_at_mut(mid);
    sort_sequential(left);
    sort_sequential(right);
    merge_runs(data, mid);
}
