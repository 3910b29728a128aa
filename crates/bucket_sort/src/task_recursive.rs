use crate::merge;

// Each half is an independently stealable task; the join is the barrier
// before the combined range is merged.
pub fn sort_task_recursive(data: &mut [f32]) {
    if data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let (left, right) = data.split_at_mut(mid);
    rayon::join(|| sort_task_recursive(left), || sort_task_recursive(right));
    merge::merge_runs(data, mid);
}
