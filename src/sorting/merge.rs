//! Merge sort.
//!
//! Top-down, with the main and auxiliary arrays swapping roles at every
//! recursion level so each merge reads one array and writes the other
//! without copying back.

use super::AnimationStep;

pub(super) fn sort(values: &mut [u32], steps: &mut Vec<AnimationStep>) {
    if values.len() < 2 {
        return;
    }
    let mut aux = values.to_vec();
    let hi = values.len() - 1;
    sort_range(values, &mut aux, 0, hi, steps);
}

fn sort_range(
    main: &mut [u32],
    aux: &mut [u32],
    lo: usize,
    hi: usize,
    steps: &mut Vec<AnimationStep>,
) {
    if lo == hi {
        return;
    }
    let mid = (lo + hi) / 2;
    sort_range(aux, main, lo, mid, steps);
    sort_range(aux, main, mid + 1, hi, steps);
    merge(main, aux, lo, mid, hi, steps);
}

/// Merge the two sorted halves of `aux[lo..=hi]` into `main[lo..=hi]`.
///
/// Logs a `Compare { i, j }` per head-to-head pick and an `Overwrite` for
/// every placement; drained tails log a self-compare before each placement
/// so every overwrite is paced by a compare.
fn merge(
    main: &mut [u32],
    aux: &[u32],
    lo: usize,
    mid: usize,
    hi: usize,
    steps: &mut Vec<AnimationStep>,
) {
    let mut k = lo;
    let mut i = lo;
    let mut j = mid + 1;
    while i <= mid && j <= hi {
        steps.push(AnimationStep::Compare { a: i, b: j });
        if aux[i] <= aux[j] {
            steps.push(AnimationStep::Overwrite { index: k, value: aux[i] });
            main[k] = aux[i];
            i += 1;
        } else {
            steps.push(AnimationStep::Overwrite { index: k, value: aux[j] });
            main[k] = aux[j];
            j += 1;
        }
        k += 1;
    }
    while i <= mid {
        steps.push(AnimationStep::Compare { a: i, b: i });
        steps.push(AnimationStep::Overwrite { index: k, value: aux[i] });
        main[k] = aux[i];
        k += 1;
        i += 1;
    }
    while j <= hi {
        steps.push(AnimationStep::Compare { a: j, b: j });
        steps.push(AnimationStep::Overwrite { index: k, value: aux[j] });
        main[k] = aux[j];
        k += 1;
        j += 1;
    }
}
