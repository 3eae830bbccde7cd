//! Quick sort.

use super::AnimationStep;

pub(super) fn sort(values: &mut [u32], steps: &mut Vec<AnimationStep>) {
    if values.len() < 2 {
        return;
    }
    let hi = values.len() - 1;
    sort_range(values, 0, hi, steps);
}

/// Sort `values[lo..=hi]` around a first-element pivot.
///
/// Each scan iteration logs the live `Compare { left, right }` plus a pacing
/// `Compare { pivot, pivot }` so replays tick at a constant two compares per
/// iteration. The closing pivot placement logs a `Swap` even when the pivot
/// is already in place. The smaller partition recurses first, which bounds
/// the stack depth and only affects step order.
fn sort_range(values: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<AnimationStep>) {
    if lo >= hi {
        return;
    }
    let pivot = lo;
    let mut left = lo + 1;
    let mut right = hi;

    while right >= left {
        steps.push(AnimationStep::Compare { a: left, b: right });
        steps.push(AnimationStep::Compare { a: pivot, b: pivot });

        if values[left] > values[pivot] && values[right] < values[pivot] {
            steps.push(AnimationStep::Swap { a: left, b: right });
            values.swap(left, right);
        }
        if values[left] <= values[pivot] {
            left += 1;
        }
        // right > lo here, so this never underflows.
        if values[right] >= values[pivot] {
            right -= 1;
        }
    }

    steps.push(AnimationStep::Swap { a: pivot, b: right });
    values.swap(pivot, right);

    let left_span = right as isize - 1 - lo as isize;
    let right_span = hi as isize - (right as isize + 1);
    if left_span < right_span {
        if right > lo + 1 {
            sort_range(values, lo, right - 1, steps);
        }
        if right + 1 < hi {
            sort_range(values, right + 1, hi, steps);
        }
    } else {
        if right + 1 < hi {
            sort_range(values, right + 1, hi, steps);
        }
        if right > lo + 1 {
            sort_range(values, lo, right - 1, steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_pair_emits_pivot_self_swap() {
        let mut values = vec![1, 2];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert_eq!(
            steps,
            vec![
                AnimationStep::Compare { a: 1, b: 1 },
                AnimationStep::Compare { a: 0, b: 0 },
                AnimationStep::Swap { a: 0, b: 0 },
            ]
        );
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_reverse_pair() {
        let mut values = vec![2, 1];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert_eq!(values, vec![1, 2]);
        assert_eq!(steps.last(), Some(&AnimationStep::Swap { a: 0, b: 1 }));
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let mut values = vec![5, 1, 4, 1, 5, 9, 2, 6];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert_eq!(values, vec![1, 1, 2, 4, 5, 5, 6, 9]);
        assert!(!steps.is_empty());
    }
}
