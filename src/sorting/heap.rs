//! Heap sort.

use super::AnimationStep;

/// Build a max-heap, then repeatedly swap the root to the end of the
/// shrinking heap and sift the new root down.
pub(super) fn sort(values: &mut [u32], steps: &mut Vec<AnimationStep>) {
    let n = values.len();
    for i in (0..n / 2).rev() {
        sift_down(values, n, i, steps);
    }
    for i in (1..n).rev() {
        steps.push(AnimationStep::Swap { a: 0, b: i });
        values.swap(0, i);
        sift_down(values, i, 0, steps);
    }
}

/// Restore the heap property below `root` within `values[..heap_len]`.
///
/// Logs a `Compare` against each existing child; the second compare uses the
/// winner of the first, so at most two compares and one `Swap` per level.
fn sift_down(values: &mut [u32], heap_len: usize, root: usize, steps: &mut Vec<AnimationStep>) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_len {
        steps.push(AnimationStep::Compare { a: largest, b: left });
        if values[left] > values[largest] {
            largest = left;
        }
    }
    if right < heap_len {
        steps.push(AnimationStep::Compare { a: largest, b: right });
        if values[right] > values[largest] {
            largest = right;
        }
    }
    if largest != root {
        steps.push(AnimationStep::Swap { a: root, b: largest });
        values.swap(root, largest);
        sift_down(values, heap_len, largest, steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_element_log() {
        // The extract phase always swaps root and last, even when sorted.
        let mut values = vec![1, 2];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert_eq!(
            steps,
            vec![
                AnimationStep::Compare { a: 0, b: 1 },
                AnimationStep::Swap { a: 0, b: 1 },
                AnimationStep::Swap { a: 0, b: 1 },
            ]
        );
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_sorts_reverse_run() {
        let mut values = vec![9, 7, 5, 3, 1];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert_eq!(values, vec![1, 3, 5, 7, 9]);
        assert!(!steps.is_empty());
    }
}
