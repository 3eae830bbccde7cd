//! Bubble sort.

use super::AnimationStep;

/// Sort in place, logging one `Compare` per adjacent pair examined and a
/// `Swap` for every exchange.
///
/// All passes run to the end; there is no sorted-early exit, so the number
/// of compares depends only on the input length.
pub(super) fn sort(values: &mut [u32], steps: &mut Vec<AnimationStep>) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            steps.push(AnimationStep::Compare { a: j, b: j + 1 });
            if values[j] > values[j + 1] {
                steps.push(AnimationStep::Swap { a: j, b: j + 1 });
                values.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_element_log() {
        let mut values = vec![2, 1];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert_eq!(
            steps,
            vec![
                AnimationStep::Compare { a: 0, b: 1 },
                AnimationStep::Swap { a: 0, b: 1 },
            ]
        );
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_equal_values_never_swapped() {
        let mut values = vec![3, 3, 3];
        let mut steps = Vec::new();
        sort(&mut values, &mut steps);
        assert!(steps
            .iter()
            .all(|s| matches!(s, AnimationStep::Compare { .. })));
    }
}
