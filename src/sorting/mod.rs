//! Sorting engine.
//!
//! Each algorithm produces a step log describing how it sorts a copy of the
//! input: which indices it compared, which it swapped, which it overwrote.
//! A presentation layer replays the log at its own pace; [`replay`] applies
//! it directly for callers that want the final array.
//!
//! Logs are deterministic: the same input always yields the same steps.

use log::debug;
use rand::Rng;

use crate::config::SortConfig;
use crate::error::Result;

mod bubble;
mod heap;
mod merge;
mod quick;

/// One animation step of a sorting run.
///
/// Indices always refer to the array as it exists at that point of the
/// replay, and always lie in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Two indices were compared. No array change.
    Compare { a: usize, b: usize },
    /// The values at two indices were exchanged. `a == b` is a no-op swap
    /// some algorithms emit for a pivot that is already in place.
    Swap { a: usize, b: usize },
    /// `value` was written at `index` (merge sort's placement step).
    Overwrite { index: usize, value: u32 },
}

/// The comparison sorts the engine can trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Merge,
    Heap,
}

impl SortAlgorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Heap,
    ];

    /// Get algorithm as a string (the CLI token).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Heap => "heap",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Parse a CLI token back into an algorithm.
    pub fn from_name(name: &str) -> Option<SortAlgorithm> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

/// Trace how `algorithm` sorts `values`.
///
/// The input is never mutated; the algorithm runs on an internal scratch
/// copy. Empty and singleton inputs yield an empty log.
pub fn animation_steps(values: &[u32], algorithm: SortAlgorithm) -> Vec<AnimationStep> {
    let mut scratch = values.to_vec();
    let mut steps = Vec::new();
    match algorithm {
        SortAlgorithm::Bubble => bubble::sort(&mut scratch, &mut steps),
        SortAlgorithm::Quick => quick::sort(&mut scratch, &mut steps),
        SortAlgorithm::Merge => merge::sort(&mut scratch, &mut steps),
        SortAlgorithm::Heap => heap::sort(&mut scratch, &mut steps),
    }
    debug!(
        "{} produced {} steps for {} values",
        algorithm.as_str(),
        steps.len(),
        values.len()
    );
    steps
}

/// Apply a step log to a copy of `values` and return the result.
///
/// `Compare` steps are ignored; `Swap` and `Overwrite` mutate the copy.
/// Replaying a log produced by [`animation_steps`] over the same input
/// reproduces the algorithm's sorted output exactly.
pub fn replay(values: &[u32], steps: &[AnimationStep]) -> Vec<u32> {
    let mut out = values.to_vec();
    for step in steps {
        match *step {
            AnimationStep::Compare { .. } => {}
            AnimationStep::Swap { a, b } => out.swap(a, b),
            AnimationStep::Overwrite { index, value } => out[index] = value,
        }
    }
    out
}

/// Generate a random array the way the visualizer's "new array" button does:
/// `config.len` values drawn uniformly from `min_value..=max_value`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Config`] when the value range is empty.
pub fn random_values<R: Rng>(config: &SortConfig, rng: &mut R) -> Result<Vec<u32>> {
    config.validate()?;
    Ok((0..config.len)
        .map(|_| rng.gen_range(config.min_value..=config.max_value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_and_singleton_logs_are_empty() {
        for algorithm in SortAlgorithm::ALL {
            assert!(animation_steps(&[], algorithm).is_empty());
            assert!(animation_steps(&[42], algorithm).is_empty());
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let values = vec![4, 1, 3, 2];
        let _ = animation_steps(&values, SortAlgorithm::Quick);
        assert_eq!(values, vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_replay_applies_swaps_and_overwrites() {
        let steps = [
            AnimationStep::Compare { a: 0, b: 1 },
            AnimationStep::Swap { a: 0, b: 1 },
            AnimationStep::Overwrite { index: 2, value: 9 },
        ];
        assert_eq!(replay(&[1, 2, 3], &steps), vec![2, 1, 9]);
    }

    #[test]
    fn test_random_values_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SortConfig::default();
        let values = random_values(&config, &mut rng).unwrap();
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|&v| (5..=100).contains(&v)));
    }

    #[test]
    fn test_random_values_reproducible_per_seed() {
        let config = SortConfig::default();
        let a = random_values(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_values(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_name_round_trip() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(SortAlgorithm::from_name(algorithm.as_str()), Some(algorithm));
        }
        assert_eq!(SortAlgorithm::from_name("bogo"), None);
    }
}
