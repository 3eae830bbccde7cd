//! Algorithm explanations.
//!
//! Presentation layers show a short write-up of whichever algorithm is
//! running. The text comes from an [`ExplanationSource`] collaborator so a
//! remote service can be swapped in later; the default [`BuiltinExplanations`]
//! serves the offline bank in [`content`].
//!
//! The boundary is fail-soft: callers go through [`explain_or_fallback`],
//! which turns any source failure into fixed placeholder text instead of an
//! error. A broken explanation must never take a visualization down with it.

pub mod content;

use log::debug;

use crate::error::Result;
use crate::search::SearchAlgorithm;
use crate::sorting::SortAlgorithm;

pub use content::Explanation;

/// Shown when the explanation source fails.
pub const FALLBACK_EXPLANATION: &str = "Failed to load explanation.";

/// Shown when the source succeeds but produces no text.
pub const NO_EXPLANATION: &str = "No explanation available.";

/// Every algorithm the engine can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
    LinearProbing,
}

impl Algorithm {
    /// All explainable algorithms, in menu order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Sort(SortAlgorithm::Bubble),
        Algorithm::Sort(SortAlgorithm::Quick),
        Algorithm::Sort(SortAlgorithm::Merge),
        Algorithm::Sort(SortAlgorithm::Heap),
        Algorithm::Search(SearchAlgorithm::Dijkstra),
        Algorithm::Search(SearchAlgorithm::Bfs),
        Algorithm::Search(SearchAlgorithm::Dfs),
        Algorithm::Search(SearchAlgorithm::AStar),
        Algorithm::LinearProbing,
    ];

    /// Short lowercase token, e.g. for CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.as_str(),
            Algorithm::Search(search) => search.as_str(),
            Algorithm::LinearProbing => "hashing",
        }
    }

    /// Human-readable name for panels and headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.display_name(),
            Algorithm::Search(search) => search.display_name(),
            Algorithm::LinearProbing => "Hash Table (Linear Probing)",
        }
    }

    /// Parse a token produced by [`Algorithm::as_str`].
    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
    }
}

/// A collaborator that produces explanation text for an algorithm.
///
/// Implementations are free to do I/O; failures surface as
/// [`Error::Explanation`](crate::error::Error::Explanation) and are absorbed
/// by [`explain_or_fallback`].
pub trait ExplanationSource {
    /// Produce the write-up for `algorithm`.
    fn explain(&self, algorithm: Algorithm) -> Result<String>;
}

/// The default offline source, backed by the bank in [`content`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinExplanations;

impl ExplanationSource for BuiltinExplanations {
    fn explain(&self, algorithm: Algorithm) -> Result<String> {
        Ok(content::for_algorithm(algorithm).to_text(algorithm.display_name()))
    }
}

/// Ask `source` to explain `algorithm`, degrading to placeholder text.
///
/// Source errors are logged and swallowed; the caller always gets something
/// printable back.
pub fn explain_or_fallback(source: &dyn ExplanationSource, algorithm: Algorithm) -> String {
    match source.explain(algorithm) {
        Ok(text) if text.trim().is_empty() => NO_EXPLANATION.to_string(),
        Ok(text) => text,
        Err(err) => {
            debug!(
                "explanation source failed for {}: {err}",
                algorithm.display_name()
            );
            FALLBACK_EXPLANATION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct FailingSource;

    impl ExplanationSource for FailingSource {
        fn explain(&self, _algorithm: Algorithm) -> Result<String> {
            Err(Error::Explanation("service unreachable".to_string()))
        }
    }

    struct EmptySource;

    impl ExplanationSource for EmptySource {
        fn explain(&self, _algorithm: Algorithm) -> Result<String> {
            Ok("  \n".to_string())
        }
    }

    #[test]
    fn test_builtin_mentions_algorithm_name() {
        for algorithm in Algorithm::ALL {
            let text = explain_or_fallback(&BuiltinExplanations, algorithm);
            assert!(
                text.contains(algorithm.display_name()),
                "missing title for {}",
                algorithm.as_str()
            );
        }
    }

    #[test]
    fn test_failing_source_falls_back() {
        let text = explain_or_fallback(&FailingSource, Algorithm::LinearProbing);
        assert_eq!(text, FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_empty_text_maps_to_placeholder() {
        let text = explain_or_fallback(&EmptySource, Algorithm::Sort(SortAlgorithm::Merge));
        assert_eq!(text, NO_EXPLANATION);
    }

    #[test]
    fn test_token_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.as_str()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_name("bogo"), None);
    }
}
