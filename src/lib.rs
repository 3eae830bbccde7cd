//! algovision: the algorithm core of an educational visualizer.
//!
//! Every engine produces a deterministic, replayable trace a presentation
//! layer can animate step by step:
//! - Comparison sorts emitting compare/swap/overwrite animation steps
//! - Grid searches (Dijkstra, BFS, DFS, A*) with visit order and paths
//! - Recursive-division maze generation
//! - A linear-probing hash table with per-probe traces
//! - A fail-soft explanation boundary for algorithm write-ups

pub mod config;
pub mod error;

pub mod core;
pub mod explain;
pub mod hashing;
pub mod maze;
pub mod render;
pub mod search;
pub mod sorting;

pub use config::{GridConfig, SortConfig};
pub use crate::core::{Cell, CellKind, CellState, Grid, Pos, INFINITY};
pub use error::{Error, Result};
pub use explain::{explain_or_fallback, Algorithm, BuiltinExplanations, ExplanationSource};
pub use hashing::{
    HashTable, InsertOutcome, InsertReport, ProbeOutcome, ProbeStep, SearchOutcome, SearchReport,
    DEFAULT_TABLE_SIZE,
};
pub use maze::generate_walls;
pub use search::{search, SearchAlgorithm, SearchRun};
pub use sorting::{animation_steps, replay, AnimationStep, SortAlgorithm};
