//! Core grid primitives for algovision.
//!
//! This module contains the board model shared by the search and maze
//! engines:
//! - Pos and Cell for per-position search bookkeeping
//! - Grid for the board itself

pub mod cell;
pub mod grid;

pub use cell::{Cell, CellKind, CellState, Pos, INFINITY};
pub use grid::Grid;
