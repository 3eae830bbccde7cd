//! Grid cell primitives.
//!
//! A [`Cell`] carries everything a search algorithm records about one board
//! position: its kind (open, wall, or marker), its visit state, and the
//! distance/parent bookkeeping used for path reconstruction.

use serde::{Deserialize, Serialize};

/// Sentinel distance for cells no search has reached yet.
pub const INFINITY: u32 = u32::MAX;

/// A (row, column) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Pos {
    /// Create a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    ///
    /// This is the heuristic A* uses on a 4-connected grid.
    pub fn manhattan_distance(&self, other: Pos) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

/// What a cell is on the board, independent of any search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Passable cell.
    Open,
    /// Impassable cell.
    Wall,
    /// The search origin.
    Start,
    /// The search target.
    Finish,
}

impl CellKind {
    /// Whether this kind blocks movement.
    pub fn is_wall(&self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// Get kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Open => "open",
            CellKind::Wall => "wall",
            CellKind::Start => "start",
            CellKind::Finish => "finish",
        }
    }
}

/// Visit state of a cell during a search.
///
/// States only ever advance: `Unvisited` -> `Frontier` -> `Visited`. The
/// ordering derive encodes that progression so transitions can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellState {
    /// Not yet discovered.
    Unvisited,
    /// Discovered and queued for expansion.
    Frontier,
    /// Expanded; appears in the visit order.
    Visited,
}

impl CellState {
    /// Get state as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Unvisited => "unvisited",
            CellState::Frontier => "frontier",
            CellState::Visited => "visited",
        }
    }
}

/// One board position with its search bookkeeping.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Where this cell sits on the board.
    pub pos: Pos,
    /// Open, wall, start, or finish.
    pub kind: CellKind,
    /// Visit state for the current search.
    pub state: CellState,
    /// Path cost from the start ([`INFINITY`] until reached).
    pub distance: u32,
    /// A* f-score: cost so far plus heuristic ([`INFINITY`] until reached).
    pub total_distance: u32,
    /// Manhattan distance to the finish (A* only).
    pub heuristic: u32,
    /// Cell this one was reached from, for path reconstruction.
    pub previous: Option<Pos>,
}

impl Cell {
    /// Create a fresh cell with no search bookkeeping.
    pub fn new(pos: Pos, kind: CellKind) -> Self {
        Self {
            pos,
            kind,
            state: CellState::Unvisited,
            distance: INFINITY,
            total_distance: INFINITY,
            heuristic: 0,
            previous: None,
        }
    }

    /// Whether this cell blocks movement.
    pub fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }

    /// Whether this cell has been expanded.
    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }

    /// Mark this cell as discovered and queued.
    ///
    /// Re-marking a frontier cell is a no-op; marking a visited cell as
    /// frontier is a bug in the calling search and trips a debug assertion.
    pub fn mark_frontier(&mut self) {
        self.advance(CellState::Frontier);
    }

    /// Mark this cell as expanded.
    pub fn mark_visited(&mut self) {
        self.advance(CellState::Visited);
    }

    fn advance(&mut self, state: CellState) {
        debug_assert!(
            state >= self.state,
            "cell state may not regress: {} -> {}",
            self.state.as_str(),
            state.as_str()
        );
        self.state = state;
    }

    /// Clear search bookkeeping, keeping the cell's kind.
    pub fn clear_search_state(&mut self) {
        self.state = CellState::Unvisited;
        self.distance = INFINITY;
        self.total_distance = INFINITY;
        self.heuristic = 0;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance_symmetric() {
        let a = Pos::new(2, 3);
        let b = Pos::new(5, 1);
        assert_eq!(a.manhattan_distance(b), 5);
        assert_eq!(b.manhattan_distance(a), 5);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_new_cell_is_unreached() {
        let cell = Cell::new(Pos::new(0, 0), CellKind::Open);
        assert_eq!(cell.state, CellState::Unvisited);
        assert_eq!(cell.distance, INFINITY);
        assert!(cell.previous.is_none());
    }

    #[test]
    fn test_state_advances_and_repeats() {
        let mut cell = Cell::new(Pos::new(0, 0), CellKind::Open);
        cell.mark_frontier();
        cell.mark_frontier();
        cell.mark_visited();
        assert!(cell.is_visited());
    }

    #[test]
    #[should_panic(expected = "may not regress")]
    fn test_state_regression_panics() {
        let mut cell = Cell::new(Pos::new(0, 0), CellKind::Open);
        cell.mark_visited();
        cell.mark_frontier();
    }

    #[test]
    fn test_clear_search_state_keeps_kind() {
        let mut cell = Cell::new(Pos::new(1, 1), CellKind::Wall);
        cell.mark_visited();
        cell.distance = 4;
        cell.previous = Some(Pos::new(1, 0));
        cell.clear_search_state();
        assert_eq!(cell.kind, CellKind::Wall);
        assert_eq!(cell.state, CellState::Unvisited);
        assert_eq!(cell.distance, INFINITY);
        assert!(cell.previous.is_none());
    }
}
