//! Graph search engine.
//!
//! Every search takes a read-only grid, runs on a private
//! [`Grid::snapshot`], and returns a [`SearchRun`]: the mutated snapshot
//! plus the cells in the exact order they were expanded. The caller's grid
//! is never touched, so two runs over the same board can be compared
//! side by side.
//!
//! All four algorithms treat edges as unit cost and use the same
//! 4-connected adjacency; walls never enter a frontier and are never
//! visited.

use log::debug;

use crate::core::{Grid, Pos};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

/// The searches the engine can trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Dijkstra,
    Bfs,
    Dfs,
    AStar,
}

impl SearchAlgorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::AStar,
    ];

    /// Get algorithm as a string (the CLI token).
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchAlgorithm::Dijkstra => "dijkstra",
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::AStar => "astar",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Dijkstra => "Dijkstra",
            SearchAlgorithm::Bfs => "Breadth-First Search",
            SearchAlgorithm::Dfs => "Depth-First Search",
            SearchAlgorithm::AStar => "A* Search",
        }
    }

    /// Parse a CLI token back into an algorithm.
    pub fn from_name(name: &str) -> Option<SearchAlgorithm> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }

    /// Whether the algorithm guarantees a shortest path on unit grids.
    pub fn is_shortest_path(&self) -> bool {
        !matches!(self, SearchAlgorithm::Dfs)
    }
}

/// A finished search: the snapshot it ran on and its visit order.
#[derive(Debug, Clone)]
pub struct SearchRun {
    grid: Grid,
    visited: Vec<Pos>,
}

impl SearchRun {
    /// The snapshot the search ran on, with final per-cell bookkeeping.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells in the order they were expanded.
    pub fn visited(&self) -> &[Pos] {
        &self.visited
    }

    /// Whether the search expanded the finish cell.
    pub fn finish_reached(&self) -> bool {
        self.grid.cell(self.grid.finish()).is_visited()
    }

    /// The reconstructed path from start to finish, inclusive.
    ///
    /// Walks back-pointers from the finish. When the finish was never
    /// reached the walk stops immediately and the result is `[finish]`.
    pub fn path(&self) -> Vec<Pos> {
        let mut path = vec![self.grid.finish()];
        let mut current = self.grid.cell(self.grid.finish()).previous;
        while let Some(pos) = current {
            path.push(pos);
            current = self.grid.cell(pos).previous;
        }
        path.reverse();
        path
    }
}

/// Run `algorithm` over a snapshot of `grid`.
pub fn search(grid: &Grid, algorithm: SearchAlgorithm) -> SearchRun {
    let mut snapshot = grid.snapshot();
    let mut visited = Vec::new();
    match algorithm {
        SearchAlgorithm::Dijkstra => dijkstra::run(&mut snapshot, &mut visited),
        SearchAlgorithm::Bfs => bfs::run(&mut snapshot, &mut visited),
        SearchAlgorithm::Dfs => dfs::run(&mut snapshot, &mut visited),
        SearchAlgorithm::AStar => astar::run(&mut snapshot, &mut visited),
    }
    debug!(
        "{} expanded {} cells on a {}x{} board",
        algorithm.as_str(),
        visited.len(),
        grid.rows(),
        grid.cols()
    );
    SearchRun {
        grid: snapshot,
        visited,
    }
}
