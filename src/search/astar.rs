//! A* search with a Manhattan heuristic.

use crate::core::{CellState, Grid, Pos};

/// Expand open-list cells in minimum f-score order (f = g + h, h =
/// Manhattan distance to the finish).
///
/// Neighbors that are not yet visited get their bookkeeping overwritten on
/// every expansion; there is no decrease-key, a cell already on the open
/// list just keeps its place. That is a known approximation: it matches
/// textbook A* only because edge weights are uniform. Weighted edges would
/// need the full open-list update.
pub(super) fn run(grid: &mut Grid, visited: &mut Vec<Pos>) {
    let start = grid.start();
    let finish = grid.finish();
    {
        let cell = grid.cell_mut(start);
        cell.distance = 0;
        cell.total_distance = 0;
        cell.mark_frontier();
    }
    let mut open = vec![start];

    while !open.is_empty() {
        let current = pop_closest(grid, &mut open);
        grid.cell_mut(current).mark_visited();
        visited.push(current);
        if current == finish {
            return;
        }

        let next_distance = grid.cell(current).distance + 1;
        for neighbor in grid.neighbors4(current) {
            let heuristic = neighbor.manhattan_distance(finish);
            let cell = grid.cell_mut(neighbor);
            if cell.is_wall() || cell.is_visited() {
                continue;
            }
            let already_open = cell.state == CellState::Frontier;
            cell.distance = next_distance;
            cell.heuristic = heuristic;
            cell.total_distance = next_distance + heuristic;
            cell.previous = Some(current);
            cell.mark_frontier();
            if !already_open {
                open.push(neighbor);
            }
        }
    }
}

/// Remove and return the open-list entry with the smallest f-score. Strict
/// less-than keeps the first of equals, so ties break in insertion order.
fn pop_closest(grid: &Grid, open: &mut Vec<Pos>) -> Pos {
    let mut best = 0;
    for i in 1..open.len() {
        if grid.cell(open[i]).total_distance < grid.cell(open[best]).total_distance {
            best = i;
        }
    }
    open.remove(best)
}
