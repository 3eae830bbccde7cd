//! Breadth-first search.

use std::collections::VecDeque;

use crate::core::{CellState, Grid, Pos};

/// Expand cells in frontier order.
///
/// Cells are marked frontier and get their distance and back-pointer when
/// enqueued, so nothing is ever enqueued twice; they are marked visited when
/// dequeued. On a unit grid this visits in nondecreasing distance order and
/// the back-pointers form shortest paths.
pub(super) fn run(grid: &mut Grid, visited: &mut Vec<Pos>) {
    let start = grid.start();
    let finish = grid.finish();
    {
        let cell = grid.cell_mut(start);
        cell.distance = 0;
        cell.mark_frontier();
    }
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        grid.cell_mut(current).mark_visited();
        visited.push(current);
        if current == finish {
            return;
        }
        let next_distance = grid.cell(current).distance + 1;
        for neighbor in grid.neighbors4(current) {
            let cell = grid.cell_mut(neighbor);
            if cell.is_wall() || cell.state != CellState::Unvisited {
                continue;
            }
            cell.distance = next_distance;
            cell.previous = Some(current);
            cell.mark_frontier();
            queue.push_back(neighbor);
        }
    }
}
