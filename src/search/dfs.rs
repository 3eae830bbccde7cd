//! Depth-first search.

use crate::core::{Grid, Pos};

/// Expand cells in stack order.
///
/// A cell may sit on the stack several times when reached along different
/// paths; later pushes overwrite its back-pointer until the first pop marks
/// it visited and wins. Distances are not maintained, and the resulting
/// path is a path, not a shortest one.
pub(super) fn run(grid: &mut Grid, visited: &mut Vec<Pos>) {
    let start = grid.start();
    let finish = grid.finish();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if grid.cell(current).is_visited() {
            continue;
        }
        grid.cell_mut(current).mark_visited();
        visited.push(current);
        if current == finish {
            return;
        }

        // Up, Right, Down, Left; the stack pops in reverse, so the walk
        // drifts left first.
        let Pos { row, col } = current;
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push(Pos::new(row - 1, col));
        }
        if col + 1 < grid.cols() {
            neighbors.push(Pos::new(row, col + 1));
        }
        if row + 1 < grid.rows() {
            neighbors.push(Pos::new(row + 1, col));
        }
        if col > 0 {
            neighbors.push(Pos::new(row, col - 1));
        }

        for neighbor in neighbors {
            let cell = grid.cell_mut(neighbor);
            if cell.is_wall() || cell.is_visited() {
                continue;
            }
            cell.previous = Some(current);
            cell.mark_frontier();
            stack.push(neighbor);
        }
    }
}
