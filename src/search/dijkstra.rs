//! Dijkstra's algorithm.

use crate::core::{Grid, Pos, INFINITY};

/// Expand open cells in nondecreasing distance order.
///
/// The unvisited pool is scanned linearly per pop; with equal distances the
/// earliest cell in row-major order wins. Expansion relaxes every neighbor
/// that is not yet visited to `distance + 1`, overwriting its back-pointer.
/// On a unit grid an unvisited neighbor can never hold a smaller distance
/// than the overwrite, so no decrease check is needed. The run ends when the
/// finish is expanded or the closest remaining cell is unreachable.
pub(super) fn run(grid: &mut Grid, visited: &mut Vec<Pos>) {
    let start = grid.start();
    let finish = grid.finish();
    grid.cell_mut(start).distance = 0;

    let mut unvisited: Vec<Pos> = grid
        .cells()
        .iter()
        .filter(|cell| !cell.is_wall())
        .map(|cell| cell.pos)
        .collect();

    while !unvisited.is_empty() {
        let closest = pop_closest(grid, &mut unvisited);
        if grid.cell(closest).distance == INFINITY {
            return;
        }
        grid.cell_mut(closest).mark_visited();
        visited.push(closest);
        if closest == finish {
            return;
        }

        let next_distance = grid.cell(closest).distance + 1;
        for neighbor in grid.neighbors4(closest) {
            let cell = grid.cell_mut(neighbor);
            if cell.is_wall() || cell.is_visited() {
                continue;
            }
            cell.distance = next_distance;
            cell.previous = Some(closest);
            cell.mark_frontier();
        }
    }
}

/// Remove and return the pool entry with the smallest distance. Strict
/// less-than keeps the first of equals, so ties break in row-major order.
fn pop_closest(grid: &Grid, unvisited: &mut Vec<Pos>) -> Pos {
    let mut best = 0;
    for i in 1..unvisited.len() {
        if grid.cell(unvisited[i]).distance < grid.cell(unvisited[best]).distance {
            best = i;
        }
    }
    unvisited.remove(best)
}
