//! ASCII renderers for terminal output.
//!
//! String-producing helpers the binary uses to show boards, bar arrays,
//! and hash tables. Nothing here touches the engines; every function takes
//! finished data and returns text.

use std::collections::HashSet;

use crate::core::{Cell, CellKind, CellState, Grid};
use crate::hashing::{HashTable, ProbeOutcome, ProbeStep};
use crate::search::SearchRun;
use crate::sorting::AnimationStep;

/// Unicode block characters for different bar heights.
const BLOCKS: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Rows in the bar chart body.
const CHART_HEIGHT: usize = 8;

/// Render the board as the same map vocabulary [`Grid::from_ascii`] reads.
///
/// `S`/`F` for the markers, `#` for walls, `.` for open cells; one line per
/// row. The output round-trips through `from_ascii`.
pub fn grid_to_ascii(grid: &Grid) -> String {
    let mut lines = Vec::with_capacity(grid.rows());
    for row in grid.cells().chunks(grid.cols()) {
        lines.push(row.iter().map(kind_glyph).collect::<String>());
    }
    lines.join("\n")
}

/// Render a finished search over its snapshot.
///
/// Markers and walls keep their map glyphs; path cells show `*`, expanded
/// cells `x`, cells left on the frontier `o`, untouched cells `.`.
pub fn search_to_ascii(run: &SearchRun) -> String {
    let grid = run.grid();
    let path: HashSet<_> = run.path().into_iter().collect();
    let mut lines = Vec::with_capacity(grid.rows());
    for row in grid.cells().chunks(grid.cols()) {
        let mut line = String::with_capacity(grid.cols());
        for cell in row {
            line.push(match cell.kind {
                CellKind::Open if path.contains(&cell.pos) => '*',
                CellKind::Open => match cell.state {
                    CellState::Visited => 'x',
                    CellState::Frontier => 'o',
                    CellState::Unvisited => '.',
                },
                _ => kind_glyph(cell),
            });
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn kind_glyph(cell: &Cell) -> char {
    match cell.kind {
        CellKind::Open => '.',
        CellKind::Wall => '#',
        CellKind::Start => 'S',
        CellKind::Finish => 'F',
    }
}

/// Render values as a vertical bar chart, one column per value.
///
/// Bars are scaled against the largest value over [`CHART_HEIGHT`] rows,
/// with partial blocks for the top of each bar; any non-zero value shows at
/// least a sliver. A rule closes the chart at the bottom.
pub fn bar_chart(values: &[u32]) -> String {
    if values.is_empty() {
        return "(no values)".to_string();
    }
    let max = values.iter().copied().max().unwrap_or(0);
    let per_cell = (BLOCKS.len() - 1) as u64;
    let levels = CHART_HEIGHT as u64 * per_cell;
    let scaled: Vec<u64> = values
        .iter()
        .map(|&v| {
            if max == 0 {
                0
            } else {
                (u64::from(v) * levels).div_ceil(u64::from(max))
            }
        })
        .collect();

    let mut lines = Vec::with_capacity(CHART_HEIGHT + 1);
    for row in (0..CHART_HEIGHT as u64).rev() {
        let line: String = scaled
            .iter()
            .map(|&s| BLOCKS[s.saturating_sub(row * per_cell).min(per_cell) as usize])
            .collect();
        lines.push(line);
    }
    lines.push("─".repeat(values.len()));
    lines.join("\n")
}

/// Render the table's slots as one boxed row with slot indices beneath.
pub fn table_to_ascii(table: &HashTable) -> String {
    let slots = table.slots();
    let width = slots
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .chain(std::iter::once((table.size() - 1).to_string().len()))
        .max()
        .unwrap_or(1);

    let segment = "─".repeat(width + 2);
    let top = format!("┌{}┐", vec![segment.clone(); slots.len()].join("┬"));
    let bottom = format!("└{}┘", vec![segment; slots.len()].join("┴"));

    let mut values = String::from("│");
    for slot in slots {
        let text = slot.map(|v| v.to_string()).unwrap_or_default();
        values.push_str(&format!(" {text:>width$} │"));
    }

    let indices: Vec<String> = (0..slots.len())
        .map(|i| format!("{i:^w$}", w = width + 2))
        .collect();
    let index_row = format!(" {}", indices.join(" "));

    format!("{top}\n{values}\n{bottom}\n{}", index_row.trim_end())
}

/// One-line description of a sorting step.
pub fn step_to_line(step: &AnimationStep) -> String {
    match step {
        AnimationStep::Compare { a, b } => format!("compare [{a}] [{b}]"),
        AnimationStep::Swap { a, b } => format!("swap    [{a}] [{b}]"),
        AnimationStep::Overwrite { index, value } => format!("write   [{index}] <- {value}"),
    }
}

/// One-line description of a hash probe.
pub fn probe_to_line(step: &ProbeStep) -> String {
    let outcome = match step.outcome {
        ProbeOutcome::Empty => "empty",
        ProbeOutcome::Match => "match",
        ProbeOutcome::Collision => "collision",
    };
    format!("probe slot {} -> {outcome}", step.index)
}
