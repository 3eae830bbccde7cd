//! The pathfinding board.
//!
//! A [`Grid`] is a fixed-size rectangular board of [`Cell`]s with exactly one
//! start and one finish. Searches never mutate a caller's grid; they take a
//! [`Grid::snapshot`] and run on that.

use crate::config::GridConfig;
use crate::core::cell::{Cell, CellKind, Pos};
use crate::error::{Error, Result};

/// Rectangular board backed by a flat row-major vector of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    start: Pos,
    finish: Pos,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build an open board from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] when the configuration fails
    /// validation.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let mut cells = Vec::with_capacity(config.rows * config.cols);
        for row in 0..config.rows {
            for col in 0..config.cols {
                let pos = Pos::new(row, col);
                let kind = if pos == config.start {
                    CellKind::Start
                } else if pos == config.finish {
                    CellKind::Finish
                } else {
                    CellKind::Open
                };
                cells.push(Cell::new(pos, kind));
            }
        }
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            start: config.start,
            finish: config.finish,
            cells,
        })
    }

    /// Parse an ASCII layout into a board.
    ///
    /// Recognized characters: `S` start, `F` finish, `#` wall, `.` open.
    /// Blank lines and surrounding whitespace are ignored; every remaining
    /// line must have the same width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Layout`] for an unexpected character, a ragged row,
    /// or a duplicate marker, and [`Error::InvalidGrid`] when a marker is
    /// missing or the layout is empty.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(Error::InvalidGrid("layout is empty".to_string()));
        }

        let cols = lines[0].1.chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);
        let mut start = None;
        let mut finish = None;

        for (row, (line_no, line)) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(Error::Layout {
                    line: *line_no,
                    reason: format!("expected {cols} columns, got {width}"),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row, col);
                let kind = match ch {
                    '.' => CellKind::Open,
                    '#' => CellKind::Wall,
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(Error::Layout {
                                line: *line_no,
                                reason: "duplicate start marker".to_string(),
                            });
                        }
                        CellKind::Start
                    }
                    'F' => {
                        if finish.replace(pos).is_some() {
                            return Err(Error::Layout {
                                line: *line_no,
                                reason: "duplicate finish marker".to_string(),
                            });
                        }
                        CellKind::Finish
                    }
                    other => {
                        return Err(Error::Layout {
                            line: *line_no,
                            reason: format!("unexpected character {other:?}"),
                        })
                    }
                };
                cells.push(Cell::new(pos, kind));
            }
        }

        let start = start.ok_or_else(|| Error::InvalidGrid("no start marker".to_string()))?;
        let finish = finish.ok_or_else(|| Error::InvalidGrid("no finish marker".to_string()))?;
        Ok(Self {
            rows: lines.len(),
            cols,
            start,
            finish,
            cells,
        })
    }

    // ========== Accessors ==========

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Position of the start cell.
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position of the finish cell.
    pub fn finish(&self) -> Pos {
        self.finish
    }

    /// Whether a position lies on the board.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at a position, or `None` when out of bounds.
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.in_bounds(pos) {
            Some(&self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cell(&self, pos: Pos) -> &Cell {
        let idx = self.index(pos);
        &self.cells[idx]
    }

    pub(crate) fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos), "position off the board: {pos:?}");
        pos.row * self.cols + pos.col
    }

    // ========== Board edits ==========

    /// Turn a cell into a wall.
    ///
    /// Start and finish cells are never walled; edits on them (or out of
    /// bounds) are ignored, matching the board-editing rule of the UI this
    /// core drives.
    pub fn set_wall(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let cell = self.cell_mut(pos);
        if cell.kind == CellKind::Open {
            cell.kind = CellKind::Wall;
        }
    }

    /// Flip a cell between open and wall. Start/finish and out-of-bounds
    /// positions are ignored.
    pub fn toggle_wall(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let cell = self.cell_mut(pos);
        match cell.kind {
            CellKind::Open => cell.kind = CellKind::Wall,
            CellKind::Wall => cell.kind = CellKind::Open,
            CellKind::Start | CellKind::Finish => {}
        }
    }

    /// Orthogonal neighbors in Up, Down, Left, Right order, bounds-checked.
    pub fn neighbors4(&self, pos: Pos) -> Vec<Pos> {
        let mut neighbors = Vec::with_capacity(4);
        if pos.row > 0 {
            neighbors.push(Pos::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.rows {
            neighbors.push(Pos::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            neighbors.push(Pos::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.cols {
            neighbors.push(Pos::new(pos.row, pos.col + 1));
        }
        neighbors
    }

    /// Deep copy with all search bookkeeping cleared.
    ///
    /// Walls and markers carry over; distances, states, and back-pointers
    /// start fresh. Every search run owns one snapshot.
    pub fn snapshot(&self) -> Grid {
        let mut copy = self.clone();
        for cell in &mut copy.cells {
            cell.clear_search_state();
        }
        copy
    }
}
