//! Configuration types for algovision.

use serde::{Deserialize, Serialize};

use crate::core::Pos;
use crate::error::{Error, Result};

/// Board configuration for the pathfinding grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Start cell position.
    pub start: Pos,
    /// Finish cell position.
    pub finish: Pos,
}

impl Default for GridConfig {
    fn default() -> Self {
        // Classic visualizer board: 20x40, start and finish on the middle row.
        Self {
            rows: 20,
            cols: 40,
            start: Pos::new(10, 5),
            finish: Pos::new(10, 35),
        }
    }
}

impl GridConfig {
    /// Check that the shape is usable and the markers fit inside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] when a dimension is zero, a marker is
    /// out of bounds, or start and finish coincide.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidGrid(format!(
                "dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        for (name, pos) in [("start", self.start), ("finish", self.finish)] {
            if pos.row >= self.rows || pos.col >= self.cols {
                return Err(Error::InvalidGrid(format!(
                    "{} ({}, {}) outside {}x{} board",
                    name, pos.row, pos.col, self.rows, self.cols
                )));
            }
        }
        if self.start == self.finish {
            return Err(Error::InvalidGrid(format!(
                "start and finish both at ({}, {})",
                self.start.row, self.start.col
            )));
        }
        Ok(())
    }
}

/// Configuration for sample array generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    /// Number of values to generate.
    pub len: usize,
    /// Smallest possible value.
    pub min_value: u32,
    /// Largest possible value.
    pub max_value: u32,
}

impl Default for SortConfig {
    fn default() -> Self {
        // 50 bars with heights in 5..=100, as drawn by the bar chart.
        Self {
            len: 50,
            min_value: 5,
            max_value: 100,
        }
    }
}

impl SortConfig {
    /// Check that the value range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `min_value > max_value`.
    pub fn validate(&self) -> Result<()> {
        if self.min_value > self.max_value {
            return Err(Error::Config(format!(
                "empty value range {}..={}",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_config_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 40);
    }

    #[test]
    fn test_grid_config_rejects_zero_dimension() {
        let config = GridConfig {
            rows: 0,
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_config_rejects_out_of_bounds_marker() {
        let config = GridConfig {
            finish: Pos::new(20, 0),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_config_rejects_coinciding_markers() {
        let config = GridConfig {
            start: Pos::new(3, 3),
            finish: Pos::new(3, 3),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sort_config_rejects_empty_range() {
        let config = SortConfig {
            min_value: 10,
            max_value: 9,
            ..SortConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
