//! Grid shape validation and cell geometry
//!
//! Cells are laid out row-major. Fractional cell sizes are resolved with an
//! explicit policy: the base cell size is `dimension / count` rounded down,
//! and the last row/column absorbs the remainder, so cell sizes may differ
//! by at most the remainder and every source pixel lands in exactly one cell.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_grid};

/// A validated rows by cols partition shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
}

impl GridSpec {
    /// Create a grid shape, validating both dimensions
    ///
    /// # Errors
    ///
    /// Returns [`crate::SplitError::InvalidGrid`] when either dimension is
    /// zero or exceeds [`MAX_GRID_DIMENSION`].
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value == 0 {
                return Err(invalid_grid(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_grid(
                    parameter,
                    &value,
                    &format!("exceeds maximum of {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        Ok(Self { rows, cols })
    }

    /// Number of grid rows
    pub const fn rows(self) -> u32 {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(self) -> u32 {
        self.cols
    }

    /// Total number of cells in the partition
    pub const fn cell_count(self) -> u32 {
        self.rows * self.cols
    }

    /// Row-major index of a cell, in `[0, cell_count)`
    pub const fn cell_index(self, row: u32, col: u32) -> u32 {
        row * self.cols + col
    }

    /// Check that the grid fits the given image dimensions
    ///
    /// # Errors
    ///
    /// Returns [`crate::SplitError::InvalidGrid`] when the grid has more
    /// rows than the image has pixel rows, or likewise for columns, since
    /// that would produce zero-pixel cells.
    pub fn check_fits(self, width: u32, height: u32) -> Result<()> {
        if self.cols > width {
            return Err(invalid_grid(
                "cols",
                &self.cols,
                &format!("exceeds image width of {width} pixels"),
            ));
        }
        if self.rows > height {
            return Err(invalid_grid(
                "rows",
                &self.rows,
                &format!("exceeds image height of {height} pixels"),
            ));
        }

        Ok(())
    }

    /// Pixel rectangle of one cell within an image of the given dimensions
    ///
    /// Assumes `check_fits` has passed; out-of-range cell coordinates are
    /// clamped to the last row/column rather than panicking.
    pub fn cell_rect(self, width: u32, height: u32, row: u32, col: u32) -> CellRect {
        let row = row.min(self.rows - 1);
        let col = col.min(self.cols - 1);

        let base_width = width / self.cols;
        let base_height = height / self.rows;

        let x = col * base_width;
        let y = row * base_height;

        // Last row/column absorbs the division remainder
        let cell_width = if col == self.cols - 1 {
            width - x
        } else {
            base_width
        };
        let cell_height = if row == self.rows - 1 {
            height - y
        } else {
            base_height
        };

        CellRect {
            x,
            y,
            width: cell_width,
            height: cell_height,
        }
    }
}

/// Pixel-space rectangle of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}
