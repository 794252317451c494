//! Grid coordinates and joystick-sample mapping.
//!
//! Coordinates use a screen-style convention: row 0 is the top of the
//! matrix and rows increase downward; column 0 is the left edge. Cells are
//! wired row-major, so `index = row * SIDE + col`.

use crate::{Error, Result};

/// Maximum raw sample from the 12-bit analog converter.
pub const ADC_MAX: u16 = (1 << 12) - 1;

/// A validated (row, column) position on a `SIDE` × `SIDE` matrix.
///
/// Construction is the bounds check the framebuffer relies on: a
/// `GridPoint` always maps to an in-range cell index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPoint<const SIDE: usize> {
    row: u16,
    col: u16,
}

impl<const SIDE: usize> GridPoint<SIDE> {
    /// The top-left cell, index 0.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a point, rejecting out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfRange`] if `row` or `col` is not
    /// below `SIDE`.
    pub const fn new(row: u16, col: u16) -> Result<Self> {
        if (row as usize) < SIDE && (col as usize) < SIDE {
            Ok(Self { row, col })
        } else {
            Err(Error::CoordinateOutOfRange { row, col })
        }
    }

    /// Map a pair of raw 12-bit joystick samples onto the grid.
    ///
    /// Each axis scales linearly as `raw * SIDE / ADC_MAX` with truncating
    /// division; the X axis picks the column and the Y axis the row. The
    /// quotient reaches `SIDE` only at `raw == ADC_MAX`, so the result is
    /// clamped to the last cell.
    #[must_use]
    pub const fn from_samples(x_raw: u16, y_raw: u16) -> Self {
        Self {
            row: map_axis::<SIDE>(y_raw),
            col: map_axis::<SIDE>(x_raw),
        }
    }

    /// Row in `[0, SIDE)`.
    #[must_use]
    pub const fn row(&self) -> u16 {
        self.row
    }

    /// Column in `[0, SIDE)`.
    #[must_use]
    pub const fn col(&self) -> u16 {
        self.col
    }

    /// Cell index in row-major wiring order: `row * SIDE + col`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.row as usize * SIDE + self.col as usize
    }
}

/// Truncating linear scale of one 12-bit sample onto `[0, SIDE)`.
const fn map_axis<const SIDE: usize>(raw: u16) -> u16 {
    let scaled = (raw as u32 * SIDE as u32) / ADC_MAX as u32;
    // scaled == SIDE exactly at raw == ADC_MAX; pin it to the last cell.
    if scaled as usize >= SIDE {
        (SIDE - 1) as u16
    } else {
        scaled as u16
    }
}
