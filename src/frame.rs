//! Fixed-size RGB framebuffer for an LED matrix.
//!
//! A [`Frame`] holds one color per LED cell in wiring order. Every index
//! always holds a valid color; a cleared cell is black `(0, 0, 0)` - there
//! is no "unset" state.

use core::ops::{Deref, DerefMut};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color used by matrix frames (8 bits per channel, no alpha).
pub type Rgb = smart_leds::RGB8;

/// All-off cell color.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// [`Rgb`] pixel data for every LED cell, in wiring order.
///
/// Frames deref to `[Rgb; N]` for read access; writes go through
/// [`Frame::set`], which guards the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<const N: usize>([Rgb; N]);

impl<const N: usize> Frame<N> {
    /// Number of LED cells in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([BLACK; N])
    }

    /// Set every cell back to black.
    pub fn clear(&mut self) {
        self.0 = [BLACK; N];
    }

    /// Write one cell.
    ///
    /// Indices are expected to come from a validated
    /// [`GridPoint`](crate::grid::GridPoint); an out-of-range index asserts
    /// in debug builds and is ignored in release builds.
    pub fn set(&mut self, index: usize, color: Rgb) {
        debug_assert!(index < N, "cell index out of range");
        if let Some(cell) = self.0.get_mut(index) {
            *cell = color;
        }
    }

    /// Read one cell; out-of-range reads return [`BLACK`].
    #[must_use]
    pub fn get(&self, index: usize) -> Rgb {
        self.0.get(index).copied().unwrap_or(BLACK)
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}
