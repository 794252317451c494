//! The fixed cross overlay pattern.

use crate::frame::{Frame, Rgb};
use crate::grid::GridPoint;

/// Overlay color: pure blue.
pub const CROSS_COLOR: Rgb = Rgb::new(0, 0, 255);

/// The "+" cross for a `SIDE` × `SIDE` matrix: the full center row plus the
/// full center column. The mask is computed once; binding the constructor
/// to a `const` validates it at compile time.
///
/// For `SIDE = 5` the member indices are `{2, 7, 10, 11, 12, 13, 14, 17, 22}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossPattern<const SIDE: usize, const N: usize> {
    mask: [bool; N],
}

impl<const SIDE: usize, const N: usize> CrossPattern<SIDE, N> {
    /// Number of cells on the cross.
    pub const LEN: usize = SIDE * 2 - 1;

    /// Build the pattern mask.
    #[must_use]
    pub const fn new() -> Self {
        assert!(SIDE * SIDE == N, "SIDE*SIDE must equal N");
        assert!(SIDE % 2 == 1, "cross pattern requires an odd SIDE");

        let center = SIDE / 2;
        let mut mask = [false; N];
        let mut k = 0;
        while k < SIDE {
            mask[center * SIDE + k] = true; // center row
            mask[k * SIDE + center] = true; // center column
            k += 1;
        }
        Self { mask }
    }

    /// Whether `point` lies on the cross.
    #[must_use]
    pub const fn contains(&self, point: GridPoint<SIDE>) -> bool {
        self.mask[point.index()]
    }

    /// Whether the cell at `index` (wiring order) lies on the cross.
    #[must_use]
    pub const fn contains_index(&self, index: usize) -> bool {
        index < N && self.mask[index]
    }

    /// Paint every cross cell onto `frame` in [`CROSS_COLOR`].
    ///
    /// The framebuffer is cleared every frame, so this must be reapplied
    /// per frame; nothing persists for overlay cells between frames.
    pub fn paint(&self, frame: &mut Frame<N>) {
        for (index, on) in self.mask.iter().enumerate() {
            if *on {
                frame.set(index, CROSS_COLOR);
            }
        }
    }

    /// Member cell indices in wiring order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(index, on)| on.then_some(index))
    }
}

impl<const SIDE: usize, const N: usize> Default for CrossPattern<SIDE, N> {
    fn default() -> Self {
        Self::new()
    }
}
