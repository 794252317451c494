//! Per-frame composition and the cursor control loop.
//!
//! [`CursorScene::advance`] is the pure compose step, testable on the host;
//! [`CursorScene::run`] wraps it in the sample → compose → flush → sleep
//! loop on hardware.

use crate::cross::CrossPattern;
use crate::frame::{Frame, Rgb};
use crate::grid::GridPoint;

/// Cursor color while it sits on the cross: pure green.
pub const CURSOR_ON_CROSS: Rgb = Rgb::new(0, 255, 0);

/// Cursor and trail color off the cross: pure red.
pub const CURSOR_OFF_CROSS: Rgb = Rgb::new(255, 0, 0);

/// Frame compositor and the cross-frame cursor state.
///
/// Cells the cursor has visited are trail-marked and stay red for the rest
/// of the run, except where the cross overlay repaints them blue. The trail
/// is intentional and never shrinks; it lives exactly as long as the
/// process.
pub struct CursorScene<const SIDE: usize, const N: usize> {
    frame: Frame<N>,
    marked: [bool; N],
    previous: GridPoint<SIDE>,
    cross: CrossPattern<SIDE, N>,
}

impl<const SIDE: usize, const N: usize> CursorScene<SIDE, N> {
    /// Create a scene with the cursor history starting at the origin cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame: Frame::new(),
            marked: [false; N],
            previous: GridPoint::ORIGIN,
            cross: CrossPattern::new(),
        }
    }

    /// The overlay pattern used by this scene.
    #[must_use]
    pub const fn cross(&self) -> &CrossPattern<SIDE, N> {
        &self.cross
    }

    /// Most recently composed frame.
    #[must_use]
    pub const fn frame(&self) -> &Frame<N> {
        &self.frame
    }

    /// Compose one frame for the given cursor position.
    ///
    /// The per-frame rules, in order:
    ///
    /// 1. Clear the framebuffer.
    /// 2. Paint the cross overlay blue.
    /// 3. Repaint the red trail on marked cells the overlay does not claim.
    /// 4. On its first visit, paint the *previous* cursor cell red and
    ///    trail-mark it - even on the cross, where the overlay wins again
    ///    from the next frame on.
    /// 5. Paint the current cursor cell: green on the cross, red off it.
    /// 6. The current cell becomes the previous one for the next frame.
    pub fn advance(&mut self, cursor: GridPoint<SIDE>) -> &Frame<N> {
        self.frame.clear();
        self.cross.paint(&mut self.frame);

        for (index, marked) in self.marked.iter().enumerate() {
            if *marked && !self.cross.contains_index(index) {
                self.frame.set(index, CURSOR_OFF_CROSS);
            }
        }

        let previous_index = self.previous.index();
        if let Some(marked) = self.marked.get_mut(previous_index) {
            if !*marked {
                self.frame.set(previous_index, CURSOR_OFF_CROSS);
                *marked = true;
            }
        }

        let cursor_color = if self.cross.contains(cursor) {
            CURSOR_ON_CROSS
        } else {
            CURSOR_OFF_CROSS
        };
        self.frame.set(cursor.index(), cursor_color);

        self.previous = cursor;
        &self.frame
    }
}

impl<const SIDE: usize, const N: usize> Default for CursorScene<SIDE, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "host"))]
mod control {
    use core::convert::Infallible;

    use defmt::info;
    use embassy_time::{Duration, Timer};

    use super::CursorScene;
    use crate::Result;
    use crate::encoder::{ChannelSink, write_frame};
    use crate::joystick::JoystickRead;

    /// Delay between frames.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

    /// Settle delay after the initial overlay-only frame.
    pub const STARTUP_SETTLE: Duration = Duration::from_millis(1000);

    impl<const SIDE: usize, const N: usize> CursorScene<SIDE, N> {
        /// Run the control loop forever: sample both axes, compose, flush,
        /// then sleep [`FRAME_INTERVAL`].
        ///
        /// Shows the overlay alone for [`STARTUP_SETTLE`] before the first
        /// cursor frame.
        ///
        /// # Errors
        ///
        /// Returns only on a fatal sampling or transport failure.
        pub async fn run<J: JoystickRead, S: ChannelSink>(
            &mut self,
            joystick: &mut J,
            sink: &mut S,
        ) -> Result<Infallible> {
            self.frame.clear();
            self.cross.paint(&mut self.frame);
            write_frame(&self.frame, sink).await?;
            Timer::after(STARTUP_SETTLE).await;

            info!("cursor control loop running ({=usize} cells)", N);

            loop {
                let x_raw = joystick.read_x().await?;
                let y_raw = joystick.read_y().await?;
                let cursor = super::GridPoint::from_samples(x_raw, y_raw);

                self.advance(cursor);
                write_frame(&self.frame, sink).await?;

                Timer::after(FRAME_INTERVAL).await;
            }
        }
    }
}

#[cfg(not(feature = "host"))]
pub use control::{FRAME_INTERVAL, STARTUP_SETTLE};
