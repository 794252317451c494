//! Two-axis analog joystick sampling.

use crate::Result;

/// A two-axis analog input producing 12-bit samples in `[0, 4095]`.
///
/// Hardware implementations multiplex one converter across two channels,
/// selecting the channel before each read; tests substitute scripted fakes.
pub trait JoystickRead {
    /// Sample the X axis (column axis), blocking until conversion completes.
    ///
    /// # Errors
    ///
    /// Fails if the conversion itself fails; there is no retry.
    async fn read_x(&mut self) -> Result<u16>;

    /// Sample the Y axis (row axis), blocking until conversion completes.
    ///
    /// # Errors
    ///
    /// Fails if the conversion itself fails; there is no retry.
    async fn read_y(&mut self) -> Result<u16>;
}

#[cfg(not(feature = "host"))]
mod hardware {
    use embassy_rp::adc::{Adc, Async, Channel};

    use super::JoystickRead;
    use crate::{Error, Result};

    /// A joystick wired to two channels of the on-chip converter.
    ///
    /// Passing the channel to each read is the "select input, then sample"
    /// sequence of the converter; the converter itself is owned here, so no
    /// other code can interleave conversions.
    pub struct Joystick<'d> {
        adc: Adc<'d, Async>,
        x: Channel<'d>,
        y: Channel<'d>,
    }

    impl<'d> Joystick<'d> {
        /// Bundle the converter with its X and Y channels.
        #[must_use]
        pub fn new(adc: Adc<'d, Async>, x: Channel<'d>, y: Channel<'d>) -> Self {
            Self { adc, x, y }
        }
    }

    impl JoystickRead for Joystick<'_> {
        async fn read_x(&mut self) -> Result<u16> {
            self.adc.read(&mut self.x).await.map_err(Error::AdcConversion)
        }

        async fn read_y(&mut self) -> Result<u16> {
            self.adc.read(&mut self.y).await.map_err(Error::AdcConversion)
        }
    }
}

#[cfg(not(feature = "host"))]
pub use hardware::Joystick;
