//! Crate-wide error and result types.

use derive_more::{Display, Error};

/// Errors surfaced by the matrix devices.
///
/// Sampling and transport failures are fatal to the frame being built;
/// there is no retry path in the WS2812 protocol.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// A grid coordinate was outside the matrix.
    #[display("grid coordinate out of range: row {row}, col {col}")]
    CoordinateOutOfRange {
        /// Requested row.
        row: u16,
        /// Requested column.
        col: u16,
    },

    /// An analog conversion failed.
    #[cfg(not(feature = "host"))]
    #[display("adc conversion failed")]
    AdcConversion(#[error(not(source))] embassy_rp::adc::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
