//! Serialization of a frame into the WS2812 wire byte stream.
//!
//! WS2812-style chips latch 8-bit channels in **green, red, blue** order;
//! that ordering is dictated by the chip and must be preserved exactly. The
//! encoder walks cells in wiring order and hands each channel byte to the
//! transport one at a time. The transport accepts a byte only when it has
//! room, so backpressure is total: nothing is buffered here beyond the cell
//! being emitted.

use crate::Result;
use crate::frame::Frame;

/// A transport that accepts one channel byte at a time.
///
/// On hardware this is a PIO TX FIFO (`ws2812::Ws2812Writer`); tests
/// substitute a recording fake.
pub trait ChannelSink {
    /// Hand one channel byte to the transport, waiting until it is accepted.
    ///
    /// # Errors
    ///
    /// A transport failure is fatal to the frame being written; the
    /// protocol has no acknowledgement channel to retry on.
    async fn put(&mut self, byte: u8) -> Result<()>;
}

/// Emit `frame` to `sink`: for every cell in wiring order, the green, red,
/// and blue channel bytes, in that exact order.
///
/// When this returns, the transport has accepted every byte of the frame;
/// the transport's own latch timing governs when the LEDs actually show it.
///
/// # Errors
///
/// Propagates the first transport failure and abandons the rest of the
/// frame (no retry).
pub async fn write_frame<const N: usize, S: ChannelSink>(
    frame: &Frame<N>,
    sink: &mut S,
) -> Result<()> {
    for cell in frame.iter() {
        sink.put(cell.g).await?;
        sink.put(cell.r).await?;
        sink.put(cell.b).await?;
    }
    Ok(())
}
