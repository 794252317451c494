#![allow(missing_docs)]
//! Host-level tests for the WS2812 wire byte order.

use embassy_futures::block_on;
use joystick_matrix::Result;
use joystick_matrix::encoder::{ChannelSink, write_frame};
use joystick_matrix::frame::{Frame, Rgb};

/// Records every byte the encoder hands over, in order.
#[derive(Default)]
struct RecordingSink {
    bytes: Vec<u8>,
}

impl ChannelSink for RecordingSink {
    async fn put(&mut self, byte: u8) -> Result<()> {
        self.bytes.push(byte);
        Ok(())
    }
}

#[test]
fn two_cell_frame_serializes_green_red_blue_per_cell() {
    let mut frame = Frame::<2>::new();
    frame.set(0, Rgb::new(10, 20, 30));
    frame.set(1, Rgb::new(1, 2, 3));

    let mut sink = RecordingSink::default();
    block_on(write_frame(&frame, &mut sink)).unwrap();

    assert_eq!(sink.bytes, [20, 10, 30, 2, 1, 3]);
}

#[test]
fn cells_are_emitted_in_wiring_order() {
    let mut frame = Frame::<25>::new();
    for index in 0..25 {
        frame.set(index, Rgb::new(u8::try_from(index).unwrap(), 0, 0));
    }

    let mut sink = RecordingSink::default();
    block_on(write_frame(&frame, &mut sink)).unwrap();

    assert_eq!(sink.bytes.len(), 75);
    // The red channel is the second byte of each cell.
    for (cell, chunk) in sink.bytes.chunks(3).enumerate() {
        assert_eq!(usize::from(chunk[1]), cell);
    }
}

#[test]
fn blank_frame_serializes_to_zeros() {
    let frame = Frame::<25>::new();
    let mut sink = RecordingSink::default();
    block_on(write_frame(&frame, &mut sink)).unwrap();
    assert_eq!(sink.bytes, vec![0u8; 75]);
}
