//! Joystick-driven cursor on a 5×5 NeoPixel-style (WS2812) LED matrix.
//!
//! A fixed blue cross marks the target region; a two-axis analog joystick
//! moves a cursor over it. The cursor is green while it sits on the cross
//! and red elsewhere, and every cell the cursor has visited keeps a red
//! trail mark for the rest of the run.
//!
//! The crate splits into two layers:
//!
//! - Pure compositing logic with no hardware dependencies: [`frame`],
//!   [`grid`], [`cross`], [`scene`], and [`encoder`]. These build and test
//!   on the host with the `host` feature (the default).
//! - Thin adapters for the Pico 1 (RP2040): [`ws2812`] drives the LED data
//!   line from a PIO state machine, [`joystick`] samples the on-chip ADC.
//!   These build with `--no-default-features --features embedded`.
//!
//! The firmware entry point is `demos/joystick_cursor.rs`.
#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one side must be selected.
#[cfg(all(feature = "host", feature = "pico1"))]
compile_error!("Cannot enable both 'host' and 'pico1' features simultaneously");

#[cfg(not(any(feature = "host", feature = "pico1")))]
compile_error!("Must enable exactly one feature: 'host' or 'pico1'");

pub mod cross;
pub mod encoder;
mod error;
pub mod frame;
pub mod grid;
// These modules require embassy_rp and are excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod irqs;
pub mod joystick;
pub mod scene;
#[cfg(not(feature = "host"))]
pub mod ws2812;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
