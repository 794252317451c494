//! PIO-backed WS2812 byte transport.
//!
//! The state machine runs the standard 800 kHz WS2812 program (the same
//! one `embassy_rp::pio_programs::ws2812` assembles), but autopull is set
//! to 8 bits so every TX FIFO word carries exactly one channel byte.
//! [`ChannelSink::put`] parks on FIFO space, which gives the encoder its
//! blocking per-channel handoff.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction, FifoJoin, Instance, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use fixed::types::U24F8;

use crate::Result;
use crate::encoder::ChannelSink;

// WS2812 bit timing in PIO cycles: start, data, stop.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// One WS2812 data line, driven by a dedicated PIO state machine.
///
/// Claiming the state machine and pin consumes them, so a second driver on
/// the same resources is a compile error rather than a runtime hang.
pub struct Ws2812Writer<'d, P: Instance, const SM: usize> {
    sm: StateMachine<'d, P, SM>,
}

impl<'d, P: Instance, const SM: usize> Ws2812Writer<'d, P, SM> {
    /// Load the WS2812 program and start the state machine on `pin`.
    pub fn new(
        common: &mut Common<'d, P>,
        mut sm: StateMachine<'d, P, SM>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let side_set = pio::SideSet::new(false, 1, false);
        let mut asm = pio::Assembler::<32>::new_with_side_set(side_set);

        let mut wrap_target = asm.label();
        let mut wrap_source = asm.label();
        let mut do_zero = asm.label();
        asm.set_with_side_set(pio::SetDestination::PINDIRS, 1, 0);
        asm.bind(&mut wrap_target);
        // Do stop bit
        asm.out_with_delay_and_side_set(pio::OutDestination::X, 1, T3 - 1, 0);
        // Do start bit
        asm.jmp_with_delay_and_side_set(pio::JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
        // Do data bit = 1
        asm.jmp_with_delay_and_side_set(pio::JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
        asm.bind(&mut do_zero);
        // Do data bit = 0
        asm.nop_with_delay_and_side_set(T2 - 1, 0);
        asm.bind(&mut wrap_source);
        let program = asm.assemble_with_wrap(wrap_source, wrap_target);

        let mut cfg = Config::default();
        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&common.load_program(&program), &[&out_pin]);

        // 800 kHz bit clock.
        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(800);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        // One channel byte per FIFO word, MSB first.
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 8,
            direction: ShiftDirection::Left,
        };
        cfg.fifo_join = FifoJoin::TxOnly;

        sm.set_config(&cfg);
        sm.set_pin_dirs(Direction::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<P: Instance, const SM: usize> ChannelSink for Ws2812Writer<'_, P, SM> {
    async fn put(&mut self, byte: u8) -> Result<()> {
        // Left shift with an 8-bit threshold consumes the top byte.
        self.sm.tx().wait_push(u32::from(byte) << 24).await;
        Ok(())
    }
}
