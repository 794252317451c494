//! Joystick cursor over a blue cross on a 5×5 WS2812 matrix.
//!
//! Wiring (BitDogLab board): LED data on GPIO 7, joystick Y on GPIO 26
//! (ADC channel 0) and X on GPIO 27 (ADC channel 1).
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::Pull;
use embassy_rp::pio::Pio;
use joystick_matrix::Result;
use joystick_matrix::irqs::Irqs;
use joystick_matrix::joystick::Joystick;
use joystick_matrix::scene::CursorScene;
use joystick_matrix::ws2812::Ws2812Writer;
use {defmt_rtt as _, panic_probe as _};

/// Matrix side length.
const SIDE: usize = 5;

/// Total LED count.
const LED_COUNT: usize = SIDE * SIDE;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let mut matrix = Ws2812Writer::new(&mut common, sm0, p.PIN_7);

    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let x = Channel::new_pin(p.PIN_27, Pull::None);
    let y = Channel::new_pin(p.PIN_26, Pull::None);
    let mut joystick = Joystick::new(adc, x, y);

    info!("joystick cursor demo: {=usize}x{=usize} matrix", SIDE, SIDE);

    let mut scene = CursorScene::<SIDE, LED_COUNT>::new();
    scene.run(&mut joystick, &mut matrix).await
}
