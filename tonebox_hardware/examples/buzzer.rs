//! Hand-driven sweep of the buzzer pair, no engine involved. Useful for
//! checking the wiring and that both outputs really move in antiphase.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use stm32f4xx_hal::{pac::Peripherals, prelude::*};

use tonebox_hardware::buzzer::Buzzer;

#[entry]
fn main() -> ! {
    let cp = cortex_m::peripheral::Peripherals::take().unwrap();
    let pac = Peripherals::take().unwrap();

    let rcc = pac.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(168.MHz()).freeze();
    let mut delay = cp.SYST.delay(&clocks);

    let gpiob = pac.GPIOB.split();
    let mut buzzer = Buzzer::new(
        gpiob.pb0.into_push_pull_output(),
        gpiob.pb1.into_push_pull_output(),
    );

    // Shorter half-period, higher pitch: a slow manual up-sweep.
    let mut level = false;
    loop {
        for half_period_us in (250_u32..=500).rev().step_by(10) {
            for _ in 0..200 {
                level = !level;
                buzzer.set_level(level);
                delay.delay_us(half_period_us);
            }
        }
    }
}
