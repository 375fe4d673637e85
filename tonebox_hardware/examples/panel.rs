//! Walks the pattern LED bank and flips the status indicators, so a bare
//! board can be checked LED by LED.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use panic_halt as _;
use stm32f4xx_hal::pac::Peripherals;

use tonebox_hardware::{led::PATTERN_LED_COUNT, ToneboxHardware};

#[entry]
fn main() -> ! {
    let pac = Peripherals::take().unwrap();
    let hw = ToneboxHardware::init(pac);

    let mut panel = hw.panel;
    let mut delay = hw.debounce_timer;

    let mut pattern = 0;
    loop {
        panel.show(true, pattern, pattern % 2 == 1);
        pattern = (pattern + 1) % PATTERN_LED_COUNT;
        delay.delay_ms(250);
    }
}
