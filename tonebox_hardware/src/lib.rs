#![no_std]

//! Board support for the tonebox: front-panel buttons, the buzzer output
//! pair, the indicator LEDs and the debounce timer, all brought up in one
//! place so the firmware only ever sees ready-made parts.

use stm32f4xx_hal::{
    pac::{Peripherals, TIM5},
    prelude::*,
    timer::Delay,
};

pub mod buttons;
pub mod buzzer;
pub mod led;

use buttons::PanelButtons;
use buzzer::Buzzer;
use led::{BlinkLed, IndicatorPanel};

/// Core clock configured by [`ToneboxHardware::init`]; also what the
/// firmware hands to its SysTick monotonic.
pub const SYSCLK_HZ: u32 = 168_000_000;

/// Microsecond timer used for the blocking debounce wait.
pub type DebounceTimer = Delay<TIM5, 1_000_000>;

pub struct ToneboxHardware {
    pub buttons: PanelButtons,
    pub buzzer: Buzzer,
    pub panel: IndicatorPanel,
    pub blink_led: BlinkLed,
    pub debounce_timer: DebounceTimer,
}

impl ToneboxHardware {
    pub fn init(pac: Peripherals) -> Self {
        let rcc = pac.RCC.constrain();
        let clocks = rcc.cfgr.sysclk(SYSCLK_HZ.Hz()).freeze();

        let gpiob = pac.GPIOB.split();
        let gpioc = pac.GPIOC.split();
        let gpiod = pac.GPIOD.split();
        let gpioe = pac.GPIOE.split();

        // Front-panel buttons, active low against internal pull-ups.
        let buttons = PanelButtons {
            power: gpioc.pc0.into_pull_up_input(),
            pattern: gpioc.pc1.into_pull_up_input(),
            speed: gpioc.pc2.into_pull_up_input(),
            range: gpioc.pc3.into_pull_up_input(),
        };

        let buzzer = Buzzer::new(
            gpiob.pb0.into_push_pull_output(),
            gpiob.pb1.into_push_pull_output(),
        );

        let panel = IndicatorPanel::new(
            gpiod.pd12.into_push_pull_output(),
            gpiod.pd13.into_push_pull_output(),
            [
                gpioe.pe0.into_push_pull_output().erase(),
                gpioe.pe1.into_push_pull_output().erase(),
                gpioe.pe2.into_push_pull_output().erase(),
                gpioe.pe3.into_push_pull_output().erase(),
                gpioe.pe4.into_push_pull_output().erase(),
                gpioe.pe5.into_push_pull_output().erase(),
                gpioe.pe6.into_push_pull_output().erase(),
                gpioe.pe7.into_push_pull_output().erase(),
                gpioe.pe8.into_push_pull_output().erase(),
                gpioe.pe9.into_push_pull_output().erase(),
                gpioe.pe10.into_push_pull_output().erase(),
            ],
        );

        let blink_led = gpiod.pd15.into_push_pull_output();

        let debounce_timer = pac.TIM5.delay_us(&clocks);

        Self {
            buttons,
            buzzer,
            panel,
            blink_led,
            debounce_timer,
        }
    }
}
