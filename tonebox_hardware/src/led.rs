//! Front-panel indicators: power and range status plus the one-hot pattern
//! bank.

use stm32f4xx_hal::gpio::{ErasedPin, Output, PushPull, PD12, PD13, PD15};

pub type PowerLed = PD12<Output<PushPull>>;
pub type RangeLed = PD13<Output<PushPull>>;
/// Toggled at 5 Hz by the firmware's status task while the device is
/// active; not owned by the panel.
pub type BlinkLed = PD15<Output<PushPull>>;

pub type PatternLed = ErasedPin<Output<PushPull>>;

/// Eleven selectable patterns, one LED each.
pub const PATTERN_LED_COUNT: usize = 11;

pub struct IndicatorPanel {
    power: PowerLed,
    range: RangeLed,
    patterns: [PatternLed; PATTERN_LED_COUNT],
}

impl IndicatorPanel {
    pub fn new(
        power: PowerLed,
        range: RangeLed,
        patterns: [PatternLed; PATTERN_LED_COUNT],
    ) -> Self {
        let mut panel = Self {
            power,
            range,
            patterns,
        };
        panel.clear();
        panel
    }

    /// Stateless mapping from the current settings to the indicator pins:
    /// power and range status, one-hot over the pattern bank.
    pub fn show(&mut self, active: bool, pattern: usize, high_band: bool) {
        self.power.set_state(active.into());
        self.range.set_state(high_band.into());
        for (i, led) in self.patterns.iter_mut().enumerate() {
            led.set_state((i == pattern).into());
        }
    }

    pub fn clear(&mut self) {
        self.power.set_low();
        self.range.set_low();
        for led in self.patterns.iter_mut() {
            led.set_low();
        }
    }
}
