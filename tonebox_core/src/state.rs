//! The four selectable settings plus the live oscillation period.

use log::debug;

use crate::sweep::Pattern;

/// One of the two fixed frequency ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    High,
}

/// Period limits for a band, in tick units.
#[derive(Debug)]
pub struct BandParams {
    pub min: u16,
    pub max: u16,
    pub initial: u16,
}

static LOW_BAND: BandParams = BandParams {
    min: 25,
    max: 50,
    initial: 37,
};

static HIGH_BAND: BandParams = BandParams {
    min: 9,
    max: 18,
    initial: 13,
};

impl Band {
    pub const fn params(self) -> &'static BandParams {
        match self {
            Band::Low => &LOW_BAND,
            Band::High => &HIGH_BAND,
        }
    }

    pub const fn other(self) -> Band {
        match self {
            Band::Low => Band::High,
            Band::High => Band::Low,
        }
    }
}

/// Step sizes indexed by the speed setting.
pub const SPEED_STEPS: [u8; 5] = [1, 2, 3, 5, 8];

/// Process-wide device state, owned by the main control flow and mutated
/// only by confirmed button presses (and, for `period` and `sweep_up`, by
/// the sweep engine itself).
#[derive(Debug)]
pub struct ModeState {
    pub is_active: bool,
    pub band: Band,
    pub pattern: Pattern,
    pub speed: u8,
    /// Current travel direction of the ZigZag pattern.
    pub sweep_up: bool,
    /// Oscillation period in tick units, kept within the band limits.
    pub period: u16,
}

impl ModeState {
    pub fn new() -> Self {
        Self {
            is_active: false,
            band: Band::Low,
            pattern: Pattern::UpSweep,
            speed: 0,
            sweep_up: false,
            period: Band::Low.params().initial,
        }
    }

    /// Step size for the current speed setting.
    pub fn step(&self) -> u16 {
        u16::from(SPEED_STEPS[usize::from(self.speed)])
    }

    pub fn toggle_power(&mut self) {
        self.is_active = !self.is_active;
        debug!("power {}", if self.is_active { "on" } else { "off" });
    }

    pub fn next_pattern(&mut self) {
        self.pattern = self.pattern.next();
        debug!("pattern -> {:?}", self.pattern);
    }

    pub fn next_speed(&mut self) {
        self.speed = (self.speed + 1) % SPEED_STEPS.len() as u8;
        debug!("speed -> {}", self.speed);
    }

    /// Flip to the other band. Unlike a pattern switch, this re-initializes
    /// the period.
    pub fn toggle_band(&mut self) {
        self.band = self.band.other();
        self.period = self.band.params().initial;
        debug!("band -> {:?}", self.band);
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_state_is_inactive_low_band() {
        let state = ModeState::new();
        assert!(!state.is_active);
        assert_eq!(state.band, Band::Low);
        assert_eq!(state.pattern, Pattern::UpSweep);
        assert_eq!(state.speed, 0);
        assert_eq!(state.period, 37);
    }

    #[test]
    fn power_button_toggles() {
        let mut state = ModeState::new();
        state.toggle_power();
        assert!(state.is_active);
        state.toggle_power();
        assert!(!state.is_active);
    }

    #[test]
    fn pattern_button_cycles_through_all_eleven() {
        let mut state = ModeState::new();
        for _ in 0..Pattern::ALL.len() {
            state.next_pattern();
        }
        assert_eq!(state.pattern, Pattern::UpSweep);
    }

    #[test]
    fn speed_button_walks_the_step_table_and_wraps() {
        let mut state = ModeState::new();
        let mut steps = [0u16; 6];
        for slot in steps.iter_mut() {
            *slot = state.step();
            state.next_speed();
        }
        assert_eq!(steps, [1, 2, 3, 5, 8, 1]);
    }

    #[test]
    fn band_switch_resets_period_to_the_new_initial() {
        let mut state = ModeState::new();
        state.period = 42;
        state.toggle_band();
        assert_eq!(state.band, Band::High);
        assert_eq!(state.period, 13);

        state.period = 10;
        state.toggle_band();
        assert_eq!(state.band, Band::Low);
        assert_eq!(state.period, 37);
    }
}
