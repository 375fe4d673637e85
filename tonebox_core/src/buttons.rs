//! Edge-triggered debouncing for the front-panel buttons.

use embedded_hal::delay::DelayNs;

/// Confirmation window for a candidate level change, in milliseconds.
pub const DEBOUNCE_MS: u32 = 20;

/// One channel per physical button.
///
/// Channels are independent of each other, but only one transition per
/// channel can be in flight at a time: the confirmation wait runs
/// synchronously in the caller's context.
pub struct DebouncedButton {
    last_stable_level: bool,
    active_low: bool,
}

impl DebouncedButton {
    /// A released active-low button reads high.
    pub const fn new() -> Self {
        Self {
            last_stable_level: true,
            active_low: true,
        }
    }

    /// Poll the raw level, returning `true` exactly once per confirmed
    /// press.
    ///
    /// A sample that differs from the last stable level starts the debounce
    /// wait; `sample` is then called again to confirm. A reverted re-read
    /// is switch noise and commits nothing. Releases are committed but
    /// never reported.
    pub fn poll<D, F>(&mut self, delay: &mut D, mut sample: F) -> bool
    where
        D: DelayNs,
        F: FnMut() -> bool,
    {
        let candidate = sample();
        if candidate == self.last_stable_level {
            return false;
        }

        delay.delay_ms(DEBOUNCE_MS);
        if sample() != candidate {
            return false;
        }

        self.last_stable_level = candidate;
        candidate != self.active_low
    }
}

impl Default for DebouncedButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records time spent waiting instead of actually sleeping.
    #[derive(Default)]
    struct SpyDelay {
        waited_ns: u64,
    }

    impl DelayNs for SpyDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waited_ns += u64::from(ns);
        }
    }

    fn poll_levels(button: &mut DebouncedButton, delay: &mut SpyDelay, levels: &[bool]) -> bool {
        let mut samples = levels.iter().copied();
        button.poll(delay, || samples.next().unwrap())
    }

    #[test]
    fn stable_released_level_reports_nothing() {
        let mut button = DebouncedButton::new();
        let mut delay = SpyDelay::default();
        assert!(!poll_levels(&mut button, &mut delay, &[true]));
        assert_eq!(delay.waited_ns, 0);
    }

    #[test]
    fn held_press_reports_once_on_the_falling_edge() {
        let mut button = DebouncedButton::new();
        let mut delay = SpyDelay::default();

        assert!(poll_levels(&mut button, &mut delay, &[false, false]));
        assert_eq!(delay.waited_ns, u64::from(DEBOUNCE_MS) * 1_000_000);

        // Still held: no further events.
        assert!(!poll_levels(&mut button, &mut delay, &[false]));
    }

    #[test]
    fn release_commits_but_reports_nothing() {
        let mut button = DebouncedButton::new();
        let mut delay = SpyDelay::default();
        assert!(poll_levels(&mut button, &mut delay, &[false, false]));

        assert!(!poll_levels(&mut button, &mut delay, &[true, true]));
        // A second press is reported again.
        assert!(poll_levels(&mut button, &mut delay, &[false, false]));
    }

    #[test]
    fn glitch_that_reverts_within_the_window_is_ignored() {
        let mut button = DebouncedButton::new();
        let mut delay = SpyDelay::default();

        assert!(!poll_levels(&mut button, &mut delay, &[false, true]));
        // The stable level was not committed, so a later real press still
        // counts.
        assert!(poll_levels(&mut button, &mut delay, &[false, false]));
    }
}
