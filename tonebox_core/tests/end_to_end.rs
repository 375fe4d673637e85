//! Front-panel scenarios driven through the whole core: state transitions,
//! the sweep engine and the tone generator together.

use tonebox_core::{advance, Band, Drive, ModeState, Pattern, PatternMemory, SimpleRng, ToneGen};

#[test]
fn power_on_up_sweep_walks_the_low_band() {
    let mut state = ModeState::new();
    let mut mem = PatternMemory::new();
    let mut rng = SimpleRng::new();

    assert!(!state.is_active);
    assert_eq!(state.period, 37);

    // Power press.
    state.toggle_power();
    assert!(state.is_active);

    // Speed 0 steps one per tick: 36, 35, ... down to the band floor.
    for expected in (25..=36).rev() {
        advance(&mut state, &mut mem, &mut rng);
        assert_eq!(state.period, expected);
    }

    // The next tick wraps the sawtooth back to the band ceiling.
    advance(&mut state, &mut mem, &mut rng);
    assert_eq!(state.period, 50);
}

#[test]
fn range_press_reinitializes_the_period_mid_pattern() {
    let mut state = ModeState::new();
    let mut mem = PatternMemory::new();
    let mut rng = SimpleRng::new();
    state.toggle_power();

    for _ in 0..5 {
        advance(&mut state, &mut mem, &mut rng);
    }
    assert_eq!(state.period, 32);

    // Range press: new band, fresh initial period.
    state.toggle_band();
    assert_eq!(state.band, Band::High);
    assert_eq!(state.period, 13);

    // The sweep carries on within the new band's limits.
    let limits = state.band.params();
    for _ in 0..100 {
        advance(&mut state, &mut mem, &mut rng);
        assert!(state.period >= limits.min && state.period <= limits.max);
    }
}

#[test]
fn pattern_press_preserves_the_period_unlike_range() {
    let mut state = ModeState::new();
    let mut mem = PatternMemory::new();
    let mut rng = SimpleRng::new();
    state.toggle_power();

    for _ in 0..5 {
        advance(&mut state, &mut mem, &mut rng);
    }
    let period = state.period;

    state.next_pattern();
    assert_eq!(state.pattern, Pattern::DownSweep);
    assert_eq!(state.period, period);
}

#[test]
fn tone_generator_follows_the_swept_period() {
    let mut state = ModeState::new();
    let mut mem = PatternMemory::new();
    let mut rng = SimpleRng::new();
    let mut tone = ToneGen::new();
    state.toggle_power();

    let mut toggles = 0;
    let mut last_level = tone.level();
    for _ in 0..2000 {
        match advance(&mut state, &mut mem, &mut rng) {
            Drive::Period(period) => {
                if let Some(level) = tone.tick(period) {
                    assert_ne!(level, last_level, "output must alternate");
                    last_level = level;
                    toggles += 1;
                }
            }
            Drive::Level(_) => unreachable!("up sweep is period-driven"),
        }
    }

    // 2000 ticks across periods of 25..=50 must toggle plenty of times.
    assert!(toggles >= 2000 / 50);
}

#[test]
fn power_off_silences_the_output_immediately() {
    let mut state = ModeState::new();
    let mut mem = PatternMemory::new();
    let mut rng = SimpleRng::new();
    let mut tone = ToneGen::new();
    state.toggle_power();

    // Run until the output sits high.
    while !tone.level() {
        if let Drive::Period(period) = advance(&mut state, &mut mem, &mut rng) {
            tone.tick(period);
        }
    }

    // Power press while the output is high: the main loop silences the
    // generator before the next tick is ever taken.
    state.toggle_power();
    assert!(!state.is_active);
    tone.silence();
    assert!(!tone.level());
}
