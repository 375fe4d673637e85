//! The pattern sweep engine: one rule per selectable pattern, advanced once
//! per scheduling tick while the device is powered on.

use crate::rand::SimpleRng;
use crate::state::ModeState;

/// Redraw chance for the Random pattern, out of 256 per tick.
const RANDOM_REDRAW_CHANCE: u8 = 20;
/// Pulse duty cycle: high for the first `PULSE_HIGH` ticks of each cycle.
const PULSE_CYCLE: u16 = 500;
const PULSE_HIGH: u16 = 50;
/// Ticks between Stepped pattern jumps.
const STEP_INTERVAL: u16 = 100;
/// Heartbeat phase cycle length.
const HEARTBEAT_CYCLE: u16 = 600;
/// Ticks between Siren toggles.
const SIREN_INTERVAL: u16 = 100;
/// Chirps fall this many speed steps per tick.
const CHIRP_FALL_FACTOR: u16 = 3;
/// Ticks a chirp rests before restarting from the band ceiling.
const CHIRP_PAUSE: u16 = 300;
/// Ticks between RandomWalk nudges.
const WALK_INTERVAL: u16 = 20;

/// The eleven selectable sweep rules, in front-panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    UpSweep,
    DownSweep,
    ZigZag,
    Random,
    Pulse,
    Stepped,
    Triangle,
    Heartbeat,
    Siren,
    Chirps,
    RandomWalk,
}

impl Pattern {
    pub const ALL: [Pattern; 11] = [
        Pattern::UpSweep,
        Pattern::DownSweep,
        Pattern::ZigZag,
        Pattern::Random,
        Pattern::Pulse,
        Pattern::Stepped,
        Pattern::Triangle,
        Pattern::Heartbeat,
        Pattern::Siren,
        Pattern::Chirps,
        Pattern::RandomWalk,
    ];

    /// Position on the front panel, also the indicator LED index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Pattern {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// How the selected pattern drove the buzzer on this tick.
///
/// Most patterns shape the oscillation period consumed by the tone
/// generator; Pulse owns the output level outright and the tone generator
/// must not run for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Period(u16),
    Level(bool),
}

/// Multi-tick working memory, one slot per pattern that needs it.
///
/// Slots are never cleared by a pattern switch: a counter only advances
/// while its pattern is selected, but re-selecting a pattern resumes
/// mid-cycle from whatever its slot last held.
#[derive(Debug)]
pub struct PatternMemory {
    pulse_count: u16,
    step_count: u16,
    triangle_rising: bool,
    heartbeat_count: u16,
    siren_count: u16,
    chirp_paused: bool,
    chirp_count: u16,
    walk_count: u16,
}

impl PatternMemory {
    pub const fn new() -> Self {
        Self {
            pulse_count: 0,
            step_count: 0,
            triangle_rising: true,
            heartbeat_count: 0,
            siren_count: 0,
            chirp_paused: false,
            chirp_count: 0,
            walk_count: 0,
        }
    }
}

impl Default for PatternMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance the selected pattern by one tick.
///
/// Reads the band limits and speed step from `state` and mutates
/// `state.period` in place; duty-driven patterns leave the period alone and
/// return the output level instead. Period arithmetic clamps at the band
/// bounds, except for the Up/Down sweeps whose wrap past a bound is the
/// sawtooth reset itself.
pub fn advance(state: &mut ModeState, mem: &mut PatternMemory, rng: &mut SimpleRng) -> Drive {
    let limits = state.band.params();
    let (min, max) = (limits.min, limits.max);
    let step = state.step();

    match state.pattern {
        Pattern::UpSweep => {
            if state.period > min {
                state.period = state.period.saturating_sub(step);
            } else {
                state.period = max;
            }
        }
        Pattern::DownSweep => {
            if state.period < max {
                state.period = state.period.saturating_add(step);
            } else {
                state.period = min;
            }
        }
        Pattern::ZigZag => {
            if state.sweep_up {
                let next = state.period.saturating_add(step);
                if next >= max {
                    state.period = max;
                    state.sweep_up = false;
                } else {
                    state.period = next;
                }
            } else {
                let next = state.period.saturating_sub(step);
                if next <= min {
                    state.period = min;
                    state.sweep_up = true;
                } else {
                    state.period = next;
                }
            }
        }
        Pattern::Random => {
            if rng.next_u8() < RANDOM_REDRAW_CHANCE {
                let width = max - min + 1;
                state.period = min + u16::from(rng.next_u8()) % width;
            }
        }
        Pattern::Pulse => {
            mem.pulse_count += 1;
            if mem.pulse_count >= PULSE_CYCLE {
                mem.pulse_count = 0;
            }
            return Drive::Level(mem.pulse_count < PULSE_HIGH);
        }
        Pattern::Stepped => {
            mem.step_count += 1;
            if mem.step_count >= STEP_INTERVAL {
                mem.step_count = 0;
                let width = max - min + 1;
                state.period = min + (state.period + step - min) % width;
            }
        }
        Pattern::Triangle => {
            let next = if mem.triangle_rising {
                state.period.saturating_add(step)
            } else {
                state.period.saturating_sub(step)
            };
            state.period = next.clamp(min, max);
            if state.period == min || state.period == max {
                mem.triangle_rising = !mem.triangle_rising;
            }
        }
        Pattern::Heartbeat => {
            mem.heartbeat_count += 1;
            if mem.heartbeat_count >= HEARTBEAT_CYCLE {
                mem.heartbeat_count = 0;
            }
            state.period = match mem.heartbeat_count {
                0..=99 => min + 2,
                100..=149 => max,
                150..=249 => min + 1,
                _ => max,
            };
        }
        Pattern::Siren => {
            mem.siren_count += 1;
            if mem.siren_count >= SIREN_INTERVAL {
                mem.siren_count = 0;
                state.period = if state.period == min { max } else { min };
            }
        }
        Pattern::Chirps => {
            if mem.chirp_paused {
                mem.chirp_count += 1;
                if mem.chirp_count > CHIRP_PAUSE {
                    mem.chirp_count = 0;
                    mem.chirp_paused = false;
                    state.period = max;
                }
            } else if state.period > min {
                let fallen = state.period.saturating_sub(step * CHIRP_FALL_FACTOR);
                state.period = fallen.max(min);
            } else {
                mem.chirp_paused = true;
            }
        }
        Pattern::RandomWalk => {
            mem.walk_count += 1;
            if mem.walk_count >= WALK_INTERVAL {
                mem.walk_count = 0;
                let nudge = i32::from(rng.next_u8() % 5) - 2;
                let next = i32::from(state.period) + nudge;
                state.period = next.clamp(i32::from(min), i32::from(max)) as u16;
            }
        }
    }

    Drive::Period(state.period)
}
