#![no_std]
#![no_main]

mod logging;

#[cfg(all(feature = "defmt_logger", not(feature = "null_logger")))]
use {defmt_rtt as _, panic_probe as _};

#[cfg(all(feature = "null_logger", not(feature = "defmt_logger")))]
use panic_halt as _;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[rtic::app(device = stm32f4xx_hal::pac, dispatchers = [USART1, USART3])]
mod app {
    use super::*;

    use core::sync::atomic::{AtomicBool, Ordering};

    use fugit::ExtU32;
    use log::info;
    use rtic_monotonics::systick::Systick;
    use rtic_monotonics::Monotonic;

    use tonebox_core::{
        advance, Band, DebouncedButton, Drive, ModeState, PatternMemory, SimpleRng, ToneGen,
    };
    use tonebox_hardware::{
        buttons::PanelButtons,
        buzzer::Buzzer,
        led::{BlinkLed, IndicatorPanel},
        DebounceTimer, ToneboxHardware, SYSCLK_HZ,
    };

    /// Mirror of `ModeState::is_active` for the blink task. The only state
    /// crossing the task boundary; everything else is owned by `idle`.
    static BLINK_ENABLED: AtomicBool = AtomicBool::new(false);

    /// Blink half-period while active: toggling every 100 ms gives 5 Hz.
    const BLINK_TOGGLE_MS: u16 = 100;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        buttons: PanelButtons,
        debounce_timer: DebounceTimer,
        buzzer: Buzzer,
        panel: IndicatorPanel,
        blink_led: BlinkLed,
        power_btn: DebouncedButton,
        pattern_btn: DebouncedButton,
        speed_btn: DebouncedButton,
        range_btn: DebouncedButton,
        state: ModeState,
        mem: PatternMemory,
        rng: SimpleRng,
        tone: ToneGen,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        logging::init();
        info!("{} v{}", NAME, VERSION);

        let systick_token = rtic_monotonics::create_systick_token!();
        Systick::start(cx.core.SYST, SYSCLK_HZ, systick_token);

        let hw = ToneboxHardware::init(cx.device);

        let state = ModeState::new();
        let mut panel = hw.panel;
        refresh_panel(&mut panel, &state);

        status_blink::spawn().ok();

        (
            Shared {},
            Local {
                buttons: hw.buttons,
                debounce_timer: hw.debounce_timer,
                buzzer: hw.buzzer,
                panel,
                blink_led: hw.blink_led,
                power_btn: DebouncedButton::new(),
                pattern_btn: DebouncedButton::new(),
                speed_btn: DebouncedButton::new(),
                range_btn: DebouncedButton::new(),
                state,
                mem: PatternMemory::new(),
                rng: SimpleRng::new(),
                tone: ToneGen::new(),
            },
        )
    }

    /// The cooperative main control flow. One loop iteration is one
    /// scheduling tick: poll the panel, apply confirmed presses, then let
    /// the selected pattern drive the buzzer. Deliberately no `wfi` — the
    /// iteration rate is the tone timebase.
    #[idle(local = [
        buttons, debounce_timer, buzzer, panel,
        power_btn, pattern_btn, speed_btn, range_btn,
        state, mem, rng, tone
    ])]
    fn idle(cx: idle::Context) -> ! {
        info!("entering control loop");

        let buttons = cx.local.buttons;
        let timer = cx.local.debounce_timer;
        let buzzer = cx.local.buzzer;
        let panel = cx.local.panel;
        let state = cx.local.state;
        let mem = cx.local.mem;
        let rng = cx.local.rng;
        let tone = cx.local.tone;

        loop {
            let mut settings_changed = false;

            if cx.local.power_btn.poll(timer, || buttons.power.is_high()) {
                state.toggle_power();
                BLINK_ENABLED.store(state.is_active, Ordering::Relaxed);
                if !state.is_active {
                    tone.silence();
                    buzzer.silence();
                }
                settings_changed = true;
            }
            if cx.local.pattern_btn.poll(timer, || buttons.pattern.is_high()) {
                state.next_pattern();
                settings_changed = true;
            }
            if cx.local.speed_btn.poll(timer, || buttons.speed.is_high()) {
                state.next_speed();
                settings_changed = true;
            }
            if cx.local.range_btn.poll(timer, || buttons.range.is_high()) {
                state.toggle_band();
                settings_changed = true;
            }

            if settings_changed {
                info!(
                    "active={} pattern={:?} speed={} band={:?} period={}",
                    state.is_active, state.pattern, state.speed, state.band, state.period
                );
                refresh_panel(panel, state);
            }

            if state.is_active {
                match advance(state, mem, rng) {
                    Drive::Period(period) => {
                        if let Some(level) = tone.tick(period) {
                            buzzer.set_level(level);
                        }
                    }
                    Drive::Level(level) => buzzer.set_level(level),
                }
            }
        }
    }

    /// Stand-in for the original 1 ms timer interrupt: advances its own
    /// millisecond count and blinks the status LED at 5 Hz while the device
    /// is active. Touches nothing but that counter and its LED.
    #[task(priority = 2, local = [blink_led])]
    async fn status_blink(cx: status_blink::Context) {
        let mut ms_count: u16 = 0;
        loop {
            Systick::delay(1.millis()).await;
            if BLINK_ENABLED.load(Ordering::Relaxed) {
                ms_count += 1;
                if ms_count >= BLINK_TOGGLE_MS {
                    ms_count = 0;
                    cx.local.blink_led.toggle();
                }
            } else {
                // Held off while inactive; the count is frozen, not reset.
                cx.local.blink_led.set_low();
            }
        }
    }

    fn refresh_panel(panel: &mut IndicatorPanel, state: &ModeState) {
        panel.show(
            state.is_active,
            state.pattern.index(),
            state.band == Band::High,
        );
    }
}
