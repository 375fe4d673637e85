//! Piezo buzzer output, a push-pull pin pair driven in antiphase.

use stm32f4xx_hal::gpio::{Output, PushPull, PB0, PB1};

pub type BuzzerPin = PB0<Output<PushPull>>;
pub type BuzzerInvPin = PB1<Output<PushPull>>;

pub struct Buzzer {
    out: BuzzerPin,
    inv: BuzzerInvPin,
}

impl Buzzer {
    /// Starts silent: main output low, complement high.
    pub fn new(out: BuzzerPin, inv: BuzzerInvPin) -> Self {
        let mut buzzer = Self { out, inv };
        buzzer.set_level(false);
        buzzer
    }

    /// Drive the pair to `high` / its complement.
    pub fn set_level(&mut self, high: bool) {
        if high {
            self.out.set_high();
            self.inv.set_low();
        } else {
            self.out.set_low();
            self.inv.set_high();
        }
    }

    /// Immediate mute, the power-off path.
    pub fn silence(&mut self) {
        self.set_level(false);
    }
}
