//! Front-panel button inputs. All four are momentary switches to ground,
//! read through internal pull-ups, so a pressed button reads low.

use stm32f4xx_hal::gpio::{Input, PC0, PC1, PC2, PC3};

pub type PowerButton = PC0<Input>;
pub type PatternButton = PC1<Input>;
pub type SpeedButton = PC2<Input>;
pub type RangeButton = PC3<Input>;

pub struct PanelButtons {
    pub power: PowerButton,
    pub pattern: PatternButton,
    pub speed: SpeedButton,
    pub range: RangeButton,
}
