//! Frame synthesis with compile-time known effect variants
//!
//! Each mode maps to one effect in [`EffectSlot`]. The slot is built once
//! per configuration change and expands the brightness-scaled colors into a
//! complete, periodic frame sequence. Nothing is evaluated per frame.

mod blink;
mod cycle;
mod flash;
mod solid;
mod timing;
mod wave;

use alloc::{sync::Arc, vec::Vec};

pub use blink::BlinkEffect;
pub use cycle::CycleEffect;
pub use flash::{FlashEffect, FlashVariant};
pub use solid::SolidEffect;
pub use timing::{
    MAX_CYCLE_FRAMES, MAX_TRANSITION, MIN_TRANSITION, speed_range, transition_length,
};
pub use wave::WaveEffect;

use crate::{
    color::{Rgb, scale},
    config::{ColorList, Configuration},
    frame::{Frame, FrameSequence, black_sequence},
    mode::Mode,
};

pub trait Effect {
    /// Expand colors into frames
    ///
    /// Colors are already brightness-scaled. May return an empty list;
    /// [`synthesize`] replaces that with a single black frame.
    fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame>;
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Solid(SolidEffect),
    Blink(BlinkEffect),
    Cycle(CycleEffect),
    Wave(WaveEffect),
    Lightning(FlashEffect),
    Pulse(FlashEffect),
}

impl Mode {
    /// Build the effect for this mode with the given timing parameters
    pub fn to_slot(self, speed: u8, delay: u8) -> EffectSlot {
        match self {
            Self::Solid => EffectSlot::Solid(SolidEffect),
            Self::Blink => EffectSlot::Blink(BlinkEffect::new(speed, delay)),
            Self::Cycle => EffectSlot::Cycle(CycleEffect::new(speed)),
            Self::Wave => EffectSlot::Wave(WaveEffect::new(speed)),
            Self::Lightning => {
                EffectSlot::Lightning(FlashEffect::new(FlashVariant::Lightning, speed))
            }
            Self::Pulse => EffectSlot::Pulse(FlashEffect::new(FlashVariant::Pulse, speed)),
        }
    }
}

impl EffectSlot {
    /// Build the effect described by a configuration
    pub fn from_config(config: &Configuration) -> Self {
        config.mode.to_slot(config.speed, config.delay)
    }

    /// Expand colors into frames
    pub fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame> {
        match self {
            Self::Solid(effect) => effect.synthesize(colors),
            Self::Blink(effect) => effect.synthesize(colors),
            Self::Cycle(effect) => effect.synthesize(colors),
            Self::Wave(effect) => effect.synthesize(colors),
            Self::Lightning(effect) | Self::Pulse(effect) => effect.synthesize(colors),
        }
    }

    /// Get the mode this effect renders
    pub fn mode(&self) -> Mode {
        match self {
            Self::Solid(_) => Mode::Solid,
            Self::Blink(_) => Mode::Blink,
            Self::Cycle(_) => Mode::Cycle,
            Self::Wave(_) => Mode::Wave,
            Self::Lightning(_) => Mode::Lightning,
            Self::Pulse(_) => Mode::Pulse,
        }
    }
}

/// Scale every color by the brightness percentage
pub fn scaled_colors(colors: &ColorList, brightness: u8) -> ColorList {
    colors.iter().map(|&color| scale(color, brightness)).collect()
}

/// Synthesize the full frame sequence for a configuration
///
/// Never empty: degenerate input yields a single black frame.
pub fn synthesize(config: &Configuration) -> FrameSequence {
    let colors = scaled_colors(&config.colors, config.brightness);
    let frames = EffectSlot::from_config(config).synthesize(&colors);
    if frames.is_empty() {
        return black_sequence();
    }
    Arc::from(frames)
}
