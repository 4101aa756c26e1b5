//! Flash effects: Lightning and Pulse
//!
//! Each color fades up from black and decays back down, followed by a
//! blank pause. Lightning offsets the zones against each other by the
//! pause length; Pulse keeps them in step.

use alloc::vec::Vec;

use super::{Effect, timing::speed_range};
use crate::{
    color::{BLACK, Rgb, gradient, next_gradient_step},
    frame::Frame,
};

const MIN_BLANK: usize = 1;
const MAX_BLANK: usize = 9;
const MIN_FADE_UP: usize = 3;
const MAX_FADE_UP: usize = 10;
const MIN_FADE_DOWN: usize = 21;
const MAX_FADE_DOWN: usize = 131;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashVariant {
    /// Zones offset by the blank length
    Lightning,
    /// Zones in sync
    Pulse,
}

#[derive(Debug, Clone)]
pub struct FlashEffect {
    variant: FlashVariant,
    blank: usize,
    fade_up: usize,
    fade_down: usize,
}

impl FlashEffect {
    pub fn new(variant: FlashVariant, speed: u8) -> Self {
        Self {
            variant,
            blank: speed_range(MIN_BLANK, MAX_BLANK, speed),
            fade_up: speed_range(MIN_FADE_UP, MAX_FADE_UP, speed),
            fade_down: speed_range(MIN_FADE_DOWN, MAX_FADE_DOWN, speed),
        }
    }

    fn is_synchronous(&self) -> bool {
        self.variant == FlashVariant::Pulse
    }
}

/// Extend the shorter track with its own last color
fn pad_to(track: &mut Vec<Rgb>, len: usize) {
    let last = track.last().copied().unwrap_or(BLACK);
    track.resize(len, last);
}

impl Effect for FlashEffect {
    fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame> {
        if colors.is_empty() {
            return Vec::new();
        }
        let blank = core::iter::repeat_n(BLACK, self.blank);
        let mut upper: Vec<Rgb> = Vec::new();
        let mut lower: Vec<Rgb> = Vec::new();

        for &color in colors {
            if !self.is_synchronous() {
                lower.extend(blank.clone());
            }

            let fade_up = gradient(BLACK, color, self.fade_up);
            upper.extend_from_slice(&fade_up);
            lower.extend_from_slice(&fade_up);

            // Skip the peak so it is not shown twice
            let start = next_gradient_step(color, BLACK, self.fade_down);
            let fade_down = gradient(start, BLACK, self.fade_down);
            upper.extend_from_slice(&fade_down);
            lower.extend_from_slice(&fade_down);

            upper.extend(blank.clone());
            if self.is_synchronous() {
                lower.extend(blank.clone());
            }
        }

        let len = upper.len().max(lower.len());
        pad_to(&mut upper, len);
        pad_to(&mut lower, len);

        upper
            .into_iter()
            .zip(lower)
            .map(|(upper, lower)| Frame::new(upper, lower))
            .collect()
    }
}
