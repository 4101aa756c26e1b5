//! Blink effect
//!
//! Holds each color on both zones, then blanks for `delay` frames.

use alloc::vec::Vec;

use super::Effect;
use crate::{color::Rgb, frame::Frame};

/// Frames a color stays lit at speed 0
const MAX_HOLD: usize = 101;

#[derive(Debug, Clone)]
pub struct BlinkEffect {
    /// Frames each color is held
    hold: usize,
    /// Black frames after each color
    gap: usize,
}

impl BlinkEffect {
    /// Create a blink effect
    ///
    /// # Arguments
    /// * `speed` - 0-100, each color is held for `101 - speed` frames
    /// * `delay` - black frames after each color, used as is
    pub fn new(speed: u8, delay: u8) -> Self {
        Self {
            hold: MAX_HOLD - usize::from(speed.min(100)),
            gap: usize::from(delay),
        }
    }
}

impl Effect for BlinkEffect {
    fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(colors.len() * (self.hold + self.gap));
        for &color in colors {
            frames.extend(core::iter::repeat_n(Frame::uniform(color), self.hold));
            frames.extend(core::iter::repeat_n(Frame::BLACK, self.gap));
        }
        frames
    }
}
