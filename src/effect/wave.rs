//! Wave effect
//!
//! Cycle with a phase offset: the lower zone runs the same chain starting
//! one color later.

use alloc::vec::Vec;

use super::{
    Effect,
    cycle::{CycleEffect, chained_gradient},
    timing::transition_length,
};
use crate::{color::Rgb, frame::Frame};

#[derive(Debug, Clone)]
pub struct WaveEffect {
    speed: u8,
}

impl WaveEffect {
    pub fn new(speed: u8) -> Self {
        Self { speed }
    }
}

impl Effect for WaveEffect {
    fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame> {
        if colors.len() < 2 {
            return CycleEffect::new(self.speed).synthesize(colors);
        }
        let transition = transition_length(colors.len(), self.speed);

        let upper = chained_gradient(colors, transition);

        let mut shifted = colors.to_vec();
        shifted.rotate_left(1);
        let lower = chained_gradient(&shifted, transition);

        // Zip truncates to the shorter track
        upper
            .into_iter()
            .zip(lower)
            .map(|(upper, lower)| Frame::new(upper, lower))
            .collect()
    }
}
