//! Cycle effect
//!
//! Fades through the colors in order and back to the first one, with both
//! zones showing the same color.

use alloc::vec::Vec;

use super::{Effect, timing::transition_length};
use crate::{
    color::{Rgb, gradient},
    frame::Frame,
};

#[derive(Debug, Clone)]
pub struct CycleEffect {
    speed: u8,
}

impl CycleEffect {
    pub fn new(speed: u8) -> Self {
        Self { speed }
    }
}

/// Chain `gradient(colors[i], colors[i + 1])` for every pair, wrapping
/// from the last color back to the first
pub(super) fn chained_gradient(colors: &[Rgb], transition: usize) -> Vec<Rgb> {
    let mut track = Vec::with_capacity(colors.len() * transition);
    for (i, &start) in colors.iter().enumerate() {
        let end = colors[(i + 1) % colors.len()];
        track.extend(gradient(start, end, transition));
    }
    track
}

impl Effect for CycleEffect {
    fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame> {
        if colors.is_empty() {
            return Vec::new();
        }
        let transition = transition_length(colors.len(), self.speed);
        chained_gradient(colors, transition)
            .into_iter()
            .map(Frame::uniform)
            .collect()
    }
}
