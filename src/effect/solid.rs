//! Solid color effect
//!
//! A single frame with the first color on both zones.

use alloc::vec::Vec;

use super::Effect;
use crate::{
    color::{BLACK, Rgb},
    frame::Frame,
};

#[derive(Debug, Clone, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn synthesize(&self, colors: &[Rgb]) -> Vec<Frame> {
        let color = colors.first().copied().unwrap_or(BLACK);
        alloc::vec![Frame::uniform(color)]
    }
}
