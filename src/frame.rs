//! Two-zone frames and the sequences built from them.

use alloc::sync::Arc;

use crate::color::{BLACK, Rgb};

/// One hardware update: a color for each zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    pub upper: Rgb,
    pub lower: Rgb,
}

/// Finite, periodic list of frames. Read-only once built.
pub type FrameSequence = Arc<[Frame]>;

impl Frame {
    /// Both zones off
    pub const BLACK: Frame = Frame {
        upper: BLACK,
        lower: BLACK,
    };

    pub const fn new(upper: Rgb, lower: Rgb) -> Self {
        Self { upper, lower }
    }

    /// Same color on both zones
    pub const fn uniform(color: Rgb) -> Self {
        Self {
            upper: color,
            lower: color,
        }
    }
}

/// Sequence containing only [`Frame::BLACK`]
pub fn black_sequence() -> FrameSequence {
    Arc::from([Frame::BLACK])
}
