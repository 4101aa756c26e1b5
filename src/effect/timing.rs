//! Speed to frame-count mapping
//!
//! The consumer reads frames at a fixed cadence, so every duration is a
//! frame count. Higher speed means fewer frames.

/// Shortest transition between two adjacent colors
pub const MIN_TRANSITION: usize = 12;
/// Longest transition between two adjacent colors
pub const MAX_TRANSITION: usize = 128;
/// Cap on the frames of one full Cycle/Wave period
pub const MAX_CYCLE_FRAMES: usize = 720;

/// Map speed (0-100) onto `min..=max`
///
/// `speed = 100` gives `min`, `speed = 0` gives `max`.
pub fn speed_range(min: usize, max: usize, speed: u8) -> usize {
    let slowness = 100 - usize::from(speed.min(100));
    min + (max - min) * slowness / 100
}

/// Frames per color pair for Cycle and Wave
///
/// Shrinks the per-pair length when many colors would push a period past
/// [`MAX_CYCLE_FRAMES`].
pub fn transition_length(color_count: usize, speed: u8) -> usize {
    let length = speed_range(MIN_TRANSITION, MAX_TRANSITION, speed);
    if color_count == 0 || length * color_count <= MAX_CYCLE_FRAMES {
        return length;
    }
    let max = (MAX_CYCLE_FRAMES / color_count).max(MIN_TRANSITION);
    speed_range(MIN_TRANSITION, max, speed)
}
