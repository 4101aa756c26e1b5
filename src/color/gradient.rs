use alloc::vec::Vec;

use crate::color::Rgb;

/// Linear integer interpolation of a single channel
///
/// The multiplication happens before the truncating division, so the last
/// step (`step == steps`) always lands exactly on `end`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(start: u8, end: u8, step: usize, steps: usize) -> u8 {
    let delta = i32::from(end) - i32::from(start);
    let offset = step as i32 * delta / steps as i32;
    (i32::from(start) + offset) as u8
}

#[inline]
fn lerp(start: Rgb, end: Rgb, step: usize, steps: usize) -> Rgb {
    Rgb {
        r: lerp_channel(start.r, end.r, step, steps),
        g: lerp_channel(start.g, end.g, step, steps),
        b: lerp_channel(start.b, end.b, step, steps),
    }
}

/// Build `length` colors linearly interpolated from `start` to `end`
///
/// Both endpoints are included. Lengths of 0 and 1 yield just `[start]`.
pub fn gradient(start: Rgb, end: Rgb, length: usize) -> Vec<Rgb> {
    if length <= 1 {
        return alloc::vec![start];
    }
    let steps = length - 1;
    (0..length).map(|i| lerp(start, end, i, steps)).collect()
}

/// Color one interpolation step away from `from` on a gradient of `length`
///
/// Used to start a fade-down just below its peak color.
pub fn next_gradient_step(from: Rgb, to: Rgb, length: usize) -> Rgb {
    if length <= 1 {
        return from;
    }
    lerp(from, to, 1, length - 1)
}
