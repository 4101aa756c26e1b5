mod gradient;
mod hex;

pub use gradient::{gradient, next_gradient_step};
pub use hex::{parse_hex, rgb_from_u32, to_hex};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Both zones off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Upper bound of the brightness percentage
pub const MAX_BRIGHTNESS: u8 = 100;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Swatches offered by the control surface, in display order
#[allow(clippy::unreadable_literal)]
pub const PRESET_COLORS: [Rgb; 12] = hex_palette![
    0xFF0000, // Red
    0xFF8000, // Orange
    0xFFFF00, // Yellow
    0x00FF00, // Green
    0x00FFFF, // Cyan
    0x0000FF, // Blue
    0x8000FF, // Purple
    0xFF0080, // Pink
    0xFFFFFF, // White
    0xFFC878, // Warm white
    0x80FF80, // Mint
    0xFF8080  // Salmon
];

/// Scale a color by a brightness percentage (0-100)
///
/// Every channel is truncated independently: `channel * brightness / 100`.
/// Values above 100 are treated as 100.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale(color: Rgb, brightness: u8) -> Rgb {
    let brightness = if brightness > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS as u16
    } else {
        brightness as u16
    };
    Rgb {
        r: (color.r as u16 * brightness / 100) as u8,
        g: (color.g as u16 * brightness / 100) as u8,
        b: (color.b as u16 * brightness / 100) as u8,
    }
}
