use core::fmt::Write;

use heapless::String;

use crate::color::Rgb;

/// Length of an encoded color (`RRGGBB`)
const HEX_LEN: usize = 6;

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Encode a color as six uppercase hex digits
pub fn to_hex(color: Rgb) -> String<HEX_LEN> {
    let mut out = String::new();
    // Six digits always fit the buffer
    let _ = write!(out, "{:02X}{:02X}{:02X}", color.r, color.g, color.b);
    out
}

/// Decode six hex digits (any case) into a color
///
/// Returns `None` unless the input is exactly six ASCII hex digits.
pub fn parse_hex(text: &str) -> Option<Rgb> {
    if text.len() != HEX_LEN || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok().map(rgb_from_u32)
}
