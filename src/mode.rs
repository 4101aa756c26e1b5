//! Lighting modes and their capability flags

use crate::config::MAX_COLORS;

const MODE_NAME_SOLID: &str = "solid";
const MODE_NAME_BLINK: &str = "blink";
const MODE_NAME_CYCLE: &str = "cycle";
const MODE_NAME_WAVE: &str = "wave";
const MODE_NAME_LIGHTNING: &str = "lightning";
const MODE_NAME_PULSE: &str = "pulse";

const MODE_ID_SOLID: u8 = 0;
const MODE_ID_BLINK: u8 = 1;
const MODE_ID_CYCLE: u8 = 2;
const MODE_ID_WAVE: u8 = 3;
const MODE_ID_LIGHTNING: u8 = 4;
const MODE_ID_PULSE: u8 = 5;

/// Known lighting modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Steady single color on both zones
    #[default]
    Solid = MODE_ID_SOLID,
    /// Each color held, then a black gap
    Blink = MODE_ID_BLINK,
    /// Smooth transitions through the colors, zones in lockstep
    Cycle = MODE_ID_CYCLE,
    /// Cycle with the lower zone one color ahead of the upper
    Wave = MODE_ID_WAVE,
    /// Flashes with the zones offset from each other
    Lightning = MODE_ID_LIGHTNING,
    /// Flashes with both zones in sync
    Pulse = MODE_ID_PULSE,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Self::Solid,
        Self::Blink,
        Self::Cycle,
        Self::Wave,
        Self::Lightning,
        Self::Pulse,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_SOLID => Self::Solid,
            MODE_ID_BLINK => Self::Blink,
            MODE_ID_CYCLE => Self::Cycle,
            MODE_ID_WAVE => Self::Wave,
            MODE_ID_LIGHTNING => Self::Lightning,
            MODE_ID_PULSE => Self::Pulse,
            _ => return None,
        })
    }

    /// Name used for persistence
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => MODE_NAME_SOLID,
            Self::Blink => MODE_NAME_BLINK,
            Self::Cycle => MODE_NAME_CYCLE,
            Self::Wave => MODE_NAME_WAVE,
            Self::Lightning => MODE_NAME_LIGHTNING,
            Self::Pulse => MODE_NAME_PULSE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_SOLID => Some(Self::Solid),
            MODE_NAME_BLINK => Some(Self::Blink),
            MODE_NAME_CYCLE => Some(Self::Cycle),
            MODE_NAME_WAVE => Some(Self::Wave),
            MODE_NAME_LIGHTNING => Some(Self::Lightning),
            MODE_NAME_PULSE => Some(Self::Pulse),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Blink => "Blink",
            Self::Cycle => "Cycle",
            Self::Wave => "Wave",
            Self::Lightning => "Lightning",
            Self::Pulse => "Pulse",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Solid => "Steady single color",
            Self::Blink => "Flash between colors",
            Self::Cycle => "Smooth color transitions",
            Self::Wave => "Offset upper and lower zones",
            Self::Lightning => "Random flash effects",
            Self::Pulse => "Synchronized breathing",
        }
    }

    /// Whether the speed parameter affects this mode
    pub const fn uses_speed(self) -> bool {
        !matches!(self, Self::Solid)
    }

    /// Whether the delay parameter affects this mode
    pub const fn uses_delay(self) -> bool {
        matches!(self, Self::Blink)
    }

    /// Maximum number of selected colors
    pub const fn max_colors(self) -> usize {
        match self {
            Self::Solid => 1,
            _ => MAX_COLORS,
        }
    }
}
