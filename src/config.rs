//! Animation configuration and its validation

use core::fmt;

use heapless::Vec;

use crate::color::{BLACK, MAX_BRIGHTNESS, Rgb};
use crate::mode::Mode;

/// Maximum number of colors selectable in any mode
pub const MAX_COLORS: usize = 10;

/// Upper bound of the speed and delay parameters
pub const MAX_PARAMETER: u8 = 100;

pub const DEFAULT_MODE: Mode = Mode::Solid;
pub const DEFAULT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const DEFAULT_SPEED: u8 = 50;
pub const DEFAULT_DELAY: u8 = 10;
pub const DEFAULT_BRIGHTNESS: u8 = 100;

/// Ordered colors. Order defines the transition order.
pub type ColorList = Vec<Rgb, MAX_COLORS>;

/// Numeric parameter of a [`Configuration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Speed,
    Delay,
    Brightness,
}

impl Parameter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Delay => "delay",
            Self::Brightness => "brightness",
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Parameter above its 0-100 range
    OutOfRange { parameter: Parameter, value: u8 },

    /// More colors than the mode (or the list capacity) accepts
    TooManyColors { limit: usize, count: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange { parameter, value } => {
                write!(
                    f,
                    "{} must be within 0..={}, got {}",
                    parameter.as_str(),
                    MAX_PARAMETER,
                    value
                )
            }
            ConfigError::TooManyColors { limit, count } => {
                write!(f, "at most {} colors allowed, got {}", limit, count)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Build a [`ColorList`] from a slice
pub fn color_list(colors: &[Rgb]) -> Result<ColorList, ConfigError> {
    ColorList::from_slice(colors).map_err(|()| ConfigError::TooManyColors {
        limit: MAX_COLORS,
        count: colors.len(),
    })
}

/// Declarative description of the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub mode: Mode,
    pub colors: ColorList,
    /// Higher is faster (0-100)
    pub speed: u8,
    /// Black frames after each Blink color (0-100)
    pub delay: u8,
    /// Percentage applied to every color at synthesis time (0-100)
    pub brightness: u8,
}

impl Default for Configuration {
    fn default() -> Self {
        let mut colors = ColorList::new();
        let _ = colors.push(DEFAULT_COLOR);
        Self {
            mode: DEFAULT_MODE,
            colors,
            speed: DEFAULT_SPEED,
            delay: DEFAULT_DELAY,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl Configuration {
    /// Create a configuration with default timing and brightness
    pub fn new(mode: Mode, colors: &[Rgb]) -> Result<Self, ConfigError> {
        let config = Self {
            mode,
            colors: color_list(colors)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: u8) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Check parameter ranges and the color count of the mode
    ///
    /// An empty color list is valid; it synthesizes to a single black frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parameters = [
            (Parameter::Speed, self.speed, MAX_PARAMETER),
            (Parameter::Delay, self.delay, MAX_PARAMETER),
            (Parameter::Brightness, self.brightness, MAX_BRIGHTNESS),
        ];
        for (parameter, value, max) in parameters {
            if value > max {
                return Err(ConfigError::OutOfRange { parameter, value });
            }
        }

        if self.colors.len() > self.mode.max_colors() {
            return Err(ConfigError::TooManyColors {
                limit: self.mode.max_colors(),
                count: self.colors.len(),
            });
        }
        Ok(())
    }

    /// First selected color, or black when none is selected
    pub fn primary_color(&self) -> Rgb {
        self.colors.first().copied().unwrap_or(BLACK)
    }
}
