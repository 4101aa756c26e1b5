//! Configuration surface
//!
//! Owns the current [`Configuration`] and applies every change through one
//! explicit step: validate, resynthesize into the cursor, persist.

use crate::{
    color::Rgb,
    config::{ConfigError, Configuration, color_list},
    cursor::FrameCursor,
    mode::Mode,
    settings::{SettingsStore, load_settings, save_settings},
};

/// Applies configuration changes to a [`FrameCursor`] and a settings store
pub struct LightController<'a, S: SettingsStore> {
    cursor: &'a FrameCursor,
    store: S,
    config: Configuration,
}

impl<'a, S: SettingsStore> LightController<'a, S> {
    /// Load settings from `store` and install the matching sequence
    pub fn new(cursor: &'a FrameCursor, store: S) -> Self {
        let config = load_settings(&store);
        #[cfg(feature = "log")]
        log::info!(
            "controller: loaded {} mode with {} colors",
            config.mode.as_str(),
            config.colors.len()
        );
        cursor.regenerate(&config);
        Self {
            cursor,
            store,
            config,
        }
    }

    /// Validate, synthesize and persist a new configuration
    ///
    /// On a validation error nothing changes. Persistence failures do not
    /// undo the change; the sequence is already streaming.
    pub fn update_configuration(&mut self, config: Configuration) -> Result<(), ConfigError> {
        config.validate()?;
        self.cursor.regenerate(&config);
        if let Err(_e) = save_settings(&mut self.store, &config) {
            #[cfg(feature = "log")]
            log::warn!("controller: settings not persisted: {:?}", _e);
        }
        self.config = config;
        Ok(())
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// First selected color, or black when none is selected
    pub fn primary_color(&self) -> Rgb {
        self.config.primary_color()
    }

    /// Switch mode. Switching to Solid keeps only the first color.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.mode = mode;
        config.colors.truncate(mode.max_colors());
        self.update_configuration(config)
    }

    pub fn set_speed(&mut self, speed: u8) -> Result<(), ConfigError> {
        self.update_configuration(self.config.clone().with_speed(speed))
    }

    pub fn set_delay(&mut self, delay: u8) -> Result<(), ConfigError> {
        self.update_configuration(self.config.clone().with_delay(delay))
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), ConfigError> {
        self.update_configuration(self.config.clone().with_brightness(brightness))
    }

    /// Replace the selected colors. Deduplication is up to the caller.
    pub fn set_colors(&mut self, colors: &[Rgb]) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.colors = color_list(colors)?;
        self.update_configuration(config)
    }

    /// Select or deselect a color the way a swatch grid does
    ///
    /// In Solid mode the color replaces the selection. Otherwise a selected
    /// color is removed (unless it is the last one) and an unselected one is
    /// appended while below the mode's limit.
    pub fn toggle_color(&mut self, color: Rgb) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        let max = config.mode.max_colors();
        if max == 1 {
            config.colors.clear();
            let _ = config.colors.push(color);
        } else if config.colors.contains(&color) {
            if config.colors.len() <= 1 {
                return Ok(());
            }
            config.colors.retain(|&c| c != color);
        } else if config.colors.len() < max {
            let _ = config.colors.push(color);
        } else {
            return Ok(());
        }
        self.update_configuration(config)
    }

    /// Remove the color at `index` while more than one is selected
    pub fn remove_color(&mut self, index: usize) -> Result<(), ConfigError> {
        if self.config.colors.len() <= 1 || index >= self.config.colors.len() {
            return Ok(());
        }
        let mut config = self.config.clone();
        config.colors.remove(index);
        self.update_configuration(config)
    }

    /// Keep only the first color
    pub fn clear_colors(&mut self) -> Result<(), ConfigError> {
        if self.config.colors.len() <= 1 {
            return Ok(());
        }
        let mut config = self.config.clone();
        config.colors.truncate(1);
        self.update_configuration(config)
    }
}
