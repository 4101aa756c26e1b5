//! Settings persistence over a simple key/value store
//!
//! Every field is stored under its own key and loaded independently, so a
//! corrupt or missing entry only resets that field to its default.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    color::{parse_hex, to_hex},
    config::{ColorList, Configuration, MAX_COLORS, MAX_PARAMETER},
    mode::Mode,
};

pub const KEY_MODE: &str = "lightingMode";
pub const KEY_COLORS: &str = "colors";
pub const KEY_SPEED: &str = "speed";
pub const KEY_DELAY: &str = "delay";
pub const KEY_BRIGHTNESS: &str = "brightness";

/// Value kinds a settings store can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    Text(String),
    TextList(Vec<String>),
    Integer(i64),
}

/// Error type for the persistence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    Busy,
    DriverError,
}

/// Key/value storage for settings
pub trait SettingsStore {
    /// Get the value stored under `key`
    fn read(&self, key: &str) -> Option<StoredValue>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: StoredValue) -> Result<(), PersistenceError>;
}

/// In-memory settings store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, StoredValue>,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, key: &str) -> Option<StoredValue> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: StoredValue) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Write every configuration field to the store
///
/// All fields are attempted; the first failure is returned.
pub fn save_settings<S: SettingsStore + ?Sized>(
    store: &mut S,
    config: &Configuration,
) -> Result<(), PersistenceError> {
    let colors = config
        .colors
        .iter()
        .map(|&color| to_hex(color).as_str().to_string())
        .collect();
    let entries = [
        (KEY_MODE, StoredValue::Text(config.mode.as_str().to_string())),
        (KEY_COLORS, StoredValue::TextList(colors)),
        (KEY_SPEED, StoredValue::Integer(i64::from(config.speed))),
        (KEY_DELAY, StoredValue::Integer(i64::from(config.delay))),
        (
            KEY_BRIGHTNESS,
            StoredValue::Integer(i64::from(config.brightness)),
        ),
    ];

    let mut result = Ok(());
    for (key, value) in entries {
        if let Err(e) = store.write(key, value) {
            #[cfg(feature = "log")]
            log::warn!("settings: failed to write {}: {:?}", key, e);
            result = result.and(Err(e));
        }
    }
    result
}

/// Load a configuration, falling back to defaults field by field
pub fn load_settings<S: SettingsStore + ?Sized>(store: &S) -> Configuration {
    let mut config = Configuration::default();

    if let Some(mode) = read_mode(store) {
        config.mode = mode;
    }
    if let Some(colors) = read_colors(store) {
        config.colors = colors;
    }
    if let Some(speed) = read_percentage(store, KEY_SPEED) {
        config.speed = speed;
    }
    if let Some(delay) = read_percentage(store, KEY_DELAY) {
        config.delay = delay;
    }
    if let Some(brightness) = read_percentage(store, KEY_BRIGHTNESS) {
        config.brightness = brightness;
    }

    config.colors.truncate(config.mode.max_colors());
    config
}

fn read_mode<S: SettingsStore + ?Sized>(store: &S) -> Option<Mode> {
    match store.read(KEY_MODE)? {
        StoredValue::Text(name) => Mode::parse_from_str(&name),
        _ => None,
    }
}

/// Unparsable entries are skipped; at most ten colors are kept
fn read_colors<S: SettingsStore + ?Sized>(store: &S) -> Option<ColorList> {
    let StoredValue::TextList(entries) = store.read(KEY_COLORS)? else {
        return None;
    };
    let colors: ColorList = entries
        .iter()
        .filter_map(|entry| parse_hex(entry))
        .take(MAX_COLORS)
        .collect();
    if colors.is_empty() {
        #[cfg(feature = "log")]
        log::warn!("settings: no valid colors in {} entries", entries.len());
        return None;
    }
    Some(colors)
}

fn read_percentage<S: SettingsStore + ?Sized>(store: &S, key: &str) -> Option<u8> {
    let StoredValue::Integer(value) = store.read(key)? else {
        return None;
    };
    u8::try_from(value)
        .ok()
        .filter(|&value| value <= MAX_PARAMETER)
}
