#![no_std]

extern crate alloc;

pub mod color;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod effect;
pub mod frame;
pub mod link;
pub mod mode;
pub mod settings;

pub use color::{BLACK, PRESET_COLORS, Rgb};
pub use config::{ColorList, ConfigError, Configuration, MAX_COLORS, Parameter};
pub use controller::LightController;
pub use cursor::FrameCursor;
pub use effect::{EffectSlot, synthesize};
pub use frame::{Frame, FrameSequence};
pub use link::{LinkConfig, LinkState, LinkTick, StreamLink, Transport};
pub use mode::Mode;
pub use settings::{MemoryStore, PersistenceError, SettingsStore, StoredValue};
pub use embassy_time::{Duration, Instant};
