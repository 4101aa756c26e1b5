//! Device link: streams frames from a [`FrameCursor`] into a [`Transport`].
//!
//! Portable and free of async or platform timers. Each [`StreamLink::tick`]
//! performs one step of the connection state machine and returns how long
//! the caller should wait before the next one.
//!
//! ```text
//! Disconnected --(retry deadline)--> Connecting --(open ok)--> Connected
//!      ^                                  |                        |
//!      +-------(open failed, backoff)-----+                        |
//!      +------------------(write failed, retry now)---------------+
//! ```

use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::cursor::FrameCursor;

/// Delay between failed open attempts.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

/// Hardware transport for two-zone frames.
///
/// Implement this trait to support different devices. Retry and backoff are
/// handled by [`StreamLink`]; implementations only perform the I/O.
pub trait Transport {
    /// Open device handle
    type Handle;
    /// Write failure reason
    type Error: core::fmt::Debug;

    /// Open the device, `None` when absent
    fn open(&mut self) -> Option<Self::Handle>;

    /// Send one frame
    fn write(
        &mut self,
        handle: &mut Self::Handle,
        upper: Rgb,
        lower: Rgb,
    ) -> Result<(), Self::Error>;

    /// Release the device
    fn close(&mut self, handle: Self::Handle);
}

/// Link timing configuration
#[derive(Debug, Clone, Copy)]
pub struct LinkConfig {
    /// Wait after a failed open
    pub backoff: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// Connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Connecting,
    Connected,
}

/// Result of a link tick.
#[derive(Debug, Clone, Copy)]
pub struct LinkTick {
    /// State after the tick
    pub state: LinkState,
    /// Whether the state changed during this tick
    pub changed: bool,
    /// How long to wait until the next tick (zero while streaming)
    pub sleep_duration: Duration,
}

/// Connection state machine that feeds cursor frames to a transport.
pub struct StreamLink<'a, T: Transport> {
    transport: T,
    cursor: &'a FrameCursor,
    config: LinkConfig,
    handle: Option<T::Handle>,
    state: LinkState,
    retry_at: Instant,
}

impl<'a, T: Transport> StreamLink<'a, T> {
    /// Create a new link.
    ///
    /// Uses [`DEFAULT_BACKOFF`] between open attempts.
    pub fn new(transport: T, cursor: &'a FrameCursor) -> Self {
        Self::with_config(transport, cursor, LinkConfig::default())
    }

    pub fn with_config(transport: T, cursor: &'a FrameCursor, config: LinkConfig) -> Self {
        Self {
            transport,
            cursor,
            config,
            handle: None,
            state: LinkState::Disconnected,
            retry_at: Instant::from_millis(0),
        }
    }

    /// Perform one step and return timing information.
    ///
    /// The caller is responsible for waiting `sleep_duration` before calling
    /// `tick` again. While connected the link never asks to wait; cadence is
    /// set by the transport's own write latency.
    pub fn tick(&mut self, now: Instant) -> LinkTick {
        let previous = self.state;
        let sleep_duration = match self.state {
            LinkState::Disconnected => self.wait_for_retry(now),
            LinkState::Connecting => self.connect(now),
            LinkState::Connected => self.stream(now),
        };
        LinkTick {
            state: self.state,
            changed: self.state != previous,
            sleep_duration,
        }
    }

    fn wait_for_retry(&mut self, now: Instant) -> Duration {
        if now >= self.retry_at {
            self.state = LinkState::Connecting;
            return Duration::from_ticks(0);
        }
        self.retry_at - now
    }

    fn connect(&mut self, now: Instant) -> Duration {
        if let Some(handle) = self.transport.open() {
            #[cfg(feature = "log")]
            log::info!("link: device connected");
            self.handle = Some(handle);
            self.state = LinkState::Connected;
            return Duration::from_ticks(0);
        }
        self.state = LinkState::Disconnected;
        self.retry_at = now + self.config.backoff;
        self.config.backoff
    }

    fn stream(&mut self, now: Instant) -> Duration {
        let Some(handle) = self.handle.as_mut() else {
            self.state = LinkState::Disconnected;
            self.retry_at = now;
            return Duration::from_ticks(0);
        };
        let frame = self.cursor.next_frame();
        if let Err(_e) = self.transport.write(handle, frame.upper, frame.lower) {
            #[cfg(feature = "log")]
            log::warn!("link: write failed, reconnecting: {:?}", _e);
            self.close_handle();
            self.retry_at = now;
        }
        Duration::from_ticks(0)
    }

    fn close_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.transport.close(handle);
        }
        self.state = LinkState::Disconnected;
    }

    /// Close the device (if open) and retry on the next tick.
    pub fn disconnect(&mut self, now: Instant) {
        self.close_handle();
        self.retry_at = now;
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == LinkState::Connected
    }

    /// Get a reference to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: Transport> Drop for StreamLink<'_, T> {
    fn drop(&mut self) {
        self.close_handle();
    }
}
