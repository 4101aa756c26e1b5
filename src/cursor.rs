//! Streaming cursor over the current frame sequence.
//!
//! A single-writer, single-reader holder built on `critical-section`. The
//! writer synthesizes a new sequence outside of any critical section and
//! then swaps it in; the reader copies one frame and advances the index.
//! Both critical sections are O(1).

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::Configuration;
use crate::effect::synthesize;
use crate::frame::{Frame, FrameSequence};

#[derive(Debug)]
struct CursorState {
    frames: Option<FrameSequence>,
    /// Always `< frames.len()` when `frames` is set
    index: usize,
}

/// Current sequence plus read position, shared between threads.
pub struct FrameCursor {
    state: Mutex<RefCell<CursorState>>,
}

impl FrameCursor {
    /// Create a cursor without a sequence.
    ///
    /// Reads return [`Frame::BLACK`] until the first sequence is installed.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(CursorState {
                frames: None,
                index: 0,
            })),
        }
    }

    /// Create a cursor already holding the sequence for `config`.
    pub fn with_configuration(config: &Configuration) -> Self {
        let cursor = Self::new();
        cursor.regenerate(config);
        cursor
    }

    /// Synthesize the sequence for `config` and install it.
    pub fn regenerate(&self, config: &Configuration) {
        let frames = synthesize(config);
        self.install(frames);
    }

    /// Replace the current sequence and rewind to its first frame.
    ///
    /// An empty sequence is ignored. The superseded sequence is released
    /// after the critical section, or later by a reader still holding a
    /// [`snapshot`](Self::snapshot) of it.
    pub fn install(&self, frames: FrameSequence) {
        if frames.is_empty() {
            return;
        }
        #[cfg(feature = "log")]
        log::debug!("cursor: installing {} frames", frames.len());

        let previous = critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            state.index = 0;
            state.frames.replace(frames)
        });
        drop(previous);
    }

    /// Read the frame under the cursor and advance, wrapping at the end.
    pub fn next_frame(&self) -> Frame {
        critical_section::with(|cs| {
            let mut guard = self.state.borrow(cs).borrow_mut();
            let state = &mut *guard;
            let Some(frames) = state.frames.as_ref() else {
                return Frame::BLACK;
            };
            let frame = frames[state.index];
            state.index = (state.index + 1) % frames.len();
            frame
        })
    }

    /// Current sequence, if any. Holding it does not block the writer.
    pub fn snapshot(&self) -> Option<FrameSequence> {
        critical_section::with(|cs| self.state.borrow(cs).borrow().frames.clone())
    }

    /// Length of the current sequence (0 before the first install)
    pub fn len(&self) -> usize {
        critical_section::with(|cs| {
            self.state
                .borrow(cs)
                .borrow()
                .frames
                .as_ref()
                .map_or(0, |f| f.len())
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the frame the next read returns
    pub fn position(&self) -> usize {
        critical_section::with(|cs| self.state.borrow(cs).borrow().index)
    }
}

impl Default for FrameCursor {
    fn default() -> Self {
        Self::new()
    }
}
