//! Scroll-derived header and back-to-top state.

use crate::events::{ListenerId, Listeners};

/// Offset (px) past which the header is elevated and the top button shown.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Pure function of the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChrome {
    pub header_elevated: bool,
    pub top_button_visible: bool,
}

impl ScrollChrome {
    pub fn from_offset(offset_y: f64) -> Self {
        let past = offset_y > SCROLL_THRESHOLD;
        Self {
            header_elevated: past,
            top_button_visible: past,
        }
    }

    /// CSS `box-shadow` for the header.
    pub fn header_shadow(&self) -> &'static str {
        if self.header_elevated {
            "0 5px 20px rgba(0,0,0,0.1)"
        } else {
            "none"
        }
    }
}

/// Tracks the chrome and notifies only when it flips.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    chrome: ScrollChrome,
    listeners: Listeners<ScrollChrome>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ScrollChrome) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Feed a new scroll offset. Returns the new chrome if it changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> Option<ScrollChrome> {
        let next = ScrollChrome::from_offset(offset_y);
        if next == self.chrome {
            return None;
        }
        self.chrome = next;
        self.listeners.emit(&next);
        Some(next)
    }

    pub fn chrome(&self) -> ScrollChrome {
        self.chrome
    }
}
