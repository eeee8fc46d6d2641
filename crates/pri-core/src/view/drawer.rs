//! Mobile navigation drawer.
//!
//! `Closed` (initial) ⇄ `Open`. Every open bumps a generation counter so a
//! delayed stagger can tell whether the drawer it was scheduled for is still
//! the one on screen.

use std::time::Duration;

use crate::events::{ListenerId, Listeners};

/// Delay between an open and the stagger delays being assigned.
pub const STAGGER_SETTLE: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// What closed the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
    NavLink,
    /// In-page anchor navigation closes the drawer first
    Anchor,
}

/// Emitted after a transition actually changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Opened { generation: u64 },
    Closed { trigger: CloseTrigger },
}

/// Class markers derived from the drawer state.
///
/// `drawer_open`, `backdrop_visible`, `body_locked` and `hamburger_toggled`
/// are always equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerMarkers {
    pub drawer_open: bool,
    pub backdrop_visible: bool,
    pub body_locked: bool,
    pub hamburger_toggled: bool,
}

impl DrawerMarkers {
    pub fn for_state(state: DrawerState) -> Self {
        let open = state == DrawerState::Open;
        Self {
            drawer_open: open,
            backdrop_visible: open,
            body_locked: open,
            hamburger_toggled: open,
        }
    }
}

/// Owner of the drawer state.
#[derive(Debug, Default)]
pub struct Drawer {
    state: DrawerState,
    generation: u64,
    listeners: Listeners<DrawerEvent>,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&DrawerEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Open the drawer. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        if self.state == DrawerState::Open {
            return false;
        }
        self.state = DrawerState::Open;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "drawer opened");
        self.listeners.emit(&DrawerEvent::Opened {
            generation: self.generation,
        });
        true
    }

    /// Close the drawer. Idempotent; returns false if it was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if self.state == DrawerState::Closed {
            return false;
        }
        self.state = DrawerState::Closed;
        tracing::debug!(?trigger, "drawer closed");
        self.listeners.emit(&DrawerEvent::Closed { trigger });
        true
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    pub fn markers(&self) -> DrawerMarkers {
        DrawerMarkers::for_state(self.state)
    }

    /// True while the drawer is still open from the given opening.
    pub fn is_open_since(&self, generation: u64) -> bool {
        self.is_open() && self.generation == generation
    }
}

/// Map a key name to a close trigger.
pub fn close_trigger_for_key(key: &str) -> Option<CloseTrigger> {
    (key == "Escape").then_some(CloseTrigger::Escape)
}

/// Transition delay in seconds for the drawer item at `index`.
pub fn stagger_delay(index: usize) -> f64 {
    0.04 + index as f64 * 0.08
}

/// CSS `transition-delay` value for the drawer item at `index`.
pub fn stagger_delay_css(index: usize) -> String {
    format!("{:.2}s", stagger_delay(index))
}
