//! Timer-driven effects.
//!
//! - [`debounce`]: collapse a burst of calls into one trailing call
//! - [`typewriter`]: reveal markup one character or one whole tag at a time
//! - [`border`]: per-frame hue/glow values for the org-card outline cycle

pub mod border;
pub mod debounce;
pub mod typewriter;

pub use border::{BorderCycle, BorderFrame};
pub use debounce::{debounce, Debounced, DEFAULT_DEBOUNCE_WAIT};
pub use typewriter::{play, Typewriter, TYPE_START_DELAY, TYPE_UNIT_DELAY};
