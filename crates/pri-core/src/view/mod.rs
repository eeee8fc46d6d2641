//! View-state coordinator.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Drawer         Closed ⇄ Open        → DrawerEvent           │
//! │  DesktopMenu    active / inactive    → closes only           │
//! │  ScrollTracker  offset > 100px       → ScrollChrome          │
//! │  SectionTracker intersecting set     → ActiveSectionChanged  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only [`SectionTracker`] writes the active nav-link highlight. Drawer and
//! desktop-menu clicks close their panels and leave the highlight alone, so
//! the two never race.

pub mod drawer;
pub mod menu;
pub mod scroll;
pub mod sections;

pub use drawer::{
    close_trigger_for_key, stagger_delay, stagger_delay_css, CloseTrigger, Drawer, DrawerEvent,
    DrawerMarkers, DrawerState, STAGGER_SETTLE,
};
pub use menu::DesktopMenu;
pub use scroll::{ScrollChrome, ScrollTracker, SCROLL_THRESHOLD};
pub use sections::{
    nav_link_targets, ActiveSectionChanged, SectionTracker, Visibility, SECTION_ROOT_MARGIN,
    SECTION_THRESHOLD,
};
