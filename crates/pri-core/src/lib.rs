//! PRI Site Core Library
//!
//! View-state coordinator for the party website's interactive behavior.
//!
//! ## Overview
//!
//! The page is static markup; this crate decides what every click, key press,
//! scroll and timer should change, and the browser crate applies it. Nothing
//! here touches the DOM, so every rule is tested natively.
//!
//! - **View state** ([`site::ViewState`]): drawer, desktop menu, scroll
//!   chrome, active section and the profile modal, each emitting change
//!   events through [`events::Listeners`]
//! - **Navigation** ([`navigation`]): in-page anchor routing and the deferred
//!   news-page link
//! - **Contact** ([`contact`]): relay submission with a timeout and a
//!   `mailto:` fallback
//! - **Animator** ([`animator`]): debounce, typewriter reveal, border cycle
//!   over a [`schedule::Scheduler`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use pri_core::{ViewState, SiteConfig, ContactCoordinator};
//!
//! let config = SiteConfig::default();
//! let mut view = ViewState::new(false);
//! view.drawer.subscribe(|event| apply_drawer_classes(event));
//!
//! view.drawer.open();
//! let plan = view.navigate("#vision", |id| document_has(id))?;
//!
//! let contact = ContactCoordinator::new(&config);
//! let report = contact.submit(&relay, &form, timeout).await?;
//! ```

pub mod animator;
pub mod config;
pub mod contact;
pub mod error;
pub mod events;
pub mod logging;
pub mod navigation;
pub mod profile;
pub mod schedule;
pub mod selectors;
pub mod site;
pub mod view;

// Re-exports
pub use config::{MailFallbackConfig, RelayConfig, SiteConfig};
pub use contact::{
    ContactCoordinator, EmailRelay, FormSnapshot, MailtoComposer, SubmissionFailure,
    SubmissionReport, SubmissionState,
};
pub use error::{RelayError, SiteError, SiteResult};
pub use events::{ListenerId, Listeners};
pub use navigation::ScrollPlan;
pub use profile::{ModalEvent, ProfileModal, ProfileSubject};
pub use schedule::{ManualScheduler, Scheduler, TimerId};
pub use site::ViewState;
