//! Contact form submission.
//!
//! ```text
//!  Idle ──submit──▶ Pending ──┬── relay ok ─────────────▶ Success ──5s──▶ Idle
//!                             ├── placeholders ─┐
//!                             ├── rejected ─────┤
//!                             ├── exception ────┼─ mailto ▶ Error
//!                             └── timeout ──────┘
//! ```
//!
//! Every failure composes the same `mailto:` link from the submitted fields.

pub mod coordinator;
pub mod mailto;
pub mod relay;

pub use coordinator::{
    ContactCoordinator, Feedback, FeedbackTone, SubmissionFailure, SubmissionReport,
    SubmissionState, SUCCESS_DISPLAY,
};
pub use mailto::{encode_component, FormField, FormSnapshot, MailtoComposer};
pub use relay::EmailRelay;
