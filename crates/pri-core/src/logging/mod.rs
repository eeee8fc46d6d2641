//! Console logging for the site script.
//!
//! Events go through `tracing`; [`ConsoleLayer`] formats each one as a
//! [`LogEntry`] and hands the line to a [`ConsoleSink`]. The browser crate
//! plugs in the developer console; tests plug in [`MemorySink`].
//!
//! ## Usage
//!
//! ```ignore
//! use pri_core::logging::ConsoleLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(tracing_subscriber::EnvFilter::new("info"))
//!     .with(ConsoleLayer::new(BrowserConsole));
//!
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{ConsoleLayer, ConsoleSink, MemorySink};
