//! PRI Site - browser bindings
//!
//! Compiled to WebAssembly and loaded by the static pages. Binds the
//! `pri-core` coordinator to the page markup: every DOM event is routed to a
//! state transition, and every change notification is applied back as class
//! and style mutations.
//!
//! ## Startup
//!
//! 1. Read the optional `#site-config` JSON block
//! 2. Install the console logging layer
//! 3. Once the document is parsed, build the [`context::SiteContext`] and
//!    install every component; a component whose markup is missing stays
//!    inert without affecting the others

mod components;
mod config;
mod console;
mod context;
mod dom;
mod relay;
mod scheduler;

use std::rc::Rc;

use gloo::events::EventListener;
use pri_core::SiteConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let (config, config_error) = match config::load(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    console::init(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!("{}; using defaults", err);
    }

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| boot(config)).forget();
    } else {
        boot(config);
    }
    Ok(())
}

fn boot(config: SiteConfig) {
    match context::SiteContext::new(config) {
        Ok(ctx) => {
            let ctx = Rc::new(ctx);
            components::install_all(&ctx);
            tracing::info!(
                relay_configured = ctx.config.relay.is_configured(),
                "site script ready"
            );
        }
        Err(err) => tracing::error!("Failed to initialize site script: {:?}", err),
    }
}
