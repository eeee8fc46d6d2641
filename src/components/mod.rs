//! Page components.
//!
//! Each module binds one behavior to its markup hooks. Installation is
//! independent: a failing installer is logged and the rest still run.

mod anchors;
mod contact;
mod drawer;
mod hero;
mod loader;
mod menu;
mod org_cards;
mod profile_modal;
mod scroll;
mod sections;

use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::context::SiteContext;

type Installer = fn(&Rc<SiteContext>) -> Result<(), JsValue>;

const INSTALLERS: &[(&str, Installer)] = &[
    ("loader", loader::install),
    ("drawer", drawer::install),
    ("menu", menu::install),
    ("scroll", scroll::install),
    ("sections", sections::install),
    ("anchors", anchors::install),
    ("hero", hero::install),
    ("org-cards", org_cards::install),
    ("contact", contact::install),
    ("profile-modal", profile_modal::install),
];

pub fn install_all(ctx: &Rc<SiteContext>) {
    for (name, install) in INSTALLERS {
        match install(ctx) {
            Ok(()) => tracing::debug!(component = *name, "installed"),
            Err(err) => tracing::error!(component = *name, "install failed: {:?}", err),
        }
    }
}
