//! Desktop navigation menu.
//!
//! Only ever closes: a link click or a click outside both the menu and the
//! hamburger removes the `active` marker.

use std::rc::Rc;

use gloo::events::EventListener;
use pri_core::selectors::{markers, HAMBURGER, NAV_LINKS, NAV_LINK_ANCHORS};
use wasm_bindgen::JsValue;

use crate::context::SiteContext;
use crate::dom;

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let document = &ctx.document;
    let Some(menu) = dom::query(document, NAV_LINKS)? else {
        tracing::debug!("no desktop menu on this page");
        return Ok(());
    };
    let hamburger = dom::query(document, HAMBURGER)?;

    for link in dom::query_all(document, NAV_LINK_ANCHORS)? {
        let state = Rc::clone(&ctx.view);
        let menu = menu.clone();
        EventListener::new(&link, "click", move |_| {
            if state.borrow_mut().menu.on_link_click() {
                dom::set_class(&menu, markers::ACTIVE, false);
            }
        })
        .forget();
    }

    let state = Rc::clone(&ctx.view);
    EventListener::new(document, "click", move |event| {
        let target = event.target();
        let inside_menu = dom::contains_target(&menu, target.as_ref());
        let inside_hamburger = hamburger
            .as_ref()
            .map_or(false, |h| dom::contains_target(h, target.as_ref()));
        if state
            .borrow_mut()
            .menu
            .on_document_click(inside_menu, inside_hamburger)
        {
            dom::set_class(&menu, markers::ACTIVE, false);
        }
    })
    .forget();

    Ok(())
}
