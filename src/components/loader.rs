//! Loader overlay: shown on startup and before opening the news page.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use pri_core::navigation::{is_deferred_navigation, LOADER_DISPLAY};
use pri_core::selectors::{LINKS, LOADER_OVERLAY_ID};
use pri_core::Scheduler;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::context::SiteContext;
use crate::dom;

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let Some(overlay) = ctx
        .document
        .get_element_by_id(LOADER_OVERLAY_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    {
        let overlay = overlay.clone();
        ctx.scheduler.after(
            LOADER_DISPLAY,
            Box::new(move || dom::set_style(&overlay, "display", Some("none"))),
        );
    }

    for link in dom::query_all(&ctx.document, LINKS)? {
        let href = link.get_attribute("href").unwrap_or_default();
        if !is_deferred_navigation(&href) {
            continue;
        }
        let overlay = overlay.clone();
        let scheduler = Rc::clone(&ctx.scheduler);
        let window = ctx.window.clone();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                dom::set_style(&overlay, "display", Some("flex"));
                let window = window.clone();
                let href = href.clone();
                scheduler.after(
                    LOADER_DISPLAY,
                    Box::new(move || {
                        if let Err(err) = window.location().set_href(&href) {
                            tracing::error!(href = %href, "navigation failed: {:?}", err);
                        }
                    }),
                );
            },
        )
        .forget();
    }
    Ok(())
}
