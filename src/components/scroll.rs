//! Header shadow, scroll-to-top marker and the back-to-top button.

use std::rc::Rc;

use gloo::events::EventListener;
use pri_core::selectors::{markers, BACK_TO_TOP_ID, HEADER, SCROLL_TOP};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::context::{SharedView, SiteContext};
use crate::dom;

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let document = &ctx.document;
    let header = dom::query(document, HEADER)?.and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let scroll_top = dom::query(document, SCROLL_TOP)?;

    ctx.view.borrow_mut().scroll.subscribe(move |chrome| {
        if let Some(header) = &header {
            dom::set_style(header, "box-shadow", Some(chrome.header_shadow()));
        }
        if let Some(scroll_top) = &scroll_top {
            dom::set_class(scroll_top, markers::ACTIVE, chrome.top_button_visible);
        }
    });

    // A reload can restore a scrolled position.
    sync(&ctx.window, &ctx.view);
    let state = Rc::clone(&ctx.view);
    let window = ctx.window.clone();
    // The tracker only emits when the chrome flips, so every event is cheap.
    EventListener::new(&ctx.window, "scroll", move |_| sync(&window, &state)).forget();

    if let Some(button) = document.get_element_by_id(BACK_TO_TOP_ID) {
        let window = ctx.window.clone();
        EventListener::new(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
        .forget();
    }

    Ok(())
}

fn sync(window: &web_sys::Window, state: &SharedView) {
    match window.scroll_y() {
        Ok(offset) => {
            state.borrow_mut().scroll.on_scroll(offset);
        }
        Err(err) => tracing::warn!("scroll offset unavailable: {:?}", err),
    }
}
