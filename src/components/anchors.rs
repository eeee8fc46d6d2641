//! Smooth scrolling for in-page anchors.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use pri_core::selectors::FRAGMENT_ANCHORS;
use pri_core::ScrollPlan;
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::context::SiteContext;
use crate::dom;

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    for anchor in dom::query_all(&ctx.document, FRAGMENT_ANCHORS)? {
        let state = Rc::clone(&ctx.view);
        let document = ctx.document.clone();
        let window = ctx.window.clone();
        let href_source = anchor.clone();

        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = href_source.get_attribute("href").unwrap_or_default();
                let routed = state
                    .borrow_mut()
                    .navigate(&href, |id| document.get_element_by_id(id).is_some());
                match routed {
                    Ok(None) => {}
                    Ok(Some(plan)) => {
                        event.prevent_default();
                        if let Err(err) = scroll_to(&window, &document, &plan) {
                            tracing::warn!(href = %href, "anchor scroll failed: {:?}", err);
                        }
                    }
                    Err(err) => {
                        event.prevent_default();
                        tracing::warn!("{}", err);
                    }
                }
            },
        )
        .forget();
    }
    Ok(())
}

fn scroll_to(window: &Window, document: &Document, plan: &ScrollPlan) -> Result<(), JsValue> {
    let Some(target) = document.get_element_by_id(&plan.target_id) else {
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(&plan.history_entry))
}
