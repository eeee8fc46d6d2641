//! Active nav link tracking through a single intersection observer.

use std::rc::Rc;

use gloo::events::EventListener;
use pri_core::animator::{debounce, DEFAULT_DEBOUNCE_WAIT};
use pri_core::selectors::{markers, NAV_FRAGMENT_LINKS, TRACKED_SECTIONS};
use pri_core::view::{nav_link_targets, Visibility, SECTION_ROOT_MARGIN, SECTION_THRESHOLD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::context::{SharedView, SiteContext};
use crate::dom;

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let document = &ctx.document;
    let sections = dom::query_all(document, TRACKED_SECTIONS)?;
    if sections.is_empty() {
        return Ok(());
    }
    let links = dom::query_all(document, NAV_FRAGMENT_LINKS)?;

    let highlight = {
        let mut view = ctx.view.borrow_mut();
        for section in &sections {
            view.sections.register(section.id());
        }
        view.sections.subscribe(move |change| {
            for link in &links {
                let href = link.get_attribute("href").unwrap_or_default();
                dom::set_class(link, markers::ACTIVE, nav_link_targets(&href, &change.current));
            }
        })
    };
    let measured: Rc<Vec<(String, Element)>> =
        Rc::new(sections.iter().map(|section| (section.id(), section.clone())).collect());

    let state = Rc::clone(&ctx.view);
    let tops = Rc::clone(&measured);
    let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let mut view = state.borrow_mut();
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let id = entry.target().id();
            view.sections.observe(
                &id,
                Visibility {
                    intersecting: entry.is_intersecting(),
                    top: entry.bounding_client_rect().top(),
                },
            );
        }
        drop(view);
        resettle(&state, &tops);
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SECTION_THRESHOLD));
    options.set_root_margin(SECTION_ROOT_MARGIN);
    let callback = on_intersect.as_ref().unchecked_ref();
    let observer = match IntersectionObserver::new_with_options(callback, &options) {
        Ok(observer) => observer,
        Err(err) => {
            ctx.view.borrow_mut().sections.unsubscribe(highlight);
            return Err(err);
        }
    };
    for section in &sections {
        observer.observe(section);
    }
    on_intersect.forget();

    // Observer callbacks stop once no threshold is crossed, so long sections
    // are re-measured after scrolling comes to rest.
    let state = Rc::clone(&ctx.view);
    let rest = debounce(Rc::clone(&ctx.scheduler), DEFAULT_DEBOUNCE_WAIT, move |()| {
        resettle(&state, &measured);
    });
    EventListener::new(&ctx.window, "scroll", move |_| rest.call(())).forget();

    tracing::debug!(sections = sections.len(), "tracking sections");
    Ok(())
}

fn resettle(state: &SharedView, sections: &[(String, Element)]) {
    let mut view = state.borrow_mut();
    view.sections.refresh_tops(|id| {
        sections
            .iter()
            .find(|(known, _)| known.as_str() == id)
            .map(|(_, element)| element.get_bounding_client_rect().top())
    });
    view.sections.settle();
}
