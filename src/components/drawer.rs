//! Side drawer: hamburger, close button, backdrop, Escape and drawer links.

use std::rc::Rc;

use gloo::events::EventListener;
use pri_core::selectors::{
    markers, DRAWER_ANCHORS, DRAWER_BACKDROP_ID, DRAWER_CLOSE_ID, DRAWER_ITEMS, HAMBURGER,
    SIDE_DRAWER_ID,
};
use pri_core::view::{
    stagger_delay_css, CloseTrigger, DrawerEvent, DrawerMarkers, DrawerState, STAGGER_SETTLE,
};
use pri_core::Scheduler;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::context::SiteContext;
use crate::dom;

struct DrawerView {
    drawer: Option<Element>,
    backdrop: Option<Element>,
    hamburger: Option<Element>,
    body: HtmlElement,
    items: Rc<Vec<HtmlElement>>,
}

impl DrawerView {
    fn apply(&self, markers: DrawerMarkers) {
        if let Some(drawer) = &self.drawer {
            dom::set_class(drawer, markers::DRAWER_OPEN, markers.drawer_open);
        }
        if let Some(backdrop) = &self.backdrop {
            dom::set_class(backdrop, markers::BACKDROP_VISIBLE, markers.backdrop_visible);
        }
        if let Some(hamburger) = &self.hamburger {
            dom::set_class(hamburger, markers::HAMBURGER_TOGGLED, markers.hamburger_toggled);
        }
        dom::set_class(&self.body, markers::BODY_MENU_OPEN, markers.body_locked);
    }
}

fn reset_stagger(items: &[HtmlElement]) {
    for item in items {
        dom::set_style(item, "transition-delay", None);
    }
}

fn apply_stagger(items: &[HtmlElement]) {
    for (index, item) in items.iter().enumerate() {
        dom::set_style(item, "transition-delay", Some(&stagger_delay_css(index)));
    }
}

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let document = &ctx.document;
    let view = DrawerView {
        drawer: document.get_element_by_id(SIDE_DRAWER_ID),
        backdrop: document.get_element_by_id(DRAWER_BACKDROP_ID),
        hamburger: dom::query(document, HAMBURGER)?,
        body: dom::body(document)?,
        items: Rc::new(dom::query_all_html(document, DRAWER_ITEMS)?),
    };

    let hamburger = view.hamburger.clone();
    let backdrop = view.backdrop.clone();

    // Rendering
    {
        let weak_view = Rc::downgrade(&ctx.view);
        let scheduler = Rc::clone(&ctx.scheduler);
        ctx.view.borrow_mut().drawer.subscribe(move |event| {
            reset_stagger(&view.items);
            match *event {
                DrawerEvent::Opened { generation } => {
                    view.apply(DrawerMarkers::for_state(DrawerState::Open));
                    let weak_view = weak_view.clone();
                    let items = Rc::clone(&view.items);
                    scheduler.after(
                        STAGGER_SETTLE,
                        Box::new(move || {
                            let Some(view) = weak_view.upgrade() else {
                                return;
                            };
                            if view.borrow().drawer.is_open_since(generation) {
                                apply_stagger(&items);
                            }
                        }),
                    );
                }
                DrawerEvent::Closed { .. } => {
                    view.apply(DrawerMarkers::for_state(DrawerState::Closed));
                }
            }
        });
    }

    if let Some(hamburger) = &hamburger {
        let state = Rc::clone(&ctx.view);
        EventListener::new(hamburger, "click", move |event| {
            event.stop_propagation();
            state.borrow_mut().drawer.open();
        })
        .forget();
    }

    if let Some(close) = document.get_element_by_id(DRAWER_CLOSE_ID) {
        let state = Rc::clone(&ctx.view);
        EventListener::new(&close, "click", move |_| {
            state.borrow_mut().drawer.close(CloseTrigger::CloseButton);
        })
        .forget();
    }

    if let Some(backdrop) = &backdrop {
        let state = Rc::clone(&ctx.view);
        EventListener::new(backdrop, "click", move |_| {
            state.borrow_mut().drawer.close(CloseTrigger::Backdrop);
        })
        .forget();
    }

    {
        let state = Rc::clone(&ctx.view);
        EventListener::new(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                state.borrow_mut().key_pressed(&event.key());
            }
        })
        .forget();
    }

    for link in dom::query_all(document, DRAWER_ANCHORS)? {
        let state = Rc::clone(&ctx.view);
        EventListener::new(&link, "click", move |_| {
            state.borrow_mut().drawer_link_clicked();
        })
        .forget();
    }

    Ok(())
}
