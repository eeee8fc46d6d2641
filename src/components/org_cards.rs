//! Endless border color cycle on the organization cards.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use pri_core::animator::BorderCycle;
use pri_core::selectors::ORG_CARDS;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::context::SiteContext;
use crate::dom;

struct BorderLoop {
    cards: Vec<HtmlElement>,
    cycle: RefCell<BorderCycle>,
    // Keeps the next frame request alive.
    frame: RefCell<Option<AnimationFrame>>,
}

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let cards = dom::query_all_html(&ctx.document, ORG_CARDS)?;
    if cards.is_empty() {
        return Ok(());
    }
    request_frame(Rc::new(BorderLoop {
        cards,
        cycle: RefCell::new(BorderCycle::new()),
        frame: RefCell::new(None),
    }));
    Ok(())
}

fn request_frame(state: Rc<BorderLoop>) {
    let next = Rc::clone(&state);
    let handle = request_animation_frame(move |_| {
        let frame = next.cycle.borrow_mut().next_frame();
        let color = frame.border_color();
        let shadow = frame.box_shadow();
        for card in &next.cards {
            dom::set_style(card, "border-color", Some(&color));
            dom::set_style(card, "box-shadow", Some(&shadow));
        }
        request_frame(next);
    });
    *state.frame.borrow_mut() = Some(handle);
}
