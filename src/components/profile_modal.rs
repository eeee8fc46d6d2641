//! Profile modal for the direction cards.
//!
//! The overlay is created here at startup when the markup lacks it, so every
//! later lookup finds exactly one instance.

use std::rc::Rc;

use gloo::events::EventListener;
use pri_core::profile::CARD_FLASH;
use pri_core::selectors::{
    markers, CARD_DESC, CARD_NAME, CARD_ROLE, MEMBER_CARDS, MODAL_CLOSE_ID, MODAL_OVERLAY_ID,
    MODAL_TITLE_ID, PRESIDENT_CARD,
};
use pri_core::{ModalEvent, ProfileSubject, Scheduler};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::context::SiteContext;
use crate::dom;

struct ModalParts {
    overlay: Element,
    title: Option<Element>,
    close: Option<Element>,
}

fn ensure_modal(document: &Document) -> Result<ModalParts, JsValue> {
    if let Some(overlay) = document.get_element_by_id(MODAL_OVERLAY_ID) {
        return Ok(ModalParts {
            overlay,
            title: document.get_element_by_id(MODAL_TITLE_ID),
            close: document.get_element_by_id(MODAL_CLOSE_ID),
        });
    }

    let overlay = document.create_element("div")?;
    overlay.set_id(MODAL_OVERLAY_ID);
    overlay.set_class_name(markers::MODAL_OVERLAY);
    overlay.set_attribute("aria-hidden", "true")?;

    let modal = document.create_element("div")?;
    modal.set_class_name(markers::MODAL_BODY);
    modal.set_attribute("role", "dialog")?;
    modal.set_attribute("aria-modal", "true")?;
    modal.set_attribute("aria-labelledby", MODAL_TITLE_ID)?;

    let close = document.create_element("button")?;
    close.set_id(MODAL_CLOSE_ID);
    close.set_class_name(markers::MODAL_CLOSE);
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Fermer")?;
    close.set_inner_html("&times;");

    let title = document.create_element("p")?;
    title.set_id(MODAL_TITLE_ID);

    modal.append_child(&close)?;
    modal.append_child(&title)?;
    overlay.append_child(&modal)?;
    dom::body(document)?.append_child(&overlay)?;

    tracing::debug!("profile modal created");
    Ok(ModalParts {
        overlay,
        title: Some(title),
        close: Some(close),
    })
}

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let document = &ctx.document;
    let parts = ensure_modal(document)?;

    {
        let overlay = parts.overlay.clone();
        let title = parts.title.clone();
        ctx.view.borrow_mut().modal.subscribe(move |event| {
            let visible = match event {
                ModalEvent::Shown(subject) => {
                    if let Some(title) = &title {
                        title.set_text_content(Some(&subject.sentence()));
                    }
                    true
                }
                ModalEvent::Hidden => false,
            };
            dom::set_class(&overlay, markers::MODAL_VISIBLE, visible);
            let hidden = if visible { "false" } else { "true" };
            if let Err(err) = overlay.set_attribute("aria-hidden", hidden) {
                tracing::warn!("aria-hidden update failed: {:?}", err);
            }
        });
    }

    if let Some(close) = &parts.close {
        let state = Rc::clone(&ctx.view);
        EventListener::new(close, "click", move |_| {
            state.borrow_mut().modal.close();
        })
        .forget();
    }

    {
        let state = Rc::clone(&ctx.view);
        let overlay = parts.overlay.clone();
        EventListener::new(&parts.overlay, "click", move |event| {
            if dom::is_target(&overlay, event.target().as_ref()) {
                state.borrow_mut().modal.close();
            }
        })
        .forget();
    }

    let mut cards = dom::query(document, PRESIDENT_CARD)?.into_iter().collect::<Vec<_>>();
    cards.extend(dom::query_all(document, MEMBER_CARDS)?);
    for card in cards {
        let state = Rc::clone(&ctx.view);
        let scheduler = Rc::clone(&ctx.scheduler);
        let source = card.clone();
        EventListener::new(&card, "click", move |_| {
            let subject = ProfileSubject::from_card(
                dom::child_text(&source, CARD_NAME).as_deref(),
                dom::child_text(&source, CARD_ROLE).as_deref(),
                dom::child_text(&source, CARD_DESC).as_deref(),
            );
            state.borrow_mut().modal.show(subject);

            dom::set_class(&source, markers::CARD_FLASH, true);
            let flashed = source.clone();
            scheduler.after(
                CARD_FLASH,
                Box::new(move || dom::set_class(&flashed, markers::CARD_FLASH, false)),
            );
        })
        .forget();
    }

    Ok(())
}
