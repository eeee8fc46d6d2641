//! Contact form: relay submission with mail-client fallback.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::future::TimeoutFuture;
use pri_core::contact::SUCCESS_DISPLAY;
use pri_core::selectors::{CONTACT_FORM_ID, CONTACT_SUBMIT_ID, FORM_FEEDBACK};
use pri_core::{FormSnapshot, Scheduler, SubmissionReport, SubmissionState};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::context::SiteContext;
use crate::dom;
use crate::relay::EmailJsRelay;

/// Elements the submission flow touches after the submit event.
#[derive(Clone)]
struct FormParts {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
}

impl FormParts {
    fn set_busy(&self, busy: bool) {
        if let Some(submit) = &self.submit {
            submit.set_disabled(busy);
        }
    }
}

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let document = &ctx.document;
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let parts = FormParts {
        submit: document
            .get_element_by_id(CONTACT_SUBMIT_ID)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()),
        form: form.clone(),
    };

    if let Some(feedback) = form
        .query_selector(FORM_FEEDBACK)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        ctx.contact.subscribe(move |state| render_feedback(&feedback, state));
    }

    let ctx = Rc::clone(ctx);
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            if ctx.contact.is_in_flight() {
                tracing::debug!("submission already pending");
                return;
            }
            let snapshot = snapshot(&parts.form).unwrap_or_else(|err| {
                tracing::warn!("could not read form fields: {:?}", err);
                FormSnapshot::new()
            });

            parts.set_busy(true);
            let ctx = Rc::clone(&ctx);
            let parts = parts.clone();
            spawn_local(async move {
                let millis = u32::try_from(ctx.config.relay.send_timeout_ms).unwrap_or(u32::MAX);
                let timeout = TimeoutFuture::new(millis);
                match ctx.contact.submit(&EmailJsRelay, &snapshot, timeout).await {
                    Ok(report) => settle(&ctx, &parts, report),
                    Err(err) => tracing::warn!("{}", err),
                }
                parts.set_busy(false);
            });
        },
    )
    .forget();

    Ok(())
}

fn settle(ctx: &Rc<SiteContext>, parts: &FormParts, report: SubmissionReport) {
    if let Some(mailto) = &report.mailto {
        if let Err(err) = ctx.window.location().set_href(mailto) {
            tracing::error!("could not open mail client: {:?}", err);
        }
    }
    if report.reset_form {
        parts.form.reset();
    }
    if report.state == SubmissionState::Success {
        let contact = Rc::clone(&ctx.contact);
        let sequence = report.sequence;
        ctx.scheduler.after(
            SUCCESS_DISPLAY,
            Box::new(move || {
                contact.expire_success(sequence);
            }),
        );
    }
}

fn render_feedback(region: &HtmlElement, state: &SubmissionState) {
    match state.feedback() {
        Some(feedback) => {
            region.set_text_content(Some(feedback.message));
            region.set_class_name(feedback.tone.class());
            dom::set_style(region, "display", Some("block"));
            let animation = *state == SubmissionState::Success;
            dom::set_style(
                region,
                "animation",
                animation.then_some("slideInDown 0.5s ease-out"),
            );
        }
        None => dom::set_style(region, "display", Some("none")),
    }
}

/// Named fields in document order. File inputs contribute an empty value.
fn snapshot(form: &HtmlFormElement) -> Result<FormSnapshot, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut snapshot = FormSnapshot::new();
    if let Some(entries) = js_sys::try_iter(data.as_ref())? {
        for entry in entries {
            let pair = js_sys::Array::from(&entry?);
            snapshot.push(
                pair.get(0).as_string().unwrap_or_default(),
                pair.get(1).as_string().unwrap_or_default(),
            );
        }
    }
    Ok(snapshot)
}
