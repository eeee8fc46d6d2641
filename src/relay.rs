//! EmailJS binding.
//!
//! The EmailJS browser SDK is loaded by the page as the `emailjs` global. A
//! missing global surfaces as an exception from `init`, which the
//! coordinator turns into the mail-client fallback.

use futures::future::{FutureExt, LocalBoxFuture};
use pri_core::{EmailRelay, RelayError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = init)]
    fn emailjs_init(user_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &str,
    ) -> Result<js_sys::Promise, JsValue>;
}

pub struct EmailJsRelay;

impl EmailRelay for EmailJsRelay {
    fn init(&self, user_id: &str) -> Result<(), RelayError> {
        emailjs_init(user_id).map_err(|err| RelayError::Exception(describe(&err)))
    }

    fn send_form<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        form_selector: &'a str,
    ) -> LocalBoxFuture<'a, Result<(), RelayError>> {
        async move {
            let promise = emailjs_send_form(service_id, template_id, form_selector)
                .map_err(|err| RelayError::Exception(describe(&err)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| RelayError::Rejected(describe(&err)))
        }
        .boxed_local()
    }
}

/// Best-effort text for a thrown value or rejection reason.
fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
