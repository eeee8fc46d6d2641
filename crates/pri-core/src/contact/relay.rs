//! Email relay boundary.

use futures::future::LocalBoxFuture;

use crate::error::RelayError;

/// Third-party email relay, treated as opaque.
///
/// Futures are not `Send`: the relay lives on the browser's single thread.
pub trait EmailRelay {
    /// Initialize the relay with the account identifier.
    fn init(&self, user_id: &str) -> Result<(), RelayError>;

    /// Send the form matched by `form_selector` through a service/template.
    fn send_form<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        form_selector: &'a str,
    ) -> LocalBoxFuture<'a, Result<(), RelayError>>;
}
