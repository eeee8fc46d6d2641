//! Submission state machine and relay/fallback routing.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;

use futures::future::{self, Either};

use crate::config::{RelayConfig, SiteConfig};
use crate::contact::mailto::{FormSnapshot, MailtoComposer};
use crate::contact::relay::EmailRelay;
use crate::error::{RelayError, SiteError, SiteResult};
use crate::events::{ListenerId, Listeners};

/// How long a success message stays up before reverting to `Idle`.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Why a submission ended up on the mail fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// Relay identifiers are still placeholders; the relay is never called
    Misconfigured,
    /// The relay settled with a rejection
    Rejected,
    /// The relay threw during init or send
    Exception,
    /// The relay did not settle within the configured timeout
    TimedOut,
}

/// State of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success,
    Error(SubmissionFailure),
}

impl SubmissionState {
    /// Message to render, or `None` when the feedback region is hidden.
    pub fn feedback(&self) -> Option<Feedback> {
        let (message, tone) = match self {
            SubmissionState::Idle => return None,
            SubmissionState::Pending => ("Envoi en cours…", FeedbackTone::Neutral),
            SubmissionState::Success => (
                "✓ Message envoyé avec succès — merci pour votre contact !",
                FeedbackTone::Success,
            ),
            SubmissionState::Error(SubmissionFailure::Misconfigured) => (
                "Ouverture du client mail (fallback). Pour un envoi automatique, \
                 renseignez vos identifiants EmailJS dans la configuration du site.",
                FeedbackTone::Error,
            ),
            SubmissionState::Error(SubmissionFailure::Rejected) => (
                "Échec de l'envoi automatique. Un fallback mail a été lancé.",
                FeedbackTone::Error,
            ),
            SubmissionState::Error(SubmissionFailure::Exception) => (
                "Erreur interne. Utilisation du client mail en fallback.",
                FeedbackTone::Error,
            ),
            SubmissionState::Error(SubmissionFailure::TimedOut) => (
                "Le service d'envoi ne répond pas. Un fallback mail a été lancé.",
                FeedbackTone::Error,
            ),
        };
        Some(Feedback { message, tone })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Neutral,
    Success,
    Error,
}

impl FeedbackTone {
    /// Class attribute for the feedback region.
    pub fn class(&self) -> &'static str {
        match self {
            FeedbackTone::Neutral => "form-feedback",
            FeedbackTone::Success => "form-feedback success",
            FeedbackTone::Error => "form-feedback error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub tone: FeedbackTone,
}

/// What the bindings must do once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Identifies this submission for [`ContactCoordinator::expire_success`]
    pub sequence: u64,
    pub state: SubmissionState,
    /// Mail-client link to open, present on every failure
    pub mailto: Option<String>,
    /// Clear the form fields (success only)
    pub reset_form: bool,
}

/// Routes a submission to the relay or to the mail client.
///
/// At most one submission is pending at a time.
pub struct ContactCoordinator {
    relay: RelayConfig,
    composer: MailtoComposer,
    state: Cell<SubmissionState>,
    sequence: Cell<u64>,
    listeners: RefCell<Listeners<SubmissionState>>,
}

impl ContactCoordinator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            relay: config.relay.clone(),
            composer: MailtoComposer::new(&config.mail),
            state: Cell::new(SubmissionState::Idle),
            sequence: Cell::new(0),
            listeners: RefCell::new(Listeners::new()),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&SubmissionState) + 'static) -> ListenerId {
        self.listeners.borrow_mut().subscribe(callback)
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.get() == SubmissionState::Pending
    }

    /// Submit `form`.
    ///
    /// `timeout` bounds the relay call; pass a timer future for the
    /// configured [`RelayConfig::send_timeout`]. Fails only when another
    /// submission is still pending.
    pub async fn submit<R, T>(
        &self,
        relay: &R,
        form: &FormSnapshot,
        timeout: T,
    ) -> SiteResult<SubmissionReport>
    where
        R: EmailRelay + ?Sized,
        T: Future<Output = ()>,
    {
        if self.is_in_flight() {
            return Err(SiteError::SubmissionInFlight);
        }
        let sequence = self.sequence.get() + 1;
        self.sequence.set(sequence);
        self.transition(SubmissionState::Pending);

        if let Err(err) = self.relay.validate() {
            tracing::warn!(sequence, "{}; opening mail client instead", err);
            return Ok(self.fall_back(sequence, form, SubmissionFailure::Misconfigured));
        }

        match self.send(relay, timeout).await {
            Ok(()) => {
                tracing::info!(sequence, "contact message sent through relay");
                self.transition(SubmissionState::Success);
                Ok(SubmissionReport {
                    sequence,
                    state: SubmissionState::Success,
                    mailto: None,
                    reset_form: true,
                })
            }
            Err(failure) => Ok(self.fall_back(sequence, form, failure)),
        }
    }

    async fn send<R, T>(&self, relay: &R, timeout: T) -> Result<(), SubmissionFailure>
    where
        R: EmailRelay + ?Sized,
        T: Future<Output = ()>,
    {
        if let Err(err) = relay.init(&self.relay.user_id) {
            tracing::error!("{}", SiteError::from(err));
            return Err(SubmissionFailure::Exception);
        }

        let send = relay.send_form(
            &self.relay.service_id,
            &self.relay.template_id,
            &self.relay.form_selector,
        );
        futures::pin_mut!(timeout);

        match future::select(send, timeout).await {
            Either::Left((Ok(()), _)) => Ok(()),
            Either::Left((Err(err), _)) => {
                let failure = match err {
                    RelayError::Rejected(_) => SubmissionFailure::Rejected,
                    RelayError::Exception(_) => SubmissionFailure::Exception,
                };
                tracing::error!("{}", SiteError::from(err));
                Err(failure)
            }
            Either::Right(((), _)) => {
                tracing::error!("{}", SiteError::RelayTimeout(self.relay.send_timeout()));
                Err(SubmissionFailure::TimedOut)
            }
        }
    }

    fn fall_back(
        &self,
        sequence: u64,
        form: &FormSnapshot,
        failure: SubmissionFailure,
    ) -> SubmissionReport {
        let state = SubmissionState::Error(failure);
        self.transition(state);
        SubmissionReport {
            sequence,
            state,
            mailto: Some(self.composer.compose(form)),
            reset_form: false,
        }
    }

    /// Revert a success message to `Idle` once its display window ends.
    ///
    /// Ignored unless `sequence` is still the latest submission and it
    /// succeeded. Returns true if the feedback should be hidden.
    pub fn expire_success(&self, sequence: u64) -> bool {
        if self.sequence.get() != sequence || self.state.get() != SubmissionState::Success {
            return false;
        }
        self.transition(SubmissionState::Idle);
        true
    }

    fn transition(&self, next: SubmissionState) {
        tracing::debug!(from = ?self.state.get(), to = ?next, "submission state");
        self.state.set(next);
        self.listeners.borrow_mut().emit(&next);
    }
}

impl std::fmt::Debug for ContactCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactCoordinator")
            .field("state", &self.state.get())
            .field("sequence", &self.sequence.get())
            .field("relay_configured", &self.relay.is_configured())
            .finish()
    }
}
