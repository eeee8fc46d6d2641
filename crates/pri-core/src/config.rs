//! Site configuration.
//!
//! The page may embed a JSON document in
//! `<script type="application/json" id="site-config">`; every section is
//! optional and falls back to the defaults below. Relay identifiers default to
//! placeholders, which routes every submission through the mail client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Prefix marking a relay identifier that was never filled in.
pub const PLACEHOLDER_SENTINEL: &str = "YOUR_";

/// Top-level configuration for the site script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Email relay identifiers and send policy
    pub relay: RelayConfig,

    /// Mail-client fallback addressing
    pub mail: MailFallbackConfig,

    /// Markup revealed by the hero typewriter
    pub hero_markup: String,

    /// `tracing` filter directive (e.g. "info", "pri_core=debug")
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            mail: MailFallbackConfig::default(),
            hero_markup: default_hero_markup(),
            log_filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration document.
    pub fn from_json(source: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

fn default_hero_markup() -> String {
    "L'Espoir de la Côte d'Ivoire<br>avec <span class='text-orange'>Diomandé ZOUMANA</span>"
        .to_string()
}

/// Email relay configuration (account, service, template).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default = "default_service_id")]
    pub service_id: String,

    #[serde(default = "default_template_id")]
    pub template_id: String,

    /// Selector the relay reads the form from
    #[serde(default = "default_form_selector")]
    pub form_selector: String,

    /// Upper bound on the `Pending` state
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
}

fn default_user_id() -> String {
    "YOUR_EMAILJS_USER_ID".to_string()
}

fn default_service_id() -> String {
    "YOUR_SERVICE_ID".to_string()
}

fn default_template_id() -> String {
    "YOUR_TEMPLATE_ID".to_string()
}

fn default_form_selector() -> String {
    "#contactForm".to_string()
}

fn default_send_timeout_ms() -> u64 {
    15_000
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            service_id: default_service_id(),
            template_id: default_template_id(),
            form_selector: default_form_selector(),
            send_timeout_ms: default_send_timeout_ms(),
        }
    }
}

impl RelayConfig {
    /// Check that no identifier still carries the placeholder sentinel.
    ///
    /// Reports the first offending field in declaration order.
    pub fn validate(&self) -> SiteResult<()> {
        let fields = [
            ("user_id", &self.user_id),
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
        ];
        for (name, value) in fields {
            if value.contains(PLACEHOLDER_SENTINEL) {
                return Err(SiteError::RelayNotConfigured(name));
            }
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }
}

/// Mail-client fallback addressing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailFallbackConfig {
    #[serde(default = "default_recipient")]
    pub recipient: String,

    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_recipient() -> String {
    "lepri.vision2030@gmail.com".to_string()
}

fn default_subject() -> String {
    "Nouvelle demande depuis le site PRI".to_string()
}

impl Default for MailFallbackConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            subject: default_subject(),
        }
    }
}
