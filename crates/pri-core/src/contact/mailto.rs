//! Mail-client fallback link.

use crate::config::MailFallbackConfig;

/// One named form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Named inputs of the contact form, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: Vec<FormField>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// One `name: value` line per field.
    pub fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}: {}", field.name, field.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut snapshot = FormSnapshot::new();
        for (name, value) in iter {
            snapshot.push(name, value);
        }
        snapshot
    }
}

/// Builds `mailto:` links addressed to a fixed recipient and subject.
#[derive(Debug, Clone)]
pub struct MailtoComposer {
    recipient: String,
    subject: String,
}

impl MailtoComposer {
    pub fn new(config: &MailFallbackConfig) -> Self {
        Self {
            recipient: config.recipient.clone(),
            subject: config.subject.clone(),
        }
    }

    pub fn compose(&self, form: &FormSnapshot) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&form.summary())
        )
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Same output as the browser's `encodeURIComponent` for valid UTF-8.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
