//! Staff profile modal.
//!
//! Exactly one modal exists for the page. Clicking any profile card shows it
//! with that card's subject; clicking another card while it is open replaces
//! the subject in place.

use std::time::Duration;

use crate::events::{ListenerId, Listeners};

/// Placeholder for an absent name, role or description.
pub const MISSING_FIELD: &str = "—";

/// How long a clicked card keeps its flash class.
pub const CARD_FLASH: Duration = Duration::from_millis(500);

const REGION_MARKER: &str = "originaire de ";

/// Extract the region from a card description.
///
/// Looks for "originaire de <region>" (case-insensitive) and returns the rest
/// of that line, trimmed. Falls back to the raw description when the phrase
/// is absent, or to [`MISSING_FIELD`] when there is no description.
pub fn region_from_description(description: Option<&str>) -> String {
    let Some(description) = description.filter(|d| !d.is_empty()) else {
        return MISSING_FIELD.to_string();
    };
    let trimmed = description.trim();
    // ASCII lowercasing keeps byte offsets aligned with `trimmed`.
    let lowered = trimmed.to_ascii_lowercase();
    let region = lowered.find(REGION_MARKER).and_then(|at| {
        let rest = &trimmed[at + REGION_MARKER.len()..];
        let line = rest.split(['\n', '\r']).next().unwrap_or_default();
        (!line.is_empty()).then(|| line.trim().to_string())
    });
    region.unwrap_or_else(|| description.to_string())
}

/// Who the modal is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSubject {
    pub name: String,
    pub role: String,
    pub region: String,
}

impl ProfileSubject {
    /// Build from the raw text of a card's name, role and description nodes.
    pub fn from_card(name: Option<&str>, role: Option<&str>, description: Option<&str>) -> Self {
        Self {
            name: text_or_missing(name),
            role: text_or_missing(role),
            region: region_from_description(description),
        }
    }

    /// Sentence shown in the modal body.
    pub fn sentence(&self) -> String {
        format!(
            "Vous consultez le profil de {}, {} originaire de {}.",
            self.name, self.role, self.region
        )
    }
}

fn text_or_missing(text: Option<&str>) -> String {
    text.map(str::trim)
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Shown(ProfileSubject),
    Hidden,
}

/// The single profile modal.
#[derive(Debug, Default)]
pub struct ProfileModal {
    subject: Option<ProfileSubject>,
    visible: bool,
    listeners: Listeners<ModalEvent>,
}

impl ProfileModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ModalEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Show `subject`, replacing whatever is displayed.
    pub fn show(&mut self, subject: ProfileSubject) {
        tracing::debug!(name = %subject.name, "showing profile");
        self.visible = true;
        self.subject = Some(subject.clone());
        self.listeners.emit(&ModalEvent::Shown(subject));
    }

    /// Hide the modal. Returns false if it was already hidden.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.listeners.emit(&ModalEvent::Hidden);
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Subject last shown (kept after closing).
    pub fn subject(&self) -> Option<&ProfileSubject> {
        self.subject.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_after_marker() {
        assert_eq!(
            region_from_description(Some("Né à Abidjan, originaire de la région du Gbêkê")),
            "la région du Gbêkê"
        );
    }

    #[test]
    fn region_marker_is_case_insensitive() {
        assert_eq!(
            region_from_description(Some("  ORIGINAIRE DE Man  ")),
            "Man"
        );
    }

    #[test]
    fn region_stops_at_line_end() {
        assert_eq!(
            region_from_description(Some("originaire de Bouaké\nengagé depuis 2010")),
            "Bouaké"
        );
    }

    #[test]
    fn region_falls_back_to_raw_text() {
        assert_eq!(
            region_from_description(Some("Militant de la première heure")),
            "Militant de la première heure"
        );
        assert_eq!(region_from_description(None), MISSING_FIELD);
        assert_eq!(region_from_description(Some("")), MISSING_FIELD);
    }

    #[test]
    fn sentence_composition() {
        let subject = ProfileSubject::from_card(
            Some(" Awa Koné "),
            Some("Secrétaire générale"),
            Some("Originaire de Korhogo"),
        );
        assert_eq!(
            subject.sentence(),
            "Vous consultez le profil de Awa Koné, Secrétaire générale originaire de Korhogo."
        );
    }

    #[test]
    fn missing_fields_use_placeholder() {
        let subject = ProfileSubject::from_card(None, None, None);
        assert_eq!(subject.name, MISSING_FIELD);
        assert_eq!(subject.role, MISSING_FIELD);
        assert_eq!(subject.region, MISSING_FIELD);
    }
}
