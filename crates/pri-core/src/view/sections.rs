//! Active-section detection.
//!
//! One tracker receives every intersection report and keeps the set of
//! currently intersecting sections. After each batch the section whose top
//! edge is closest to the viewport top wins; registration order breaks exact
//! ties. When nothing intersects, the last active section stays active.

use std::collections::HashMap;

use crate::events::{ListenerId, Listeners};

/// Fraction of a section that must be visible to count as intersecting.
pub const SECTION_THRESHOLD: f64 = 0.3;

/// Viewport margin applied to the intersection root.
pub const SECTION_ROOT_MARGIN: &str = "-80px 0px -80px 0px";

/// One intersection report for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    /// Top edge relative to the viewport, in px
    pub top: f64,
}

/// Emitted when the active section changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSectionChanged {
    pub previous: Option<String>,
    pub current: String,
}

#[derive(Debug, Default)]
pub struct SectionTracker {
    order: Vec<String>,
    visible: HashMap<String, f64>,
    active: Option<String>,
    listeners: Listeners<ActiveSectionChanged>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ActiveSectionChanged) + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Register a trackable section. Duplicate ids are ignored.
    pub fn register(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.order.contains(&id) {
            self.order.push(id);
        }
    }

    /// Record one report. Reports for unregistered ids are ignored.
    pub fn observe(&mut self, id: &str, visibility: Visibility) {
        if !self.order.iter().any(|known| known == id) {
            tracing::debug!(section = id, "ignoring report for unregistered section");
            return;
        }
        if visibility.intersecting {
            self.visible.insert(id.to_string(), visibility.top);
        } else {
            self.visible.remove(id);
        }
    }

    /// Re-measure the top edge of every intersecting section.
    ///
    /// Reports only carry the position at the moment a threshold was
    /// crossed, so tops go stale while the page keeps scrolling. Sections
    /// `top_of` cannot measure keep their last known top.
    pub fn refresh_tops(&mut self, mut top_of: impl FnMut(&str) -> Option<f64>) {
        for (id, top) in self.visible.iter_mut() {
            if let Some(fresh) = top_of(id.as_str()) {
                *top = fresh;
            }
        }
    }

    /// Pick the active section after a batch of reports.
    ///
    /// Returns the new active id if it changed.
    pub fn settle(&mut self) -> Option<&str> {
        let winner = self
            .order
            .iter()
            .enumerate()
            .filter_map(|(rank, id)| self.visible.get(id).map(|top| (top.abs(), rank, id)))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, _, id)| id.clone())?;

        if self.active.as_deref() == Some(winner.as_str()) {
            return None;
        }
        let previous = self.active.replace(winner.clone());
        tracing::debug!(section = %winner, "active section changed");
        self.listeners.emit(&ActiveSectionChanged {
            previous,
            current: winner,
        });
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn intersecting(&self) -> usize {
        self.visible.len()
    }
}

/// Fragment a nav link must point at to be highlighted for `section_id`.
pub fn nav_link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(top: f64) -> Visibility {
        Visibility {
            intersecting: true,
            top,
        }
    }

    fn gone() -> Visibility {
        Visibility {
            intersecting: false,
            top: 0.0,
        }
    }

    fn tracker() -> SectionTracker {
        let mut tracker = SectionTracker::new();
        for id in ["accueil", "president", "vision", "contact"] {
            tracker.register(id);
        }
        tracker
    }

    #[test]
    fn closest_to_top_wins_regardless_of_report_order() {
        let mut a = tracker();
        a.observe("vision", seen(400.0));
        a.observe("president", seen(-60.0));

        let mut b = tracker();
        b.observe("president", seen(-60.0));
        b.observe("vision", seen(400.0));

        assert_eq!(a.settle(), Some("president"));
        assert_eq!(b.settle(), Some("president"));
    }

    #[test]
    fn exact_tie_goes_to_document_order() {
        let mut t = tracker();
        t.observe("contact", seen(50.0));
        t.observe("accueil", seen(-50.0));
        assert_eq!(t.settle(), Some("accueil"));
    }

    #[test]
    fn leaving_everything_keeps_last_active() {
        let mut t = tracker();
        t.observe("vision", seen(10.0));
        assert_eq!(t.settle(), Some("vision"));
        t.observe("vision", gone());
        assert_eq!(t.settle(), None);
        assert_eq!(t.active(), Some("vision"));
        assert_eq!(t.intersecting(), 0);
    }

    #[test]
    fn unchanged_winner_does_not_emit() {
        let mut t = tracker();
        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&count);
        t.subscribe(move |_| counter.set(counter.get() + 1));

        t.observe("accueil", seen(0.0));
        t.settle();
        t.observe("accueil", seen(-20.0));
        t.settle();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn refreshed_tops_replace_stale_reports() {
        let mut t = tracker();
        // Both entered near the bottom edge; president has since scrolled up.
        t.observe("president", seen(500.0));
        t.observe("vision", seen(300.0));
        assert_eq!(t.settle(), Some("vision"));

        t.refresh_tops(|id| match id {
            "president" => Some(-10.0),
            "vision" => Some(-700.0),
            _ => None,
        });
        assert_eq!(t.settle(), Some("president"));
    }

    #[test]
    fn refresh_only_touches_intersecting_sections() {
        let mut t = tracker();
        t.observe("vision", seen(200.0));
        let mut asked = Vec::new();
        t.refresh_tops(|id| {
            asked.push(id.to_string());
            None
        });
        assert_eq!(asked, vec!["vision".to_string()]);
        assert_eq!(t.settle(), Some("vision"));
        assert_eq!(t.intersecting(), 1);
    }

    #[test]
    fn unsubscribed_listener_misses_later_changes() {
        let mut t = tracker();
        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&count);
        let id = t.subscribe(move |_| counter.set(counter.get() + 1));

        t.observe("accueil", seen(0.0));
        t.settle();
        assert!(t.unsubscribe(id));
        t.observe("vision", seen(-1.0));
        t.observe("accueil", gone());
        t.settle();

        assert_eq!(count.get(), 1);
        assert_eq!(t.active(), Some("vision"));
    }

    #[test]
    fn unregistered_sections_are_ignored() {
        let mut t = tracker();
        t.observe("footer", seen(0.0));
        assert_eq!(t.settle(), None);
    }

    #[test]
    fn nav_link_matching() {
        assert!(nav_link_targets("#vision", "vision"));
        assert!(!nav_link_targets("vision", "vision"));
        assert!(!nav_link_targets("#visions", "vision"));
    }
}
