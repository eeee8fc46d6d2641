//! Page-wide view state.
//!
//! One owned object holds every synchronous UI state machine. Bindings keep
//! it behind a single shared handle and route each DOM event to one of the
//! transition methods here or on the member controllers.

use crate::error::SiteResult;
use crate::navigation::{route_anchor, ScrollPlan};
use crate::profile::ProfileModal;
use crate::view::{CloseTrigger, DesktopMenu, Drawer, ScrollTracker, SectionTracker};

#[derive(Debug, Default)]
pub struct ViewState {
    pub drawer: Drawer,
    pub menu: DesktopMenu,
    pub scroll: ScrollTracker,
    pub sections: SectionTracker,
    pub modal: ProfileModal,
}

impl ViewState {
    pub fn new(menu_active: bool) -> Self {
        Self {
            menu: DesktopMenu::new(menu_active),
            ..Self::default()
        }
    }

    /// Handle a click on an in-page anchor.
    ///
    /// The drawer is closed before the href is even looked at.
    pub fn navigate(
        &mut self,
        href: &str,
        exists: impl FnOnce(&str) -> bool,
    ) -> SiteResult<Option<ScrollPlan>> {
        self.drawer.close(CloseTrigger::Anchor);
        route_anchor(href, exists)
    }

    /// Handle a click on a drawer-internal navigation link.
    pub fn drawer_link_clicked(&mut self) -> bool {
        self.drawer.close(CloseTrigger::NavLink)
    }

    /// Handle a key press anywhere on the document.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        match crate::view::close_trigger_for_key(key) {
            Some(trigger) => self.drawer.close(trigger),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn navigation_closes_drawer_even_on_miss() {
        let mut view = ViewState::new(false);
        view.drawer.open();

        let result = view.navigate("#nowhere", |_| false);

        assert!(matches!(result, Err(SiteError::TargetNotFound(_))));
        assert!(!view.drawer.is_open());
    }

    #[test]
    fn navigation_closes_drawer_on_bare_hash() {
        let mut view = ViewState::new(false);
        view.drawer.open();
        assert_eq!(view.navigate("#", |_| true).unwrap(), None);
        assert!(!view.drawer.is_open());
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut view = ViewState::new(false);
        view.drawer.open();
        assert!(!view.key_pressed("a"));
        assert!(view.drawer.is_open());
        assert!(view.key_pressed("Escape"));
        assert!(!view.drawer.is_open());
    }

    #[test]
    fn initial_menu_state_is_respected() {
        assert!(ViewState::new(true).menu.is_active());
        assert!(!ViewState::new(false).menu.is_active());
    }
}
