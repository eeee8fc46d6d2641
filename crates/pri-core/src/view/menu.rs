//! Desktop navigation menu.
//!
//! The page may ship the `.nav-links` container already marked active; nothing
//! in the script opens it, so the only transitions are closes.

#[derive(Debug, Clone, Default)]
pub struct DesktopMenu {
    active: bool,
}

impl DesktopMenu {
    pub fn new(initially_active: bool) -> Self {
        Self {
            active: initially_active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A top-level nav link was clicked. Returns true if the menu closed.
    pub fn on_link_click(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// A click landed somewhere on the document.
    ///
    /// Closes the menu when it is active and the click was outside both the
    /// menu and the hamburger.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_hamburger: bool) -> bool {
        if self.active && !inside_menu && !inside_hamburger {
            self.active = false;
            return true;
        }
        false
    }
}
