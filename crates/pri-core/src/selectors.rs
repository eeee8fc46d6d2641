//! DOM contract.
//!
//! Ids, classes and selectors the page markup must provide. The browser crate
//! queries with these constants and the CLI checks pages against
//! [`CONTRACT`], so a markup change only has to be mirrored here.

use serde::Serialize;

pub const SITE_CONFIG_ID: &str = "site-config";
pub const HAMBURGER: &str = ".hamburger";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK_ANCHORS: &str = ".nav-links a";
pub const NAV_FRAGMENT_LINKS: &str = ".nav-links a[href^=\"#\"]";
pub const SIDE_DRAWER_ID: &str = "sideDrawer";
pub const DRAWER_BACKDROP_ID: &str = "drawerBackdrop";
pub const DRAWER_CLOSE_ID: &str = "drawerClose";
pub const DRAWER_ITEMS: &str = ".drawer-nav ul li";
pub const DRAWER_ANCHORS: &str = ".drawer-nav a";
pub const HEADER: &str = ".header";
pub const SCROLL_TOP: &str = ".scroll-top";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const FRAGMENT_ANCHORS: &str = "a[href^=\"#\"]";
pub const TRACKED_SECTIONS: &str = "section[id], div[id^=\"accueil\"], div[id^=\"president\"], \
     div[id^=\"direction\"], div[id^=\"vision\"], div[id^=\"oeuvres\"], div[id^=\"contact\"]";
pub const HERO_TYPE_ID: &str = "heroType";
pub const ORG_CARDS: &str = ".org-card";
pub const LOADER_OVERLAY_ID: &str = "loader-overlay";
pub const LINKS: &str = "a[href]";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_SUBMIT_ID: &str = "contactSubmit";
pub const FORM_FEEDBACK: &str = ".form-feedback";
pub const MODAL_OVERLAY_ID: &str = "direction-modal-overlay";
pub const MODAL_TITLE_ID: &str = "direction-modal-title";
pub const MODAL_CLOSE_ID: &str = "direction-modal-close";
pub const PRESIDENT_CARD: &str = "#direction-parti .direction-parti-president-card";
pub const MEMBER_CARDS: &str = "#direction-parti .direction-parti-card";
pub const CARD_NAME: &str = ".direction-parti-name";
pub const CARD_ROLE: &str = ".direction-parti-role";
pub const CARD_DESC: &str = ".direction-parti-desc";

/// Marker classes toggled by the bindings.
pub mod markers {
    pub const DRAWER_OPEN: &str = "open";
    pub const BACKDROP_VISIBLE: &str = "visible";
    pub const HAMBURGER_TOGGLED: &str = "toggle";
    pub const BODY_MENU_OPEN: &str = "menu-open";
    pub const ACTIVE: &str = "active";
    pub const MODAL_VISIBLE: &str = "is-visible";
    pub const CARD_FLASH: &str = "click-flash";
    pub const MODAL_OVERLAY: &str = "direction-modal-overlay";
    pub const MODAL_BODY: &str = "direction-modal";
    pub const MODAL_CLOSE: &str = "direction-modal-close";
}

/// Interactive component a hook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    Drawer,
    DesktopMenu,
    ScrollChrome,
    BackToTop,
    ActiveLink,
    Typewriter,
    OrgBorders,
    Loader,
    ContactForm,
    ProfileModal,
}

impl Component {
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::Drawer => "drawer",
            Component::DesktopMenu => "desktop menu",
            Component::ScrollChrome => "scroll chrome",
            Component::BackToTop => "back to top",
            Component::ActiveLink => "active link",
            Component::Typewriter => "typewriter",
            Component::OrgBorders => "org borders",
            Component::Loader => "loader",
            Component::ContactForm => "contact form",
            Component::ProfileModal => "profile modal",
        }
    }
}

/// A single markup hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Hook {
    Id(&'static str),
    Class(&'static str),
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hook::Id(name) => write!(f, "#{}", name),
            Hook::Class(name) => write!(f, ".{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub component: Component,
    pub hook: Hook,
}

const fn id(component: Component, name: &'static str) -> Requirement {
    Requirement {
        component,
        hook: Hook::Id(name),
    }
}

const fn class(component: Component, name: &'static str) -> Requirement {
    Requirement {
        component,
        hook: Hook::Class(name),
    }
}

/// Hooks each component needs. The profile modal overlay is not listed since
/// it is created at startup when missing.
pub const CONTRACT: &[Requirement] = &[
    class(Component::Drawer, "hamburger"),
    id(Component::Drawer, SIDE_DRAWER_ID),
    id(Component::Drawer, DRAWER_BACKDROP_ID),
    id(Component::Drawer, DRAWER_CLOSE_ID),
    class(Component::Drawer, "drawer-nav"),
    class(Component::DesktopMenu, "nav-links"),
    class(Component::ScrollChrome, "header"),
    class(Component::ScrollChrome, "scroll-top"),
    id(Component::BackToTop, BACK_TO_TOP_ID),
    class(Component::ActiveLink, "nav-links"),
    id(Component::Typewriter, HERO_TYPE_ID),
    class(Component::OrgBorders, "org-card"),
    id(Component::Loader, LOADER_OVERLAY_ID),
    id(Component::ContactForm, CONTACT_FORM_ID),
    id(Component::ContactForm, CONTACT_SUBMIT_ID),
    class(Component::ContactForm, "form-feedback"),
    id(Component::ProfileModal, "direction-parti"),
    class(Component::ProfileModal, "direction-parti-card"),
    class(Component::ProfileModal, "direction-parti-name"),
    class(Component::ProfileModal, "direction-parti-role"),
];

/// Requirements for one component.
pub fn requirements_for(component: Component) -> impl Iterator<Item = &'static Requirement> {
    CONTRACT.iter().filter(move |req| req.component == component)
}
