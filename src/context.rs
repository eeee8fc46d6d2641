//! Shared handles every component installs against.

use std::cell::RefCell;
use std::rc::Rc;

use pri_core::selectors::{markers, NAV_LINKS};
use pri_core::{ContactCoordinator, SiteConfig, ViewState};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::dom;
use crate::scheduler::BrowserScheduler;

/// View state shared between event handlers.
///
/// Handlers borrow it only for the duration of one transition; change
/// listeners run inside that borrow and must not re-enter it.
pub type SharedView = Rc<RefCell<ViewState>>;

pub struct SiteContext {
    pub config: SiteConfig,
    pub window: Window,
    pub document: Document,
    pub view: SharedView,
    pub contact: Rc<ContactCoordinator>,
    pub scheduler: Rc<BrowserScheduler>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Result<Self, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;

        let menu_active = dom::query(&document, NAV_LINKS)?
            .map_or(false, |menu| menu.class_list().contains(markers::ACTIVE));

        Ok(Self {
            contact: Rc::new(ContactCoordinator::new(&config)),
            view: Rc::new(RefCell::new(ViewState::new(menu_active))),
            scheduler: Rc::new(BrowserScheduler::new()),
            config,
            window,
            document,
        })
    }
}
