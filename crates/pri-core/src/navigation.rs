//! In-page anchor routing and the deferred news-page navigation.
//!
//! Bindings close the drawer before consulting the router, whatever the
//! outcome.

use std::time::Duration;

use crate::error::{SiteError, SiteResult};

/// Page whose links show the loader overlay before navigating.
pub const NEWS_PAGE_HREF: &str = "actualites.html";

/// How long the loader overlay stays up (on startup and before navigating).
pub const LOADER_DISPLAY: Duration = Duration::from_millis(1500);

/// Where a fragment click should scroll to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollPlan {
    /// Element id the fragment names (without `#`)
    pub target_id: String,
    /// Value pushed onto the history stack (with `#`)
    pub history_entry: String,
}

/// Decide what a click on an anchor with `href` should do.
///
/// - `Ok(None)`: empty or bare `#` href, leave the browser default alone
/// - `Ok(Some(plan))`: prevent default, smooth-scroll, push one history entry
/// - `Err(TargetNotFound)`: prevent default, log the miss, do nothing else
pub fn route_anchor(href: &str, exists: impl FnOnce(&str) -> bool) -> SiteResult<Option<ScrollPlan>> {
    let Some(target_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    if !exists(target_id) {
        return Err(SiteError::TargetNotFound(href.to_string()));
    }
    Ok(Some(ScrollPlan {
        target_id: target_id.to_string(),
        history_entry: href.to_string(),
    }))
}

/// Whether a link should go through the loader overlay first.
pub fn is_deferred_navigation(href: &str) -> bool {
    href == NEWS_PAGE_HREF
}
