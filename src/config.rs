//! Site configuration from the page.

use pri_core::selectors::SITE_CONFIG_ID;
use pri_core::{SiteConfig, SiteResult};
use web_sys::Document;

/// Read the `#site-config` JSON block, or defaults when the page has none.
pub fn load(document: &Document) -> SiteResult<SiteConfig> {
    let source = document
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty());

    match source {
        Some(text) => SiteConfig::from_json(&text),
        None => Ok(SiteConfig::default()),
    }
}
