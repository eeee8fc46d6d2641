//! Minimal HTML attribute scanner.
//!
//! Collects every `id` and `class` token in a page plus the text of the
//! `#site-config` script block. Not a parser: it only needs tag boundaries,
//! quoted attribute values, comments and raw-text elements to be respected.

use std::collections::BTreeSet;

use pri_core::selectors::SITE_CONFIG_ID;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkupIndex {
    pub ids: BTreeSet<String>,
    pub classes: BTreeSet<String>,
    /// Raw text of `<script id="site-config">`, if present
    pub config_json: Option<String>,
}

impl MarkupIndex {
    pub fn scan(html: &str) -> Self {
        let mut index = Self::default();
        let mut rest = html;

        while let Some(start) = rest.find('<') {
            let after = &rest[start + 1..];
            if let Some(comment) = after.strip_prefix("!--") {
                rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
                continue;
            }
            let Some(end) = tag_end(after) else {
                break;
            };
            let body = &after[end + 1..];
            rest = body;

            let Some(tag) = Tag::parse(&after[..end]) else {
                continue;
            };
            if let Some(id) = tag.attr("id") {
                index.ids.insert(id.to_string());
            }
            if let Some(classes) = tag.attr("class") {
                index
                    .classes
                    .extend(classes.split_whitespace().map(str::to_string));
            }

            if tag.is_raw_text() {
                let close = find_ignore_case(body, &format!("</{}", tag.name)).unwrap_or(body.len());
                if tag.name == "script" && tag.attr("id") == Some(SITE_CONFIG_ID) {
                    index.config_json = Some(body[..close].to_string());
                }
                rest = &body[close..];
            }
        }
        index
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

struct Tag<'a> {
    name: String,
    attrs: Vec<(String, &'a str)>,
}

impl<'a> Tag<'a> {
    /// Parse the inside of a start tag. End tags, doctypes and processing
    /// instructions yield `None`.
    fn parse(src: &'a str) -> Option<Self> {
        if src.starts_with(['/', '!', '?']) {
            return None;
        }
        let name_end = src
            .find(|c: char| c.is_whitespace() || c == '/')
            .unwrap_or(src.len());
        if name_end == 0 {
            return None;
        }

        let mut attrs = Vec::new();
        let mut rest = &src[name_end..];
        loop {
            rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
            if rest.is_empty() {
                break;
            }
            let key_end = rest
                .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
                .unwrap_or(rest.len());
            let key = rest[..key_end].to_ascii_lowercase();
            rest = rest[key_end..].trim_start();

            let mut value = "";
            if let Some(after_eq) = rest.strip_prefix('=') {
                let after_eq = after_eq.trim_start();
                match after_eq.chars().next() {
                    Some(quote @ ('"' | '\'')) => {
                        let inner = &after_eq[1..];
                        let close = inner.find(quote).unwrap_or(inner.len());
                        value = &inner[..close];
                        rest = inner.get(close + 1..).unwrap_or("");
                    }
                    _ => {
                        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
                        value = &after_eq[..end];
                        rest = &after_eq[end..];
                    }
                }
            }
            if !key.is_empty() {
                attrs.push((key, value));
            }
        }

        Some(Self {
            name: src[..name_end].to_ascii_lowercase(),
            attrs,
        })
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    fn is_raw_text(&self) -> bool {
        matches!(self.name.as_str(), "script" | "style")
    }
}

/// Offset of the closing `>`, skipping quoted attribute values.
fn tag_end(src: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in src.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some(i),
            None => {}
        }
    }
    None
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_ids_and_class_tokens() {
        let index = MarkupIndex::scan(
            r##"<nav class="nav-links active"><a href="#vision" id='lnk'>Vision</a></nav>"##,
        );
        assert!(index.has_class("nav-links"));
        assert!(index.has_class("active"));
        assert!(index.has_id("lnk"));
        assert!(!index.has_id("vision"));
    }

    #[test]
    fn unquoted_and_uppercase_attributes() {
        let index = MarkupIndex::scan("<DIV ID=sideDrawer CLASS=side-drawer></DIV>");
        assert!(index.has_id("sideDrawer"));
        assert!(index.has_class("side-drawer"));
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let index = MarkupIndex::scan(r#"<div title="a > b" class="header"></div>"#);
        assert!(index.has_class("header"));
    }

    #[test]
    fn comments_and_scripts_are_skipped() {
        let index = MarkupIndex::scan(
            r#"<!-- <div id="ghost"> --><script>if (a <b id="fake">) {}</script><p class="real">"#,
        );
        assert!(!index.has_id("ghost"));
        assert!(!index.has_id("fake"));
        assert!(index.has_class("real"));
    }

    #[test]
    fn captures_site_config_block() {
        let index = MarkupIndex::scan(
            r#"<script type="application/json" id="site-config">{"log_filter":"debug"}</SCRIPT>"#,
        );
        assert_eq!(index.config_json.as_deref(), Some(r#"{"log_filter":"debug"}"#));
    }

    #[test]
    fn truncated_markup_stops_cleanly() {
        let index = MarkupIndex::scan(r#"<div id="ok"></div><section id="cut"#);
        assert!(index.has_id("ok"));
        assert!(!index.has_id("cut"));
    }
}
