//! Page report against the DOM contract.

use serde::Serialize;

use pri_core::selectors::{requirements_for, Component, Hook, CONTRACT};
use pri_core::SiteConfig;

use crate::markup::MarkupIndex;

#[derive(Debug, Clone, Serialize)]
pub struct ComponentStatus {
    pub component: Component,
    pub wired: bool,
    pub missing: Vec<Hook>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ConfigStatus {
    /// No config block; the script runs on defaults
    Absent,
    /// Relay identifiers filled in
    Configured,
    /// Parsed, but relay identifiers are placeholders
    Placeholder,
    Invalid { error: String },
}

impl ConfigStatus {
    pub fn from_source(source: Option<&str>) -> Self {
        let Some(source) = source.filter(|text| !text.trim().is_empty()) else {
            return ConfigStatus::Absent;
        };
        match SiteConfig::from_json(source) {
            Ok(config) if config.relay.is_configured() => ConfigStatus::Configured,
            Ok(_) => ConfigStatus::Placeholder,
            Err(err) => ConfigStatus::Invalid {
                error: err.to_string(),
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ConfigStatus::Absent => "absent (defaults, mail fallback only)".to_string(),
            ConfigStatus::Configured => "relay configured".to_string(),
            ConfigStatus::Placeholder => {
                "relay identifiers are placeholders (mail fallback only)".to_string()
            }
            ConfigStatus::Invalid { error } => format!("invalid: {}", error),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkupReport {
    pub file: String,
    pub components: Vec<ComponentStatus>,
    pub config: ConfigStatus,
}

impl MarkupReport {
    pub fn build(file: impl Into<String>, index: &MarkupIndex) -> Self {
        let mut order: Vec<Component> = Vec::new();
        for requirement in CONTRACT {
            if !order.contains(&requirement.component) {
                order.push(requirement.component);
            }
        }

        let components = order
            .into_iter()
            .map(|component| {
                let missing: Vec<Hook> = requirements_for(component)
                    .map(|requirement| requirement.hook)
                    .filter(|hook| match *hook {
                        Hook::Id(name) => !index.has_id(name),
                        Hook::Class(name) => !index.has_class(name),
                    })
                    .collect();
                ComponentStatus {
                    component,
                    wired: missing.is_empty(),
                    missing,
                }
            })
            .collect();

        Self {
            file: file.into(),
            components,
            config: ConfigStatus::from_source(index.config_json.as_deref()),
        }
    }

    pub fn inert(&self) -> impl Iterator<Item = &ComponentStatus> {
        self.components.iter().filter(|status| !status.wired)
    }

    /// Whether `--strict` should fail.
    pub fn has_problems(&self) -> bool {
        self.inert().next().is_some() || matches!(self.config, ConfigStatus::Invalid { .. })
    }

    pub fn render(&self) -> String {
        let mut out = format!("Markup: {}\n", self.file);
        for status in &self.components {
            let name = status.component.display_name();
            if status.wired {
                out.push_str(&format!("  {:<14} wired\n", name));
            } else {
                let missing: Vec<String> = status.missing.iter().map(Hook::to_string).collect();
                out.push_str(&format!(
                    "  {:<14} inert (missing {})\n",
                    name,
                    missing.join(", ")
                ));
            }
        }
        out.push_str(&format!("Site config: {}\n", self.config.describe()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_leaves_everything_inert() {
        let report = MarkupReport::build("empty.html", &MarkupIndex::default());
        assert!(report.components.iter().all(|status| !status.wired));
        assert_eq!(report.config, ConfigStatus::Absent);
        assert!(report.has_problems());
    }

    #[test]
    fn components_listed_once_in_contract_order() {
        let report = MarkupReport::build("x.html", &MarkupIndex::default());
        assert_eq!(report.components[0].component, Component::Drawer);
        let drawers = report
            .components
            .iter()
            .filter(|status| status.component == Component::Drawer)
            .count();
        assert_eq!(drawers, 1);
    }

    #[test]
    fn typewriter_wired_by_hero_id() {
        let index = MarkupIndex::scan(r#"<h1 id="heroType"></h1>"#);
        let report = MarkupReport::build("hero.html", &index);
        let typewriter = report
            .components
            .iter()
            .find(|status| status.component == Component::Typewriter)
            .unwrap();
        assert!(typewriter.wired);
        assert!(typewriter.missing.is_empty());
    }

    #[test]
    fn partially_wired_component_lists_only_absent_hooks() {
        let index = MarkupIndex::scan(
            r#"<form id="contactForm"><button id="contactSubmit"></button></form>"#,
        );
        let report = MarkupReport::build("contact.html", &index);
        let form = report
            .components
            .iter()
            .find(|status| status.component == Component::ContactForm)
            .unwrap();
        assert!(!form.wired);
        assert_eq!(form.missing, vec![Hook::Class("form-feedback")]);
    }

    #[test]
    fn config_status_variants() {
        assert_eq!(ConfigStatus::from_source(Some("  ")), ConfigStatus::Absent);
        assert_eq!(ConfigStatus::from_source(Some("{}")), ConfigStatus::Placeholder);
        assert_eq!(
            ConfigStatus::from_source(Some(
                r#"{"relay":{"user_id":"u","service_id":"s","template_id":"t"}}"#
            )),
            ConfigStatus::Configured
        );
        assert!(matches!(
            ConfigStatus::from_source(Some("{")),
            ConfigStatus::Invalid { .. }
        ));
    }

    #[test]
    fn render_lists_missing_hooks() {
        let index = MarkupIndex::scan(r#"<h1 id="heroType"></h1>"#);
        let text = MarkupReport::build("hero.html", &index).render();
        assert!(text.contains("typewriter     wired"));
        assert!(text.contains("#sideDrawer"));
    }
}
