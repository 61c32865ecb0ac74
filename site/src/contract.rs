//! Markup contract between the page builders and the controllers.
//!
//! A controller silently goes inert when its markup is missing. That is the
//! right runtime behavior, but a shipped page with an inert section is a
//! build bug, so the generator checks the contract before writing anything.

use brief::config::{Deployment, Widget};
use brief::content::{outcomes, staffing, timeline, validate::check_trigger_keys, BENEFIT_CHARTS, VOICES};
use brief::dom::{MemoryPage, Page, Selector};
use brief::markup::{attrs, classes, ids, required_ids};
use std::fmt;

/// A place where the markup breaks what a controller expects
#[derive(Debug, Clone, PartialEq)]
pub struct ContractIssue {
    pub widget: Widget,
    pub message: String,
}

impl ContractIssue {
    fn new<M: Into<String>>(widget: Widget, message: M) -> Self {
        Self {
            widget,
            message: message.into(),
        }
    }
}

impl fmt::Display for ContractIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.widget.name(), self.message)
    }
}

/// Check every widget the deployment ships. An empty result means each
/// controller will find what it needs.
pub fn check_contract(page: &MemoryPage, deployment: Deployment) -> Vec<ContractIssue> {
    let mut issues = Vec::new();

    for widget in deployment.widgets() {
        issues.extend(
            required_ids(widget)
                .iter()
                .filter(|id| page.element_by_id(id).is_none())
                .map(|id| ContractIssue::new(widget, format!("missing element #{id}"))),
        );

        match widget {
            Widget::Navigation => check_navigation(page, &mut issues),
            Widget::Timeline => {
                let keys = data_values(page, attrs::TIMELINE);
                trigger_keys(&mut issues, widget, "timeline", &keys, |k| timeline::find(k).is_some());
                if keys.is_empty() {
                    issues.push(ContractIssue::new(widget, "no [data-timeline] triggers"));
                }
            }
            Widget::Outcomes => {
                let tabs = page.query_all(None, &Selector::Class(classes::OUTCOME_TAB));
                let keys: Vec<String> = tabs
                    .iter()
                    .filter_map(|tab| page.attribute(tab, attrs::OUTCOME))
                    .collect();
                if keys.len() != tabs.len() {
                    issues.push(ContractIssue::new(widget, "outcome tab without data-outcome"));
                }
                trigger_keys(&mut issues, widget, "outcomes", &keys, |k| outcomes::find(k).is_some());
            }
            Widget::Staffing => {
                if let Some(select) = page.element_by_id(ids::CALCULATOR_UNIT) {
                    let keys: Vec<String> = page
                        .query_all(Some(&select), &Selector::Tag("option"))
                        .iter()
                        .filter_map(|option| page.attribute(option, "value"))
                        .collect();
                    trigger_keys(&mut issues, widget, "staffing", &keys, |k| staffing::find(k).is_some());
                }
            }
            Widget::Voices => check_voices(page, &mut issues),
            Widget::WhyItMatters => {
                check_panels(page, widget, Selector::Attr(attrs::WHY_TRIGGER), &mut issues)
            }
            Widget::Accordion => {
                check_panels(page, widget, Selector::Attr(attrs::ACCORDION_TRIGGER), &mut issues)
            }
            Widget::UnionBenefits => check_benefits(page, &mut issues),
            Widget::FooterYear | Widget::Analysis => {}
        }
    }

    issues
}

fn data_values(page: &MemoryPage, name: &'static str) -> Vec<String> {
    page.query_all(None, &Selector::Attr(name))
        .iter()
        .filter_map(|node| page.attribute(node, name))
        .collect()
}

fn trigger_keys<F: Fn(&str) -> bool>(
    issues: &mut Vec<ContractIssue>,
    widget: Widget,
    table: &'static str,
    keys: &[String],
    resolves: F,
) {
    issues.extend(
        check_trigger_keys(table, keys.iter().map(String::as_str), resolves)
            .into_iter()
            .map(|issue| ContractIssue::new(widget, issue.to_string())),
    );
}

fn check_navigation(page: &MemoryPage, issues: &mut Vec<ContractIssue>) {
    let toggle = page.query(None, &Selector::Attr(attrs::MENU_TOGGLE));
    let menu = page.query(None, &Selector::Attr(attrs::MOBILE_MENU));
    if toggle.is_none() || menu.is_none() {
        issues.push(ContractIssue::new(
            Widget::Navigation,
            "menu toggle and mobile menu must both be present",
        ));
    }
}

fn check_voices(page: &MemoryPage, issues: &mut Vec<ContractIssue>) {
    let indicators = page.query_all(None, &Selector::Class(classes::VOICE_INDICATOR));
    if indicators.len() != VOICES.len() {
        issues.push(ContractIssue::new(
            Widget::Voices,
            format!("{} indicators for {} voices", indicators.len(), VOICES.len()),
        ));
    }
    for (position, indicator) in indicators.iter().enumerate() {
        let index = page
            .attribute(indicator, attrs::INDEX)
            .and_then(|value| value.parse::<usize>().ok());
        if index != Some(position) {
            issues.push(ContractIssue::new(
                Widget::Voices,
                format!("indicator {position} has data-index {index:?}"),
            ));
        }
    }

    let directions = data_values(page, attrs::DIRECTION);
    for wanted in ["prev", "next"] {
        if !directions.iter().any(|d| d == wanted) {
            issues.push(ContractIssue::new(Widget::Voices, format!("no {wanted} button")));
        }
    }
}

fn check_panels(page: &MemoryPage, widget: Widget, triggers: Selector, issues: &mut Vec<ContractIssue>) {
    for trigger in page.query_all(None, &triggers) {
        match page.attribute(&trigger, attrs::ARIA_CONTROLS) {
            None => issues.push(ContractIssue::new(widget, "trigger without aria-controls")),
            Some(panel) if page.element_by_id(&panel).is_none() => issues.push(ContractIssue::new(
                widget,
                format!("aria-controls points at missing #{panel}"),
            )),
            Some(_) => {}
        }
    }
}

fn check_benefits(page: &MemoryPage, issues: &mut Vec<ContractIssue>) {
    for series in BENEFIT_CHARTS {
        if page.element_by_id(series.canvas_id).is_none() {
            issues.push(ContractIssue::new(
                Widget::UnionBenefits,
                format!("missing canvas #{}", series.canvas_id),
            ));
        }
        for key in [series.union_label_key(), series.non_union_label_key()] {
            if page.query(None, &Selector::attr_eq(attrs::BENEFIT_LABEL, key.as_str())).is_none() {
                issues.push(ContractIssue::new(
                    Widget::UnionBenefits,
                    format!("missing value label '{key}'"),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount;
    use brief::config::BriefConfig;

    #[test]
    fn shipped_markup_satisfies_every_controller() {
        let (page, _) = mount(&BriefConfig::default());
        let issues = check_contract(&page, Deployment::Full);
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn core_markup_satisfies_core_controllers() {
        let mut config = BriefConfig::default();
        config.site.deployment = Deployment::Core;
        let (page, _) = mount(&config);
        assert!(check_contract(&page, Deployment::Core).is_empty());
    }

    #[test]
    fn core_markup_fails_full_contract() {
        let mut config = BriefConfig::default();
        config.site.deployment = Deployment::Core;
        let (page, _) = mount(&config);

        let issues = check_contract(&page, Deployment::Full);
        assert!(issues.iter().any(|i| i.widget == Widget::Voices));
        assert!(issues.iter().any(|i| i.widget == Widget::Staffing));
    }

    #[test]
    fn unknown_trigger_key_is_reported() {
        let (mut page, body) = mount(&BriefConfig::default());
        let stray = page.append_element(Some(body), "button");
        page.set_attribute(&stray, attrs::TIMELINE, "1850");

        let issues = check_contract(&page, Deployment::Full);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].widget, Widget::Timeline);
        assert!(issues[0].message.contains("1850"));
    }

    #[test]
    fn dangling_aria_controls_is_reported() {
        let (mut page, body) = mount(&BriefConfig::default());
        let trigger = page.append_element(Some(body), "button");
        page.set_attribute(&trigger, attrs::ACCORDION_TRIGGER, "");
        page.set_attribute(&trigger, attrs::ARIA_CONTROLS, "faq-panel-99");

        let issues = check_contract(&page, Deployment::Full);
        assert_eq!(
            issues,
            vec![ContractIssue::new(
                Widget::Accordion,
                "aria-controls points at missing #faq-panel-99"
            )]
        );
    }
}
