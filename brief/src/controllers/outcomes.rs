use super::{require_ids, ActiveMarker, Binding, TriggerGroup};
use crate::content::outcomes::{self, DEFAULT_OUTCOME};
use crate::dom::{Page, Selector};
use crate::markup::{attrs, classes, ids};
use tracing::debug;

/// Tabbed union vs non-union outcome explorer
#[derive(Debug, Clone)]
pub struct OutcomeExplorer<N> {
    title: N,
    description: N,
    union_value: N,
    non_union_value: N,
    union_bar: N,
    non_union_bar: N,
    footnote: N,
    takeaway: N,
    tabs: TriggerGroup<N>,
    selected: Option<&'static str>,
}

impl<N: Clone + PartialEq> OutcomeExplorer<N> {
    pub fn init<P: Page<Node = N>>(page: &mut P) -> Option<Self> {
        let tabs = TriggerGroup::collect(
            page,
            &Selector::Class(classes::OUTCOME_TAB),
            attrs::OUTCOME,
            ActiveMarker::AriaSelected,
        );
        if tabs.is_empty() {
            debug!(widget = "outcomes", "no outcome tabs on page");
            return None;
        }

        let [title, description, union_value, non_union_value, union_bar, non_union_bar, footnote, takeaway] =
            require_ids(
                page,
                "outcomes",
                [
                    ids::OUTCOME_TITLE,
                    ids::OUTCOME_DESCRIPTION,
                    ids::OUTCOME_UNION_VALUE,
                    ids::OUTCOME_NONUNION_VALUE,
                    ids::OUTCOME_UNION_BAR,
                    ids::OUTCOME_NONUNION_BAR,
                    ids::OUTCOME_FOOTNOTE,
                    ids::OUTCOME_TAKEAWAY,
                ],
            )?;

        let mut explorer = Self {
            title,
            description,
            union_value,
            non_union_value,
            union_bar,
            non_union_bar,
            footnote,
            takeaway,
            tabs,
            selected: None,
        };
        explorer.select(page, DEFAULT_OUTCOME);
        Some(explorer)
    }

    pub fn select<P: Page<Node = N>>(&mut self, page: &mut P, key: &str) -> bool {
        let Some(metric) = outcomes::find(key) else {
            debug!(widget = "outcomes", key, "no outcome metric for key");
            return false;
        };

        page.set_text(&self.title, metric.title);
        page.set_text(&self.description, metric.description);
        page.set_text(&self.union_value, metric.union_value);
        page.set_text(&self.non_union_value, metric.non_union_value);
        page.set_style(&self.union_bar, "width", &format!("{}%", metric.union_bar));
        page.set_style(&self.non_union_bar, "width", &format!("{}%", metric.non_union_bar));
        page.set_text(&self.footnote, metric.footnote);
        page.set_text(&self.takeaway, metric.takeaway);
        self.tabs.mark(page, key);
        self.selected = Some(metric.key);
        true
    }

    pub fn on_click<P: Page<Node = N>>(&mut self, page: &mut P, node: &N) -> bool {
        if !self.tabs.owns(node) {
            return false;
        }
        if let Some(key) = self.tabs.key_of(node).map(str::to_string) {
            self.select(page, &key);
        }
        true
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn bindings(&self) -> Vec<Binding<N>> {
        self.tabs.bindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryPage, NodeId};

    fn outcome_page() -> (MemoryPage, Vec<NodeId>) {
        let mut page = MemoryPage::new();
        let root = page.append_element(None, "section");
        let tabs = ["retention", "safety", "pay", "voice"]
            .iter()
            .map(|key| {
                let tab = page.append_element(Some(root), "button");
                page.set_class(&tab, classes::OUTCOME_TAB, true);
                page.set_attribute(&tab, attrs::OUTCOME, key);
                tab
            })
            .collect();
        for id in [
            ids::OUTCOME_TITLE,
            ids::OUTCOME_DESCRIPTION,
            ids::OUTCOME_UNION_VALUE,
            ids::OUTCOME_NONUNION_VALUE,
            ids::OUTCOME_UNION_BAR,
            ids::OUTCOME_NONUNION_BAR,
            ids::OUTCOME_FOOTNOTE,
            ids::OUTCOME_TAKEAWAY,
        ] {
            let node = page.append_element(Some(root), "div");
            page.set_attribute(&node, "id", id);
        }
        (page, tabs)
    }

    #[test]
    fn test_defaults_to_retention() {
        let (mut page, tabs) = outcome_page();
        let explorer = OutcomeExplorer::init(&mut page).unwrap();
        assert_eq!(explorer.selected(), Some("retention"));
        assert_eq!(
            page.attribute(&tabs[0], attrs::ARIA_SELECTED).as_deref(),
            Some("true")
        );
        let metric = outcomes::find("retention").unwrap();
        let bar = page.element_by_id(ids::OUTCOME_UNION_BAR).unwrap();
        assert_eq!(
            page.style(&bar, "width"),
            Some(format!("{}%", metric.union_bar))
        );
    }

    #[test]
    fn test_tab_click_updates_bars_and_selection() {
        let (mut page, tabs) = outcome_page();
        let mut explorer = OutcomeExplorer::init(&mut page).unwrap();
        assert!(explorer.on_click(&mut page, &tabs[2]));

        let metric = outcomes::find("pay").unwrap();
        let title = page.element_by_id(ids::OUTCOME_TITLE).unwrap();
        assert_eq!(page.text(&title), metric.title);
        let bar = page.element_by_id(ids::OUTCOME_NONUNION_BAR).unwrap();
        assert_eq!(
            page.style(&bar, "width"),
            Some(format!("{}%", metric.non_union_bar))
        );
        let selected: Vec<_> = tabs
            .iter()
            .filter(|t| page.attribute(t, attrs::ARIA_SELECTED).as_deref() == Some("true"))
            .collect();
        assert_eq!(selected, vec![&tabs[2]]);
        assert!(page.has_class(&tabs[0], "text-slate-300"));
    }

    #[test]
    fn test_foreign_click_not_handled() {
        let (mut page, _) = outcome_page();
        let mut explorer = OutcomeExplorer::init(&mut page).unwrap();
        let other = page.append_element(None, "button");
        assert!(!explorer.on_click(&mut page, &other));
        assert_eq!(explorer.selected(), Some("retention"));
    }
}
