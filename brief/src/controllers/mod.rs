//! One small state object per interactive section.
//!
//! Every controller follows the same contract: `init` resolves its targets
//! and returns `None` (leaving the section inert) when any is missing,
//! renders its default once, and afterwards reacts only to its own
//! messages. Controllers never talk to each other.

pub mod analysis;
pub mod benefits;
pub mod carousel;
pub mod disclosure;
pub mod outcomes;
pub mod reveal;
pub mod staffing;
pub mod timeline;

pub use analysis::AnalysisPanel;
pub use benefits::BenefitsSection;
pub use carousel::{Direction, VoicesCarousel};
pub use disclosure::{Disclosure, DisclosureGroup, NavigationMenu, WhyItMatters};
pub use outcomes::OutcomeExplorer;
pub use reveal::Reveal;
pub use staffing::StaffingCalculator;
pub use timeline::TimelineController;

use crate::dom::{Page, Selector};
use crate::markup::{attrs, classes};
use tracing::debug;

/// DOM event a node must forward to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Change,
    KeyDown,
}

impl EventKind {
    /// DOM event name
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::KeyDown => "keydown",
        }
    }
}

/// A listener the host must attach
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<N> {
    pub node: N,
    pub event: EventKind,
}

impl<N> Binding<N> {
    pub fn click(node: N) -> Self {
        Self {
            node,
            event: EventKind::Click,
        }
    }
}

/// Resolve every id, or none of them
pub(crate) fn require_ids<P: Page, const N: usize>(
    page: &P,
    widget: &'static str,
    ids: [&str; N],
) -> Option<[P::Node; N]> {
    let mut nodes = Vec::with_capacity(N);
    for id in ids {
        match page.element_by_id(id) {
            Some(node) => nodes.push(node),
            None => {
                debug!(widget, missing = id, "required element missing, section left inert");
                return None;
            }
        }
    }
    nodes.try_into().ok()
}

/// How a trigger shows that its record is the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveMarker {
    /// `data-active="true|false"`
    DataActive,
    /// `aria-selected` plus the tab highlight classes
    AriaSelected,
}

#[derive(Debug, Clone)]
struct Trigger<N> {
    key: Option<String>,
    node: N,
}

/// Trigger elements of a selection controller, each tagged with a record key
#[derive(Debug, Clone)]
pub(crate) struct TriggerGroup<N> {
    triggers: Vec<Trigger<N>>,
    marker: ActiveMarker,
}

impl<N: Clone + PartialEq> TriggerGroup<N> {
    pub(crate) fn collect<P: Page<Node = N>>(
        page: &P,
        selector: &Selector,
        key_attr: &str,
        marker: ActiveMarker,
    ) -> Self {
        let triggers = page
            .query_all(None, selector)
            .into_iter()
            .map(|node| Trigger {
                key: page.attribute(&node, key_attr),
                node,
            })
            .collect();
        Self { triggers, marker }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Key carried by the first trigger
    pub(crate) fn first_key(&self) -> Option<&str> {
        self.triggers.first().and_then(|t| t.key.as_deref())
    }

    pub(crate) fn owns(&self, node: &N) -> bool {
        self.triggers.iter().any(|t| t.node == *node)
    }

    pub(crate) fn key_of(&self, node: &N) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| t.node == *node)
            .and_then(|t| t.key.as_deref())
    }

    /// Mark the trigger(s) for `key` active and every other trigger inactive
    pub(crate) fn mark<P: Page<Node = N>>(&self, page: &mut P, key: &str) {
        for trigger in &self.triggers {
            let active = trigger.key.as_deref() == Some(key);
            let flag = if active { "true" } else { "false" };
            match self.marker {
                ActiveMarker::DataActive => page.set_attribute(&trigger.node, attrs::ACTIVE, flag),
                ActiveMarker::AriaSelected => {
                    page.set_attribute(&trigger.node, attrs::ARIA_SELECTED, flag);
                    for class in classes::TAB_ON {
                        page.set_class(&trigger.node, class, active);
                    }
                    for class in classes::TAB_OFF {
                        page.set_class(&trigger.node, class, !active);
                    }
                }
            }
        }
    }

    pub(crate) fn bindings(&self) -> Vec<Binding<N>> {
        self.triggers
            .iter()
            .map(|t| Binding::click(t.node.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryPage, NodeId};

    fn tabs(keys: &[Option<&str>]) -> (MemoryPage, Vec<NodeId>) {
        let mut page = MemoryPage::new();
        let root = page.append_element(None, "div");
        let nodes = keys
            .iter()
            .map(|key| {
                let tab = page.append_element(Some(root), "button");
                page.set_class(&tab, classes::OUTCOME_TAB, true);
                if let Some(key) = key {
                    page.set_attribute(&tab, attrs::OUTCOME, key);
                }
                tab
            })
            .collect();
        (page, nodes)
    }

    #[test]
    fn test_require_ids_all_or_nothing() {
        let mut page = MemoryPage::new();
        let a = page.append_element(None, "p");
        page.set_attribute(&a, "id", "a");
        assert_eq!(require_ids(&page, "test", ["a"]), Some([a]));
        assert_eq!(require_ids(&page, "test", ["a", "b"]), None);
    }

    #[test]
    fn test_mark_keeps_exactly_one_active() {
        let (mut page, nodes) = tabs(&[Some("retention"), Some("pay"), None]);
        let group = TriggerGroup::collect(
            &page,
            &Selector::Class(classes::OUTCOME_TAB),
            attrs::OUTCOME,
            ActiveMarker::AriaSelected,
        );
        group.mark(&mut page, "pay");

        let selected: Vec<_> = nodes
            .iter()
            .filter(|n| page.attribute(n, attrs::ARIA_SELECTED).as_deref() == Some("true"))
            .collect();
        assert_eq!(selected, vec![&nodes[1]]);
        assert!(page.has_class(&nodes[1], "text-brand-light"));
        assert!(!page.has_class(&nodes[1], "text-slate-300"));
        assert!(page.has_class(&nodes[0], "border-white/20"));
        assert_eq!(group.key_of(&nodes[2]), None);
        assert!(group.owns(&nodes[2]));
        assert_eq!(group.first_key(), Some("retention"));
    }
}
