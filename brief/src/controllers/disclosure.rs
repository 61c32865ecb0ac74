//! Expand/collapse panels: why-it-matters explainers, the FAQ accordion
//! and the mobile navigation menu.

use super::{Binding, EventKind, Reveal};
use crate::dom::{Page, Selector};
use crate::markup::{attrs, classes, ids};
use tracing::debug;

/// Keys that toggle a keyboard-enabled trigger
const ACTIVATION_KEYS: [&str; 2] = ["Enter", " "];

/// One trigger and the panel it shows or hides
#[derive(Debug, Clone)]
pub struct Disclosure<N> {
    trigger: N,
    panel: N,
    icon: Option<N>,
    expanded: bool,
}

impl<N: Clone + PartialEq> Disclosure<N> {
    /// Collapsed disclosure, written to the page immediately
    pub fn new<P: Page<Node = N>>(page: &mut P, trigger: N, panel: N, icon: Option<N>) -> Self {
        let disclosure = Self {
            trigger,
            panel,
            icon,
            expanded: false,
        };
        disclosure.apply(page);
        disclosure
    }

    pub fn toggle<P: Page<Node = N>>(&mut self, page: &mut P) -> bool {
        self.set_expanded(page, !self.expanded);
        self.expanded
    }

    pub fn set_expanded<P: Page<Node = N>>(&mut self, page: &mut P, expanded: bool) {
        self.expanded = expanded;
        self.apply(page);
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn panel(&self) -> &N {
        &self.panel
    }

    fn apply<P: Page<Node = N>>(&self, page: &mut P) {
        let expanded = if self.expanded { "true" } else { "false" };
        let hidden = if self.expanded { "false" } else { "true" };
        page.set_attribute(&self.trigger, attrs::ARIA_EXPANDED, expanded);
        page.set_class(&self.panel, classes::HIDDEN, !self.expanded);
        page.set_attribute(&self.panel, attrs::ARIA_HIDDEN, hidden);
        if let Some(icon) = &self.icon {
            page.set_class(icon, classes::ROTATED, self.expanded);
        }
    }
}

/// Every trigger matching a selector, each paired with its `aria-controls` panel
#[derive(Debug, Clone)]
pub struct DisclosureGroup<N> {
    items: Vec<Disclosure<N>>,
    keyboard: bool,
}

impl<N: Clone + PartialEq> DisclosureGroup<N> {
    pub fn collect<P: Page<Node = N>>(
        page: &mut P,
        scope: Option<&N>,
        trigger: &Selector,
        icon: &Selector,
        keyboard: bool,
    ) -> Self {
        let mut items = Vec::new();
        for node in page.query_all(scope, trigger) {
            let panel = page
                .attribute(&node, attrs::ARIA_CONTROLS)
                .and_then(|id| page.element_by_id(&id));
            let Some(panel) = panel else {
                debug!(selector = %trigger, "disclosure trigger without a panel skipped");
                continue;
            };
            let icon = page.query(Some(&node), icon);
            items.push(Disclosure::new(page, node, panel, icon));
        }
        Self { items, keyboard }
    }

    pub fn on_click<P: Page<Node = N>>(&mut self, page: &mut P, node: &N) -> bool {
        match self.find_mut(node) {
            Some(item) => {
                item.toggle(page);
                true
            }
            None => false,
        }
    }

    /// Returns true when the key toggled a panel and the browser default
    /// (scrolling on space, form submit on enter) must be suppressed.
    pub fn on_key<P: Page<Node = N>>(&mut self, page: &mut P, node: &N, key: &str) -> bool {
        if !self.keyboard || !ACTIVATION_KEYS.contains(&key) {
            return false;
        }
        self.on_click(page, node)
    }

    pub fn items(&self) -> &[Disclosure<N>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn bindings(&self) -> Vec<Binding<N>> {
        let mut bindings = Vec::new();
        for item in &self.items {
            bindings.push(Binding::click(item.trigger.clone()));
            if self.keyboard {
                bindings.push(Binding {
                    node: item.trigger.clone(),
                    event: EventKind::KeyDown,
                });
            }
        }
        bindings
    }

    fn find_mut(&mut self, node: &N) -> Option<&mut Disclosure<N>> {
        self.items.iter_mut().find(|item| item.trigger == *node)
    }
}

/// FAQ accordion, pointer activation only
pub fn accordion<P: Page>(page: &mut P) -> DisclosureGroup<P::Node> {
    DisclosureGroup::collect(
        page,
        None,
        &Selector::Attr(attrs::ACCORDION_TRIGGER),
        &Selector::Attr(attrs::ACCORDION_ICON),
        false,
    )
}

/// Hamburger menu for narrow viewports
#[derive(Debug, Clone)]
pub struct NavigationMenu<N> {
    menu: Disclosure<N>,
    links: Vec<N>,
}

impl<N: Clone + PartialEq> NavigationMenu<N> {
    pub fn init<P: Page<Node = N>>(page: &mut P) -> Option<Self> {
        let toggle = page.query(None, &Selector::Attr(attrs::MENU_TOGGLE));
        let menu = page.query(None, &Selector::Attr(attrs::MOBILE_MENU));
        let (Some(toggle), Some(menu)) = (toggle, menu) else {
            debug!(widget = "navigation", "menu toggle or menu missing");
            return None;
        };
        let links = page.query_all(Some(&menu), &Selector::Tag("a"));
        Some(Self {
            menu: Disclosure::new(page, toggle, menu, None),
            links,
        })
    }

    /// Toggle opens or closes; any link inside the menu closes it
    pub fn on_click<P: Page<Node = N>>(&mut self, page: &mut P, node: &N) -> bool {
        if *node == self.menu.trigger {
            self.menu.toggle(page);
            true
        } else if self.links.contains(node) {
            self.menu.set_expanded(page, false);
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_expanded()
    }

    pub fn bindings(&self) -> Vec<Binding<N>> {
        std::iter::once(&self.menu.trigger)
            .chain(&self.links)
            .map(|node| Binding::click(node.clone()))
            .collect()
    }
}

/// The why-it-matters section: fading cards plus keyboard-accessible explainers
#[derive(Debug, Clone)]
pub struct WhyItMatters<N> {
    reveal: Reveal<N>,
    panels: DisclosureGroup<N>,
}

impl<N: Clone + PartialEq> WhyItMatters<N> {
    pub fn init<P: Page<Node = N>>(page: &mut P, threshold: f64) -> Option<Self> {
        let Some(section) = page.element_by_id(ids::WHY_IT_MATTERS) else {
            debug!(widget = "why-it-matters", "section missing");
            return None;
        };
        let reveal = Reveal::init(page, &section, &Selector::Attr(attrs::WHY_CARD), threshold);
        let panels = DisclosureGroup::collect(
            page,
            Some(&section),
            &Selector::Attr(attrs::WHY_TRIGGER),
            &Selector::Attr(attrs::WHY_ICON),
            true,
        );
        Some(Self { reveal, panels })
    }

    pub fn reveal(&self) -> &Reveal<N> {
        &self.reveal
    }

    pub fn reveal_mut(&mut self) -> &mut Reveal<N> {
        &mut self.reveal
    }

    pub fn panels(&self) -> &DisclosureGroup<N> {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut DisclosureGroup<N> {
        &mut self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryPage, NodeId};

    /// `count` accordion items; the last one points at a panel that does not exist
    fn faq(count: usize, broken: bool) -> (MemoryPage, Vec<NodeId>) {
        let mut page = MemoryPage::new();
        let root = page.append_element(None, "section");
        let mut triggers = Vec::new();
        for i in 0..count {
            let button = page.append_element(Some(root), "button");
            page.set_attribute(&button, attrs::ACCORDION_TRIGGER, "");
            page.set_attribute(&button, attrs::ARIA_CONTROLS, &format!("faq-{i}"));
            let icon = page.append_element(Some(button), "span");
            page.set_attribute(&icon, attrs::ACCORDION_ICON, "");
            if !(broken && i + 1 == count) {
                let panel = page.append_element(Some(root), "div");
                page.set_attribute(&panel, "id", &format!("faq-{i}"));
            }
            triggers.push(button);
        }
        (page, triggers)
    }

    fn snapshot(page: &MemoryPage, trigger: NodeId) -> (Option<String>, Option<String>, Option<String>) {
        let panel_id = page.attribute(&trigger, attrs::ARIA_CONTROLS).unwrap();
        let panel = page.element_by_id(&panel_id).unwrap();
        (
            page.attribute(&trigger, attrs::ARIA_EXPANDED),
            page.attribute(&panel, "class"),
            page.attribute(&panel, attrs::ARIA_HIDDEN),
        )
    }

    #[test]
    fn test_initial_state_written_collapsed() {
        let (mut page, triggers) = faq(2, false);
        let group = accordion(&mut page);
        assert_eq!(group.items().len(), 2);
        let (expanded, class, hidden) = snapshot(&page, triggers[0]);
        assert_eq!(expanded.as_deref(), Some("false"));
        assert_eq!(class.as_deref(), Some(classes::HIDDEN));
        assert_eq!(hidden.as_deref(), Some("true"));
    }

    #[test]
    fn test_toggle_twice_restores_attributes() {
        let (mut page, triggers) = faq(1, false);
        let mut group = accordion(&mut page);
        let before = snapshot(&page, triggers[0]);
        let icon = page.query(Some(&triggers[0]), &Selector::Attr(attrs::ACCORDION_ICON)).unwrap();

        assert!(group.on_click(&mut page, &triggers[0]));
        let (expanded, _, hidden) = snapshot(&page, triggers[0]);
        assert_eq!(expanded.as_deref(), Some("true"));
        assert_eq!(hidden.as_deref(), Some("false"));
        assert!(page.has_class(&icon, classes::ROTATED));

        assert!(group.on_click(&mut page, &triggers[0]));
        assert_eq!(snapshot(&page, triggers[0]), before);
        assert!(!page.has_class(&icon, classes::ROTATED));
    }

    #[test]
    fn test_trigger_without_panel_skipped() {
        let (mut page, triggers) = faq(3, true);
        let mut group = accordion(&mut page);
        assert_eq!(group.items().len(), 2);
        assert!(!group.on_click(&mut page, &triggers[2]));
        assert_eq!(page.attribute(&triggers[2], attrs::ARIA_EXPANDED), None);
        assert!(group.on_click(&mut page, &triggers[0]));
    }

    #[test]
    fn test_accordion_ignores_keys() {
        let (mut page, triggers) = faq(1, false);
        let mut group = accordion(&mut page);
        assert!(!group.on_key(&mut page, &triggers[0], "Enter"));
        assert!(!group.items()[0].is_expanded());
        assert!(group
            .bindings()
            .iter()
            .all(|binding| binding.event == EventKind::Click));
    }

    #[test]
    fn test_keyboard_group_toggles_on_enter_and_space() {
        let (mut page, triggers) = faq(1, false);
        let mut group = DisclosureGroup::collect(
            &mut page,
            None,
            &Selector::Attr(attrs::ACCORDION_TRIGGER),
            &Selector::Attr(attrs::ACCORDION_ICON),
            true,
        );
        assert!(!group.on_key(&mut page, &triggers[0], "Tab"));
        assert!(group.on_key(&mut page, &triggers[0], "Enter"));
        assert!(group.items()[0].is_expanded());
        assert!(group.on_key(&mut page, &triggers[0], " "));
        assert!(!group.items()[0].is_expanded());
        assert_eq!(group.bindings().len(), 2);
    }

    #[test]
    fn test_menu_link_collapses() {
        let mut page = MemoryPage::new();
        let header = page.append_element(None, "header");
        let toggle = page.append_element(Some(header), "button");
        page.set_attribute(&toggle, attrs::MENU_TOGGLE, "");
        let menu = page.append_element(Some(header), "nav");
        page.set_attribute(&menu, attrs::MOBILE_MENU, "");
        let link = page.append_element(Some(menu), "a");

        let mut nav = NavigationMenu::init(&mut page).unwrap();
        assert!(page.has_class(&menu, classes::HIDDEN));
        assert!(nav.on_click(&mut page, &toggle));
        assert!(nav.is_open());
        assert!(!page.has_class(&menu, classes::HIDDEN));

        assert!(nav.on_click(&mut page, &link));
        assert!(!nav.is_open());
        assert!(page.has_class(&menu, classes::HIDDEN));
        assert_eq!(page.attribute(&toggle, attrs::ARIA_EXPANDED).as_deref(), Some("false"));
        assert_eq!(nav.bindings().len(), 2);
    }

    #[test]
    fn test_why_it_matters_needs_section() {
        let (mut page, _) = faq(1, false);
        assert!(WhyItMatters::init(&mut page, 0.3).is_none());
    }
}
