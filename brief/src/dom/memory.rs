//! Headless page used by tests, the prerenderer and `brief check`.

use super::{Page, Selector};

/// Index of a node inside a [`MemoryPage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, Default)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(ElementData),
    Text(String),
    /// Unescaped content of `<style>` and `<script>`
    Raw(String),
}

#[derive(Debug, Clone)]
struct Entry {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document tree implementing [`Page`].
///
/// Detached nodes stay in the arena but are invisible to queries and
/// serialization.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    entries: Vec<Entry>,
    roots: Vec<NodeId>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent`, or as a new root
    pub fn append_element(&mut self, parent: Option<NodeId>, tag: &str) -> NodeId {
        self.push(
            parent,
            NodeKind::Element(ElementData {
                tag: tag.to_ascii_lowercase(),
                ..ElementData::default()
            }),
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(Some(parent), NodeKind::Text(text.to_string()))
    }

    pub fn append_raw(&mut self, parent: NodeId, raw: &str) -> NodeId {
        self.push(Some(parent), NodeKind::Raw(raw.to_string()))
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(Entry {
            kind,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.entries[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Detach a node and its subtree from the document
    pub fn remove(&mut self, node: NodeId) {
        match self.entries[node.0].parent.take() {
            Some(parent) => self.entries[parent.0].children.retain(|child| *child != node),
            None => self.roots.retain(|root| *root != node),
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.entries.get(node.0)?.kind {
            NodeKind::Element(data) => Some(&data.tag),
            _ => None,
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.entries[node.0].children
    }

    /// Mark the `<option>` with `value` as selected inside a `<select>`
    pub fn select_option(&mut self, select: NodeId, value: &str) -> bool {
        let options = self.query_all(Some(&select), &Selector::Tag("option"));
        let Some(target) = options
            .iter()
            .copied()
            .find(|option| self.option_value(*option) == value)
        else {
            return false;
        };
        for option in options {
            if let Some(data) = self.element_mut(option) {
                data.attributes.retain(|(name, _)| name != "selected");
            }
        }
        self.set_attribute(&target, "selected", "");
        true
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.entries.get(node.0)?.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match &mut self.entries.get_mut(node.0)?.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    fn option_value(&self, option: NodeId) -> String {
        self.attribute(&option, "value")
            .unwrap_or_else(|| self.text(&option))
    }

    /// Attached descendants of `scope` (or of the whole document) in document order
    fn descendants(&self, scope: Option<NodeId>) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match scope {
            Some(node) => self.entries[node.0].children.iter().rev().copied().collect(),
            None => self.roots.iter().rev().copied().collect(),
        };
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.entries[node.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let Some(data) = self.element(node) else {
            return false;
        };
        match selector {
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::Attr(name) => self.attribute(&node, name).is_some(),
            Selector::AttrEq(name, value) => {
                self.attribute(&node, name).as_deref() == Some(value.as_str())
            }
            Selector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
        }
    }

    /// Serialize the attached document
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.write_node(*root, &mut out);
            out.push('\n');
        }
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let entry = &self.entries[node.0];
        match &entry.kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Raw(raw) => out.push_str(raw),
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag);
                for (name, value) in &data.attributes {
                    write_attribute(out, name, value);
                }
                if !data.classes.is_empty() {
                    write_attribute(out, "class", &data.classes.join(" "));
                }
                if !data.styles.is_empty() {
                    write_attribute(out, "style", &join_styles(&data.styles));
                }
                out.push('>');
                if VOID_TAGS.contains(&data.tag.as_str()) {
                    return;
                }
                for child in &entry.children {
                    self.write_node(*child, out);
                }
                out.push_str("</");
                out.push_str(&data.tag);
                out.push('>');
            }
        }
    }
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(None)
            .into_iter()
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn query_all(&self, scope: Option<&NodeId>, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope.copied())
            .into_iter()
            .filter(|node| self.matches(*node, selector))
            .collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let data = self.element(*node)?;
        match name {
            "class" if data.classes.is_empty() => None,
            "class" => Some(data.classes.join(" ")),
            "style" if data.styles.is_empty() => None,
            "style" => Some(join_styles(&data.styles)),
            _ => data
                .attributes
                .iter()
                .find(|(attr, _)| attr == name)
                .map(|(_, value)| value.clone()),
        }
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        let Some(data) = self.element_mut(*node) else {
            return;
        };
        match name {
            "class" => {
                data.classes = value.split_whitespace().map(str::to_string).collect();
            }
            "style" => {
                data.styles = value
                    .split(';')
                    .filter_map(|decl| decl.split_once(':'))
                    .map(|(prop, val)| (prop.trim().to_string(), val.trim().to_string()))
                    .collect();
            }
            _ => match data.attributes.iter_mut().find(|(attr, _)| attr == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => data.attributes.push((name.to_string(), value.to_string())),
            },
        }
    }

    fn text(&self, node: &NodeId) -> String {
        match &self.entries[node.0].kind {
            NodeKind::Text(text) | NodeKind::Raw(text) => text.clone(),
            NodeKind::Element(_) => self
                .entries[node.0]
                .children
                .iter()
                .map(|child| self.text(child))
                .collect(),
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if self.element(*node).is_none() {
            return;
        }
        for child in std::mem::take(&mut self.entries[node.0].children) {
            self.entries[child.0].parent = None;
        }
        self.append_text(*node, text);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.element(*node)
            .is_some_and(|data| data.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, node: &NodeId, class: &str, on: bool) {
        let Some(data) = self.element_mut(*node) else {
            return;
        };
        let present = data.classes.iter().any(|c| c == class);
        if on && !present {
            data.classes.push(class.to_string());
        } else if !on && present {
            data.classes.retain(|c| c != class);
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.element(*node)?
            .styles
            .iter()
            .find(|(prop, _)| prop == property)
            .map(|(_, value)| value.clone())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let Some(data) = self.element_mut(*node) else {
            return;
        };
        match data.styles.iter_mut().find(|(prop, _)| prop == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.styles.push((property.to_string(), value.to_string())),
        }
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        match self.tag(*node)? {
            "select" => {
                let options = self.query_all(Some(node), &Selector::Tag("option"));
                options
                    .iter()
                    .find(|option| self.attribute(option, "selected").is_some())
                    .or_else(|| options.first())
                    .map(|option| self.option_value(*option))
            }
            "input" | "option" => self.attribute(node, "value"),
            _ => None,
        }
    }
}

fn join_styles(styles: &[(String, String)]) -> String {
    styles
        .iter()
        .map(|(prop, value)| format!("{prop}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}

/// Escape text content for HTML output
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted HTML output
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryPage, NodeId, NodeId) {
        let mut page = MemoryPage::new();
        let body = page.append_element(None, "body");
        let section = page.append_element(Some(body), "section");
        page.set_attribute(&section, "id", "timeline");
        let button = page.append_element(Some(section), "button");
        page.set_attribute(&button, "data-timeline", "1989");
        page.set_attribute(&button, "class", "pill active");
        page.append_text(button, "1989");
        (page, section, button)
    }

    #[test]
    fn test_lookup_and_queries() {
        let (page, section, button) = sample();
        assert_eq!(page.element_by_id("timeline"), Some(section));
        assert_eq!(page.query_all(None, &Selector::Attr("data-timeline")), vec![button]);
        assert_eq!(page.query(Some(&section), &Selector::Class("pill")), Some(button));
        assert_eq!(page.query(Some(&button), &Selector::Class("pill")), None);
        assert_eq!(page.attribute(&button, "data-timeline").as_deref(), Some("1989"));
    }

    #[test]
    fn test_set_text_replaces_children() {
        let (mut page, section, button) = sample();
        page.set_text(&section, "gone");
        assert_eq!(page.text(&section), "gone");
        assert!(page.query_all(None, &Selector::Attr("data-timeline")).is_empty());
        assert_eq!(page.text(&button), "1989");
    }

    #[test]
    fn test_classes_and_styles() {
        let (mut page, _, button) = sample();
        page.set_class(&button, "active", false);
        page.set_class(&button, "hidden", true);
        page.set_class(&button, "hidden", true);
        assert_eq!(page.attribute(&button, "class").as_deref(), Some("pill hidden"));

        page.set_style(&button, "width", "40%");
        page.set_style(&button, "width", "60%");
        assert_eq!(page.style(&button, "width").as_deref(), Some("60%"));
        assert_eq!(page.attribute(&button, "style").as_deref(), Some("width: 60%;"));
    }

    #[test]
    fn test_remove_hides_subtree() {
        let (mut page, section, _) = sample();
        page.remove(section);
        assert!(page.element_by_id("timeline").is_none());
        assert!(!page.to_html().contains("section"));
    }

    #[test]
    fn test_select_value_follows_selected_option() {
        let mut page = MemoryPage::new();
        let select = page.append_element(None, "select");
        for key in ["medsurg", "icu"] {
            let option = page.append_element(Some(select), "option");
            page.set_attribute(&option, "value", key);
        }
        assert_eq!(page.value(&select).as_deref(), Some("medsurg"));
        assert!(page.select_option(select, "icu"));
        assert_eq!(page.value(&select).as_deref(), Some("icu"));
        assert!(!page.select_option(select, "er"));
        assert_eq!(page.value(&select).as_deref(), Some("icu"));
    }

    #[test]
    fn test_html_serialization_escapes() {
        let mut page = MemoryPage::new();
        let p = page.append_element(None, "p");
        page.set_attribute(&p, "title", "a \"quoted\" <tag>");
        page.append_text(p, "Delay & Decay <b>");
        let br = page.append_element(Some(p), "br");
        page.set_attribute(&br, "hidden", "");
        assert_eq!(
            page.to_html(),
            "<p title=\"a &quot;quoted&quot; &lt;tag&gt;\">Delay &amp; Decay &lt;b&gt;<br hidden></p>\n"
        );
    }

    #[test]
    fn test_raw_content_is_not_escaped() {
        let mut page = MemoryPage::new();
        let style = page.append_element(None, "style");
        page.append_raw(style, ".a > .b { color: red; }");
        assert_eq!(page.to_html(), "<style>.a > .b { color: red; }</style>\n");
    }
}
