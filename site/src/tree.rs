//! Small helpers for growing a `MemoryPage` tree.

use brief::dom::{MemoryPage, NodeId, Page};

/// Append `<tag>` under `parent` with the given attributes (`class` included)
pub(crate) fn el(page: &mut MemoryPage, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = page.append_element(Some(parent), tag);
    for (name, value) in attrs {
        page.set_attribute(&node, name, value);
    }
    node
}

/// Same as [`el`], with text content
pub(crate) fn text(
    page: &mut MemoryPage,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    content: &str,
) -> NodeId {
    let node = el(page, parent, tag, attrs);
    page.append_text(node, content);
    node
}

/// Empty element carrying only an id, filled in by a controller
pub(crate) fn slot(page: &mut MemoryPage, parent: NodeId, tag: &str, id: &str, class: &str) -> NodeId {
    el(page, parent, tag, &[("id", id), ("class", class)])
}
