//! Page port: the handful of DOM capabilities the controllers rely on.
//!
//! Controllers never touch a browser API directly. They talk to a [`Page`],
//! which is either the headless [`MemoryPage`] (tests, prerendering) or the
//! web-sys adapter behind the `web` feature.

pub mod memory;

pub use memory::{MemoryPage, NodeId};

use std::fmt;

/// Element query understood by every [`Page`] implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Elements carrying a class, `.name`
    Class(&'static str),
    /// Elements carrying an attribute, `[name]`
    Attr(&'static str),
    /// Elements whose attribute equals a value, `[name="value"]`
    AttrEq(&'static str, String),
    /// Elements with a tag name, `a`
    Tag(&'static str),
}

impl Selector {
    pub fn attr_eq<V: Into<String>>(name: &'static str, value: V) -> Self {
        Self::AttrEq(name, value.into())
    }

    /// CSS form of the selector, for `querySelectorAll`
    pub fn to_css(&self) -> String {
        match self {
            Selector::Class(name) => format!(".{name}"),
            Selector::Attr(name) => format!("[{name}]"),
            Selector::AttrEq(name, value) => {
                format!("[{name}=\"{}\"]", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Selector::Tag(name) => (*name).to_string(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Host page the controllers read from and project records into.
///
/// Write operations are infallible from the caller's point of view: a
/// failed write on a live page leaves the element unchanged.
pub trait Page {
    /// Handle to an element; compared by identity
    type Node: Clone + PartialEq + fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All matches in document order, within `scope` when given
    fn query_all(&self, scope: Option<&Self::Node>, selector: &Selector) -> Vec<Self::Node>;

    fn query(&self, scope: Option<&Self::Node>, selector: &Selector) -> Option<Self::Node> {
        self.query_all(scope, selector).into_iter().next()
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add the class when `on` is true, remove it otherwise
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool);

    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Current value of a form control
    fn value(&self, node: &Self::Node) -> Option<String>;
}
