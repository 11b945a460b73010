//! In-memory document.
//!
//! [`Page`] is a small element tree implementing [`Document`]. It is what
//! tests and demos run the behavior layer against, and it can dump itself as
//! an indented outline for snapshot assertions.
//!
//! # Example
//!
//! ```rust
//! use domkit::{Document, Node, Page};
//!
//! let page = Page::from_nodes(vec![
//!     Node::new("section").with_id("home"),
//!     Node::new("section").with_id("about").with_classes("hidden"),
//! ]);
//!
//! assert!(page.element_by_id("about").is_some());
//! assert!(page.element_by_id("missing").is_none());
//! ```

use std::fmt::Write;

use crate::display::Display;
use crate::document::{Document, NodeId};
use crate::element::Element;
use crate::style::InlineStyle;

/// An element node. Also serves as the builder for page content.
#[derive(Debug, Clone, Default)]
pub struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: InlineStyle,
    text: String,
    value: String,
    /// Only populated while building; moved into the page on insertion.
    pending_children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set CSS classes (space-separated).
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes = classes.split_whitespace().map(String::from).collect();
        self
    }

    /// Set the inline style from attribute text.
    ///
    /// Text that does not parse leaves the style empty.
    pub fn with_style(mut self, style: &str) -> Self {
        self.style = InlineStyle::parse(style).unwrap_or_else(|e| {
            log::warn!("Ignoring style on <{}>: {}", self.tag, e);
            InlineStyle::new()
        });
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.pending_children = children;
        self
    }

    /// The full inline style of this node.
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    fn outline_line(&self) -> String {
        let mut line = self.tag.clone();
        if let Some(id) = &self.id {
            line.push('#');
            line.push_str(id);
        }
        for class in &self.classes {
            line.push('.');
            line.push_str(class);
        }
        if !self.style.is_empty() {
            let _ = write!(line, " [{}]", self.style);
        }
        if !self.text.is_empty() {
            let _ = write!(line, " {:?}", self.text);
        }
        if !self.value.is_empty() {
            let _ = write!(line, " value={:?}", self.value);
        }
        line
    }
}

impl Element for Node {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn classes(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn display(&self) -> Option<Display> {
        self.style.display()
    }

    fn set_display(&mut self, display: Display) {
        self.style.set_display(display);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// An in-memory element tree rooted at `<body>`.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
    alerts: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Create a page with an empty body.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            children: vec![Vec::new()],
            alerts: Vec::new(),
        }
    }

    /// Create a page whose body contains the given nodes.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut page = Self::new();
        let root = page.root();
        for node in nodes {
            page.append(root, node);
        }
        page
    }

    /// The `<body>` node.
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Append a node (and any children built into it) under `parent`.
    ///
    /// An unknown parent appends to the body instead.
    pub fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let parent = if parent.index() < self.nodes.len() {
            parent
        } else {
            self.root()
        };

        let pending = std::mem::take(&mut node.pending_children);
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.children[parent.index()].push(id);

        for child in pending {
            self.append(id, child);
        }
        id
    }

    /// Direct children of a node, in document order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Typed access to a node.
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    /// Messages passed to [`Document::alert`], oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain recorded alerts.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Render the tree as an indented outline, one element per line.
    ///
    /// Format: `tag#id.class [inline style] "text" value="value"`.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(self.root(), 0, &mut out);
        out
    }

    fn outline_into(&self, node: NodeId, depth: usize, out: &mut String) {
        if let Some(data) = self.node(node) {
            let _ = writeln!(out, "{}{}", "  ".repeat(depth), data.outline_line());
        }
        for &child in self.children(node) {
            self.outline_into(child, depth + 1, out);
        }
    }

    /// Depth-first search for the first node with a matching id.
    fn find_by_id(&self, node: NodeId, id: &str) -> Option<NodeId> {
        if self.nodes[node.index()].id.as_deref() == Some(id) {
            return Some(node);
        }
        self.children(node)
            .iter()
            .find_map(|&child| self.find_by_id(child, id))
    }
}

impl Document for Page {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.root(), id)
    }

    fn element(&self, node: NodeId) -> Option<&dyn Element> {
        self.nodes.get(node.index()).map(|n| n as &dyn Element)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut dyn Element> {
        self.nodes
            .get_mut(node.index())
            .map(|n| n as &mut dyn Element)
    }

    fn alert(&mut self, message: &str) {
        log::info!("alert: {}", message);
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_class_flips_membership() {
        let mut node = Node::new("div").with_classes("card hidden");
        assert!(!node.toggle_class("hidden"));
        assert_eq!(node.classes(), vec!["card".to_string()]);
        assert!(node.toggle_class("hidden"));
        assert!(node.has_class("hidden"));
    }

    #[test]
    fn add_class_does_not_duplicate() {
        let mut node = Node::new("div");
        node.add_class("hidden");
        node.add_class("hidden");
        assert_eq!(node.classes().len(), 1);
    }

    #[test]
    fn unset_display_is_none() {
        let node = Node::new("div");
        assert_eq!(node.display(), None);
        let node = Node::new("div").with_style("display: flex");
        assert_eq!(node.display(), Some(Display::Flex));
    }

    #[test]
    fn invalid_style_text_leaves_style_empty() {
        let node = Node::new("div").with_style("display flex");
        assert!(node.style().is_empty());
    }

    #[test]
    fn append_to_unknown_parent_uses_body() {
        let mut page = Page::new();
        let id = page.append(NodeId::new(42), Node::new("p").with_id("late"));
        assert_eq!(page.children(page.root()), &[id]);
    }

    #[test]
    fn alerts_are_recorded_in_order() {
        let mut page = Page::new();
        page.alert("first");
        page.alert("second");
        assert_eq!(page.take_alerts(), vec!["first", "second"]);
        assert!(page.alerts().is_empty());
    }
}
