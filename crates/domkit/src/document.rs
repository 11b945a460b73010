//! The document capability.
//!
//! Code that shows and hides page sections never owns the page. It receives
//! a `&mut impl Document` and resolves elements through it, holding on to
//! the returned [`NodeId`] handles.

use crate::element::Element;

/// Opaque handle to an element inside a particular document.
///
/// Handles stay valid for the lifetime of the document; elements are never
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A document-like environment that exposes elements by identifier.
pub trait Document {
    /// Find an element by its `id` attribute.
    ///
    /// When several elements share an id, the first in document order wins.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Shared access to a resolved element.
    fn element(&self, node: NodeId) -> Option<&dyn Element>;

    /// Mutable access to a resolved element.
    fn element_mut(&mut self, node: NodeId) -> Option<&mut dyn Element>;

    /// Show a blocking message to the user (`window.alert`).
    fn alert(&mut self, message: &str);

    /// Find an element by id and call a closure with mutable access.
    ///
    /// # Example
    /// ```ignore
    /// doc.with_element_by_id("status", |el| el.set_text("Saved"));
    /// ```
    fn with_element_by_id<F, R>(&mut self, id: &str, f: F) -> Option<R>
    where
        Self: Sized,
        F: FnOnce(&mut dyn Element) -> R,
    {
        let node = self.element_by_id(id)?;
        self.element_mut(node).map(f)
    }
}
