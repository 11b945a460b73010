//! The element capability.
//!
//! [`Element`] is the slice of a DOM element that the behavior layer touches:
//! identity, the class list, the inline `display` property, text content and
//! form input values. Defaults are provided where an operation can be
//! expressed through the others, mirroring DOM `classList.toggle`.

use crate::display::Display;

/// A single element in a [`Document`](crate::Document).
pub trait Element {
    /// The element's `id` attribute, if set.
    fn id(&self) -> Option<&str>;

    /// Tag name, lowercase (`div`, `section`, `input`).
    fn tag(&self) -> &str;

    // =========================================================================
    // Class List
    // =========================================================================

    /// Add a class. Adding a present class does nothing.
    fn add_class(&mut self, class: &str);

    /// Remove a class. Removing an absent class does nothing.
    fn remove_class(&mut self, class: &str);

    /// Check if the element has a class.
    fn has_class(&self, class: &str) -> bool;

    /// Toggle a class.
    ///
    /// If the class is present, it's removed. If absent, it's added.
    /// Returns true if the class is present afterwards.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// All classes in insertion order.
    fn classes(&self) -> Vec<String>;

    // =========================================================================
    // Inline Style
    // =========================================================================

    /// The inline `display` value, `None` when it was never set.
    fn display(&self) -> Option<Display>;

    /// Set the inline `display` value.
    fn set_display(&mut self, display: Display);

    // =========================================================================
    // Content
    // =========================================================================

    /// Text content of the element.
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    /// Current value of a form control. Empty for non-inputs.
    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);
}
