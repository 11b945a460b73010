//! Visibility control for a single element.
//!
//! A [`Toggle`] resolves its element once, when it is constructed. If the
//! element is missing the toggle is inert: the failure is logged and every
//! later operation reports [`Effect::Skipped`].
//!
//! Two strategies express visibility:
//! - [`Strategy::Class`] adds or removes the `hidden` marker class
//! - [`Strategy::Style`] writes the inline `display` property, using the
//!   toggle's on-value when shown and `none` when hidden

use std::fmt;

use domkit::{Display, Document, Element, NodeId};
use serde::{Deserialize, Serialize};

use crate::error::ToggleError;

/// Marker class used by [`Strategy::Class`].
pub const HIDDEN_CLASS: &str = "hidden";

/// How a toggle expresses visibility on its element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    /// Toggle the `hidden` class.
    Class,
    /// Toggle the inline `display` property.
    Style,
    /// A configured value that names neither strategy. Operations on a toggle
    /// with this strategy log an error and change nothing.
    Unrecognized(String),
}

impl Strategy {
    pub fn as_str(&self) -> &str {
        match self {
            Strategy::Class => "class",
            Strategy::Style => "style",
            Strategy::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Strategy {
    fn from(value: &str) -> Self {
        match value {
            "class" => Strategy::Class,
            "style" => Strategy::Style,
            _ => Strategy::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Strategy {
    fn from(value: String) -> Self {
        Strategy::from(value.as_str())
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.as_str().to_string()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an operation did to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The element is now visible.
    Shown,
    /// The element is now hidden.
    Hidden,
    /// The toggle is inert; nothing was touched.
    Skipped,
}

/// Result of a visibility operation.
pub type Outcome<T = Effect> = Result<T, ToggleError>;

/// Visibility controller for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    id: String,
    strategy: Strategy,
    on: Display,
    node: Option<NodeId>,
}

impl Toggle {
    /// Resolve `id` in the document and build a toggle for it.
    ///
    /// Never fails. A missing element is logged and leaves the toggle inert;
    /// [`Toggle::lookup_error`] reports it.
    pub fn new<D>(document: &D, id: &str, strategy: Strategy, on: Display) -> Self
    where
        D: Document + ?Sized,
    {
        let node = document.element_by_id(id);
        if node.is_none() {
            log::error!("Toggle: element #{} not found", id);
        }

        Self {
            id: id.to_string(),
            strategy,
            on,
            node,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// The display value used by [`Strategy::Style`] when shown.
    pub fn on_value(&self) -> Display {
        self.on
    }

    /// The resolved element, `None` when inert.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_inert(&self) -> bool {
        self.node.is_none()
    }

    /// The lookup failure recorded at construction, if any.
    pub fn lookup_error(&self) -> Option<ToggleError> {
        self.node
            .is_none()
            .then(|| ToggleError::ElementNotFound(self.id.clone()))
    }

    /// Make the element visible.
    pub fn show<D>(&self, document: &mut D) -> Outcome
    where
        D: Document + ?Sized,
    {
        let Some(element) = self.element_mut(document) else {
            return Ok(Effect::Skipped);
        };

        match &self.strategy {
            Strategy::Class => element.remove_class(HIDDEN_CLASS),
            Strategy::Style => element.set_display(self.on),
            Strategy::Unrecognized(raw) => return Err(self.unknown_strategy(raw)),
        }
        Ok(Effect::Shown)
    }

    /// Hide the element.
    pub fn hide<D>(&self, document: &mut D) -> Outcome
    where
        D: Document + ?Sized,
    {
        let Some(element) = self.element_mut(document) else {
            return Ok(Effect::Skipped);
        };

        match &self.strategy {
            Strategy::Class => element.add_class(HIDDEN_CLASS),
            Strategy::Style => element.set_display(Display::None),
            Strategy::Unrecognized(raw) => return Err(self.unknown_strategy(raw)),
        }
        Ok(Effect::Hidden)
    }

    /// Flip the element's visibility.
    ///
    /// With [`Strategy::Style`], an element whose inline display was never
    /// set counts as visible, so the first toggle hides it.
    pub fn toggle<D>(&self, document: &mut D) -> Outcome
    where
        D: Document + ?Sized,
    {
        let Some(element) = self.element_mut(document) else {
            return Ok(Effect::Skipped);
        };

        match &self.strategy {
            Strategy::Class => {
                if element.toggle_class(HIDDEN_CLASS) {
                    Ok(Effect::Hidden)
                } else {
                    Ok(Effect::Shown)
                }
            }
            Strategy::Style => match element.display() {
                Some(Display::None) => {
                    element.set_display(self.on);
                    Ok(Effect::Shown)
                }
                _ => {
                    element.set_display(Display::None);
                    Ok(Effect::Hidden)
                }
            },
            Strategy::Unrecognized(raw) => Err(self.unknown_strategy(raw)),
        }
    }

    /// Whether the element currently counts as visible under this toggle's
    /// strategy. `None` for inert toggles and unrecognized strategies.
    pub fn is_visible<D>(&self, document: &D) -> Option<bool>
    where
        D: Document + ?Sized,
    {
        let element = document.element(self.node?)?;
        match &self.strategy {
            Strategy::Class => Some(!element.has_class(HIDDEN_CLASS)),
            Strategy::Style => Some(element.display() != Some(Display::None)),
            Strategy::Unrecognized(_) => None,
        }
    }

    fn element_mut<'d, D>(&self, document: &'d mut D) -> Option<&'d mut dyn Element>
    where
        D: Document + ?Sized,
    {
        document.element_mut(self.node?)
    }

    fn unknown_strategy(&self, raw: &str) -> ToggleError {
        log::error!("Toggle: unknown strategy '{}' for #{}", raw, self.id);
        ToggleError::UnknownStrategy {
            id: self.id.clone(),
            strategy: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domkit::{Node, Page};

    fn page() -> Page {
        Page::from_nodes(vec![
            Node::new("div").with_id("panel"),
            Node::new("div").with_id("card").with_classes("card"),
        ])
    }

    fn display_of(page: &Page, id: &str) -> Option<Display> {
        let node = page.element_by_id(id)?;
        page.element(node)?.display()
    }

    #[test]
    fn strategy_parses_known_names() {
        assert_eq!(Strategy::from("class"), Strategy::Class);
        assert_eq!(Strategy::from("style"), Strategy::Style);
        assert_eq!(
            Strategy::from("opacity"),
            Strategy::Unrecognized("opacity".to_string())
        );
    }

    #[test]
    fn strategy_names_are_matched_exactly() {
        for raw in ["CLASS", "Style", " class", "style "] {
            assert_eq!(Strategy::from(raw), Strategy::Unrecognized(raw.to_string()));
        }
    }

    #[test]
    fn style_show_and_hide_write_display() {
        let mut page = page();
        let toggle = Toggle::new(&page, "panel", Strategy::Style, Display::Flex);

        assert_eq!(toggle.hide(&mut page), Ok(Effect::Hidden));
        assert_eq!(display_of(&page, "panel"), Some(Display::None));

        assert_eq!(toggle.show(&mut page), Ok(Effect::Shown));
        assert_eq!(display_of(&page, "panel"), Some(Display::Flex));
    }

    #[test]
    fn class_show_and_hide_manage_marker() {
        let mut page = page();
        let toggle = Toggle::new(&page, "card", Strategy::Class, Display::Block);

        toggle.hide(&mut page).unwrap();
        assert_eq!(toggle.is_visible(&page), Some(false));
        toggle.show(&mut page).unwrap();
        assert_eq!(toggle.is_visible(&page), Some(true));

        let node = page.element_by_id("card").unwrap();
        assert_eq!(page.element(node).unwrap().classes(), vec!["card".to_string()]);
    }

    #[test]
    fn unset_display_counts_as_visible_so_first_toggle_hides() {
        let mut page = page();
        let toggle = Toggle::new(&page, "panel", Strategy::Style, Display::Block);

        assert_eq!(display_of(&page, "panel"), None);
        assert_eq!(toggle.is_visible(&page), Some(true));
        assert_eq!(toggle.toggle(&mut page), Ok(Effect::Hidden));
        assert_eq!(display_of(&page, "panel"), Some(Display::None));
        assert_eq!(toggle.toggle(&mut page), Ok(Effect::Shown));
        assert_eq!(display_of(&page, "panel"), Some(Display::Block));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut page = page();
        for strategy in [Strategy::Class, Strategy::Style] {
            let toggle = Toggle::new(&page, "card", strategy, Display::Flex);
            toggle.show(&mut page).unwrap();
            toggle.toggle(&mut page).unwrap();
            assert_eq!(toggle.is_visible(&page), Some(false));
            toggle.toggle(&mut page).unwrap();
            assert_eq!(toggle.is_visible(&page), Some(true));
        }
    }

    #[test]
    fn missing_element_makes_toggle_inert() {
        let mut page = page();
        let before = page.outline();
        let toggle = Toggle::new(&page, "ghost", Strategy::Style, Display::Flex);

        assert!(toggle.is_inert());
        assert_eq!(
            toggle.lookup_error(),
            Some(ToggleError::ElementNotFound("ghost".to_string()))
        );
        assert_eq!(toggle.show(&mut page), Ok(Effect::Skipped));
        assert_eq!(toggle.hide(&mut page), Ok(Effect::Skipped));
        assert_eq!(toggle.toggle(&mut page), Ok(Effect::Skipped));
        assert_eq!(toggle.is_visible(&page), None);
        assert_eq!(page.outline(), before);
    }

    #[test]
    fn unrecognized_strategy_changes_nothing() {
        let mut page = page();
        let before = page.outline();
        let toggle = Toggle::new(&page, "panel", Strategy::from("fade"), Display::Flex);

        let expected = Err(ToggleError::UnknownStrategy {
            id: "panel".to_string(),
            strategy: "fade".to_string(),
        });
        assert_eq!(toggle.show(&mut page), expected);
        assert_eq!(toggle.hide(&mut page), expected);
        assert_eq!(toggle.toggle(&mut page), expected);
        assert_eq!(page.outline(), before);
    }
}
