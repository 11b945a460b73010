//! # domkit - Document capability
//!
//! The environment that page behavior code runs against: a document that
//! resolves elements by id, and elements exposing their class list, inline
//! `display`, text and input value.
//!
//! - [`Document`] / [`Element`]: the capability traits
//! - [`Display`]: typed CSS display keywords, parsed with `nom`
//! - [`InlineStyle`]: ordered inline style declarations
//! - [`Page`]: an in-memory implementation with an outline dump for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use domkit::{Display, Document, Node, Page};
//!
//! let mut page = Page::from_nodes(vec![Node::new("div").with_id("menu")]);
//! page.with_element_by_id("menu", |el| el.set_display(Display::None));
//!
//! let menu = page.element_by_id("menu").unwrap();
//! assert_eq!(page.element(menu).unwrap().display(), Some(Display::None));
//! ```

pub mod display;
pub mod document;
pub mod element;
pub mod error;
pub mod page;
pub mod style;

pub use display::Display;
pub use document::{Document, NodeId};
pub use element::Element;
pub use error::DomError;
pub use page::{Node, Page};
pub use style::InlineStyle;
