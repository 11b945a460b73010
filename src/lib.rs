//! Section and popup switching for content pages.
//!
//! This crate bundles the workspace for applications:
//!
//! - [`domkit`]: the document capability and the in-memory [`domkit::Page`]
//! - [`sectional`]: toggles, registries, the site wiring and the API client
//!
//! ```rust
//! use sectional_rs::domkit::{Display, Node, Page};
//! use sectional_rs::{Registry, Strategy};
//!
//! let mut page = Page::from_nodes(vec![
//!     Node::new("div").with_id("success-popup"),
//!     Node::new("div").with_id("error-popup"),
//! ]);
//!
//! let mut popups = Registry::new("popups");
//! popups.register_many(&page, ["success-popup", "error-popup"], &Strategy::Style, Display::Flex);
//! popups.hide_all(&mut page).unwrap();
//! popups.show(&mut page, "error-popup");
//!
//! assert_eq!(popups.visible_ids(&page), vec!["error-popup"]);
//! ```

pub use sectional::*;
