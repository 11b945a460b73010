//! # sectional
//!
//! Page behavior for grouped sections and popups.
//!
//! - [`Toggle`]: shows, hides or flips one element, through either the
//!   `hidden` class or the inline `display` property
//! - [`Registry`]: an ordered, named set of toggles with batch and exclusive
//!   operations
//! - [`Site`]: builds registries from a [`SiteConfig`], dispatches click
//!   bindings and runs the request form against the API
//!
//! Elements are reached through the [`domkit::Document`] capability, so the
//! same code runs against a real page or an in-memory [`domkit::Page`].
//!
//! ## Quick Start
//!
//! ```rust
//! use domkit::{Display, Node, Page};
//! use sectional::{Registry, Strategy};
//!
//! let mut page = Page::from_nodes(vec![
//!     Node::new("section").with_id("home"),
//!     Node::new("section").with_id("about"),
//! ]);
//!
//! let mut main = Registry::new("main");
//! main.register_many(&page, ["home", "about"], &Strategy::Style, Display::Flex);
//! main.show_exclusive(&mut page, "about");
//!
//! assert_eq!(main.visible_ids(&page), vec!["about"]);
//! ```

pub mod action;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
mod log_init;
pub mod registry;
pub mod site;
pub mod toggle;
pub mod transport;

pub use action::{Action, RegistryOp};
pub use client::{ApiClient, ApiOutcome, ApiReply};
pub use config::SiteConfig;
pub use error::{ConfigError, ToggleError, TransportError, ValidationError};
pub use form::Application;
pub use log_init::init_logger;
pub use registry::Registry;
pub use site::{PendingRequest, RequestKind, Site};
pub use toggle::{Effect, HIDDEN_CLASS, Outcome, Strategy, Toggle};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

// Re-export the log crate so users can use sectional::log::info!, etc.
pub use log;
pub use domkit;
