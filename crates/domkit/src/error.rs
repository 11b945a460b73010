//! Error types for inline style and display keyword parsing.

use thiserror::Error;

/// Errors that can occur while parsing style text.
///
/// # Examples
///
/// ```rust
/// use domkit::Display;
///
/// // `flexbox` is not a display keyword
/// assert!("flexbox".parse::<Display>().is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// A `display` value that is not a known keyword.
    #[error("unknown display value: {0}")]
    UnknownDisplay(String),

    /// Inline style text that could not be split into declarations.
    #[error("invalid inline style: {0}")]
    InvalidStyle(String),
}

pub type Result<T> = std::result::Result<T, DomError>;
