use std::time::Duration;

use thiserror::Error;

/// Failures of a single visibility operation.
///
/// These are also logged where they happen, so callers are free to drop them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("Element #{0} not found")]
    ElementNotFound(String),

    #[error("Unknown visibility strategy '{strategy}' for #{id}")]
    UnknownStrategy { id: String, strategy: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Registry '{registry}' default '{default}' is not one of its ids")]
    UnknownDefault { registry: String, default: String },

    #[error("Invalid display value for registry '{registry}': {source}")]
    InvalidDisplay {
        registry: String,
        #[source]
        source: domkit::DomError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Could not read response body: {0}")]
    Body(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Client-side checks that stop a request before it reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Fill in at least a nickname or an invite.")]
    MissingIdentity,

    #[error("Enter the nickname to cancel.")]
    MissingNickname,
}
