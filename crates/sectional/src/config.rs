//! Site configuration.
//!
//! Everything page-specific lives here instead of in code: which element ids
//! belong to which registry, what a click on each button does, where the
//! form fields are and which popups report results.
//!
//! The config is JSON. Missing sections fall back to [`SiteConfig::default`],
//! and `SECTIONAL_API_URL` overrides the API base url.

use std::{env, fs::read_to_string, path::Path, time::Duration};

use domkit::Display;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::toggle::Strategy;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_VAR: &str = "SECTIONAL_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api: ApiConfig,
    /// Registries in setup order.
    pub registries: Vec<RegistryConfig>,
    /// Clickable element id to the actions it runs, in order.
    pub bindings: IndexMap<String, Vec<String>>,
    pub form: FormConfig,
    pub popups: PopupConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Seconds to wait for a reply. `0` waits indefinitely.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub name: String,
    pub strategy: Strategy,
    /// Display keyword used when a `style` member is shown.
    #[serde(default = "default_on")]
    pub on: String,
    pub ids: Vec<String>,
    /// Member shown after setup. `None` leaves everything hidden.
    #[serde(default)]
    pub default: Option<String>,
}

/// Maps application fields to the ids of the inputs holding them.
///
/// Fields without an entry are read from an element whose id is the field
/// name itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub fields: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Registry holding the result popups.
    pub registry: String,
    pub success: String,
    pub error: String,
    /// Element receiving the success text. `None` writes into the popup.
    pub success_text: Option<String>,
    /// Element receiving the error text. `None` writes into the popup.
    pub error_text: Option<String>,
    /// Also raise an alert when a request fails.
    pub alert_on_error: bool,
}

fn default_on() -> String {
    Display::Block.as_str().to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            registry: "popups".to_string(),
            success: "success-popup".to_string(),
            error: "error-popup".to_string(),
            success_text: Some("success-message".to_string()),
            error_text: Some("error-message".to_string()),
            alert_on_error: true,
        }
    }
}

impl Default for SiteConfig {
    /// The stock page layout: a main area and a sidebar switched together by
    /// the navigation buttons, the application form and two result popups.
    fn default() -> Self {
        let sections = ["home", "about", "rules", "apply"];

        let mut bindings = IndexMap::new();
        for section in sections {
            bindings.insert(
                format!("nav-{section}"),
                vec![
                    format!("main.exclusive:{section}"),
                    format!("sidebar.exclusive:sidebar-{section}"),
                ],
            );
        }
        bindings.insert("submit-button".to_string(), vec!["form.submit".to_string()]);
        bindings.insert("cancel-button".to_string(), vec!["form.cancel".to_string()]);
        bindings.insert("close-popup".to_string(), vec!["popups.hide_all".to_string()]);

        Self {
            api: ApiConfig::default(),
            registries: vec![
                RegistryConfig {
                    name: "main".to_string(),
                    strategy: Strategy::Style,
                    on: "flex".to_string(),
                    ids: sections.iter().map(|s| s.to_string()).collect(),
                    default: Some("home".to_string()),
                },
                RegistryConfig {
                    name: "sidebar".to_string(),
                    strategy: Strategy::Class,
                    on: default_on(),
                    ids: sections.iter().map(|s| format!("sidebar-{s}")).collect(),
                    default: Some("sidebar-home".to_string()),
                },
                RegistryConfig {
                    name: "popups".to_string(),
                    strategy: Strategy::Style,
                    on: "flex".to_string(),
                    ids: vec!["success-popup".to_string(), "error-popup".to_string()],
                    default: None,
                },
            ],
            bindings,
            form: FormConfig::default(),
            popups: PopupConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load a JSON config file, apply environment overrides and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = read_to_string(path)?;
        log::info!("Loaded site config from {}", path.display());
        Self::from_json(&source)
    }

    /// Parse a JSON config, apply environment overrides and validate.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(source)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `SECTIONAL_API_URL` if set.
    pub fn apply_env(&mut self) {
        match env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                log::info!("{API_URL_VAR} set, using {url}");
                self.api.base_url = url.trim().to_string();
            }
            _ => {
                log::info!(
                    "{API_URL_VAR} not set, using default: {}",
                    self.api.base_url
                );
            }
        }
    }

    /// Check that every registry's on-value parses and its default is a member.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for registry in &self.registries {
            registry.on_display()?;
            if let Some(default) = &registry.default {
                if !registry.ids.contains(default) {
                    return Err(ConfigError::UnknownDefault {
                        registry: registry.name.clone(),
                        default: default.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl ApiConfig {
    /// The request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl RegistryConfig {
    pub fn on_display(&self) -> Result<Display, ConfigError> {
        self.on
            .parse()
            .map_err(|source| ConfigError::InvalidDisplay {
                registry: self.name.clone(),
                source,
            })
    }
}

impl FormConfig {
    /// Id of the input holding `field`.
    pub fn element_id<'a>(&'a self, field: &'a str) -> &'a str {
        self.fields.get(field).map(String::as_str).unwrap_or(field)
    }
}
