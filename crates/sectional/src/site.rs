//! Page wiring.
//!
//! A [`Site`] owns the document, the registries built from a [`SiteConfig`]
//! and the API client. Event handlers reach registries through it instead of
//! through globals.
//!
//! # Example
//!
//! ```ignore
//! let client = ApiClient::new(Arc::new(ReqwestTransport::new()), &config.api);
//! let mut site = Site::setup(&config, page, client)?;
//!
//! site.click("nav-about").await;   // main + sidebar switch together
//! site.click("submit-button").await;
//! ```
//!
//! Network flows are split so the await never holds the document:
//! [`Site::begin_submit`] reads the form, [`PendingRequest::send`] talks to
//! the server, and [`Site::finish`] presents the result. Nothing prevents two
//! pending requests from being in flight at once.

use domkit::{Document, Element};
use indexmap::IndexMap;

use crate::action::{Action, RegistryOp};
use crate::client::{ApiClient, ApiOutcome};
use crate::config::{FormConfig, PopupConfig, SiteConfig};
use crate::error::{ConfigError, ValidationError};
use crate::form::{Application, read_cancel_nickname};
use crate::registry::Registry;

/// A request that has passed client-side checks and owns its payload.
#[derive(Clone)]
pub struct PendingRequest {
    client: ApiClient,
    kind: RequestKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Submit(Application),
    Cancel { nickname: String },
}

impl PendingRequest {
    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// Send the request. Borrows nothing from the page.
    pub async fn send(self) -> ApiOutcome {
        match &self.kind {
            RequestKind::Submit(application) => self.client.submit_request(application).await,
            RequestKind::Cancel { nickname } => self.client.cancel_request(nickname).await,
        }
    }
}

pub struct Site<D: Document> {
    document: D,
    registries: IndexMap<String, Registry>,
    bindings: IndexMap<String, Vec<Action>>,
    form: FormConfig,
    popups: PopupConfig,
    client: ApiClient,
}

impl<D: Document> Site<D> {
    /// Build every registry, hide all members, then show each default.
    pub fn setup(config: &SiteConfig, mut document: D, client: ApiClient) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registries = IndexMap::new();
        for entry in &config.registries {
            let mut registry = Registry::new(&entry.name);
            registry.register_many(&document, &entry.ids, &entry.strategy, entry.on_display()?);

            let _ = registry.hide_all(&mut document);
            if let Some(default) = &entry.default {
                let _ = registry.show(&mut document, default);
            }

            log::info!(
                "Registry '{}' ready with {} members",
                entry.name,
                registry.len()
            );
            registries.insert(entry.name.clone(), registry);
        }

        let mut bindings = IndexMap::new();
        for (element_id, actions) in &config.bindings {
            let parsed: Vec<Action> = actions
                .iter()
                .filter_map(|action| {
                    let parsed = Action::parse(action);
                    if parsed.is_none() {
                        log::debug!("Ignoring unknown action '{}' on #{}", action, element_id);
                    }
                    parsed
                })
                .collect();
            bindings.insert(element_id.clone(), parsed);
        }

        Ok(Self {
            document,
            registries,
            bindings,
            form: config.form.clone(),
            popups: config.popups.clone(),
            client,
        })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn registry(&self, name: &str) -> Option<&Registry> {
        self.registries.get(name)
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Handle a click on `element_id`, running its bound actions in order.
    ///
    /// Unbound ids do nothing.
    pub async fn click(&mut self, element_id: &str) {
        let Some(actions) = self.bindings.get(element_id).cloned() else {
            return;
        };

        for action in &actions {
            match action {
                Action::Submit => {
                    self.submit().await;
                }
                Action::Cancel => {
                    self.cancel().await;
                }
                _ => {
                    self.apply(action);
                }
            }
        }
    }

    /// Parse and apply a registry action string.
    ///
    /// Form actions need the network and are only run through [`Site::click`].
    pub fn dispatch_action(&mut self, action: &str) -> bool {
        match Action::parse(action) {
            Some(parsed) => self.apply(&parsed),
            None => {
                log::debug!("Unknown action: {}", action);
                false
            }
        }
    }

    /// Apply a registry action. Returns false when it could not be run.
    pub fn apply(&mut self, action: &Action) -> bool {
        let Action::Registry {
            registry,
            op,
            target,
        } = action
        else {
            log::debug!("{:?} is not a registry action", action);
            return false;
        };

        let Some(registry) = self.registries.get(registry) else {
            log::debug!("Unknown registry: {}", registry);
            return false;
        };

        let document = &mut self.document;
        let target = target.as_deref().unwrap_or_default();
        match op {
            RegistryOp::Show => {
                let _ = registry.show(document, target);
            }
            RegistryOp::Hide => {
                let _ = registry.hide(document, target);
            }
            RegistryOp::Toggle => {
                let _ = registry.toggle(document, target);
            }
            RegistryOp::Exclusive => {
                let _ = registry.show_exclusive(document, target);
            }
            RegistryOp::ShowAll => {
                let _ = registry.show_all(document);
            }
            RegistryOp::HideAll => {
                let _ = registry.hide_all(document);
            }
            RegistryOp::ToggleAll => {
                let _ = registry.toggle_all(document);
            }
        }
        true
    }

    // =========================================================================
    // Network flows
    // =========================================================================

    /// Read and check the application form.
    ///
    /// A validation failure is presented before it is returned.
    pub fn begin_submit(&mut self) -> Result<PendingRequest, ValidationError> {
        let application = Application::read(&self.document, &self.form);
        if let Err(e) = application.validate() {
            log::warn!("Submit blocked: {}", e);
            self.finish(&ApiOutcome::Invalid(e.clone()));
            return Err(e);
        }

        Ok(PendingRequest {
            client: self.client.clone(),
            kind: RequestKind::Submit(application),
        })
    }

    /// Read and check the nickname to cancel.
    ///
    /// A validation failure is presented before it is returned.
    pub fn begin_cancel(&mut self) -> Result<PendingRequest, ValidationError> {
        match read_cancel_nickname(&self.document, &self.form) {
            Ok(nickname) => Ok(PendingRequest {
                client: self.client.clone(),
                kind: RequestKind::Cancel { nickname },
            }),
            Err(e) => {
                log::warn!("Cancel blocked: {}", e);
                self.finish(&ApiOutcome::Invalid(e.clone()));
                Err(e)
            }
        }
    }

    /// Submit the application form and present the result.
    pub async fn submit(&mut self) -> ApiOutcome {
        match self.begin_submit() {
            Ok(pending) => {
                let outcome = pending.send().await;
                self.finish(&outcome);
                outcome
            }
            Err(e) => ApiOutcome::Invalid(e),
        }
    }

    /// Cancel the request for the entered nickname and present the result.
    pub async fn cancel(&mut self) -> ApiOutcome {
        match self.begin_cancel() {
            Ok(pending) => {
                let outcome = pending.send().await;
                self.finish(&outcome);
                outcome
            }
            Err(e) => ApiOutcome::Invalid(e),
        }
    }

    /// Present a settled request: raise the matching popup exclusively, write
    /// the message into it and, for failures, alert.
    pub fn finish(&mut self, outcome: &ApiOutcome) {
        let message = outcome.message();
        let (popup, text_id) = if outcome.is_success() {
            (&self.popups.success, &self.popups.success_text)
        } else {
            (&self.popups.error, &self.popups.error_text)
        };

        match self.registries.get(&self.popups.registry) {
            Some(registry) => {
                if registry.show_exclusive(&mut self.document, popup).is_none() {
                    log::warn!("Popup #{} is not in registry '{}'", popup, registry.name());
                }
            }
            None => log::warn!("Popup registry '{}' not found", self.popups.registry),
        }

        let text_id = text_id.as_deref().unwrap_or(popup.as_str());
        if self
            .document
            .with_element_by_id(text_id, |element: &mut dyn Element| element.set_text(&message))
            .is_none()
        {
            log::warn!("Message element #{} not found", text_id);
        }

        if !outcome.is_success() && self.popups.alert_on_error {
            self.document.alert(&message);
        }
    }
}
