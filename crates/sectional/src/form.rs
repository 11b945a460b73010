//! The application form.

use domkit::Document;
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::ValidationError;

/// Payload of a submit request. Every field is sent, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub nickname: String,
    pub invite: String,
    pub about: String,
    pub telegram: String,
    pub email: String,
    pub source: String,
    pub expectations: String,
    pub age: String,
}

impl Application {
    /// Field names in wire order.
    pub const FIELDS: [&'static str; 8] = [
        "nickname",
        "invite",
        "about",
        "telegram",
        "email",
        "source",
        "expectations",
        "age",
    ];

    /// Read every field from its input element.
    ///
    /// A field whose element is missing is sent empty.
    pub fn read<D>(document: &D, form: &FormConfig) -> Self
    where
        D: Document + ?Sized,
    {
        let mut application = Application::default();
        for field in Self::FIELDS {
            let element_id = form.element_id(field);
            let value = document
                .element_by_id(element_id)
                .and_then(|node| document.element(node))
                .map(|element| element.value().to_string());

            match (value, application.field_mut(field)) {
                (Some(value), Some(slot)) => *slot = value,
                (None, _) => log::debug!("Form field '{}' has no element #{}", field, element_id),
                _ => {}
            }
        }
        application
    }

    /// A request needs a nickname or an invite to identify the applicant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nickname.trim().is_empty() && self.invite.trim().is_empty() {
            return Err(ValidationError::MissingIdentity);
        }
        Ok(())
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        let slot = match field {
            "nickname" => &mut self.nickname,
            "invite" => &mut self.invite,
            "about" => &mut self.about,
            "telegram" => &mut self.telegram,
            "email" => &mut self.email,
            "source" => &mut self.source,
            "expectations" => &mut self.expectations,
            "age" => &mut self.age,
            _ => return None,
        };
        Some(slot)
    }
}

/// Read the nickname a cancel request applies to.
pub fn read_cancel_nickname<D>(document: &D, form: &FormConfig) -> Result<String, ValidationError>
where
    D: Document + ?Sized,
{
    let nickname = document
        .element_by_id(form.element_id("nickname"))
        .and_then(|node| document.element(node))
        .map(|element| element.value().trim().to_string())
        .unwrap_or_default();

    if nickname.is_empty() {
        return Err(ValidationError::MissingNickname);
    }
    Ok(nickname)
}
