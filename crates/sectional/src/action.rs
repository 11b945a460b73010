//! Action strings bound to clickable elements.
//!
//! Formats:
//! - `<registry>.<op>:<id>` for `show`, `hide`, `toggle` and `exclusive`
//! - `<registry>.<op>` for `show_all`, `hide_all` and `toggle_all`
//! - `form.submit` / `form.cancel` for the network flows

/// Operation applied to a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOp {
    Show,
    Hide,
    Toggle,
    Exclusive,
    ShowAll,
    HideAll,
    ToggleAll,
}

impl RegistryOp {
    fn parse(op: &str) -> Option<Self> {
        let op = match op {
            "show" => RegistryOp::Show,
            "hide" => RegistryOp::Hide,
            "toggle" => RegistryOp::Toggle,
            "exclusive" => RegistryOp::Exclusive,
            "show_all" => RegistryOp::ShowAll,
            "hide_all" => RegistryOp::HideAll,
            "toggle_all" => RegistryOp::ToggleAll,
            _ => return None,
        };
        Some(op)
    }

    /// True for operations that act on one member.
    pub fn needs_target(&self) -> bool {
        matches!(
            self,
            RegistryOp::Show | RegistryOp::Hide | RegistryOp::Toggle | RegistryOp::Exclusive
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Registry {
        registry: String,
        op: RegistryOp,
        target: Option<String>,
    },
    Submit,
    Cancel,
}

impl Action {
    /// Parse an action string. Returns `None` for anything malformed.
    pub fn parse(action: &str) -> Option<Self> {
        let action = action.trim();
        match action {
            "form.submit" => return Some(Action::Submit),
            "form.cancel" => return Some(Action::Cancel),
            _ => {}
        }

        let (head, target) = match action.split_once(':') {
            Some((head, target)) => (head, Some(target.trim())),
            None => (action, None),
        };
        let (registry, op) = head.split_once('.')?;
        let op = RegistryOp::parse(op.trim())?;
        let registry = registry.trim();

        if registry.is_empty() {
            return None;
        }

        let target = match (op.needs_target(), target) {
            (true, Some(target)) if !target.is_empty() => Some(target.to_string()),
            (false, None) => None,
            _ => return None,
        };

        Some(Action::Registry {
            registry: registry.to_string(),
            op,
            target,
        })
    }
}
