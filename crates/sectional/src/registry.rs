//! Named collections of toggles.
//!
//! A [`Registry`] keeps its toggles in registration order and applies
//! show/hide/toggle operations to one, several or all of them. The
//! exclusive show hides every member and then shows one, which is how a page
//! switches between sections or raises a single popup.
//!
//! Registries never look at each other. Keeping a main area and a sidebar in
//! step is done by the caller driving both.

use domkit::{Display, Document};
use indexmap::IndexMap;

use crate::toggle::{Outcome, Strategy, Toggle};

/// An insertion-ordered map from element id to [`Toggle`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    name: String,
    toggles: IndexMap<String, Toggle>,
}

impl Registry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            toggles: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a toggle for `id` and store it, replacing any previous entry.
    ///
    /// A replaced entry keeps its original position in the order.
    pub fn register<D>(&mut self, document: &D, id: &str, strategy: Strategy, on: Display) -> &Toggle
    where
        D: Document + ?Sized,
    {
        let toggle = Toggle::new(document, id, strategy, on);
        let (index, previous) = self.toggles.insert_full(id.to_string(), toggle);
        if previous.is_some() {
            log::debug!("Registry '{}': replaced toggle #{}", self.name, id);
        }
        &self.toggles[index]
    }

    /// Register every id in order with a shared strategy and on-value.
    pub fn register_many<D, I, S>(&mut self, document: &D, ids: I, strategy: &Strategy, on: Display)
    where
        D: Document + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.register(document, id.as_ref(), strategy.clone(), on);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Toggle> {
        self.toggles.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.toggles.contains_key(id)
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.toggles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    // =========================================================================
    // Single-member operations
    //
    // An unregistered id is a silent no-op and yields `None`.
    // =========================================================================

    pub fn show<D>(&self, document: &mut D, id: &str) -> Option<Outcome>
    where
        D: Document + ?Sized,
    {
        self.get(id).map(|toggle| toggle.show(document))
    }

    pub fn hide<D>(&self, document: &mut D, id: &str) -> Option<Outcome>
    where
        D: Document + ?Sized,
    {
        self.get(id).map(|toggle| toggle.hide(document))
    }

    pub fn toggle<D>(&self, document: &mut D, id: &str) -> Option<Outcome>
    where
        D: Document + ?Sized,
    {
        self.get(id).map(|toggle| toggle.toggle(document))
    }

    // =========================================================================
    // Whole-registry operations
    //
    // Every member is visited even when one fails; the first failure is
    // returned.
    // =========================================================================

    pub fn show_all<D>(&self, document: &mut D) -> Outcome<()>
    where
        D: Document + ?Sized,
    {
        self.for_each(|toggle| toggle.show(document))
    }

    pub fn hide_all<D>(&self, document: &mut D) -> Outcome<()>
    where
        D: Document + ?Sized,
    {
        self.for_each(|toggle| toggle.hide(document))
    }

    pub fn toggle_all<D>(&self, document: &mut D) -> Outcome<()>
    where
        D: Document + ?Sized,
    {
        self.for_each(|toggle| toggle.toggle(document))
    }

    /// Hide every member, then show `id`.
    ///
    /// Members of other registries are untouched. The result is that of the
    /// final show; failures while hiding are only logged.
    pub fn show_exclusive<D>(&self, document: &mut D, id: &str) -> Option<Outcome>
    where
        D: Document + ?Sized,
    {
        let _ = self.hide_all(document);
        self.show(document, id)
    }

    /// Ids of members that currently count as visible.
    pub fn visible_ids<D>(&self, document: &D) -> Vec<&str>
    where
        D: Document + ?Sized,
    {
        self.toggles
            .iter()
            .filter(|(_, toggle)| toggle.is_visible(document) == Some(true))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    fn for_each<F>(&self, mut f: F) -> Outcome<()>
    where
        F: FnMut(&Toggle) -> Outcome,
    {
        let mut first_error = None;
        for toggle in self.toggles.values() {
            if let Err(e) = f(toggle) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
