//! Session-scoped accumulator of submitted field values.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::StepSpec;

/// All field values entered so far, keyed by field name.
///
/// Applying a step's submission overwrites exactly that step's fields
/// (absent fields become empty strings) and leaves every other key
/// untouched. File slots are written separately, only when an upload
/// was actually stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a field, empty string if never submitted.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Overwrite this step's fields from a submission. Every field in
    /// the step's set is written; a field the client omitted becomes
    /// the empty string.
    pub fn apply_step(&mut self, spec: &StepSpec, submitted: &HashMap<String, String>) {
        for field in spec.fields {
            let value = submitted.get(*field).cloned().unwrap_or_default();
            self.values.insert((*field).to_string(), value);
        }
    }

    /// Record a stored upload reference for one of the step's file slots.
    pub fn set_file(&mut self, slot: &str, stored_name: String) {
        self.values.insert(slot.to_string(), stored_name);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget everything. Used after a successful finalize and on
    /// language re-selection.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
