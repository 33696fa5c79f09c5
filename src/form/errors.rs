//! Field-level validation errors and form transition errors.

use super::{FormEvent, FormState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Mapping from field name to a human-readable message.
///
/// An empty map means every field passed. Fields iterate in name order so
/// callers render errors deterministically.
///
/// # Examples
///
/// ```
/// use crmboard::form::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.insert("email", "Invalid email");
/// assert_eq!(errors.get("email"), Some("Invalid email"));
/// assert!(errors.into_result(()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} field(s) failed validation: {}", .0.len(), format_fields(&.0))]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

fn format_fields(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records a message for a field, replacing any earlier message.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Records `message` for `field` when `failed` is `true`.
    pub fn check(&mut self, failed: bool, field: &str, message: &str) {
        if failed {
            self.insert(field, message);
        }
    }

    /// Removes the message for a field, if any.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Returns the message for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns `true` when a field has a message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Returns `Ok(value)` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the map itself when at least one field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Errors returned by [`super::FormSession`] events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The event is not allowed in the current state; state is unchanged.
    #[error("cannot {event} a form that is {from}")]
    InvalidTransition {
        /// State the form was in.
        from: FormState,
        /// Rejected event.
        event: FormEvent,
    },

    /// Validation failed; the form returned to editing.
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
}
