//! Error types for CRM domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing CRM domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrmDomainError {
    /// A required text field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Error returned while parsing a CRM enumeration from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseVariantError {
    /// Enumeration being parsed, e.g. `contact status`.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
