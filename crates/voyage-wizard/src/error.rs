//! Wizard error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Unknown field '{field}' on tab {tab}")]
    UnknownField { tab: TabId, field: String },

    #[error("Field '{0}' is derived and cannot be edited")]
    DerivedField(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Trip is incomplete: {completed} of {total} sections complete")]
    Incomplete { completed: usize, total: usize },

    #[error("A publish is already in progress")]
    PublishInFlight,

    #[error("Trip already published as {0}")]
    AlreadyPublished(String),

    #[error("Storage error: {0}")]
    Storage(#[from] voyage_storage::StorageError),
}

impl WizardError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        WizardError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
