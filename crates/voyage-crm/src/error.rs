//! CRM error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Lead not found: {0}")]
    NotFound(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] voyage_storage::StorageError),
}
