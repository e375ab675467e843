//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] voyage_storage::StorageError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] voyage_wizard::WizardError),

    #[error("CRM error: {0}")]
    Crm(#[from] voyage_crm::CrmError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether the same call may succeed if retried later
    pub fn is_transient(&self) -> bool {
        match self {
            CoreError::Storage(e) => e.is_transient(),
            CoreError::Wizard(voyage_wizard::WizardError::Storage(e)) => e.is_transient(),
            CoreError::Crm(voyage_crm::CrmError::Storage(e)) => e.is_transient(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_storage::StorageError;

    #[test]
    fn test_transient_through_layers() {
        let offline = || StorageError::Unavailable("offline".to_string());
        assert!(CoreError::from(offline()).is_transient());
        assert!(CoreError::from(voyage_wizard::WizardError::from(offline())).is_transient());
        assert!(CoreError::from(voyage_crm::CrmError::from(offline())).is_transient());
        assert!(!CoreError::Config("bad".to_string()).is_transient());
        assert!(!CoreError::from(voyage_crm::CrmError::MissingField("email")).is_transient());
    }
}
