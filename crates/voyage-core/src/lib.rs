//! Voyage Core
//!
//! Central coordination layer for the Voyage back office: configuration,
//! the `Backoffice` state container, trip detail pages and UI notices.

mod backoffice;
mod config;
mod error;
mod notice;
mod trip_detail;

#[cfg(test)]
mod testing;

pub use backoffice::Backoffice;
pub use config::{Config, DATA_DIR_VAR, PUBLIC_URL_VAR};
pub use error::CoreError;
pub use notice::{Notice, NoticeKind, Reply};
pub use trip_detail::{CallToAction, TripDetail, TripEnquiry, ENQUIRY_SOURCE};

// Re-export the layers below
pub use voyage_crm::{
    filter_leads, group_by_status, CrmError, KanbanColumn, Lead, LeadComment, LeadDocument,
    LeadFields, LeadManager, LeadPriority, LeadStats, LeadStatus, LeadStore, NewDocument, NewLead,
    StatusFilter,
};
pub use voyage_storage::{Database, StorageError};
pub use voyage_wizard::{
    Completion, FieldValue, PublishState, PublishedTrip, TabId, TripPayload, TripStore,
    WizardController, WizardError, WizardSession, WizardState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
