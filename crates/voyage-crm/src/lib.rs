//! Voyage Lead CRM
//!
//! - Leads move through new -> contacted -> quoted -> awaiting payment,
//!   ending booked or failed
//! - Comments are an append-only log per lead
//! - Documents are metadata only; files live with the hosting backend
//! - Filtering and kanban grouping are pure functions over a lead slice

mod activity;
mod error;
mod filter;
mod lead;
mod manager;
mod sqlite;
mod stats;
mod store;

pub use activity::{LeadComment, LeadDocument, NewDocument, DEFAULT_COMMENT_AUTHOR};
pub use error::CrmError;
pub use filter::{filter_leads, group_by_status, KanbanColumn, StatusFilter};
pub use lead::{Lead, LeadFields, LeadPriority, LeadStatus, NewLead};
pub use manager::LeadManager;
pub use sqlite::SqliteLeadStore;
pub use stats::LeadStats;
pub use store::LeadStore;

pub type Result<T> = std::result::Result<T, CrmError>;
