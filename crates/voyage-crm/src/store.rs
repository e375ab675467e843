//! Lead persistence collaborator
//!
//! Ids are opaque strings generated before insert. Every list comes back
//! newest first.

use async_trait::async_trait;

use voyage_storage::Result;

use crate::activity::{LeadComment, LeadDocument};
use crate::lead::Lead;

#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn insert_lead(&self, lead: &Lead) -> Result<()>;

    /// Fails with `NotFound` when no lead has this id
    async fn update_lead(&self, lead: &Lead) -> Result<()>;

    async fn delete_lead(&self, lead_id: &str) -> Result<()>;

    async fn list_leads(&self) -> Result<Vec<Lead>>;

    async fn insert_comment(&self, comment: &LeadComment) -> Result<()>;

    async fn list_comments(&self, lead_id: &str) -> Result<Vec<LeadComment>>;

    async fn insert_document(&self, document: &LeadDocument) -> Result<()>;

    async fn list_documents(&self, lead_id: &str) -> Result<Vec<LeadDocument>>;
}
