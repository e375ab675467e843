//! Lead Manager
//!
//! Keeps a newest-first cache of leads in front of a `LeadStore`. The cache
//! only changes after the store accepts a write, so a failed call leaves the
//! visible pipeline as it was.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::activity::{LeadComment, LeadDocument, NewDocument, DEFAULT_COMMENT_AUTHOR};
use crate::error::CrmError;
use crate::filter::{filter_leads, StatusFilter};
use crate::lead::{Lead, LeadFields, NewLead};
use crate::stats::LeadStats;
use crate::store::LeadStore;
use crate::Result;

#[derive(Clone)]
pub struct LeadManager {
    /// Newest first
    leads: Arc<RwLock<Vec<Lead>>>,
    store: Arc<dyn LeadStore>,
    comment_author: Arc<RwLock<String>>,
}

impl LeadManager {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
            store,
            comment_author: Arc::new(RwLock::new(DEFAULT_COMMENT_AUTHOR.to_string())),
        }
    }

    pub fn comment_author(&self) -> String {
        self.comment_author.read().clone()
    }

    /// Name stamped on new comments; blank resets to the default
    pub fn set_comment_author(&self, name: &str) {
        let name = name.trim();
        *self.comment_author.write() = if name.is_empty() {
            DEFAULT_COMMENT_AUTHOR.to_string()
        } else {
            name.to_string()
        };
    }

    /// Reload the cache from the store
    pub async fn refresh(&self) -> Result<Vec<Lead>> {
        let leads = self.store.list_leads().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch leads");
            CrmError::from(e)
        })?;

        tracing::info!(count = leads.len(), "Loaded leads");
        *self.leads.write() = leads.clone();
        Ok(leads)
    }

    /// Snapshot of the cached leads
    pub fn leads(&self) -> Vec<Lead> {
        self.leads.read().clone()
    }

    /// Borrow the cached leads without cloning them
    pub fn with_leads<T>(&self, f: impl FnOnce(&[Lead]) -> T) -> T {
        f(&self.leads.read())
    }

    pub fn get(&self, lead_id: &str) -> Result<Lead> {
        self.leads
            .read()
            .iter()
            .find(|l| l.id == lead_id)
            .cloned()
            .ok_or_else(|| CrmError::NotFound(lead_id.to_string()))
    }

    pub fn filtered(&self, search_term: &str, status: StatusFilter) -> Vec<Lead> {
        self.with_leads(|leads| {
            filter_leads(leads, search_term, status)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn stats(&self) -> LeadStats {
        self.with_leads(LeadStats::from_leads)
    }

    pub async fn create(&self, new: NewLead) -> Result<Lead> {
        let lead = Lead::create(new)?;
        self.store.insert_lead(&lead).await?;

        self.leads.write().insert(0, lead.clone());
        tracing::info!(lead_id = %lead.id, source = %lead.source, "Created lead");
        Ok(lead)
    }

    /// Replace a lead's editable fields
    pub async fn update(&self, lead_id: &str, fields: LeadFields) -> Result<Lead> {
        let mut lead = self.get(lead_id)?;
        lead.apply(fields)?;
        self.store.update_lead(&lead).await?;

        if let Some(cached) = self.leads.write().iter_mut().find(|l| l.id == lead.id) {
            *cached = lead.clone();
        }
        tracing::info!(lead_id = %lead.id, status = %lead.status(), "Updated lead");
        Ok(lead)
    }

    pub async fn delete(&self, lead_id: &str) -> Result<()> {
        self.store.delete_lead(lead_id).await?;
        self.leads.write().retain(|l| l.id != lead_id);
        tracing::info!(lead_id = %lead_id, "Deleted lead");
        Ok(())
    }

    /// Append a comment by the configured author. Blank text is ignored and
    /// returns `None`.
    pub async fn add_comment(&self, lead_id: &str, text: &str) -> Result<Option<LeadComment>> {
        let author = self.comment_author();
        let Some(comment) = LeadComment::new(lead_id, &author, text) else {
            return Ok(None);
        };
        self.store.insert_comment(&comment).await?;
        tracing::debug!(lead_id = %lead_id, comment_id = %comment.id, "Added comment");
        Ok(Some(comment))
    }

    /// Newest first
    pub async fn comments(&self, lead_id: &str) -> Result<Vec<LeadComment>> {
        Ok(self.store.list_comments(lead_id).await?)
    }

    pub async fn add_document(&self, lead_id: &str, document: NewDocument) -> Result<LeadDocument> {
        let document = LeadDocument::create(lead_id, document)?;
        self.store.insert_document(&document).await?;
        tracing::debug!(lead_id = %lead_id, file = %document.file_name, "Recorded document");
        Ok(document)
    }

    /// Newest first
    pub async fn documents(&self, lead_id: &str) -> Result<Vec<LeadDocument>> {
        Ok(self.store.list_documents(lead_id).await?)
    }
}
