//! Lead activity: comments and document metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CrmError;
use crate::Result;

/// Author used until a signed-in user name is configured
pub const DEFAULT_COMMENT_AUTHOR: &str = "Current User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadComment {
    pub id: String,
    pub lead_id: String,
    pub user_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl LeadComment {
    /// Build a comment from raw input. Blank input yields `None`.
    pub fn new(lead_id: &str, user_name: &str, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let user_name = user_name.trim();
        Some(Self {
            id: Uuid::new_v4().to_string(),
            lead_id: lead_id.to_string(),
            user_name: if user_name.is_empty() {
                DEFAULT_COMMENT_AUTHOR.to_string()
            } else {
                user_name.to_string()
            },
            comment: text.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Metadata for a file attached to a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDocument {
    pub id: String,
    pub lead_id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

impl LeadDocument {
    pub fn create(lead_id: &str, doc: NewDocument) -> Result<Self> {
        let file_name = doc.file_name.trim();
        let file_url = doc.file_url.trim();
        if file_name.is_empty() {
            return Err(CrmError::MissingField("file_name"));
        }
        if file_url.is_empty() {
            return Err(CrmError::MissingField("file_url"));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            lead_id: lead_id.to_string(),
            file_name: file_name.to_string(),
            file_url: file_url.to_string(),
            file_type: doc.file_type.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}
