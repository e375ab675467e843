//! Transient UI notices
//!
//! Every facade call that reaches a collaborator reports back as a short
//! notice. Failures never escape further than this.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    /// `action` names what failed, e.g. "Failed to add lead"
    pub fn error(action: &str, error: &CoreError) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            description: format!("{}: {}", action, error),
        }
    }

    pub fn for_result<T>(result: &Result<T>, success: &str, failure: &str) -> Self {
        match result {
            Ok(_) => Self::success(success),
            Err(e) => Self::error(failure, e),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Outcome of a UI action: the value when it worked, and a notice either way
#[derive(Debug, Clone, Serialize)]
pub struct Reply<T> {
    pub data: Option<T>,
    pub notice: Notice,
}

impl<T> Reply<T> {
    pub fn from_result(result: Result<T>, success: &str, failure: &str) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                notice: Notice::success(success),
            },
            Err(e) => {
                tracing::warn!(error = %e, transient = e.is_transient(), "{}", failure);
                Self {
                    data: None,
                    notice: Notice::error(failure, &e),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }
}
