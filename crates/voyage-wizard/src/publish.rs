//! Publish gate
//!
//! ```text
//! Draft --publish--> Publishing --ok--> Published { trip_id }
//!                        |
//!                        +--err--> Draft
//! ```

use serde::{Deserialize, Serialize};

use crate::completion::Completion;

/// True once every tab passes its validator
pub fn can_publish(completion: &Completion) -> bool {
    completion.is_finished()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PublishState {
    /// Editable, not yet published
    #[default]
    Draft,
    /// A publish call is in flight; edits are refused
    Publishing,
    /// Terminal
    Published { trip_id: String },
}

impl PublishState {
    pub fn is_publishing(&self) -> bool {
        matches!(self, PublishState::Publishing)
    }

    pub fn trip_id(&self) -> Option<&str> {
        match self {
            PublishState::Published { trip_id } => Some(trip_id),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishState::Draft => "draft",
            PublishState::Publishing => "publishing",
            PublishState::Published { .. } => "published",
        }
    }
}

impl std::fmt::Display for PublishState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WizardState;
    use crate::testing::complete_controller;

    #[test]
    fn test_can_publish_requires_every_tab() {
        let fresh = Completion::recompute(&WizardState::new());
        assert!(!can_publish(&fresh));

        let complete = complete_controller();
        assert!(can_publish(complete.completion()));
    }

    #[test]
    fn test_publish_state_accessors() {
        assert!(PublishState::Publishing.is_publishing());
        assert_eq!(PublishState::Draft.trip_id(), None);
        let published = PublishState::Published {
            trip_id: "t1".to_string(),
        };
        assert_eq!(published.trip_id(), Some("t1"));
        assert_eq!(published.to_string(), "published");
    }
}
