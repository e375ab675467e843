//! Trip persistence collaborator

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::TripPayload;

/// A trip as stored after a successful publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedTrip {
    pub id: String,
    pub payload: TripPayload,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait TripStore: Send + Sync {
    /// Persist a payload and return the generated trip id
    async fn publish_trip(&self, payload: &TripPayload) -> voyage_storage::Result<String>;

    /// Fetch a published trip; `NotFound` when the id is unknown
    async fn get_trip(&self, trip_id: &str) -> voyage_storage::Result<PublishedTrip>;
}
