//! SQLite-backed trip store

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use voyage_storage::{format_timestamp, parse_timestamp, Database, StorageError};

use crate::payload::TripPayload;
use crate::store::{PublishedTrip, TripStore};

#[derive(Clone)]
pub struct SqliteTripStore {
    db: Database,
}

impl SqliteTripStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TripStore for SqliteTripStore {
    async fn publish_trip(&self, payload: &TripPayload) -> voyage_storage::Result<String> {
        let id = Uuid::new_v4().to_string();
        let title = payload.title().to_string();
        let json = serde_json::to_string(payload)?;
        let created_at = format_timestamp(&Utc::now());

        let trip_id = id.clone();
        self.db
            .run_blocking(move |conn| {
                conn.execute(
                    "INSERT INTO trips (id, title, payload, created_at) VALUES (?1, ?2, ?3, ?4)",
                    rusqlite::params![trip_id, title, json, created_at],
                )?;
                Ok(())
            })
            .await?;

        tracing::info!(trip_id = %id, "Stored published trip");
        Ok(id)
    }

    async fn get_trip(&self, trip_id: &str) -> voyage_storage::Result<PublishedTrip> {
        let id = trip_id.to_string();
        let row: Option<(String, String)> = self
            .db
            .run_blocking(move |conn| {
                let row = conn
                    .query_row(
                        "SELECT payload, created_at FROM trips WHERE id = ?1",
                        [&id],
                        |row| Ok((row.get(0)?, row.get(1)?)),
                    )
                    .optional()?;
                Ok(row)
            })
            .await?;

        let (payload, created_at) =
            row.ok_or_else(|| StorageError::NotFound(format!("trip {}", trip_id)))?;

        Ok(PublishedTrip {
            id: trip_id.to_string(),
            payload: serde_json::from_str(&payload)?,
            created_at: parse_timestamp(&created_at),
        })
    }
}
