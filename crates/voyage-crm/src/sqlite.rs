//! SQLite-backed lead store

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Row};

use voyage_storage::{format_timestamp, parse_date, parse_timestamp, Database, Result, StorageError};

use crate::activity::{LeadComment, LeadDocument};
use crate::lead::{Lead, LeadFields};
use crate::store::LeadStore;

const LEAD_COLUMNS: &str = "id, name, email, mobile, destination_type, pickup, drop_location,
    travel_date_from, travel_date_to, no_of_adults, no_of_children, status, priority,
    assigned_to, follow_up_date, source, budget, hotel_category, comments, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteLeadStore {
    db: Database,
}

impl SqliteLeadStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn date_text(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Empty strings are stored as NULL; anything else is stored as typed
fn non_blank(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn text(row: &Row<'_>, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}

fn lead_from_row(row: &Row<'_>) -> rusqlite::Result<Lead> {
    let status: String = row.get("status")?;
    let priority: String = row.get("priority")?;
    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;

    Ok(Lead {
        id: row.get("id")?,
        fields: LeadFields {
            name: row.get("name")?,
            email: row.get("email")?,
            mobile: row.get("mobile")?,
            destination_type: text(row, "destination_type")?,
            pickup: text(row, "pickup")?,
            drop_location: text(row, "drop_location")?,
            travel_date_from: parse_date(row.get("travel_date_from")?),
            travel_date_to: parse_date(row.get("travel_date_to")?),
            no_of_adults: row.get("no_of_adults")?,
            no_of_children: row.get("no_of_children")?,
            status: status.parse().unwrap_or_default(),
            priority: priority.parse().unwrap_or_default(),
            assigned_to: text(row, "assigned_to")?,
            follow_up_date: parse_date(row.get("follow_up_date")?),
            budget: text(row, "budget")?,
            hotel_category: text(row, "hotel_category")?,
            comments: text(row, "comments")?,
        },
        source: row.get("source")?,
        created_at: parse_timestamp(&created_at),
        updated_at: parse_timestamp(&updated_at),
    })
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<LeadComment> {
    let created_at: String = row.get("created_at")?;
    Ok(LeadComment {
        id: row.get("id")?,
        lead_id: row.get("lead_id")?,
        user_name: row.get("user_name")?,
        comment: row.get("comment")?,
        created_at: parse_timestamp(&created_at),
    })
}

fn document_from_row(row: &Row<'_>) -> rusqlite::Result<LeadDocument> {
    let created_at: String = row.get("created_at")?;
    Ok(LeadDocument {
        id: row.get("id")?,
        lead_id: row.get("lead_id")?,
        file_name: row.get("file_name")?,
        file_url: row.get("file_url")?,
        file_type: row.get("file_type")?,
        created_at: parse_timestamp(&created_at),
    })
}

#[async_trait]
impl LeadStore for SqliteLeadStore {
    async fn insert_lead(&self, lead: &Lead) -> Result<()> {
        let lead = lead.clone();
        self.db
            .run_blocking(move |conn| {
                let f = &lead.fields;
                conn.execute(
                    "INSERT INTO leads (id, name, email, mobile, destination_type, pickup,
                        drop_location, travel_date_from, travel_date_to, no_of_adults,
                        no_of_children, status, priority, assigned_to, follow_up_date, source,
                        budget, hotel_category, comments, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                        ?16, ?17, ?18, ?19, ?20, ?21)",
                    params![
                        lead.id,
                        f.name,
                        f.email,
                        f.mobile,
                        non_blank(&f.destination_type),
                        non_blank(&f.pickup),
                        non_blank(&f.drop_location),
                        date_text(f.travel_date_from),
                        date_text(f.travel_date_to),
                        f.no_of_adults,
                        f.no_of_children,
                        f.status.as_str(),
                        f.priority.as_str(),
                        non_blank(&f.assigned_to),
                        date_text(f.follow_up_date),
                        lead.source,
                        non_blank(&f.budget),
                        non_blank(&f.hotel_category),
                        non_blank(&f.comments),
                        format_timestamp(&lead.created_at),
                        format_timestamp(&lead.updated_at),
                    ],
                )?;
                Ok(())
            })
            .await
    }

    async fn update_lead(&self, lead: &Lead) -> Result<()> {
        let lead_id = lead.id.clone();
        let lead = lead.clone();
        let changed = self
            .db
            .run_blocking(move |conn| {
                let f = &lead.fields;
                let changed = conn.execute(
                    "UPDATE leads SET name = ?2, email = ?3, mobile = ?4, destination_type = ?5,
                        pickup = ?6, drop_location = ?7, travel_date_from = ?8,
                        travel_date_to = ?9, no_of_adults = ?10, no_of_children = ?11,
                        status = ?12, priority = ?13, assigned_to = ?14, follow_up_date = ?15,
                        budget = ?16, hotel_category = ?17, comments = ?18, updated_at = ?19
                     WHERE id = ?1",
                    params![
                        lead.id,
                        f.name,
                        f.email,
                        f.mobile,
                        non_blank(&f.destination_type),
                        non_blank(&f.pickup),
                        non_blank(&f.drop_location),
                        date_text(f.travel_date_from),
                        date_text(f.travel_date_to),
                        f.no_of_adults,
                        f.no_of_children,
                        f.status.as_str(),
                        f.priority.as_str(),
                        non_blank(&f.assigned_to),
                        date_text(f.follow_up_date),
                        non_blank(&f.budget),
                        non_blank(&f.hotel_category),
                        non_blank(&f.comments),
                        format_timestamp(&lead.updated_at),
                    ],
                )?;
                Ok(changed)
            })
            .await?;

        if changed == 0 {
            return Err(StorageError::NotFound(format!("lead {}", lead_id)));
        }
        Ok(())
    }

    async fn delete_lead(&self, lead_id: &str) -> Result<()> {
        let id = lead_id.to_string();
        let changed = self
            .db
            .run_blocking(move |conn| Ok(conn.execute("DELETE FROM leads WHERE id = ?1", [&id])?))
            .await?;

        if changed == 0 {
            return Err(StorageError::NotFound(format!("lead {}", lead_id)));
        }
        Ok(())
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        self.db
            .run_blocking(|conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM leads ORDER BY created_at DESC, rowid DESC",
                    LEAD_COLUMNS
                ))?;
                let leads = stmt
                    .query_map([], lead_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(leads)
            })
            .await
    }

    async fn insert_comment(&self, comment: &LeadComment) -> Result<()> {
        let comment = comment.clone();
        self.db
            .run_blocking(move |conn| {
                conn.execute(
                    "INSERT INTO lead_comments (id, lead_id, user_name, comment, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        comment.id,
                        comment.lead_id,
                        comment.user_name,
                        comment.comment,
                        format_timestamp(&comment.created_at),
                    ],
                )?;
                Ok(())
            })
            .await
    }

    async fn list_comments(&self, lead_id: &str) -> Result<Vec<LeadComment>> {
        let id = lead_id.to_string();
        self.db
            .run_blocking(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, lead_id, user_name, comment, created_at FROM lead_comments
                     WHERE lead_id = ?1 ORDER BY created_at DESC, rowid DESC",
                )?;
                let comments = stmt
                    .query_map([&id], comment_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(comments)
            })
            .await
    }

    async fn insert_document(&self, document: &LeadDocument) -> Result<()> {
        let doc = document.clone();
        self.db
            .run_blocking(move |conn| {
                conn.execute(
                    "INSERT INTO lead_documents (id, lead_id, file_name, file_url, file_type, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        doc.id,
                        doc.lead_id,
                        doc.file_name,
                        doc.file_url,
                        doc.file_type,
                        format_timestamp(&doc.created_at),
                    ],
                )?;
                Ok(())
            })
            .await
    }

    async fn list_documents(&self, lead_id: &str) -> Result<Vec<LeadDocument>> {
        let id = lead_id.to_string();
        self.db
            .run_blocking(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, lead_id, file_name, file_url, file_type, created_at
                     FROM lead_documents WHERE lead_id = ?1
                     ORDER BY created_at DESC, rowid DESC",
                )?;
                let documents = stmt
                    .query_map([&id], document_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(documents)
            })
            .await
    }
}
