//! Back office state container
//!
//! Owns the database and every manager built on it. The UI holds no state
//! of its own; it starts wizard sessions and reads leads through here.

use std::sync::Arc;

use voyage_crm::{Lead, LeadManager, LeadStats, SqliteLeadStore};
use voyage_storage::Database;
use voyage_wizard::{SqliteTripStore, TripStore, WizardController, WizardSession};

use crate::config::Config;
use crate::trip_detail::{TripDetail, TripEnquiry};
use crate::Result;

const COMMENT_AUTHOR_KEY: &str = "comment_author";

pub struct Backoffice {
    config: Config,
    db: Database,
    trip_store: Arc<dyn TripStore>,
    lead_manager: LeadManager,
}

impl Backoffice {
    /// Open (or create) the database named in the config
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let trip_store: Arc<dyn TripStore> = Arc::new(SqliteTripStore::new(db.clone()));
        let lead_manager = LeadManager::new(Arc::new(SqliteLeadStore::new(db.clone())));
        lead_manager.set_comment_author(&config.comment_author);

        Self {
            config,
            db,
            trip_store,
            lead_manager,
        }
    }

    /// Apply persisted settings and load the lead pipeline
    pub async fn initialize(&self) -> Result<()> {
        if let Some(author) = self.db.get_setting(COMMENT_AUTHOR_KEY)? {
            self.lead_manager.set_comment_author(&author);
        }

        let leads = self.lead_manager.refresh().await?;
        tracing::info!(leads = leads.len(), "Back office initialized");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn trip_store(&self) -> Arc<dyn TripStore> {
        self.trip_store.clone()
    }

    pub fn lead_manager(&self) -> &LeadManager {
        &self.lead_manager
    }

    // === Trips ===

    /// Fresh authoring session on the default wizard state
    pub fn start_trip(&self) -> WizardSession {
        tracing::debug!("Starting trip wizard");
        WizardSession::new(self.trip_store.clone())
    }

    /// Session that continues from an existing controller
    pub fn resume_trip(&self, controller: WizardController) -> WizardSession {
        WizardSession::with_controller(controller, self.trip_store.clone())
    }

    /// Publish and return the public link to the new trip
    pub async fn publish_trip(&self, session: &WizardSession) -> Result<String> {
        let trip_id = session.publish().await?;
        let url = self.config.trip_url(&trip_id);
        tracing::info!(trip_id = %trip_id, url = %url, "Trip is live");
        Ok(url)
    }

    pub fn trip_url(&self, trip_id: &str) -> String {
        self.config.trip_url(trip_id)
    }

    pub async fn trip_detail(&self, trip_id: &str) -> Result<TripDetail> {
        let trip = self.trip_store.get_trip(trip_id).await?;
        Ok(TripDetail::from_published(&trip))
    }

    /// Record a visitor enquiry against a published trip as a new lead
    pub async fn submit_enquiry(&self, trip_id: &str, enquiry: TripEnquiry) -> Result<Lead> {
        let detail = self.trip_detail(trip_id).await?;
        let lead = self.lead_manager.create(enquiry.into_lead(&detail)).await?;
        tracing::info!(trip_id = %trip_id, lead_id = %lead.id, "Enquiry captured");
        Ok(lead)
    }

    // === CRM ===

    pub fn lead_stats(&self) -> LeadStats {
        self.lead_manager.stats()
    }

    pub fn comment_author(&self) -> String {
        self.lead_manager.comment_author()
    }

    /// Persist the comment author for future sessions
    pub fn set_comment_author(&self, name: &str) -> Result<()> {
        self.lead_manager.set_comment_author(name);
        let stored = self.lead_manager.comment_author();
        self.db.set_setting(COMMENT_AUTHOR_KEY, &stored)?;
        Ok(())
    }
}
