//! Wizard Session
//!
//! Shared handle around one authoring flow. Edits and reads are synchronous;
//! publishing is the only async step. Edits are refused while a publish is
//! in flight and after it succeeds, so the stored payload always matches
//! what the author saw.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::completion::Completion;
use crate::controller::WizardController;
use crate::error::WizardError;
use crate::field::FieldValue;
use crate::payload::TripPayload;
use crate::publish::{can_publish, PublishState};
use crate::state::WizardState;
use crate::store::TripStore;
use crate::tab::TabId;
use crate::Result;

#[derive(Clone)]
pub struct WizardSession {
    controller: Arc<RwLock<WizardController>>,
    /// Always locked before `controller`
    publish_state: Arc<RwLock<PublishState>>,
    store: Arc<dyn TripStore>,
}

impl WizardSession {
    pub fn new(store: Arc<dyn TripStore>) -> Self {
        Self::with_controller(WizardController::new(), store)
    }

    pub fn with_controller(controller: WizardController, store: Arc<dyn TripStore>) -> Self {
        Self {
            controller: Arc::new(RwLock::new(controller)),
            publish_state: Arc::new(RwLock::new(PublishState::Draft)),
            store,
        }
    }

    /// Read from the controller without cloning the state
    pub fn read<T>(&self, f: impl FnOnce(&WizardController) -> T) -> T {
        f(&self.controller.read())
    }

    pub fn state(&self) -> WizardState {
        self.controller.read().state().clone()
    }

    pub fn completion(&self) -> Completion {
        self.controller.read().completion().clone()
    }

    pub fn progress(&self) -> f64 {
        self.controller.read().progress()
    }

    pub fn active_tab(&self) -> TabId {
        self.controller.read().active_tab()
    }

    /// Navigation stays available in every publish state
    pub fn select_tab(&self, tab: TabId) {
        self.controller.write().select_tab(tab);
    }

    pub fn get_field(&self, tab: TabId, name: &str) -> FieldValue {
        self.controller.read().get_field(tab, name)
    }

    pub fn set_field(
        &self,
        tab: TabId,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<Completion> {
        self.with_draft(|c| c.set_field(tab, name, value).cloned())
    }

    pub fn edit<T>(&self, f: impl FnOnce(&mut WizardState) -> Result<T>) -> Result<T> {
        self.with_draft(|c| c.edit(f))
    }

    pub fn toggle_category(&self, category: &str) -> Result<Completion> {
        self.with_draft(|c| Ok(c.toggle_category(category).clone()))
    }

    pub fn toggle_theme(&self, theme: &str) -> Result<Completion> {
        self.with_draft(|c| Ok(c.toggle_theme(theme).clone()))
    }

    pub fn publish_state(&self) -> PublishState {
        self.publish_state.read().clone()
    }

    pub fn is_publishing(&self) -> bool {
        self.publish_state.read().is_publishing()
    }

    /// Complete and not yet published or publishing
    pub fn can_publish(&self) -> bool {
        let publish_state = self.publish_state.read();
        *publish_state == PublishState::Draft && self.controller.read().can_publish()
    }

    /// Publish the trip. Fails with `Incomplete` until every tab is valid.
    /// A store failure returns the session to draft with its state intact.
    pub async fn publish(&self) -> Result<String> {
        let payload = {
            let mut publish_state = self.publish_state.write();
            check_draft(&publish_state)?;

            let controller = self.controller.read();
            let completion = controller.completion();
            if !can_publish(completion) {
                tracing::debug!(
                    completed = completion.completed_count(),
                    total = completion.total(),
                    "Refused to publish incomplete trip"
                );
                return Err(WizardError::Incomplete {
                    completed: completion.completed_count(),
                    total: completion.total(),
                });
            }

            *publish_state = PublishState::Publishing;
            TripPayload::from_state(controller.state())
        };

        tracing::info!(title = %payload.title(), "Publishing trip");

        let guard = PublishGuard {
            state: &self.publish_state,
            armed: true,
        };
        let result = self.store.publish_trip(&payload).await;
        guard.disarm();

        match result {
            Ok(trip_id) => {
                *self.publish_state.write() = PublishState::Published {
                    trip_id: trip_id.clone(),
                };
                tracing::info!(trip_id = %trip_id, "Trip published");
                Ok(trip_id)
            }
            Err(e) => {
                *self.publish_state.write() = PublishState::Draft;
                tracing::warn!(error = %e, "Failed to publish trip");
                Err(e.into())
            }
        }
    }

    fn with_draft<T>(&self, f: impl FnOnce(&mut WizardController) -> Result<T>) -> Result<T> {
        let publish_state = self.publish_state.read();
        check_draft(&publish_state)?;
        let mut controller = self.controller.write();
        f(&mut controller)
    }
}

/// Returns the session to draft if a publish future is dropped while the
/// store call is pending
struct PublishGuard<'a> {
    state: &'a RwLock<PublishState>,
    armed: bool,
}

impl PublishGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PublishGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.write();
        if state.is_publishing() {
            *state = PublishState::Draft;
            tracing::warn!("Publish cancelled before the store answered");
        }
    }
}

fn check_draft(state: &PublishState) -> Result<()> {
    match state {
        PublishState::Draft => Ok(()),
        PublishState::Publishing => Err(WizardError::PublishInFlight),
        PublishState::Published { trip_id } => Err(WizardError::AlreadyPublished(trip_id.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PublishedTrip;
    use crate::testing::complete_controller;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use voyage_storage::StorageError;

    /// Fails the first `failures` publishes, then hands out sequential ids
    struct FlakyStore {
        failures: AtomicUsize,
        calls: AtomicUsize,
        gate: Option<Notify>,
    }

    impl FlakyStore {
        fn new(failures: usize) -> Self {
            Self {
                failures: AtomicUsize::new(failures),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated() -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::new(0)
            }
        }
    }

    #[async_trait]
    impl TripStore for FlakyStore {
        async fn publish_trip(&self, _payload: &TripPayload) -> voyage_storage::Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(StorageError::Unavailable("connection reset".to_string()));
            }
            Ok(format!("trip-{}", call))
        }

        async fn get_trip(&self, trip_id: &str) -> voyage_storage::Result<PublishedTrip> {
            Err(StorageError::NotFound(trip_id.to_string()))
        }
    }

    #[tokio::test]
    async fn test_publish_incomplete_is_rejected() {
        let store = Arc::new(FlakyStore::new(0));
        let mut controller = complete_controller();
        controller
            .set_field(TabId::Media, "hero_image", FieldValue::Null)
            .unwrap();
        controller
            .set_field(TabId::Policies, "payment_terms", "")
            .unwrap();
        let session = WizardSession::with_controller(controller, store.clone());
        let before = session.state();
        assert!((session.progress() - 4.0 / 6.0).abs() < 1e-9);

        let err = session.publish().await.unwrap_err();
        assert!(matches!(err, WizardError::Incomplete { completed: 4, total: 6 }));
        assert_eq!(session.state(), before);
        assert_eq!(session.publish_state(), PublishState::Draft);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_publish_with_one_tab_missing_is_rejected() {
        let store = Arc::new(FlakyStore::new(0));
        let mut controller = complete_controller();
        controller.set_field(TabId::Media, "hero_image", FieldValue::Null).unwrap();
        let session = WizardSession::with_controller(controller, store);
        assert!(session.progress() < 1.0);
        assert!(!session.can_publish());

        let before = session.state();
        assert!(matches!(
            session.publish().await,
            Err(WizardError::Incomplete { completed: 5, total: 6 })
        ));
        assert_eq!(session.state(), before);
    }

    #[tokio::test]
    async fn test_failed_publish_can_be_retried() {
        let store = Arc::new(FlakyStore::new(1));
        let session = WizardSession::with_controller(complete_controller(), store.clone());
        let before = session.state();

        let err = session.publish().await.unwrap_err();
        assert!(matches!(
            err,
            WizardError::Storage(StorageError::Unavailable(_))
        ));
        assert_eq!(session.progress(), 1.0);
        assert_eq!(session.state(), before);
        assert!(session.can_publish());
        assert!(!session.is_publishing());

        let trip_id = session.publish().await.unwrap();
        assert_eq!(trip_id, "trip-1");
        assert_eq!(
            session.publish_state(),
            PublishState::Published {
                trip_id: "trip-1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_edits_refused_while_publishing_and_after() {
        let store = Arc::new(FlakyStore::gated());
        let session = WizardSession::with_controller(complete_controller(), store.clone());

        let publishing = {
            let session = session.clone();
            tokio::spawn(async move { session.publish().await })
        };
        while !session.is_publishing() {
            tokio::task::yield_now().await;
        }

        assert!(matches!(session.publish().await, Err(WizardError::PublishInFlight)));
        assert!(matches!(
            session.set_field(TabId::BasicInfo, "title", "Changed"),
            Err(WizardError::PublishInFlight)
        ));
        session.select_tab(TabId::Pricing);
        assert_eq!(session.active_tab(), TabId::Pricing);

        if let Some(gate) = &store.gate {
            gate.notify_one();
        }
        let trip_id = publishing.await.unwrap().unwrap();

        assert!(matches!(
            session.toggle_theme("Wildlife"),
            Err(WizardError::AlreadyPublished(id)) if id == trip_id
        ));
        assert!(matches!(
            session.publish().await,
            Err(WizardError::AlreadyPublished(_))
        ));
        assert_eq!(session.get_field(TabId::BasicInfo, "title"), FieldValue::from("Goa Beach Escape"));
    }

    #[tokio::test]
    async fn test_cancelled_publish_returns_to_draft() {
        let store = Arc::new(FlakyStore::gated());
        let session = WizardSession::with_controller(complete_controller(), store.clone());

        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(20), session.publish()).await;
        assert!(timed_out.is_err());
        assert_eq!(session.publish_state(), PublishState::Draft);
        assert!(!session.is_publishing());
        session
            .set_field(TabId::BasicInfo, "overview", "Six days on the coast")
            .unwrap();

        if let Some(gate) = &store.gate {
            gate.notify_one();
        }
        let trip_id = session.publish().await.unwrap();
        assert_eq!(trip_id, "trip-1");
    }

    #[tokio::test]
    async fn test_session_edits_recompute_progress() {
        let session = WizardSession::new(Arc::new(FlakyStore::new(0)));
        assert_eq!(session.progress(), 0.0);

        session
            .edit(|s| {
                s.media.set_hero_image("hero.jpg");
                Ok(())
            })
            .unwrap();
        let completion = session.set_field(TabId::BasicInfo, "days", 3u32).unwrap();
        assert!(completion.is_tab_complete(TabId::Media));
        assert_eq!(session.read(|c| c.state().basic_info.nights()), 2);
        // Itinerary was already seeded with the default five days
        assert_eq!(session.read(|c| c.state().itinerary.len()), 5);
    }
}
