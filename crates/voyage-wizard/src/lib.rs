//! Voyage Trip Wizard
//!
//! Six-tab trip authoring flow: Basic Info, Itinerary, Media, Pricing,
//! Details, Policies. Every field update re-runs all tab validators and the
//! trip can only be published once each tab is complete.

mod basic_info;
mod completion;
mod controller;
mod details;
mod error;
mod field;
mod itinerary;
mod media;
mod payload;
mod policies;
mod pricing;
mod publish;
mod session;
mod sqlite;
mod state;
mod store;
mod tab;
mod validate;

#[cfg(test)]
mod testing;

pub use basic_info::{BasicInfo, DestinationType, CATEGORY_OPTIONS, THEME_OPTIONS};
pub use completion::Completion;
pub use controller::WizardController;
pub use details::{DetailList, Details, Faq};
pub use error::WizardError;
pub use field::{FieldStore, FieldValue};
pub use itinerary::{Accommodation, Itinerary, ItineraryDay, MEAL_OPTIONS};
pub use media::Media;
pub use payload::{PricingPayload, TripPayload};
pub use policies::{CustomPolicy, PolicyField, Policies};
pub use pricing::{DateSlot, PriceType, Pricing, PricingModel, PricingPackage};
pub use publish::{can_publish, PublishState};
pub use session::WizardSession;
pub use sqlite::SqliteTripStore;
pub use state::{SectionMut, SectionRef, WizardState};
pub use store::{PublishedTrip, TripStore};
pub use tab::TabId;
pub use validate::{is_complete, missing_requirements};

pub type Result<T> = std::result::Result<T, WizardError>;
