//! Trip detail page
//!
//! A read-only view of a published trip plus the enquiry form that turns a
//! visitor into a lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use voyage_crm::NewLead;
use voyage_wizard::{
    DateSlot, Faq, ItineraryDay, PriceType, PricingPackage, PricingPayload, PublishedTrip,
};

pub const ENQUIRY_SOURCE: &str = "trip_page";

/// What the booking panel offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallToAction {
    /// Customized trips are quoted per enquiry
    Enquiry {
        price_type: PriceType,
        final_price: f64,
    },
    /// Fixed departures are booked against a package
    BookNow {
        /// Lowest package final price; `None` without packages
        starting_price: Option<f64>,
        date_slots: Vec<DateSlot>,
        packages: Vec<PricingPackage>,
    },
}

impl CallToAction {
    fn from_pricing(pricing: &PricingPayload) -> Self {
        match pricing {
            PricingPayload::Customized {
                price_type,
                final_price,
                ..
            } => CallToAction::Enquiry {
                price_type: *price_type,
                final_price: *final_price,
            },
            PricingPayload::Fixed {
                date_slots,
                packages,
            } => CallToAction::BookNow {
                starting_price: pricing.starting_price(),
                date_slots: date_slots.clone(),
                packages: packages.clone(),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::Enquiry { .. } => "Get Quotes",
            CallToAction::BookNow { .. } => "Book Now",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetail {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub destination: String,
    /// "pickup - drop"
    pub route: String,
    /// "4N - 5D"
    pub duration: String,
    pub hero_image: Option<String>,
    pub gallery: Vec<String>,
    pub categories: Vec<String>,
    pub themes: Vec<String>,
    pub hotel_category: u8,
    pub highlights: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub faqs: Vec<Faq>,
    pub itinerary: Vec<ItineraryDay>,
    pub call_to_action: CallToAction,
    pub published_at: DateTime<Utc>,
}

impl TripDetail {
    pub fn from_published(trip: &PublishedTrip) -> Self {
        let payload = &trip.payload;
        let basic = &payload.basic_info;

        let mut itinerary = payload.itinerary.clone();
        itinerary.sort_by_key(|day| day.day);

        Self {
            id: trip.id.clone(),
            title: basic.title.clone(),
            overview: basic.overview.clone(),
            destination: basic.destination.clone(),
            route: format!("{} - {}", basic.pickup_location, basic.drop_location),
            duration: basic.duration_label(),
            hero_image: payload.media.hero_image.clone(),
            gallery: payload.media.gallery.clone(),
            categories: basic.categories.clone(),
            themes: basic.themes.clone(),
            hotel_category: basic.hotel_category,
            highlights: payload.details.highlights.clone(),
            inclusions: payload.details.inclusions.clone(),
            exclusions: payload.details.exclusions.clone(),
            faqs: payload.details.faqs.clone(),
            itinerary,
            call_to_action: CallToAction::from_pricing(&payload.pricing),
            published_at: trip.created_at,
        }
    }
}

/// Visitor enquiry from a trip page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEnquiry {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl TripEnquiry {
    /// Lead for the enquiry; validation happens when the lead is created
    pub fn into_lead(self, trip: &TripDetail) -> NewLead {
        let mut lead = NewLead::new(self.name, self.email, self.mobile).with_source(ENQUIRY_SOURCE);
        lead.fields.destination_type = trip.destination.clone();
        lead.fields.no_of_adults = self.adults.max(1);
        lead.fields.no_of_children = self.children;
        lead.fields.comments = format!("Enquiry for trip: {} ({})", trip.title, trip.id);
        lead
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{goa_payload, published};

    #[test]
    fn test_fixed_trip_projection() {
        let detail = TripDetail::from_published(&published("trip-1", goa_payload()));
        assert_eq!(detail.title, "Goa Beach Escape");
        assert_eq!(detail.route, "Mumbai - Panaji");
        assert_eq!(detail.duration, "4N - 5D");
        assert_eq!(detail.itinerary.len(), 5);
        assert_eq!(detail.itinerary[0].day, 1);
        assert_eq!(detail.highlights, vec!["Sunset cruise".to_string()]);
        assert_eq!(detail.call_to_action.label(), "Book Now");
        match &detail.call_to_action {
            CallToAction::BookNow {
                starting_price,
                packages,
                ..
            } => {
                assert_eq!(packages.len(), 2);
                assert_eq!(*starting_price, Some(12000.0));
            }
            other => panic!("unexpected call to action: {:?}", other),
        }
    }

    #[test]
    fn test_customized_trip_offers_quotes() {
        let mut payload = goa_payload();
        payload.pricing = PricingPayload::Customized {
            price_type: PriceType::PerPackage,
            base_price: 30000.0,
            discount: 5000.0,
            final_price: 25000.0,
        };
        let detail = TripDetail::from_published(&published("trip-2", payload));
        assert_eq!(detail.call_to_action.label(), "Get Quotes");
        assert_eq!(
            detail.call_to_action,
            CallToAction::Enquiry {
                price_type: PriceType::PerPackage,
                final_price: 25000.0
            }
        );
    }

    #[test]
    fn test_fixed_trip_without_packages_has_no_starting_price() {
        let mut payload = goa_payload();
        payload.pricing = PricingPayload::Fixed {
            date_slots: Vec::new(),
            packages: Vec::new(),
        };
        let detail = TripDetail::from_published(&published("trip-3", payload));
        assert!(matches!(
            detail.call_to_action,
            CallToAction::BookNow { starting_price: None, .. }
        ));
    }

    #[test]
    fn test_enquiry_becomes_lead() {
        let detail = TripDetail::from_published(&published("trip-1", goa_payload()));
        let enquiry = TripEnquiry {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "98200 11111".to_string(),
            adults: 2,
            children: 1,
        };
        let lead = enquiry.into_lead(&detail);
        assert_eq!(lead.source, "trip_page");
        assert_eq!(lead.fields.destination_type, "Goa");
        assert_eq!(lead.fields.no_of_adults, 2);
        assert_eq!(lead.fields.no_of_children, 1);
        assert!(lead.fields.comments.contains("Goa Beach Escape"));
        assert!(lead.fields.comments.contains("trip-1"));
    }
}
