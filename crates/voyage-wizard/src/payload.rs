//! Publish payload
//!
//! One composite document built from every tab. Pricing is tagged by model
//! so a fixed trip never carries customized fields and vice versa.

use serde::{Deserialize, Serialize};

use crate::basic_info::BasicInfo;
use crate::details::Details;
use crate::itinerary::ItineraryDay;
use crate::media::Media;
use crate::policies::Policies;
use crate::pricing::{lowest_final_price, DateSlot, PriceType, PricingModel, PricingPackage};
use crate::state::WizardState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum PricingPayload {
    Fixed {
        date_slots: Vec<DateSlot>,
        packages: Vec<PricingPackage>,
    },
    Customized {
        price_type: PriceType,
        base_price: f64,
        discount: f64,
        final_price: f64,
    },
}

impl PricingPayload {
    pub fn model(&self) -> PricingModel {
        match self {
            PricingPayload::Fixed { .. } => PricingModel::Fixed,
            PricingPayload::Customized { .. } => PricingModel::Customized,
        }
    }

    /// Lowest package final price on a fixed trip; customized trips are
    /// quoted instead
    pub fn starting_price(&self) -> Option<f64> {
        match self {
            PricingPayload::Fixed { packages, .. } => lowest_final_price(packages),
            PricingPayload::Customized { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPayload {
    pub basic_info: BasicInfo,
    pub itinerary: Vec<ItineraryDay>,
    pub media: Media,
    pub pricing: PricingPayload,
    pub details: Details,
    pub policies: Policies,
}

impl TripPayload {
    pub fn from_state(state: &WizardState) -> Self {
        let pricing = match state.pricing.model {
            PricingModel::Fixed => PricingPayload::Fixed {
                date_slots: state.pricing.date_slots.clone(),
                packages: state.pricing.packages.clone(),
            },
            PricingModel::Customized => PricingPayload::Customized {
                price_type: state.pricing.price_type,
                base_price: state.pricing.base_price(),
                discount: state.pricing.discount(),
                final_price: state.pricing.final_price(),
            },
        };

        Self {
            basic_info: state.basic_info.clone(),
            itinerary: state.itinerary.days.clone(),
            media: state.media.clone(),
            pricing,
            details: state.details.clone(),
            policies: state.policies.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.basic_info.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldStore;

    #[test]
    fn test_pricing_is_tagged_by_model() {
        let mut state = WizardState::new();
        state.pricing.add_package();
        let payload = TripPayload::from_state(&state);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["pricing"]["model"], "fixed");
        assert!(json["pricing"].get("base_price").is_none());
        assert_eq!(json["pricing"]["packages"].as_array().unwrap().len(), 1);

        state.pricing.set_field("model", "customized".into()).unwrap();
        state.pricing.set_base_price(9000.0);
        let payload = TripPayload::from_state(&state);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["pricing"]["model"], "customized");
        assert_eq!(json["pricing"]["final_price"], 9000.0);
        assert!(json["pricing"].get("packages").is_none());
        assert_eq!(payload.pricing.model(), PricingModel::Customized);
        assert_eq!(payload.pricing.starting_price(), None);
    }

    #[test]
    fn test_fixed_starting_price_is_cheapest_package() {
        let mut state = WizardState::new();
        for (base, discount) in [(20000.0, 0.0), (15000.0, 2500.0)] {
            let id = state.pricing.add_package();
            state.pricing.update_package(&id, "base_price", base.into()).unwrap();
            state.pricing.update_package(&id, "discount", discount.into()).unwrap();
        }
        let payload = TripPayload::from_state(&state);
        assert_eq!(payload.pricing.starting_price(), Some(12500.0));
    }

    #[test]
    fn test_payload_survives_json() {
        let payload = TripPayload::from_state(&WizardState::new());
        let text = serde_json::to_string(&payload).unwrap();
        let back: TripPayload = serde_json::from_str(&text).unwrap();
        assert_eq!(back, payload);
    }
}
