//! Shared fixtures for unit tests

use crate::controller::WizardController;
use crate::details::DetailList;
use crate::policies::PolicyField;
use crate::tab::TabId;

/// A controller with every tab filled in: a five day Goa trip on a fixed
/// departure with one package
pub(crate) fn complete_controller() -> WizardController {
    let mut c = WizardController::new();
    c.set_field(TabId::BasicInfo, "title", "Goa Beach Escape").unwrap();
    c.set_field(TabId::BasicInfo, "overview", "Five days on the coast").unwrap();
    c.set_field(TabId::BasicInfo, "destination", "Goa").unwrap();
    c.set_field(TabId::BasicInfo, "pickup_location", "Mumbai").unwrap();
    c.set_field(TabId::BasicInfo, "drop_location", "Panaji").unwrap();
    c.toggle_category("Friends");
    c.toggle_theme("Nature");

    c.edit(|s| {
        for day in s.itinerary.days.iter_mut() {
            day.description = "Explore the coast".to_string();
            day.add_activity("Sightseeing");
        }
        s.media.set_hero_image("https://cdn.example.com/goa.jpg");

        let slot = s.pricing.add_date_slot();
        s.pricing.update_date_slot(&slot, "from_date", "2025-03-01".into())?;
        s.pricing.update_date_slot(&slot, "to_date", "2025-03-05".into())?;
        let package = s.pricing.add_package();
        s.pricing.update_package(&package, "title", "Standard".into())?;
        s.pricing.update_package(&package, "base_price", 15000.0.into())?;

        s.details.add_item(DetailList::Highlights, "Sunset cruise");
        s.details.add_item(DetailList::Inclusions, "Hotel stay");
        s.details.add_item(DetailList::Exclusions, "Flights");

        s.policies.load_template(PolicyField::TermsConditions);
        s.policies.load_template(PolicyField::PrivacyPolicy);
        s.policies.load_template(PolicyField::PaymentTerms);
        Ok(())
    })
    .unwrap();
    c
}
