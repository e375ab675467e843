//! Per-tab completeness checks
//!
//! Pure functions of a single section. A tab is complete when it has no
//! missing requirements; an incomplete tab is never an error.

use crate::basic_info::BasicInfo;
use crate::details::Details;
use crate::itinerary::Itinerary;
use crate::media::Media;
use crate::policies::Policies;
use crate::pricing::{Pricing, PricingModel};
use crate::state::SectionRef;

pub fn is_complete(section: SectionRef<'_>) -> bool {
    missing_requirements(section).is_empty()
}

/// Human-readable list of what still blocks the tab
pub fn missing_requirements(section: SectionRef<'_>) -> Vec<String> {
    match section {
        SectionRef::BasicInfo(basic) => basic_info(basic),
        SectionRef::Itinerary(itinerary) => itinerary_days(itinerary),
        SectionRef::Media(media) => media_assets(media),
        SectionRef::Pricing(pricing) => pricing_setup(pricing),
        SectionRef::Details(details) => detail_lists(details),
        SectionRef::Policies(policies) => policy_texts(policies),
    }
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

fn require(missing: &mut Vec<String>, ok: bool, what: &str) {
    if !ok {
        missing.push(what.to_string());
    }
}

fn basic_info(basic: &BasicInfo) -> Vec<String> {
    let mut missing = Vec::new();
    require(&mut missing, filled(&basic.title), "title");
    require(&mut missing, filled(&basic.overview), "overview");
    require(&mut missing, filled(&basic.destination), "destination");
    require(&mut missing, !basic.categories.is_empty(), "at least one category");
    require(&mut missing, !basic.themes.is_empty(), "at least one theme");
    require(&mut missing, filled(&basic.pickup_location), "pickup location");
    require(&mut missing, filled(&basic.drop_location), "drop location");
    require(&mut missing, basic.days() > 0, "number of days");
    missing
}

fn itinerary_days(itinerary: &Itinerary) -> Vec<String> {
    let mut missing = Vec::new();
    for day in &itinerary.days {
        require(&mut missing, filled(&day.title), &format!("day {} title", day.day));
        require(
            &mut missing,
            filled(&day.description),
            &format!("day {} description", day.day),
        );
        require(
            &mut missing,
            !day.activities.is_empty(),
            &format!("day {} activities", day.day),
        );
    }
    missing
}

fn media_assets(media: &Media) -> Vec<String> {
    let mut missing = Vec::new();
    require(
        &mut missing,
        media.hero_image.as_deref().is_some_and(filled),
        "hero image",
    );
    missing
}

fn pricing_setup(pricing: &Pricing) -> Vec<String> {
    let mut missing = Vec::new();
    match pricing.model {
        PricingModel::Fixed => {
            require(&mut missing, !pricing.date_slots.is_empty(), "at least one date slot");
            require(
                &mut missing,
                pricing.date_slots.iter().all(|s| s.has_dates()),
                "from and to dates on every slot",
            );
            require(&mut missing, !pricing.packages.is_empty(), "at least one package");
            require(
                &mut missing,
                pricing.packages.iter().all(|p| filled(&p.title)),
                "a title on every package",
            );
            require(
                &mut missing,
                pricing.packages.iter().all(|p| p.base_price() > 0.0),
                "a base price on every package",
            );
        }
        PricingModel::Customized => {
            require(&mut missing, pricing.base_price() > 0.0, "base price");
            require(&mut missing, pricing.final_price() > 0.0, "positive final price");
        }
    }
    missing
}

fn detail_lists(details: &Details) -> Vec<String> {
    let mut missing = Vec::new();
    require(&mut missing, !details.highlights.is_empty(), "at least one highlight");
    require(&mut missing, !details.inclusions.is_empty(), "at least one inclusion");
    require(&mut missing, !details.exclusions.is_empty(), "at least one exclusion");
    missing
}

fn policy_texts(policies: &Policies) -> Vec<String> {
    let mut missing = Vec::new();
    require(&mut missing, filled(&policies.terms_conditions), "terms and conditions");
    require(&mut missing, filled(&policies.privacy_policy), "privacy policy");
    require(&mut missing, filled(&policies.payment_terms), "payment terms");
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::DetailList;
    use crate::field::FieldStore;

    fn goa_basic() -> BasicInfo {
        let mut basic = BasicInfo::default();
        basic.title = "Goa Trip".to_string();
        basic.overview = "Fun".to_string();
        basic.destination = "Goa".to_string();
        basic.categories = vec!["Family Packages".to_string()];
        basic.themes = vec!["Nature".to_string()];
        basic.pickup_location = "Mumbai".to_string();
        basic.drop_location = "Mumbai".to_string();
        basic.set_days(5);
        basic
    }

    #[test]
    fn test_goa_basic_info_is_complete() {
        let basic = goa_basic();
        assert!(is_complete(SectionRef::BasicInfo(&basic)));
        assert_eq!(basic.nights(), 4);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut basic = goa_basic();
        basic.title = "   ".to_string();
        assert_eq!(
            missing_requirements(SectionRef::BasicInfo(&basic)),
            vec!["title".to_string()]
        );

        let mut basic = goa_basic();
        basic.set_days(0);
        assert!(!is_complete(SectionRef::BasicInfo(&basic)));
    }

    #[test]
    fn test_itinerary_requires_every_day() {
        let mut itinerary = Itinerary::seeded(2);
        assert!(!is_complete(SectionRef::Itinerary(&itinerary)));

        for day in itinerary.days.iter_mut() {
            day.description = "Explore".to_string();
            day.add_activity("Sightseeing");
        }
        assert!(is_complete(SectionRef::Itinerary(&itinerary)));

        itinerary.days[1].activities.clear();
        assert_eq!(
            missing_requirements(SectionRef::Itinerary(&itinerary)),
            vec!["day 2 activities".to_string()]
        );
    }

    #[test]
    fn test_media_needs_hero_only() {
        let mut media = Media::default();
        assert!(!is_complete(SectionRef::Media(&media)));
        media.set_hero_image("hero.jpg");
        assert!(is_complete(SectionRef::Media(&media)));
    }

    #[test]
    fn test_fixed_pricing_without_slots_is_incomplete() {
        let mut pricing = Pricing::default();
        let id = pricing.add_package();
        pricing.update_package(&id, "title", "Standard".into()).unwrap();
        pricing.update_package(&id, "base_price", 12000.0.into()).unwrap();
        assert!(!is_complete(SectionRef::Pricing(&pricing)));

        let slot = pricing.add_date_slot();
        pricing.update_date_slot(&slot, "from_date", "2025-03-01".into()).unwrap();
        assert!(!is_complete(SectionRef::Pricing(&pricing)));

        pricing.update_date_slot(&slot, "to_date", "2025-03-05".into()).unwrap();
        assert!(is_complete(SectionRef::Pricing(&pricing)));
    }

    #[test]
    fn test_customized_pricing_rejects_negative_final_price() {
        let mut pricing = Pricing::default();
        pricing.set_field("model", "customized".into()).unwrap();
        pricing.set_field("base_price", 10000.0.into()).unwrap();
        assert!(is_complete(SectionRef::Pricing(&pricing)));

        pricing.set_field("discount", 12000.0.into()).unwrap();
        assert_eq!(pricing.final_price(), -2000.0);
        assert!(!is_complete(SectionRef::Pricing(&pricing)));
    }

    #[test]
    fn test_details_and_policies() {
        let mut details = Details::default();
        details.add_item(DetailList::Highlights, "Beach");
        details.add_item(DetailList::Inclusions, "Hotel");
        assert!(!is_complete(SectionRef::Details(&details)));
        details.add_item(DetailList::Exclusions, "Flights");
        assert!(is_complete(SectionRef::Details(&details)));

        let mut policies = Policies::default();
        policies.terms_conditions = "Terms".to_string();
        policies.privacy_policy = "Privacy".to_string();
        policies.payment_terms = " ".to_string();
        assert!(!is_complete(SectionRef::Policies(&policies)));
        policies.payment_terms = "Pay".to_string();
        assert!(is_complete(SectionRef::Policies(&policies)));
    }
}
