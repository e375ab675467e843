//! Wizard state
//!
//! One typed section per tab. `SectionRef` / `SectionMut` are the tagged
//! views used when code needs to treat a tab generically.

use serde::{Deserialize, Serialize};

use crate::basic_info::BasicInfo;
use crate::details::Details;
use crate::field::{FieldStore, FieldValue};
use crate::itinerary::Itinerary;
use crate::media::Media;
use crate::policies::Policies;
use crate::pricing::Pricing;
use crate::tab::TabId;
use crate::Result;

#[derive(Debug, Clone, Copy)]
pub enum SectionRef<'a> {
    BasicInfo(&'a BasicInfo),
    Itinerary(&'a Itinerary),
    Media(&'a Media),
    Pricing(&'a Pricing),
    Details(&'a Details),
    Policies(&'a Policies),
}

impl<'a> SectionRef<'a> {
    pub fn tab(&self) -> TabId {
        match self {
            SectionRef::BasicInfo(_) => TabId::BasicInfo,
            SectionRef::Itinerary(_) => TabId::Itinerary,
            SectionRef::Media(_) => TabId::Media,
            SectionRef::Pricing(_) => TabId::Pricing,
            SectionRef::Details(_) => TabId::Details,
            SectionRef::Policies(_) => TabId::Policies,
        }
    }

    pub fn fields(&self) -> &'a dyn FieldStore {
        match *self {
            SectionRef::BasicInfo(s) => s,
            SectionRef::Itinerary(s) => s,
            SectionRef::Media(s) => s,
            SectionRef::Pricing(s) => s,
            SectionRef::Details(s) => s,
            SectionRef::Policies(s) => s,
        }
    }
}

#[derive(Debug)]
pub enum SectionMut<'a> {
    BasicInfo(&'a mut BasicInfo),
    Itinerary(&'a mut Itinerary),
    Media(&'a mut Media),
    Pricing(&'a mut Pricing),
    Details(&'a mut Details),
    Policies(&'a mut Policies),
}

impl<'a> SectionMut<'a> {
    pub fn fields(self) -> &'a mut dyn FieldStore {
        match self {
            SectionMut::BasicInfo(s) => s,
            SectionMut::Itinerary(s) => s,
            SectionMut::Media(s) => s,
            SectionMut::Pricing(s) => s,
            SectionMut::Details(s) => s,
            SectionMut::Policies(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub basic_info: BasicInfo,
    pub itinerary: Itinerary,
    pub media: Media,
    pub pricing: Pricing,
    pub details: Details,
    pub policies: Policies,
}

impl WizardState {
    /// Fresh state with form defaults and an itinerary seeded from the
    /// default trip length
    pub fn new() -> Self {
        let mut state = Self::default();
        state.itinerary.seed_if_empty(state.basic_info.days());
        state
    }

    pub fn tabs(&self) -> &'static [TabId] {
        &TabId::ALL
    }

    pub fn section(&self, tab: TabId) -> SectionRef<'_> {
        match tab {
            TabId::BasicInfo => SectionRef::BasicInfo(&self.basic_info),
            TabId::Itinerary => SectionRef::Itinerary(&self.itinerary),
            TabId::Media => SectionRef::Media(&self.media),
            TabId::Pricing => SectionRef::Pricing(&self.pricing),
            TabId::Details => SectionRef::Details(&self.details),
            TabId::Policies => SectionRef::Policies(&self.policies),
        }
    }

    pub fn section_mut(&mut self, tab: TabId) -> SectionMut<'_> {
        match tab {
            TabId::BasicInfo => SectionMut::BasicInfo(&mut self.basic_info),
            TabId::Itinerary => SectionMut::Itinerary(&mut self.itinerary),
            TabId::Media => SectionMut::Media(&mut self.media),
            TabId::Pricing => SectionMut::Pricing(&mut self.pricing),
            TabId::Details => SectionMut::Details(&mut self.details),
            TabId::Policies => SectionMut::Policies(&mut self.policies),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionRef<'_>> {
        TabId::ALL.into_iter().map(move |tab| self.section(tab))
    }

    pub fn get_field(&self, tab: TabId, name: &str) -> FieldValue {
        self.section(tab).fields().get_field(name)
    }

    /// Replace one field. Setting the trip length seeds an empty itinerary.
    pub fn set_field(&mut self, tab: TabId, name: &str, value: FieldValue) -> Result<()> {
        self.section_mut(tab).fields().set_field(name, value)?;
        if tab == TabId::BasicInfo && name == "days" {
            self.sync_itinerary();
        }
        Ok(())
    }

    /// Seed the itinerary from the trip length if it is still empty
    pub fn sync_itinerary(&mut self) {
        let days = self.basic_info.days();
        self.itinerary.seed_if_empty(days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WizardError;

    #[test]
    fn test_loaded_state_rederives_fields() {
        let mut state = WizardState::new();
        state.basic_info.set_days(3);
        state.pricing.set_base_price(9000.0);
        state.pricing.set_discount(1000.0);
        let package = state.pricing.add_package();
        state
            .pricing
            .update_package(&package, "base_price", 5000.0.into())
            .unwrap();

        let mut json = serde_json::to_value(&state).unwrap();
        json["basic_info"]["nights"] = 9.into();
        json["pricing"]["final_price"] = 1.0.into();
        json["pricing"]["packages"][0]["final_price"] = 1.0.into();

        let loaded: WizardState = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.basic_info.nights(), 2);
        assert_eq!(loaded.pricing.final_price(), 8000.0);
        assert_eq!(loaded.pricing.packages[0].final_price(), 5000.0);
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_new_state_defaults() {
        let state = WizardState::new();
        assert_eq!(state.tabs().len(), 6);
        assert_eq!(state.itinerary.len(), 5);
        assert_eq!(state.get_field(TabId::BasicInfo, "nights"), FieldValue::from(4u32));
        assert_eq!(state.get_field(TabId::Pricing, "model"), FieldValue::from("fixed"));
    }

    #[test]
    fn test_sections_are_keyed_by_tab() {
        let state = WizardState::new();
        for (section, tab) in state.sections().zip(TabId::ALL) {
            assert_eq!(section.tab(), tab);
        }
    }

    #[test]
    fn test_set_field_leaves_other_fields_alone() {
        let mut state = WizardState::new();
        state.set_field(TabId::BasicInfo, "title", "Goa Getaway".into()).unwrap();
        state.set_field(TabId::BasicInfo, "destination", "Goa".into()).unwrap();

        assert_eq!(state.get_field(TabId::BasicInfo, "title"), FieldValue::from("Goa Getaway"));
        assert_eq!(state.get_field(TabId::BasicInfo, "days"), FieldValue::from(5u32));
        assert!(state.get_field(TabId::Media, "unknown").is_null());
    }

    #[test]
    fn test_itinerary_seeded_after_days_when_empty() {
        let mut state = WizardState::default();
        state.set_field(TabId::Itinerary, "days", FieldValue::Null).unwrap();
        assert!(state.itinerary.is_empty());

        state.set_field(TabId::BasicInfo, "days", 3u32.into()).unwrap();
        assert_eq!(state.itinerary.len(), 3);

        state.set_field(TabId::BasicInfo, "days", 6u32.into()).unwrap();
        assert_eq!(state.itinerary.len(), 3);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut state = WizardState::new();
        let err = state
            .set_field(TabId::Details, "reviews", "great".into())
            .unwrap_err();
        assert!(matches!(err, WizardError::UnknownField { tab: TabId::Details, .. }));
    }
}
