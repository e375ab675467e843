//! Itinerary tab
//!
//! One entry per trip day. The list is seeded from the trip length the first
//! time a length is known and is never resized afterwards.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::field::{FieldStore, FieldValue};
use crate::tab::TabId;
use crate::Result;

pub const MEAL_OPTIONS: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];

const FIELDS: &[&str] = &["days"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub meals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub accommodation: Accommodation,
}

impl ItineraryDay {
    fn seeded(day: u32, total: u32) -> Self {
        let label = if day == 1 {
            "Arrival"
        } else if day == total {
            "Departure"
        } else {
            "Exploration"
        };
        Self {
            day,
            title: format!("Day {}: {}", day, label),
            description: String::new(),
            images: Vec::new(),
            activities: Vec::new(),
            accommodation: Accommodation::default(),
        }
    }

    pub fn set(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match field {
            "title" => self.title = value.as_text(),
            "description" => self.description = value.as_text(),
            "images" => self.images = value.as_list(),
            "activities" => self.activities = value.as_list(),
            "hotel_name" => self.accommodation.hotel_name = value.as_text(),
            "gallery" => self.accommodation.gallery = value.as_list(),
            "meals" => self.accommodation.meals = value.as_list(),
            "day" => return Err(WizardError::DerivedField(field.to_string())),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Itinerary,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Add an activity; blank and duplicate entries are ignored
    pub fn add_activity(&mut self, activity: &str) -> bool {
        let activity = activity.trim();
        if activity.is_empty() || self.activities.iter().any(|a| a == activity) {
            return false;
        }
        self.activities.push(activity.to_string());
        true
    }

    pub fn remove_activity(&mut self, activity: &str) -> bool {
        let before = self.activities.len();
        self.activities.retain(|a| a != activity);
        self.activities.len() != before
    }

    pub fn toggle_meal(&mut self, meal: &str) {
        let meals = &mut self.accommodation.meals;
        if let Some(pos) = meals.iter().position(|m| m == meal) {
            meals.remove(pos);
        } else {
            meals.push(meal.to_string());
        }
    }

    pub fn add_image(&mut self, url: &str) {
        if !url.trim().is_empty() {
            self.images.push(url.trim().to_string());
        }
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// A fresh itinerary with default titles for `count` days
    pub fn seeded(count: u32) -> Self {
        Self {
            days: (1..=count).map(|d| ItineraryDay::seeded(d, count)).collect(),
        }
    }

    /// Seed from the trip length only while the itinerary is still empty.
    /// Returns whether anything was seeded.
    pub fn seed_if_empty(&mut self, count: u32) -> bool {
        if !self.days.is_empty() || count == 0 {
            return false;
        }
        *self = Itinerary::seeded(count);
        tracing::debug!(days = count, "Seeded itinerary");
        true
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, index: usize) -> Option<&ItineraryDay> {
        self.days.get(index)
    }

    pub fn day_mut(&mut self, index: usize) -> Result<&mut ItineraryDay> {
        self.days
            .get_mut(index)
            .ok_or_else(|| WizardError::ItemNotFound(format!("itinerary day {}", index + 1)))
    }

    /// Update one field of the day at `index`
    pub fn update_day(&mut self, index: usize, field: &str, value: FieldValue) -> Result<()> {
        self.day_mut(index)?.set(field, value)
    }
}

impl FieldStore for Itinerary {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> FieldValue {
        match name {
            "days" => FieldValue::encode(&self.days),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "days" => {
                self.days = if value.is_null() {
                    Vec::new()
                } else {
                    value.decode(name)?
                };
                Ok(())
            }
            _ => Err(WizardError::UnknownField {
                tab: TabId::Itinerary,
                field: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_titles() {
        let itinerary = Itinerary::seeded(3);
        let titles: Vec<_> = itinerary.days.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Day 1: Arrival", "Day 2: Exploration", "Day 3: Departure"]
        );

        let single = Itinerary::seeded(1);
        assert_eq!(single.days[0].title, "Day 1: Arrival");
    }

    #[test]
    fn test_seed_only_when_empty() {
        let mut itinerary = Itinerary::default();
        assert!(!itinerary.seed_if_empty(0));
        assert!(itinerary.seed_if_empty(5));
        assert_eq!(itinerary.len(), 5);

        itinerary.update_day(0, "title", "Landing in Goa".into()).unwrap();
        assert!(!itinerary.seed_if_empty(3));
        assert_eq!(itinerary.len(), 5);
        assert_eq!(itinerary.days[0].title, "Landing in Goa");
    }

    #[test]
    fn test_activities_and_meals() {
        let mut itinerary = Itinerary::seeded(2);
        let day = itinerary.day_mut(1).unwrap();
        assert!(day.add_activity(" Trekking "));
        assert!(!day.add_activity("Trekking"));
        assert!(!day.add_activity("   "));
        assert_eq!(day.activities, vec!["Trekking".to_string()]);
        assert!(day.remove_activity("Trekking"));

        day.toggle_meal("Breakfast");
        day.toggle_meal("Dinner");
        day.toggle_meal("Breakfast");
        assert_eq!(day.accommodation.meals, vec!["Dinner".to_string()]);
    }

    #[test]
    fn test_missing_day() {
        let mut itinerary = Itinerary::seeded(2);
        assert!(matches!(
            itinerary.update_day(4, "title", "x".into()),
            Err(WizardError::ItemNotFound(_))
        ));
        assert!(matches!(
            itinerary.update_day(0, "day", 3u32.into()),
            Err(WizardError::DerivedField(_))
        ));
    }

    #[test]
    fn test_days_field_roundtrip() {
        let mut source = Itinerary::seeded(2);
        source.days[0].description = "Check in".to_string();

        let mut target = Itinerary::default();
        target.set_field("days", source.get_field("days")).unwrap();
        assert_eq!(target, source);

        assert!(target.set_field("days", "not a list".into()).is_err());
    }
}
