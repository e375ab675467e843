//! Basic Info tab

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::field::{FieldStore, FieldValue};
use crate::tab::TabId;
use crate::Result;

pub const CATEGORY_OPTIONS: [&str; 8] = [
    "Honeymoon Packages",
    "Family Packages",
    "Friends",
    "Group Packages",
    "Solo Trips",
    "All-Girls Trips",
    "All-Boys Trips",
    "Volunteer Trips",
];

pub const THEME_OPTIONS: [&str; 5] = [
    "Adventure",
    "Nature",
    "Religious",
    "Wildlife",
    "Water Activities",
];

const TITLE_MAX_CHARS: usize = 100;

const FIELDS: &[&str] = &[
    "title",
    "overview",
    "destination",
    "destination_type",
    "categories",
    "themes",
    "hotel_category",
    "pickup_location",
    "drop_location",
    "days",
    "nights",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    #[default]
    Domestic,
    International,
}

impl DestinationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::Domestic => "domestic",
            DestinationType::International => "international",
        }
    }
}

impl std::fmt::Display for DestinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DestinationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domestic" => Ok(DestinationType::Domestic),
            "international" => Ok(DestinationType::International),
            _ => Err(format!("Unknown destination type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BasicInfoFields")]
pub struct BasicInfo {
    pub title: String,
    pub overview: String,
    pub destination: String,
    pub destination_type: DestinationType,
    pub categories: Vec<String>,
    pub themes: Vec<String>,
    /// Star rating, 1 to 5
    pub hotel_category: u8,
    pub pickup_location: String,
    pub drop_location: String,
    days: u32,
    /// Always `days - 1` (floored at zero)
    nights: u32,
}

/// Stored shape of `BasicInfo`; nights are rederived from days on load
#[derive(Deserialize)]
struct BasicInfoFields {
    title: String,
    overview: String,
    destination: String,
    destination_type: DestinationType,
    categories: Vec<String>,
    themes: Vec<String>,
    hotel_category: u8,
    pickup_location: String,
    drop_location: String,
    days: u32,
}

impl From<BasicInfoFields> for BasicInfo {
    fn from(f: BasicInfoFields) -> Self {
        let mut info = Self {
            title: f.title,
            overview: f.overview,
            destination: f.destination,
            destination_type: f.destination_type,
            categories: f.categories,
            themes: f.themes,
            hotel_category: f.hotel_category.clamp(1, 5),
            pickup_location: f.pickup_location,
            drop_location: f.drop_location,
            days: 0,
            nights: 0,
        };
        info.set_days(f.days);
        info
    }
}

impl Default for BasicInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            overview: String::new(),
            destination: String::new(),
            destination_type: DestinationType::Domestic,
            categories: Vec::new(),
            themes: Vec::new(),
            hotel_category: 3,
            pickup_location: String::new(),
            drop_location: String::new(),
            days: 5,
            nights: 4,
        }
    }
}

impl BasicInfo {
    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Set the trip length; nights follow automatically
    pub fn set_days(&mut self, days: u32) {
        self.days = days;
        self.nights = days.saturating_sub(1);
    }

    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_theme(&mut self, theme: &str) {
        toggle(&mut self.themes, theme);
    }

    /// "3N - 4D"
    pub fn duration_label(&self) -> String {
        format!("{}N - {}D", self.nights, self.days)
    }
}

fn toggle(list: &mut Vec<String>, item: &str) {
    if let Some(pos) = list.iter().position(|existing| existing == item) {
        list.remove(pos);
    } else {
        list.push(item.to_string());
    }
}

impl FieldStore for BasicInfo {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> FieldValue {
        match name {
            "title" => self.title.as_str().into(),
            "overview" => self.overview.as_str().into(),
            "destination" => self.destination.as_str().into(),
            "destination_type" => self.destination_type.as_str().into(),
            "categories" => self.categories.clone().into(),
            "themes" => self.themes.clone().into(),
            "hotel_category" => FieldValue::from(self.hotel_category as u32),
            "pickup_location" => self.pickup_location.as_str().into(),
            "drop_location" => self.drop_location.as_str().into(),
            "days" => self.days.into(),
            "nights" => self.nights.into(),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "title" => {
                self.title = value.as_text().chars().take(TITLE_MAX_CHARS).collect();
            }
            "overview" => self.overview = value.as_text(),
            "destination" => self.destination = value.as_text(),
            "destination_type" => {
                self.destination_type = value
                    .as_text()
                    .parse()
                    .map_err(|e: String| WizardError::invalid(name, e))?;
            }
            "categories" => self.categories = value.as_list(),
            "themes" => self.themes = value.as_list(),
            // Star rating is clamped into 1..=5; malformed input counts as 0
            "hotel_category" => self.hotel_category = value.as_count().clamp(1, 5) as u8,
            "pickup_location" => self.pickup_location = value.as_text(),
            "drop_location" => self.drop_location = value.as_text(),
            "days" => self.set_days(value.as_count()),
            "nights" => return Err(WizardError::DerivedField(name.to_string())),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::BasicInfo,
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
