//! Pricing tab
//!
//! Two models: fixed departures (date slots plus packages) or a single
//! customized price. Final prices are always `base_price - discount` and are
//! not clamped, so an oversized discount yields a negative price.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WizardError;
use crate::field::{FieldStore, FieldValue};
use crate::tab::TabId;
use crate::Result;

pub const DEFAULT_AVAILABLE_SLOTS: u32 = 10;
pub const DEFAULT_GST_PERCENTAGE: f64 = 18.0;

const FIELDS: &[&str] = &[
    "model",
    "date_slots",
    "packages",
    "price_type",
    "base_price",
    "discount",
    "final_price",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    #[default]
    Fixed,
    Customized,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "fixed",
            PricingModel::Customized => "customized",
        }
    }
}

impl std::str::FromStr for PricingModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(PricingModel::Fixed),
            "customized" => Ok(PricingModel::Customized),
            _ => Err(format!("Unknown pricing model: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    #[default]
    PerPerson,
    PerPackage,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::PerPerson => "per_person",
            PriceType::PerPackage => "per_package",
        }
    }

    /// Suffix shown after a price, e.g. "per person"
    pub fn label(&self) -> &'static str {
        match self {
            PriceType::PerPerson => "per person",
            PriceType::PerPackage => "per package",
        }
    }
}

impl std::str::FromStr for PriceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "person" | "per_person" => Ok(PriceType::PerPerson),
            "package" | "per_package" => Ok(PriceType::PerPackage),
            _ => Err(format!("Unknown price type: {}", s)),
        }
    }
}

/// A fixed departure window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSlot {
    pub id: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub available_slots: u32,
}

impl DateSlot {
    pub fn new() -> Self {
        Self {
            id: format!("slot-{}", Uuid::new_v4().simple()),
            from_date: None,
            to_date: None,
            available_slots: DEFAULT_AVAILABLE_SLOTS,
        }
    }

    pub fn has_dates(&self) -> bool {
        self.from_date.is_some() && self.to_date.is_some()
    }

    pub fn set(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match field {
            "from_date" => self.from_date = parse_slot_date(field, &value)?,
            "to_date" => self.to_date = parse_slot_date(field, &value)?,
            "available_slots" => self.available_slots = value.as_count(),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Pricing,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Default for DateSlot {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_slot_date(field: &str, value: &FieldValue) -> Result<Option<NaiveDate>> {
    match value.as_optional_text() {
        None => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                WizardError::invalid(field, format!("'{}' is not a YYYY-MM-DD date", text))
            }),
    }
}

/// A bookable package on a fixed departure trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PackageFields")]
pub struct PricingPackage {
    pub id: String,
    pub title: String,
    pub description: String,
    base_price: f64,
    discount: f64,
    final_price: f64,
    pub booking_amount: f64,
    pub gst_percentage: f64,
}

/// Stored shape of a package; the final price is recomputed on load
#[derive(Deserialize)]
struct PackageFields {
    id: String,
    title: String,
    description: String,
    base_price: f64,
    discount: f64,
    booking_amount: f64,
    gst_percentage: f64,
}

impl From<PackageFields> for PricingPackage {
    fn from(f: PackageFields) -> Self {
        let mut package = Self {
            id: f.id,
            title: f.title,
            description: f.description,
            base_price: f.base_price,
            discount: f.discount,
            final_price: 0.0,
            booking_amount: f.booking_amount,
            gst_percentage: f.gst_percentage,
        };
        package.recalculate();
        package
    }
}

impl PricingPackage {
    pub fn new() -> Self {
        Self {
            id: format!("package-{}", Uuid::new_v4().simple()),
            title: String::new(),
            description: String::new(),
            base_price: 0.0,
            discount: 0.0,
            final_price: 0.0,
            booking_amount: 0.0,
            gst_percentage: DEFAULT_GST_PERCENTAGE,
        }
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    pub fn set_base_price(&mut self, base_price: f64) {
        self.base_price = base_price;
        self.recalculate();
    }

    pub fn set_discount(&mut self, discount: f64) {
        self.discount = discount;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.final_price = self.base_price - self.discount;
    }

    pub fn set(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match field {
            "title" => self.title = value.as_text(),
            "description" => self.description = value.as_text(),
            "base_price" => self.set_base_price(value.as_number()),
            "discount" => self.set_discount(value.as_number()),
            "booking_amount" => self.booking_amount = value.as_number(),
            "gst_percentage" => self.gst_percentage = value.as_number(),
            "final_price" => return Err(WizardError::DerivedField(field.to_string())),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Pricing,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Default for PricingPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PricingFields")]
pub struct Pricing {
    pub model: PricingModel,
    pub date_slots: Vec<DateSlot>,
    pub packages: Vec<PricingPackage>,
    pub price_type: PriceType,
    base_price: f64,
    discount: f64,
    final_price: f64,
}

/// Stored shape of `Pricing`; the customized final price is recomputed on load
#[derive(Deserialize)]
struct PricingFields {
    model: PricingModel,
    date_slots: Vec<DateSlot>,
    packages: Vec<PricingPackage>,
    price_type: PriceType,
    base_price: f64,
    discount: f64,
}

impl From<PricingFields> for Pricing {
    fn from(f: PricingFields) -> Self {
        Self {
            model: f.model,
            date_slots: f.date_slots,
            packages: f.packages,
            price_type: f.price_type,
            base_price: f.base_price,
            discount: f.discount,
            final_price: f.base_price - f.discount,
        }
    }
}

impl Pricing {
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Customized price after discount
    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    pub fn set_base_price(&mut self, base_price: f64) {
        self.base_price = base_price;
        self.final_price = self.base_price - self.discount;
    }

    pub fn set_discount(&mut self, discount: f64) {
        self.discount = discount;
        self.final_price = self.base_price - self.discount;
    }

    /// Add an empty date slot and return its id
    pub fn add_date_slot(&mut self) -> String {
        let slot = DateSlot::new();
        let id = slot.id.clone();
        self.date_slots.push(slot);
        id
    }

    pub fn update_date_slot(
        &mut self,
        slot_id: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<()> {
        self.date_slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| WizardError::ItemNotFound(format!("date slot {}", slot_id)))?
            .set(field, value)
    }

    pub fn remove_date_slot(&mut self, slot_id: &str) -> bool {
        let before = self.date_slots.len();
        self.date_slots.retain(|s| s.id != slot_id);
        self.date_slots.len() != before
    }

    /// Add an empty package and return its id
    pub fn add_package(&mut self) -> String {
        let package = PricingPackage::new();
        let id = package.id.clone();
        self.packages.push(package);
        id
    }

    pub fn update_package(
        &mut self,
        package_id: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<()> {
        self.packages
            .iter_mut()
            .find(|p| p.id == package_id)
            .ok_or_else(|| WizardError::ItemNotFound(format!("package {}", package_id)))?
            .set(field, value)
    }

    pub fn remove_package(&mut self, package_id: &str) -> bool {
        let before = self.packages.len();
        self.packages.retain(|p| p.id != package_id);
        self.packages.len() != before
    }
}

/// Lowest package final price, the "starting from" figure of a fixed trip
pub(crate) fn lowest_final_price(packages: &[PricingPackage]) -> Option<f64> {
    packages
        .iter()
        .map(PricingPackage::final_price)
        .reduce(f64::min)
}

impl FieldStore for Pricing {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> FieldValue {
        match name {
            "model" => self.model.as_str().into(),
            "date_slots" => FieldValue::encode(&self.date_slots),
            "packages" => FieldValue::encode(&self.packages),
            "price_type" => self.price_type.as_str().into(),
            "base_price" => self.base_price.into(),
            "discount" => self.discount.into(),
            "final_price" => self.final_price.into(),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "model" => {
                self.model = value
                    .as_text()
                    .parse()
                    .map_err(|e: String| WizardError::invalid(name, e))?;
            }
            "date_slots" => {
                self.date_slots = if value.is_null() {
                    Vec::new()
                } else {
                    value.decode(name)?
                };
            }
            "packages" => {
                let packages: Vec<PricingPackage> = if value.is_null() {
                    Vec::new()
                } else {
                    value.decode(name)?
                };
                // Final prices are recomputed while decoding
                self.packages = packages;
            }
            "price_type" => {
                self.price_type = value
                    .as_text()
                    .parse()
                    .map_err(|e: String| WizardError::invalid(name, e))?;
            }
            "base_price" => self.set_base_price(value.as_number()),
            "discount" => self.set_discount(value.as_number()),
            "final_price" => return Err(WizardError::DerivedField(name.to_string())),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Pricing,
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
