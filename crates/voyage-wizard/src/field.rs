//! Field values and the by-name update interface shared by every tab

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::Result;

/// A loosely typed form value.
///
/// Form inputs arrive as text, numbers, flags or lists; each tab coerces them
/// into its typed fields. Structured values (itinerary days, packages) travel
/// as `Object`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Object(serde_json::Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text form of the value; numbers print without a trailing `.0`
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Object(v) => v.to_string(),
        }
    }

    /// Numeric form of the value. Malformed or non-finite input reads as zero.
    pub fn as_number(&self) -> f64 {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            FieldValue::Object(v) => v.as_f64().unwrap_or(0.0),
            _ => 0.0,
        };
        if n.is_finite() {
            n
        } else {
            0.0
        }
    }

    /// Whole, non-negative count. Fractions truncate, negatives clamp to zero.
    pub fn as_count(&self) -> u32 {
        let n = self.as_number().trunc();
        if n <= 0.0 {
            0
        } else if n >= u32::MAX as f64 {
            u32::MAX
        } else {
            n as u32
        }
    }

    pub fn as_list(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.clone(),
            FieldValue::Text(s) if !s.trim().is_empty() => vec![s.clone()],
            FieldValue::Object(v) => serde_json::from_value(v.clone()).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Optional text: null and blank strings read as `None`
    pub fn as_optional_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            other => {
                let text = other.as_text();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }

    /// Decode a structured value for `field`
    pub fn decode<T: DeserializeOwned>(&self, field: &str) -> Result<T> {
        let json = match self {
            FieldValue::Object(v) => v.clone(),
            other => serde_json::to_value(other)
                .map_err(|e| WizardError::invalid(field, e.to_string()))?,
        };
        serde_json::from_value(json).map_err(|e| WizardError::invalid(field, e.to_string()))
    }

    /// Wrap a structured value
    pub fn encode<T: Serialize>(value: &T) -> FieldValue {
        serde_json::to_value(value)
            .map(FieldValue::Object)
            .unwrap_or(FieldValue::Null)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Object(v)
    }
}

/// By-name access to a tab's fields.
///
/// `set_field` rejects names the tab does not declare and derived fields.
/// `get_field` returns `Null` for unknown names.
pub trait FieldStore {
    /// Declared field names in form order
    fn field_names(&self) -> &'static [&'static str];

    fn get_field(&self, name: &str) -> FieldValue;

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()>;
}
