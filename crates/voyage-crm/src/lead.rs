//! Lead records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CrmError;
use crate::Result;

pub const DEFAULT_SOURCE: &str = "website";

/// Pipeline stage. Declaration order is the kanban column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    AwaitingPayment,
    Booked,
    Failed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Quoted,
        LeadStatus::AwaitingPayment,
        LeadStatus::Booked,
        LeadStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Quoted => "quoted",
            LeadStatus::AwaitingPayment => "awaiting_payment",
            LeadStatus::Booked => "booked",
            LeadStatus::Failed => "failed",
        }
    }

    /// Display label, e.g. "awaiting payment"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Still being worked: neither booked nor failed
    pub fn is_open(&self) -> bool {
        !matches!(self, LeadStatus::Booked | LeadStatus::Failed)
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "quoted" => Ok(LeadStatus::Quoted),
            "awaiting_payment" => Ok(LeadStatus::AwaitingPayment),
            "booked" => Ok(LeadStatus::Booked),
            "failed" => Ok(LeadStatus::Failed),
            _ => Err(format!("Unknown lead status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl LeadPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPriority::Low => "low",
            LeadPriority::Medium => "medium",
            LeadPriority::High => "high",
        }
    }
}

impl std::fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LeadPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(LeadPriority::Low),
            "medium" => Ok(LeadPriority::Medium),
            "high" => Ok(LeadPriority::High),
            _ => Err(format!("Unknown lead priority: {}", s)),
        }
    }
}

/// Every editable part of a lead. Used for both creation and updates.
///
/// Free-text fields use an empty string for "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(default)]
    pub destination_type: String,
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub drop_location: String,
    #[serde(default)]
    pub travel_date_from: Option<NaiveDate>,
    #[serde(default)]
    pub travel_date_to: Option<NaiveDate>,
    pub no_of_adults: u32,
    pub no_of_children: u32,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub priority: LeadPriority,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub hotel_category: String,
    #[serde(default)]
    pub comments: String,
}

impl Default for LeadFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            destination_type: String::new(),
            pickup: String::new(),
            drop_location: String::new(),
            travel_date_from: None,
            travel_date_to: None,
            no_of_adults: 1,
            no_of_children: 0,
            status: LeadStatus::New,
            priority: LeadPriority::Medium,
            assigned_to: String::new(),
            follow_up_date: None,
            budget: String::new(),
            hotel_category: String::new(),
            comments: String::new(),
        }
    }
}

impl LeadFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
            ..Self::default()
        }
    }

    /// Trim contact details and check the required ones
    pub fn validate(&mut self) -> Result<()> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.mobile = self.mobile.trim().to_string();

        if self.name.is_empty() {
            return Err(CrmError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(CrmError::MissingField("email"));
        }
        if self.mobile.is_empty() {
            return Err(CrmError::MissingField("mobile"));
        }
        if !self.email.contains('@') {
            return Err(CrmError::InvalidValue {
                field: "email".to_string(),
                reason: format!("'{}' is not an email address", self.email),
            });
        }
        if let (Some(from), Some(to)) = (self.travel_date_from, self.travel_date_to) {
            if to < from {
                return Err(CrmError::InvalidValue {
                    field: "travel_date_to".to_string(),
                    reason: "travel ends before it starts".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A lead about to be created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    #[serde(flatten)]
    pub fields: LeadFields,
    pub source: String,
}

impl NewLead {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            fields: LeadFields::new(name, email, mobile),
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    #[serde(flatten)]
    pub fields: LeadFields,
    /// Where the lead came from; fixed at creation
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// Validate and stamp a new lead with an id and timestamps
    pub fn create(new: NewLead) -> Result<Self> {
        let NewLead { mut fields, source } = new;
        fields.validate()?;

        let source = source.trim();
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            fields,
            source: if source.is_empty() {
                DEFAULT_SOURCE.to_string()
            } else {
                source.to_string()
            },
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields; id, source and created_at are kept
    pub fn apply(&mut self, mut fields: LeadFields) -> Result<()> {
        fields.validate()?;
        self.fields = fields;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn status(&self) -> LeadStatus {
        self.fields.status
    }

    pub fn priority(&self) -> LeadPriority {
        self.fields.priority
    }

    pub fn travellers(&self) -> u32 {
        self.fields.no_of_adults + self.fields.no_of_children
    }
}
