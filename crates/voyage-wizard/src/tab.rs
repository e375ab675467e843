//! Wizard tabs
//!
//! The wizard walks through six sections in a fixed order:
//! ```text
//! Basic Info -> Itinerary -> Media -> Pricing -> Details -> Policies
//! ```
//! Any tab may be selected at any time; order only matters for display.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// Title, destination, categories, duration
    #[serde(rename = "basic")]
    BasicInfo,
    /// One entry per day of the trip
    Itinerary,
    /// Hero image and gallery
    Media,
    /// Fixed packages or a single customized price
    Pricing,
    /// Highlights, inclusions, exclusions, FAQs
    Details,
    /// Terms, privacy, payment and custom policies
    Policies,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::BasicInfo,
        TabId::Itinerary,
        TabId::Media,
        TabId::Pricing,
        TabId::Details,
        TabId::Policies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::BasicInfo => "basic",
            TabId::Itinerary => "itinerary",
            TabId::Media => "media",
            TabId::Pricing => "pricing",
            TabId::Details => "details",
            TabId::Policies => "policies",
        }
    }

    /// Human-readable tab title
    pub fn label(&self) -> &'static str {
        match self {
            TabId::BasicInfo => "Basic Info",
            TabId::Itinerary => "Itinerary",
            TabId::Media => "Media",
            TabId::Pricing => "Pricing",
            TabId::Details => "Details",
            TabId::Policies => "Policies",
        }
    }

    /// Zero-based position in the wizard order
    pub fn position(&self) -> usize {
        TabId::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Option<TabId> {
        TabId::ALL.get(self.position() + 1).copied()
    }

    pub fn previous(&self) -> Option<TabId> {
        self.position()
            .checked_sub(1)
            .and_then(|i| TabId::ALL.get(i).copied())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "basic_info" => Ok(TabId::BasicInfo),
            "itinerary" => Ok(TabId::Itinerary),
            "media" => Ok(TabId::Media),
            "pricing" => Ok(TabId::Pricing),
            "details" => Ok(TabId::Details),
            "policies" => Ok(TabId::Policies),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}
