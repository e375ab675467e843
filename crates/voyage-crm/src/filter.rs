//! Lead search, status filter and kanban grouping

use serde::{Deserialize, Serialize};

use crate::lead::{Lead, LeadStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Leads matching both the search term and the status filter, in input order.
///
/// A blank term matches everything. Otherwise name, email and destination
/// type match case-insensitively; mobile matches as typed.
pub fn filter_leads<'a>(
    leads: &'a [Lead],
    search_term: &str,
    status: StatusFilter,
) -> Vec<&'a Lead> {
    let term = search_term.trim();
    let needle = term.to_lowercase();

    leads
        .iter()
        .filter(|lead| status.matches(lead.status()))
        .filter(|lead| {
            if term.is_empty() {
                return true;
            }
            let f = &lead.fields;
            f.name.to_lowercase().contains(&needle)
                || f.email.to_lowercase().contains(&needle)
                || f.mobile.contains(term)
                || f.destination_type.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanColumn<'a> {
    pub status: LeadStatus,
    pub leads: Vec<&'a Lead>,
}

/// One column per status in pipeline order, empty columns included
pub fn group_by_status(leads: &[Lead]) -> Vec<KanbanColumn<'_>> {
    LeadStatus::ALL
        .into_iter()
        .map(|status| KanbanColumn {
            status,
            leads: leads.iter().filter(|l| l.status() == status).collect(),
        })
        .collect()
}
