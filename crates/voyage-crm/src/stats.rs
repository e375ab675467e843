//! Pipeline statistics for the dashboard

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lead::{Lead, LeadPriority, LeadStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadStats {
    pub total: usize,
    pub by_status: BTreeMap<LeadStatus, usize>,
    pub booked: usize,
    /// booked / total, zero when there are no leads
    pub conversion_rate: f64,
    /// High priority leads that are neither booked nor failed
    pub high_priority_open: usize,
}

impl LeadStats {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut by_status: BTreeMap<LeadStatus, usize> =
            LeadStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for lead in leads {
            *by_status.entry(lead.status()).or_default() += 1;
        }

        let total = leads.len();
        let booked = by_status.get(&LeadStatus::Booked).copied().unwrap_or(0);
        let high_priority_open = leads
            .iter()
            .filter(|l| l.priority() == LeadPriority::High && l.status().is_open())
            .count();

        Self {
            total,
            by_status,
            booked,
            conversion_rate: if total == 0 {
                0.0
            } else {
                booked as f64 / total as f64
            },
            high_priority_open,
        }
    }

    pub fn count(&self, status: LeadStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Conversion rate as a whole percentage, e.g. "25%"
    pub fn conversion_label(&self) -> String {
        format!("{:.0}%", self.conversion_rate * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::NewLead;

    fn lead(status: LeadStatus, priority: LeadPriority) -> Lead {
        let mut new = NewLead::new("Guest", "guest@example.com", "1");
        new.fields.status = status;
        new.fields.priority = priority;
        Lead::create(new).unwrap()
    }

    #[test]
    fn test_empty_pipeline() {
        let stats = LeadStats::from_leads(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.conversion_rate, 0.0);
        assert_eq!(stats.by_status.len(), 6);
        assert_eq!(stats.count(LeadStatus::New), 0);
    }

    #[test]
    fn test_pipeline_counts() {
        let leads = vec![
            lead(LeadStatus::New, LeadPriority::High),
            lead(LeadStatus::Booked, LeadPriority::High),
            lead(LeadStatus::Quoted, LeadPriority::Medium),
            lead(LeadStatus::Failed, LeadPriority::High),
        ];
        let stats = LeadStats::from_leads(&leads);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.booked, 1);
        assert_eq!(stats.conversion_rate, 0.25);
        assert_eq!(stats.conversion_label(), "25%");
        assert_eq!(stats.high_priority_open, 1);
        assert_eq!(stats.count(LeadStatus::Quoted), 1);
    }
}
