//! Completion tracking
//!
//! Recomputed from scratch after every mutation. A tab that stops passing
//! its validator leaves the completed set.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::state::WizardState;
use crate::tab::TabId;
use crate::validate::is_complete;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    completed: BTreeSet<TabId>,
    total: usize,
}

impl Completion {
    pub fn recompute(state: &WizardState) -> Self {
        let completed = state
            .sections()
            .filter(|section| is_complete(*section))
            .map(|section| section.tab())
            .collect();
        Self {
            completed,
            total: state.tabs().len(),
        }
    }

    pub fn completed_tabs(&self) -> &BTreeSet<TabId> {
        &self.completed
    }

    pub fn is_tab_complete(&self, tab: TabId) -> bool {
        self.completed.contains(&tab)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of complete tabs, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed.len() as f64 / self.total as f64
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed.len() == self.total
    }

    /// "3 of 6 sections completed"
    pub fn summary(&self) -> String {
        format!("{} of {} sections completed", self.completed.len(), self.total)
    }
}
