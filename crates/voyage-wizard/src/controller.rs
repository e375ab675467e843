//! Wizard Controller
//!
//! Owns the wizard state, the selected tab and the completion snapshot.
//! Every mutation goes through here so completion is always recomputed.

use crate::completion::Completion;
use crate::error::WizardError;
use crate::field::FieldValue;
use crate::state::WizardState;
use crate::tab::TabId;
use crate::Result;

#[derive(Debug, Clone)]
pub struct WizardController {
    state: WizardState,
    active_tab: TabId,
    completion: Completion,
}

impl WizardController {
    pub fn new() -> Self {
        Self::from_state(WizardState::new())
    }

    pub fn from_state(state: WizardState) -> Self {
        let completion = Completion::recompute(&state);
        Self {
            state,
            active_tab: TabId::BasicInfo,
            completion,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    pub fn progress(&self) -> f64 {
        self.completion.progress()
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Switch tabs. Completing a tab never advances on its own.
    pub fn select_tab(&mut self, tab: TabId) {
        if tab != self.active_tab {
            tracing::debug!(from = %self.active_tab, to = %tab, "Selected wizard tab");
            self.active_tab = tab;
        }
    }

    pub fn select_tab_by_id(&mut self, tab_id: &str) -> Result<TabId> {
        let tab: TabId = tab_id
            .parse()
            .map_err(|_| WizardError::UnknownTab(tab_id.to_string()))?;
        self.select_tab(tab);
        Ok(tab)
    }

    pub fn get_field(&self, tab: TabId, name: &str) -> FieldValue {
        self.state.get_field(tab, name)
    }

    /// Replace one field and recompute completion
    pub fn set_field(
        &mut self,
        tab: TabId,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<&Completion> {
        let result = self.state.set_field(tab, name, value.into());
        self.refresh();
        result.map(|_| &self.completion)
    }

    /// Run a typed edit against the state and recompute completion
    pub fn edit<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut WizardState) -> Result<T>,
    {
        let result = f(&mut self.state);
        self.refresh();
        result
    }

    pub fn toggle_category(&mut self, category: &str) -> &Completion {
        self.state.basic_info.toggle_category(category);
        self.refresh();
        &self.completion
    }

    pub fn toggle_theme(&mut self, theme: &str) -> &Completion {
        self.state.basic_info.toggle_theme(theme);
        self.refresh();
        &self.completion
    }

    pub fn can_publish(&self) -> bool {
        crate::publish::can_publish(&self.completion)
    }

    fn refresh(&mut self) {
        let completion = Completion::recompute(&self.state);
        if completion != self.completion {
            tracing::debug!(
                completed = completion.completed_count(),
                total = completion.total(),
                "Wizard completion changed"
            );
        }
        self.completion = completion;
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}
