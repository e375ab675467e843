//! Details tab

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WizardError;
use crate::field::{FieldStore, FieldValue};
use crate::tab::TabId;
use crate::Result;

const FIELDS: &[&str] = &["highlights", "inclusions", "exclusions", "faqs"];

/// The three free-text lists on the Details tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailList {
    Highlights,
    Inclusions,
    Exclusions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub highlights: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl Details {
    fn list_mut(&mut self, list: DetailList) -> &mut Vec<String> {
        match list {
            DetailList::Highlights => &mut self.highlights,
            DetailList::Inclusions => &mut self.inclusions,
            DetailList::Exclusions => &mut self.exclusions,
        }
    }

    /// Append a trimmed entry. Blank input is ignored.
    pub fn add_item(&mut self, list: DetailList, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.list_mut(list).push(text.to_string());
        true
    }

    pub fn remove_item(&mut self, list: DetailList, index: usize) -> Result<String> {
        let items = self.list_mut(list);
        if index >= items.len() {
            return Err(WizardError::ItemNotFound(format!("{:?} entry {}", list, index)));
        }
        Ok(items.remove(index))
    }

    /// Add an empty FAQ and return its id
    pub fn add_faq(&mut self) -> String {
        let id = format!("faq-{}", Uuid::new_v4().simple());
        self.faqs.push(Faq {
            id: id.clone(),
            question: String::new(),
            answer: String::new(),
        });
        id
    }

    pub fn update_faq(&mut self, faq_id: &str, field: &str, value: FieldValue) -> Result<()> {
        let faq = self
            .faqs
            .iter_mut()
            .find(|f| f.id == faq_id)
            .ok_or_else(|| WizardError::ItemNotFound(format!("faq {}", faq_id)))?;
        match field {
            "question" => faq.question = value.as_text(),
            "answer" => faq.answer = value.as_text(),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Details,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn remove_faq(&mut self, faq_id: &str) -> bool {
        let before = self.faqs.len();
        self.faqs.retain(|f| f.id != faq_id);
        self.faqs.len() != before
    }
}

impl FieldStore for Details {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> FieldValue {
        match name {
            "highlights" => self.highlights.clone().into(),
            "inclusions" => self.inclusions.clone().into(),
            "exclusions" => self.exclusions.clone().into(),
            "faqs" => FieldValue::encode(&self.faqs),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "highlights" => self.highlights = value.as_list(),
            "inclusions" => self.inclusions = value.as_list(),
            "exclusions" => self.exclusions = value.as_list(),
            "faqs" => {
                self.faqs = if value.is_null() {
                    Vec::new()
                } else {
                    value.decode(name)?
                };
            }
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Details,
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
