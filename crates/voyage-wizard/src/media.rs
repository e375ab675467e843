//! Media tab

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::field::{FieldStore, FieldValue};
use crate::tab::TabId;
use crate::Result;

const FIELDS: &[&str] = &["hero_image", "gallery"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// URL of the banner image
    pub hero_image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Media {
    pub fn set_hero_image(&mut self, url: &str) {
        let url = url.trim();
        self.hero_image = (!url.is_empty()).then(|| url.to_string());
    }

    pub fn clear_hero_image(&mut self) {
        self.hero_image = None;
    }

    /// Append images, skipping blank URLs. Returns how many were added.
    pub fn add_gallery_images<I, S>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.gallery.len();
        self.gallery.extend(
            urls.into_iter()
                .map(|u| u.as_ref().trim().to_string())
                .filter(|u| !u.is_empty()),
        );
        self.gallery.len() - before
    }

    pub fn remove_gallery_image(&mut self, index: usize) -> Result<String> {
        if index >= self.gallery.len() {
            return Err(WizardError::ItemNotFound(format!("gallery image {}", index)));
        }
        Ok(self.gallery.remove(index))
    }
}

impl FieldStore for Media {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> FieldValue {
        match name {
            "hero_image" => self.hero_image.clone().into(),
            "gallery" => self.gallery.clone().into(),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "hero_image" => self.hero_image = value.as_optional_text(),
            "gallery" => self.gallery = value.as_list(),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Media,
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
