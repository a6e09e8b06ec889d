use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Placeholder for any field a provider does not supply.
pub const UNKNOWN: &str = "Unknown";

/// Normalized character metadata produced by every provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub description: String,
    pub image_url: String,
    pub site_url: String,
    pub works: Vec<String>,
}

impl CharacterRecord {
    /// Starts a record with every optional field set to [`UNKNOWN`].
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name: String = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name: name.to_owned(),
            age: String::from(UNKNOWN),
            gender: String::from(UNKNOWN),
            description: String::from(UNKNOWN),
            image_url: String::new(),
            site_url: String::new(),
            works: Vec::new(),
        })
    }

    pub fn with_age(mut self, age: Option<String>) -> Self {
        self.age = known_or_unknown(age);
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = known_or_unknown(gender);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = known_or_unknown(description);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url.map(|url| url.trim().to_owned()).unwrap_or_default();
        self
    }

    pub fn with_site_url(mut self, site_url: Option<String>) -> Self {
        self.site_url = site_url.map(|url| url.trim().to_owned()).unwrap_or_default();
        self
    }

    pub fn with_works(mut self, works: impl IntoIterator<Item = String>) -> Self {
        self.works = works
            .into_iter()
            .map(|title| title.trim().to_owned())
            .filter(|title| !title.is_empty())
            .collect();
        self
    }

    /// Whether the source reported a gender at all.
    pub fn reports_gender(&self) -> bool {
        self.gender != UNKNOWN
    }
}

fn known_or_unknown(value: Option<String>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
        _ => String::from(UNKNOWN),
    }
}
