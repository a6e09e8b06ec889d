use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Longest accepted name, matching the `max_length` declared on the command option.
pub const MAX_QUERY_CHARS: usize = 100;

/// Free-text character name as typed by the user, trimmed and length-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterQuery(String);

impl CharacterQuery {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let len = trimmed.chars().count();
        if len > MAX_QUERY_CHARS {
            return Err(ValidationError::QueryTooLong {
                len,
                max: MAX_QUERY_CHARS,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for REST query strings.
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    pub fn matches_name(&self, name: &str) -> bool {
        name.trim().to_lowercase() == self.0.to_lowercase()
    }
}

impl Display for CharacterQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CharacterQuery {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CharacterQuery {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CharacterQuery> for String {
    fn from(value: CharacterQuery) -> Self {
        value.0
    }
}
