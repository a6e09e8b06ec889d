//! Reply rendering.
//!
//! A resolved [`CharacterRecord`] becomes a [`CharacterEmbed`]: a title that
//! links to the source page, a hero image, and three or four labeled fields.
//! A failed resolution becomes the fixed [`NOT_FOUND_MESSAGE`].
//!
//! All field values pass through [`truncate`] so the payload stays within
//! Discord's per-field limits.

use serde::{Deserialize, Serialize};

use crate::resolver::ResolveResult;
use crate::{truncate, CharacterRecord, UNKNOWN};

pub const NOT_FOUND_MESSAGE: &str =
    "❌ Waifu not found or not a female character! Please check the spelling and try again.";

/// Discord's `Color.pink()`.
pub const EMBED_COLOR: u32 = 0xE9_1E_63;

const TITLE_LIMIT: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
}

/// Rich reply in Discord's embed object shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEmbed {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub color: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    pub fields: Vec<EmbedField>,
}

impl CharacterEmbed {
    pub fn from_record(record: &CharacterRecord, max_field_chars: usize) -> Self {
        let mut fields = vec![
            EmbedField {
                name: String::from("Age"),
                value: truncate(&record.age, max_field_chars),
                inline: true,
            },
            EmbedField {
                name: String::from("Gender"),
                value: truncate(&record.gender, max_field_chars),
                inline: true,
            },
            EmbedField {
                name: String::from("Description"),
                value: truncate(&record.description, max_field_chars),
                inline: false,
            },
        ];

        if !record.works.is_empty() {
            fields.push(EmbedField {
                name: String::from("Anime Appearances"),
                value: truncate(&record.works.join(", "), max_field_chars),
                inline: false,
            });
        }

        let image = (!record.image_url.is_empty()).then(|| EmbedImage {
            url: record.image_url.clone(),
        });

        Self {
            title: truncate(&record.name, TITLE_LIMIT),
            url: record.site_url.clone(),
            color: EMBED_COLOR,
            image,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Body of a Discord "create message" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<CharacterEmbed>,
}

/// What the `waifu` command answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Embed(CharacterEmbed),
    NotFound,
}

impl Reply {
    pub fn from_resolution(result: &ResolveResult, max_field_chars: usize) -> Self {
        match result {
            Ok(success) => Self::Embed(CharacterEmbed::from_record(
                &success.record,
                max_field_chars,
            )),
            Err(_) => Self::NotFound,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Embed(_))
    }

    pub fn to_message_payload(&self) -> MessagePayload {
        match self {
            Self::Embed(embed) => MessagePayload {
                content: None,
                embeds: vec![embed.clone()],
            },
            Self::NotFound => MessagePayload {
                content: Some(String::from(NOT_FOUND_MESSAGE)),
                embeds: Vec::new(),
            },
        }
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let embed = match self {
            Self::Embed(embed) => embed,
            Self::NotFound => return String::from(NOT_FOUND_MESSAGE),
        };

        let image = embed
            .image
            .as_ref()
            .map(|image| image.url.as_str())
            .unwrap_or(UNKNOWN);

        let mut lines = vec![embed.title.clone()];
        if !embed.url.is_empty() {
            lines.push(embed.url.clone());
        }
        lines.push(format!("Image: {image}"));

        for field in &embed.fields {
            if field.inline {
                lines.push(format!("{}: {}", field.name, field.value));
            } else {
                lines.push(format!("\n{}:\n{}", field.name, field.value));
            }
        }
        lines.join("\n")
    }
}
