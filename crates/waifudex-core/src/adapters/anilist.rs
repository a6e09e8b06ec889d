use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{decode, send, validation_to_error};
use crate::config::ResolverConfig;
use crate::http_client::{HttpClient, HttpRequest};
use crate::provider::{AttemptFuture, CharacterSource, SourceError};
use crate::{CharacterQuery, CharacterRecord, ProviderId};

const CHARACTER_QUERY: &str = r#"
query ($search: String) {
  Character(search: $search) {
    name {
      full
    }
    age
    gender
    dateOfBirth {
      year
      month
      day
    }
    description
    image {
      large
    }
    siteUrl
    media {
      nodes {
        title {
          romaji
        }
      }
    }
  }
}
"#;

/// Primary provider: AniList GraphQL `Character(search:)` lookup.
#[derive(Clone)]
pub struct AnilistAdapter {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl AnilistAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &ResolverConfig) -> Self {
        Self {
            http_client,
            endpoint: config.endpoints().anilist.clone(),
            timeout_ms: config.timeout_ms(),
        }
    }

    async fn lookup(&self, query: &CharacterQuery) -> Result<CharacterRecord, SourceError> {
        let payload = GraphqlRequest {
            query: CHARACTER_QUERY,
            variables: SearchVariables {
                search: query.as_str(),
            },
        };
        let request = HttpRequest::post(self.endpoint.as_str())
            .with_json_body(&payload)
            .map_err(|error| {
                SourceError::invalid_request(format!("failed to encode anilist query: {error}"))
            })?
            .with_timeout_ms(self.timeout_ms);

        let response = send(self.http_client.as_ref(), ProviderId::Anilist, request).await?;
        let envelope: AnilistResponse = decode(ProviderId::Anilist, &response.body)?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SourceError::not_found(format!(
                "anilist reported errors: {messages}"
            )));
        }

        let character = envelope
            .data
            .and_then(|data| data.character)
            .ok_or_else(|| {
                SourceError::not_found(format!("anilist has no character matching '{query}'"))
            })?;

        normalize_character(character)
    }
}

impl CharacterSource for AnilistAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Anilist
    }

    fn attempt<'a>(&'a self, query: &'a CharacterQuery) -> AttemptFuture<'a> {
        Box::pin(self.lookup(query))
    }
}

fn normalize_character(character: AnilistCharacter) -> Result<CharacterRecord, SourceError> {
    let name = character
        .name
        .and_then(|name| name.full)
        .unwrap_or_default();
    let works = character
        .media
        .map(|media| media.nodes)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|node| node.title.and_then(|title| title.romaji))
        .collect::<Vec<_>>();

    let record = CharacterRecord::new(name)
        .map_err(|error| validation_to_error(ProviderId::Anilist, error))?
        .with_age(character.age)
        .with_gender(character.gender)
        .with_description(character.description)
        .with_image_url(character.image.and_then(|image| image.large))
        .with_site_url(character.site_url)
        .with_works(works);

    Ok(record)
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'static str,
    variables: SearchVariables<'a>,
}

#[derive(Debug, Serialize)]
struct SearchVariables<'a> {
    search: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnilistResponse {
    #[serde(default)]
    data: Option<AnilistData>,
    #[serde(default)]
    errors: Option<Vec<AnilistError>>,
}

#[derive(Debug, Deserialize)]
struct AnilistData {
    #[serde(rename = "Character")]
    character: Option<AnilistCharacter>,
}

#[derive(Debug, Deserialize)]
struct AnilistError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnilistCharacter {
    name: Option<AnilistName>,
    age: Option<String>,
    gender: Option<String>,
    description: Option<String>,
    image: Option<AnilistImage>,
    site_url: Option<String>,
    media: Option<AnilistMedia>,
}

#[derive(Debug, Deserialize)]
struct AnilistName {
    full: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnilistImage {
    large: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnilistMedia {
    #[serde(default)]
    nodes: Vec<AnilistMediaNode>,
}

#[derive(Debug, Deserialize)]
struct AnilistMediaNode {
    title: Option<AnilistTitle>,
}

#[derive(Debug, Deserialize)]
struct AnilistTitle {
    romaji: Option<String>,
}
