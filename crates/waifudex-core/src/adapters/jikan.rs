use std::sync::Arc;

use serde::Deserialize;

use super::{decode, send, validation_to_error};
use crate::config::ResolverConfig;
use crate::http_client::{HttpClient, HttpRequest};
use crate::provider::{AttemptFuture, CharacterSource, SourceError};
use crate::{CharacterQuery, CharacterRecord, ProviderId};

/// First fallback: Jikan (unofficial MyAnimeList REST API) character search.
///
/// Only an exact, case-insensitive name match with a MAL id is accepted; the
/// search endpoint is fuzzy and would otherwise return unrelated characters.
#[derive(Clone)]
pub struct JikanAdapter {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl JikanAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &ResolverConfig) -> Self {
        Self {
            http_client,
            endpoint: config.endpoints().jikan.clone(),
            timeout_ms: config.timeout_ms(),
        }
    }

    async fn lookup(&self, query: &CharacterQuery) -> Result<CharacterRecord, SourceError> {
        let url = format!("{}?q={}", self.endpoint, query.url_encoded());
        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);

        let response = send(self.http_client.as_ref(), ProviderId::Jikan, request).await?;
        let payload: JikanSearchResponse = decode(ProviderId::Jikan, &response.body)?;

        let character = payload
            .data
            .into_iter()
            .find(|character| character.mal_id.is_some() && query.matches_name(&character.name))
            .ok_or_else(|| {
                SourceError::not_found(format!("jikan has no exact match for '{query}'"))
            })?;

        normalize_character(character)
    }
}

impl CharacterSource for JikanAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Jikan
    }

    fn attempt<'a>(&'a self, query: &'a CharacterQuery) -> AttemptFuture<'a> {
        Box::pin(self.lookup(query))
    }
}

fn normalize_character(character: JikanCharacter) -> Result<CharacterRecord, SourceError> {
    let image_url = character
        .images
        .and_then(|images| images.jpg)
        .and_then(|jpg| jpg.image_url)
        .ok_or_else(|| {
            SourceError::malformed(format!(
                "jikan character '{}' has no jpg image",
                character.name
            ))
        })?;

    let record = CharacterRecord::new(character.name)
        .map_err(|error| validation_to_error(ProviderId::Jikan, error))?
        .with_description(character.about)
        .with_image_url(Some(image_url))
        .with_site_url(character.url);

    Ok(record)
}

#[derive(Debug, Deserialize)]
struct JikanSearchResponse {
    #[serde(default)]
    data: Vec<JikanCharacter>,
}

#[derive(Debug, Deserialize)]
struct JikanCharacter {
    mal_id: Option<u64>,
    #[serde(default)]
    name: String,
    about: Option<String>,
    images: Option<JikanImages>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JikanImages {
    jpg: Option<JikanImage>,
}

#[derive(Debug, Deserialize)]
struct JikanImage {
    image_url: Option<String>,
}
