use std::sync::Arc;

use serde::Deserialize;

use super::{decode, send, validation_to_error};
use crate::config::ResolverConfig;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::provider::{AttemptFuture, CharacterSource, SourceError};
use crate::{CharacterQuery, CharacterRecord, ProviderId};

/// Last fallback: waifu.it name search.
#[derive(Clone)]
pub struct WaifuItAdapter {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
    auth: HttpAuth,
}

impl WaifuItAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &ResolverConfig) -> Self {
        // waifu.it expects the raw token in `Authorization`, without a scheme.
        let auth = match config.waifu_it_token() {
            Some(token) => HttpAuth::Header {
                name: String::from("Authorization"),
                value: token.to_owned(),
            },
            None => HttpAuth::None,
        };

        Self {
            http_client,
            endpoint: config.endpoints().waifu_it.clone(),
            timeout_ms: config.timeout_ms(),
            auth,
        }
    }

    async fn lookup(&self, query: &CharacterQuery) -> Result<CharacterRecord, SourceError> {
        let url = format!("{}?q={}", self.endpoint, query.url_encoded());
        let request = HttpRequest::get(url)
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);

        let response = send(self.http_client.as_ref(), ProviderId::WaifuIt, request).await?;
        let payload: WaifuItResponse = decode(ProviderId::WaifuIt, &response.body)?;

        let result = payload
            .results
            .into_iter()
            .next()
            .ok_or_else(|| {
                SourceError::not_found(format!("waifu.it has no results for '{query}'"))
            })?;

        let record = CharacterRecord::new(result.name)
            .map_err(|error| validation_to_error(ProviderId::WaifuIt, error))?
            .with_image_url(Some(result.image_url));

        Ok(record)
    }
}

impl CharacterSource for WaifuItAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::WaifuIt
    }

    fn attempt<'a>(&'a self, query: &'a CharacterQuery) -> AttemptFuture<'a> {
        Box::pin(self.lookup(query))
    }
}

#[derive(Debug, Deserialize)]
struct WaifuItResponse {
    #[serde(default)]
    results: Vec<WaifuItResult>,
}

#[derive(Debug, Deserialize)]
struct WaifuItResult {
    name: String,
    image_url: String,
}
