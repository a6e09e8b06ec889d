use std::sync::Arc;

use serde::Deserialize;

use super::{decode, send, validation_to_error};
use crate::config::ResolverConfig;
use crate::http_client::{HttpClient, HttpRequest};
use crate::provider::{AttemptFuture, CharacterSource, SourceError};
use crate::{CharacterQuery, CharacterRecord, ProviderId};

/// Second fallback: waifu.im image search. Supplies an image only; the
/// display name is the query itself.
#[derive(Clone)]
pub struct WaifuImAdapter {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl WaifuImAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &ResolverConfig) -> Self {
        Self {
            http_client,
            endpoint: config.endpoints().waifu_im.clone(),
            timeout_ms: config.timeout_ms(),
        }
    }

    async fn lookup(&self, query: &CharacterQuery) -> Result<CharacterRecord, SourceError> {
        let url = format!("{}?query={}", self.endpoint, query.url_encoded());
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = send(self.http_client.as_ref(), ProviderId::WaifuIm, request).await?;
        let payload: WaifuImResponse = decode(ProviderId::WaifuIm, &response.body)?;

        let image = payload
            .images
            .and_then(|images| images.into_iter().next())
            .ok_or_else(|| {
                SourceError::not_found(format!("waifu.im returned no images for '{query}'"))
            })?;

        let record = CharacterRecord::new(query.as_str())
            .map_err(|error| validation_to_error(ProviderId::WaifuIm, error))?
            .with_image_url(Some(image.url));

        Ok(record)
    }
}

impl CharacterSource for WaifuImAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::WaifuIm
    }

    fn attempt<'a>(&'a self, query: &'a CharacterQuery) -> AttemptFuture<'a> {
        Box::pin(self.lookup(query))
    }
}

#[derive(Debug, Deserialize)]
struct WaifuImResponse {
    images: Option<Vec<WaifuImImage>>,
}

#[derive(Debug, Deserialize)]
struct WaifuImImage {
    url: String,
}
