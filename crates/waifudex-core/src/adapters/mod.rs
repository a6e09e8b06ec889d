mod anilist;
mod jikan;
mod waifu_im;
mod waifu_it;

pub use anilist::AnilistAdapter;
pub use jikan::JikanAdapter;
pub use waifu_im::WaifuImAdapter;
pub use waifu_it::WaifuItAdapter;

use serde::de::DeserializeOwned;

use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::provider::SourceError;
use crate::{ProviderId, ValidationError};

/// Sends `request` and maps transport failures and error statuses onto [`SourceError`].
async fn send(
    http_client: &dyn HttpClient,
    provider: ProviderId,
    request: HttpRequest,
) -> Result<HttpResponse, SourceError> {
    let response = http_client.execute(request).await.map_err(|error| {
        SourceError::unavailable(format!("{provider} transport error: {}", error.message()))
    })?;

    match response.status {
        status if (200..300).contains(&status) => Ok(response),
        404 => Err(SourceError::not_found(format!(
            "{provider} returned status 404"
        ))),
        status => Err(SourceError::unavailable(format!(
            "{provider} returned status {status}"
        ))),
    }
}

fn decode<T: DeserializeOwned>(provider: ProviderId, body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|error| {
        SourceError::malformed(format!("failed to parse {provider} response: {error}"))
    })
}

fn validation_to_error(provider: ProviderId, error: ValidationError) -> SourceError {
    SourceError::malformed(format!("{provider} record is unusable: {error}"))
}
