//! Minimal Discord REST delivery for command replies.
//!
//! Only the "create message" call is implemented. Gateway sessions and
//! command registration are handled elsewhere.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{BotConfig, BotToken};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::reply::Reply;
use crate::ValidationError;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("no bot token configured; set WAIFUDEX_BOT_TOKEN or DISCORD_TOKEN")]
    MissingToken,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to encode message payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("discord transport error: {0}")]
    Transport(String),

    #[error("discord rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Posts rendered replies to a channel with the bot credential.
pub struct DiscordClient {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    api_base: String,
}

impl DiscordClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        token: &BotToken,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            auth: HttpAuth::BotToken(token.expose().to_owned()),
            api_base: api_base.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn from_config(
        http_client: Arc<dyn HttpClient>,
        config: &BotConfig,
    ) -> Result<Self, DeliveryError> {
        let token = config.token.as_ref().ok_or(DeliveryError::MissingToken)?;
        Ok(Self::new(http_client, token, config.api_base.clone()))
    }

    pub async fn send_reply(&self, channel_id: &str, reply: &Reply) -> Result<(), DeliveryError> {
        let channel_id = validate_channel_id(channel_id)?;
        let url = format!("{}/channels/{channel_id}/messages", self.api_base);
        let request = HttpRequest::post(url)
            .with_json_body(&reply.to_message_payload())?
            .with_auth(&self.auth);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| DeliveryError::Transport(error.message().to_owned()))?;

        if !response.is_success() {
            return Err(DeliveryError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        tracing::info!(channel_id, found = reply.is_found(), "reply delivered");
        Ok(())
    }
}

fn validate_channel_id(channel_id: &str) -> Result<&str, ValidationError> {
    let trimmed = channel_id.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::InvalidChannelId {
            value: channel_id.to_owned(),
        });
    }
    Ok(trimmed)
}
