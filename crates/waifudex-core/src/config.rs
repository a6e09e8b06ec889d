//! Immutable runtime configuration.
//!
//! # Environment Variables
//!
//! | Setting | Primary Env Var | Fallback Env Var |
//! |---------|-----------------|------------------|
//! | Bot token | `WAIFUDEX_BOT_TOKEN` | `DISCORD_TOKEN` |
//!
//! Everything else is set in code or through CLI flags.

use std::env;
use std::fmt::{Debug, Formatter};

use crate::{ValidationError, DEFAULT_FIELD_LIMIT};

pub const ANILIST_API_URL: &str = "https://graphql.anilist.co";
pub const JIKAN_API_URL: &str = "https://api.jikan.moe/v4/characters";
pub const WAIFU_IM_API_URL: &str = "https://api.waifu.im/sfw/waifu/";
pub const WAIFU_IT_API_URL: &str = "https://waifu.it/api/waifu/search";
pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";

const BOT_TOKEN_ENV: &str = "WAIFUDEX_BOT_TOKEN";
const BOT_TOKEN_FALLBACK_ENV: &str = "DISCORD_TOKEN";

/// Base URLs for every provider in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub anilist: String,
    pub jikan: String,
    pub waifu_im: String,
    pub waifu_it: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            anilist: String::from(ANILIST_API_URL),
            jikan: String::from(JIKAN_API_URL),
            waifu_im: String::from(WAIFU_IM_API_URL),
            waifu_it: String::from(WAIFU_IT_API_URL),
        }
    }
}

/// Settings shared by the resolver and its adapters.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    endpoints: ProviderEndpoints,
    timeout_ms: u64,
    max_field_chars: usize,
    user_agent: String,
    waifu_it_token: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoints: ProviderEndpoints::default(),
            timeout_ms: 10_000,
            max_field_chars: DEFAULT_FIELD_LIMIT,
            user_agent: String::from(concat!("waifudex/", env!("CARGO_PKG_VERSION"))),
            waifu_it_token: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the display truncation limit. Must leave room for the ellipsis.
    pub fn with_max_field_chars(mut self, max_field_chars: usize) -> Result<Self, ValidationError> {
        if max_field_chars <= 3 {
            return Err(ValidationError::InvalidFieldLimit {
                value: max_field_chars,
            });
        }
        self.max_field_chars = max_field_chars;
        Ok(self)
    }

    /// Overrides the `User-Agent` sent to every provider. Blank values keep the default.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.trim().is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    pub fn with_waifu_it_token(mut self, token: Option<String>) -> Self {
        self.waifu_it_token = token.filter(|token| !token.trim().is_empty());
        self
    }

    pub fn endpoints(&self) -> &ProviderEndpoints {
        &self.endpoints
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub const fn max_field_chars(&self) -> usize {
        self.max_field_chars
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn waifu_it_token(&self) -> Option<&str> {
        self.waifu_it_token.as_deref()
    }
}

impl Debug for ResolverConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("endpoints", &self.endpoints)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_field_chars", &self.max_field_chars)
            .field("user_agent", &self.user_agent)
            .field(
                "waifu_it_token",
                &self.waifu_it_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Bot credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token: String = token.into();
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_owned()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for BotToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Settings for posting replies to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: Option<BotToken>,
    pub api_base: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: String::from(DISCORD_API_URL),
        }
    }
}

impl BotConfig {
    /// Reads the bot token from `WAIFUDEX_BOT_TOKEN`, then `DISCORD_TOKEN`.
    pub fn from_env() -> Self {
        let token = env::var(BOT_TOKEN_ENV)
            .or_else(|_| env::var(BOT_TOKEN_FALLBACK_ENV))
            .ok()
            .and_then(BotToken::new);
        Self {
            token,
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = BotToken::new(token);
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
