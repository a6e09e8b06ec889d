//! # Waifudex Core
//!
//! Character lookup for the `waifu` chat command.
//!
//! ## Overview
//!
//! Given a character name, the [`Resolver`] walks a fixed chain of public
//! APIs and returns the first record that passes the provider's
//! [`GenderPolicy`]. The [`reply`] module turns that record into a
//! Discord-style embed, or into the not-found message when every provider
//! failed.
//!
//! | Position | Provider | Gender policy |
//! |----------|----------|---------------|
//! | 1 | AniList (GraphQL) | `require_female` |
//! | 2 | Jikan / MyAnimeList | `trusted` |
//! | 3 | waifu.im | `trusted` |
//! | 4 | waifu.it | `trusted` |
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters |
//! | [`command`] | `waifu` command definition and handler |
//! | [`config`] | Immutable resolver and bot configuration |
//! | [`discord`] | Reply delivery over Discord REST |
//! | [`domain`] | `CharacterQuery`, `CharacterRecord`, truncation |
//! | [`envelope`] | JSON output wrapper |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`provider`] | Adapter trait, `SourceError`, `GenderPolicy` |
//! | [`reply`] | Embed and text rendering |
//! | [`resolver`] | Fallback chain |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waifudex_core::{ResolverBuilder, ResolverConfig, WaifuCommand};
//!
//! #[tokio::main]
//! async fn main() {
//!     let command = WaifuCommand::new(ResolverBuilder::new(ResolverConfig::default()).build());
//!     let outcome = command.handle("Rem").await;
//!     println!("{}", outcome.reply.to_text());
//! }
//! ```

pub mod adapters;
pub mod command;
pub mod config;
pub mod discord;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod provider;
pub mod reply;
pub mod resolver;
pub mod source;

#[cfg(test)]
mod test_support;

pub use adapters::{AnilistAdapter, JikanAdapter, WaifuImAdapter, WaifuItAdapter};

pub use command::{CommandDefinition, CommandOutcome, WaifuCommand};

pub use config::{BotConfig, BotToken, ProviderEndpoints, ResolverConfig};

pub use discord::{DeliveryError, DiscordClient};

pub use domain::{
    truncate, CharacterQuery, CharacterRecord, DEFAULT_FIELD_LIMIT, MAX_QUERY_CHARS, UNKNOWN,
};

pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};

pub use error::ValidationError;

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpFuture, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};

pub use provider::{AttemptFuture, CharacterSource, GenderPolicy, SourceError, SourceErrorKind};

pub use reply::{CharacterEmbed, EmbedField, MessagePayload, Reply, NOT_FOUND_MESSAGE};

pub use resolver::{
    AttemptFailure, ChainEntry, ResolveFailure, ResolveResult, ResolveSuccess, Resolver,
    ResolverBuilder,
};

pub use source::ProviderId;
