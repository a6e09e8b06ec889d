use thiserror::Error;

/// Validation and contract errors exposed by `waifudex-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("character name cannot be empty")]
    EmptyQuery,
    #[error("character name length {len} exceeds max {max}")]
    QueryTooLong { len: usize, max: usize },

    #[error("character record must have a display name")]
    EmptyName,

    #[error("invalid provider '{value}', expected one of anilist, jikan, waifu_im, waifu_it")]
    InvalidProvider { value: String },

    #[error("field limit must be greater than 3 characters, got {value}")]
    InvalidFieldLimit { value: usize },

    #[error("channel id must be a numeric snowflake: '{value}'")]
    InvalidChannelId { value: String },
}
