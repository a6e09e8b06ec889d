//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CharacterQuery`] | Validated free-text character name |
//! | [`CharacterRecord`] | Normalized result of any provider |
//! | [`truncate`] | Character-safe display truncation |

mod query;
mod record;
mod text;

pub use query::{CharacterQuery, MAX_QUERY_CHARS};
pub use record::{CharacterRecord, UNKNOWN};
pub use text::{truncate, DEFAULT_FIELD_LIMIT};
