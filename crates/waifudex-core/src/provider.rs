//! Provider contract and error types.
//!
//! Every upstream character API is wrapped in an adapter implementing
//! [`CharacterSource`]. An adapter either yields a normalized
//! [`CharacterRecord`] or a [`SourceError`] explaining why the resolver
//! should move on to the next provider.
//!
//! | Kind | Meaning |
//! |------|---------|
//! | `Unavailable` | transport failure or non-2xx status |
//! | `Malformed` | body did not match the expected shape |
//! | `NotFound` | provider answered but had no matching character |
//! | `PolicyRejected` | record failed the provider's [`GenderPolicy`] |
//! | `InvalidRequest` | query could not be sent |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{CharacterQuery, CharacterRecord, ProviderId};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    Malformed,
    NotFound,
    PolicyRejected,
    InvalidRequest,
}

/// Structured provider error recorded by the resolver's fallback walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unavailable, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Malformed, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NotFound, message)
    }

    pub fn policy_rejected(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::PolicyRejected, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::InvalidRequest, message)
    }

    fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "provider.unavailable",
            SourceErrorKind::Malformed => "provider.malformed",
            SourceErrorKind::NotFound => "provider.not_found",
            SourceErrorKind::PolicyRejected => "provider.policy_rejected",
            SourceErrorKind::InvalidRequest => "provider.invalid_request",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Whether a provider's records must pass the gender filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    /// Accept only records whose reported gender is "female"; unreported gender passes.
    RequireFemale,
    /// Accept records as returned.
    Trusted,
}

impl GenderPolicy {
    pub fn admits(self, record: &CharacterRecord) -> bool {
        match self {
            Self::Trusted => true,
            Self::RequireFemale => {
                !record.reports_gender() || record.gender.eq_ignore_ascii_case("female")
            }
        }
    }

    /// Checks `record` and turns a refusal into a `PolicyRejected` error.
    pub fn check(self, record: CharacterRecord) -> Result<CharacterRecord, SourceError> {
        if self.admits(&record) {
            Ok(record)
        } else {
            Err(SourceError::policy_rejected(format!(
                "'{}' is reported as '{}', not female",
                record.name, record.gender
            )))
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequireFemale => "require_female",
            Self::Trusted => "trusted",
        }
    }
}

impl Display for GenderPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type AttemptFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CharacterRecord, SourceError>> + Send + 'a>>;

/// Provider adapter contract.
///
/// `attempt` performs one lookup. It must not retry; fallback is the
/// resolver's job.
pub trait CharacterSource: Send + Sync {
    fn id(&self) -> ProviderId;

    fn attempt<'a>(&'a self, query: &'a CharacterQuery) -> AttemptFuture<'a>;
}
