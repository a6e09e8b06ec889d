use serde::{Deserialize, Serialize};

use crate::command::CommandOutcome;
use crate::resolver::AttemptFailure;
use crate::ProviderId;

/// Standard wrapper for machine-readable `waifudex` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<EnvelopeError>,
}

impl<T> Envelope<T> {
    /// Wraps `data` with the trail recorded in `outcome`.
    pub fn from_outcome(outcome: &CommandOutcome, data: T) -> Self {
        let mut meta = EnvelopeMeta::new(
            outcome.query.clone(),
            outcome.source_chain.clone(),
            outcome.selected_source,
            outcome.latency_ms,
        );

        if let Some(error) = &outcome.input_error {
            meta.push_warning(format!("input rejected: {error}"));
        } else {
            match outcome.selected_source {
                Some(provider) if !outcome.failures.is_empty() => {
                    meta.push_warning(format!(
                        "provider fallback succeeded with '{provider}' after {} failed attempt(s)",
                        outcome.failures.len()
                    ));
                }
                Some(_) => {}
                None => meta.push_warning(format!(
                    "all providers failed for '{}'",
                    outcome.query
                )),
            }
        }

        let errors = outcome
            .failures
            .iter()
            .map(EnvelopeError::from_failure)
            .collect();
        Self { meta, data, errors }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub query: String,
    pub source_chain: Vec<ProviderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_source: Option<ProviderId>,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(
        query: impl Into<String>,
        source_chain: Vec<ProviderId>,
        selected_source: Option<ProviderId>,
        latency_ms: u64,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            query: query.into(),
            source_chain,
            selected_source,
            latency_ms,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// One provider failure, as reported in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ProviderId>,
}

impl EnvelopeError {
    pub fn from_failure(failure: &AttemptFailure) -> Self {
        Self {
            code: failure.error.code().to_owned(),
            message: failure.error.message().to_owned(),
            source: Some(failure.provider),
        }
    }
}
