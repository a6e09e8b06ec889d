use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::adapters::{AnilistAdapter, JikanAdapter, WaifuImAdapter, WaifuItAdapter};
use crate::config::ResolverConfig;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::provider::{CharacterSource, GenderPolicy, SourceError};
use crate::{CharacterQuery, CharacterRecord, ProviderId};

/// A provider that was tried and did not yield an accepted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub provider: ProviderId,
    pub error: SourceError,
}

/// Successful resolution.
#[derive(Debug, Clone)]
pub struct ResolveSuccess {
    pub record: CharacterRecord,
    pub selected_source: ProviderId,
    pub source_chain: Vec<ProviderId>,
    pub failures: Vec<AttemptFailure>,
    pub latency_ms: u64,
}

/// Every provider in the chain failed; the caller reports not-found.
#[derive(Debug, Clone)]
pub struct ResolveFailure {
    pub source_chain: Vec<ProviderId>,
    pub failures: Vec<AttemptFailure>,
    pub latency_ms: u64,
}

pub type ResolveResult = Result<ResolveSuccess, ResolveFailure>;

/// One position in the fallback chain, as shown by the `providers` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainEntry {
    pub position: usize,
    pub provider: ProviderId,
    pub gender_policy: GenderPolicy,
}

struct ProviderSlot {
    source: Arc<dyn CharacterSource>,
    gender_policy: GenderPolicy,
}

/// Ordered fallback chain over character providers.
pub struct Resolver {
    slots: Vec<ProviderSlot>,
    max_field_chars: usize,
}

impl Resolver {
    /// Builds a resolver over `chain`, tried in the given order.
    pub fn new(
        chain: Vec<(Arc<dyn CharacterSource>, GenderPolicy)>,
        config: &ResolverConfig,
    ) -> Self {
        let slots = chain
            .into_iter()
            .map(|(source, gender_policy)| ProviderSlot {
                source,
                gender_policy,
            })
            .collect();
        Self {
            slots,
            max_field_chars: config.max_field_chars(),
        }
    }

    pub fn chain(&self) -> Vec<ChainEntry> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| ChainEntry {
                position: index + 1,
                provider: slot.source.id(),
                gender_policy: slot.gender_policy,
            })
            .collect()
    }

    /// Display truncation limit the reply renderer should apply.
    pub const fn max_field_chars(&self) -> usize {
        self.max_field_chars
    }

    /// Walks the chain in order and returns the first accepted record.
    ///
    /// Every failure (transport, shape, empty result, policy) is logged and
    /// recorded, then the next provider is tried. No provider is called twice.
    pub async fn resolve(&self, query: &CharacterQuery) -> ResolveResult {
        let started = Instant::now();
        let mut source_chain = Vec::with_capacity(self.slots.len());
        let mut failures = Vec::new();

        for slot in &self.slots {
            let provider = slot.source.id();
            source_chain.push(provider);
            tracing::debug!(%provider, policy = %slot.gender_policy, %query, "trying provider");

            let outcome = slot
                .source
                .attempt(query)
                .await
                .and_then(|record| slot.gender_policy.check(record));

            match outcome {
                Ok(record) => {
                    tracing::info!(
                        %provider,
                        name = %record.name,
                        failed_attempts = failures.len(),
                        "character resolved"
                    );
                    return Ok(ResolveSuccess {
                        record,
                        selected_source: provider,
                        source_chain,
                        failures,
                        latency_ms: elapsed_ms(started),
                    });
                }
                Err(error) => {
                    tracing::warn!(
                        %provider,
                        code = error.code(),
                        error = error.message(),
                        "provider failed, falling through"
                    );
                    failures.push(AttemptFailure { provider, error });
                }
            }
        }

        tracing::warn!(%query, attempts = failures.len(), "no provider resolved the character");
        Err(ResolveFailure {
            source_chain,
            failures,
            latency_ms: elapsed_ms(started),
        })
    }
}

/// Builder wiring the default AniList → Jikan → waifu.im → waifu.it chain.
///
/// AniList is the only provider filtered by gender unless a policy is
/// overridden with [`with_gender_policy`](ResolverBuilder::with_gender_policy).
///
/// ```rust,ignore
/// use waifudex_core::{ResolverBuilder, ResolverConfig, ProviderId};
///
/// let resolver = ResolverBuilder::new(ResolverConfig::default())
///     .with_provider_enabled(ProviderId::WaifuIt, false)
///     .build();
/// ```
pub struct ResolverBuilder {
    config: ResolverConfig,
    http_client: Option<Arc<dyn HttpClient>>,
    enabled: [bool; 4],
    policies: [GenderPolicy; 4],
}

impl ResolverBuilder {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            http_client: None,
            enabled: [true; 4],
            policies: ProviderId::ALL.map(default_gender_policy),
        }
    }

    /// Uses `http_client` for every adapter instead of a fresh reqwest client.
    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_provider_enabled(mut self, provider: ProviderId, enabled: bool) -> Self {
        self.enabled[slot_index(provider)] = enabled;
        self
    }

    pub fn with_gender_policy(mut self, provider: ProviderId, policy: GenderPolicy) -> Self {
        self.policies[slot_index(provider)] = policy;
        self
    }

    /// Applies `policy` to every provider.
    pub fn with_uniform_gender_policy(mut self, policy: GenderPolicy) -> Self {
        self.policies = [policy; 4];
        self
    }

    pub fn build(self) -> Resolver {
        let http_client = self.http_client.unwrap_or_else(|| {
            Arc::new(ReqwestHttpClient::new(self.config.user_agent())) as Arc<dyn HttpClient>
        });

        let mut chain: Vec<(Arc<dyn CharacterSource>, GenderPolicy)> = Vec::new();
        for provider in ProviderId::ALL {
            let index = slot_index(provider);
            if !self.enabled[index] {
                continue;
            }

            let source: Arc<dyn CharacterSource> = match provider {
                ProviderId::Anilist => Arc::new(AnilistAdapter::with_http_client(
                    http_client.clone(),
                    &self.config,
                )),
                ProviderId::Jikan => Arc::new(JikanAdapter::with_http_client(
                    http_client.clone(),
                    &self.config,
                )),
                ProviderId::WaifuIm => Arc::new(WaifuImAdapter::with_http_client(
                    http_client.clone(),
                    &self.config,
                )),
                ProviderId::WaifuIt => Arc::new(WaifuItAdapter::with_http_client(
                    http_client.clone(),
                    &self.config,
                )),
            };
            chain.push((source, self.policies[index]));
        }

        Resolver::new(chain, &self.config)
    }
}

/// The primary provider is filtered; fallbacks are trusted as returned.
pub const fn default_gender_policy(provider: ProviderId) -> GenderPolicy {
    match provider {
        ProviderId::Anilist => GenderPolicy::RequireFemale,
        ProviderId::Jikan | ProviderId::WaifuIm | ProviderId::WaifuIt => GenderPolicy::Trusted,
    }
}

const fn slot_index(provider: ProviderId) -> usize {
    match provider {
        ProviderId::Anilist => 0,
        ProviderId::Jikan => 1,
        ProviderId::WaifuIm => 2,
        ProviderId::WaifuIt => 3,
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AttemptFuture, SourceErrorKind};
    use crate::test_support::block_on;

    struct FixedSource {
        id: ProviderId,
        outcome: Result<CharacterRecord, SourceError>,
    }

    impl CharacterSource for FixedSource {
        fn id(&self) -> ProviderId {
            self.id
        }

        fn attempt<'a>(&'a self, _query: &'a CharacterQuery) -> AttemptFuture<'a> {
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn record(name: &str, gender: Option<&str>) -> CharacterRecord {
        CharacterRecord::new(name)
            .expect("valid name")
            .with_gender(gender.map(String::from))
    }

    fn fixed(
        id: ProviderId,
        outcome: Result<CharacterRecord, SourceError>,
        policy: GenderPolicy,
    ) -> (Arc<dyn CharacterSource>, GenderPolicy) {
        (Arc::new(FixedSource { id, outcome }), policy)
    }

    fn query(name: &str) -> CharacterQuery {
        CharacterQuery::parse(name).expect("valid query")
    }

    #[test]
    fn default_chain_filters_only_the_primary() {
        let resolver = ResolverBuilder::new(ResolverConfig::default()).build();

        let chain = resolver.chain();
        assert_eq!(
            chain.iter().map(|entry| entry.provider).collect::<Vec<_>>(),
            ProviderId::ALL.to_vec()
        );
        assert_eq!(chain[0].gender_policy, GenderPolicy::RequireFemale);
        assert!(chain[1..]
            .iter()
            .all(|entry| entry.gender_policy == GenderPolicy::Trusted));
    }

    #[test]
    fn disabled_providers_are_left_out_of_the_chain() {
        let resolver = ResolverBuilder::new(ResolverConfig::default())
            .with_provider_enabled(ProviderId::Jikan, false)
            .build();

        let providers = resolver
            .chain()
            .into_iter()
            .map(|entry| entry.provider)
            .collect::<Vec<_>>();
        assert_eq!(
            providers,
            vec![ProviderId::Anilist, ProviderId::WaifuIm, ProviderId::WaifuIt]
        );
        assert_eq!(resolver.chain()[1].position, 2);
    }

    #[test]
    fn policy_rejection_falls_through_to_next_provider() {
        let resolver = Resolver::new(
            vec![
                fixed(
                    ProviderId::Anilist,
                    Ok(record("Naruto Uzumaki", Some("Male"))),
                    GenderPolicy::RequireFemale,
                ),
                fixed(
                    ProviderId::Jikan,
                    Ok(record("Naruto Uzumaki", None)),
                    GenderPolicy::Trusted,
                ),
            ],
            &ResolverConfig::default(),
        );

        let success = block_on(resolver.resolve(&query("Naruto"))).expect("jikan should answer");

        assert_eq!(success.selected_source, ProviderId::Jikan);
        assert_eq!(success.failures.len(), 1);
        assert_eq!(
            success.failures[0].error.kind(),
            SourceErrorKind::PolicyRejected
        );
    }

    #[test]
    fn trusted_provider_is_not_filtered() {
        let resolver = Resolver::new(
            vec![fixed(
                ProviderId::WaifuIt,
                Ok(record("Naruto Uzumaki", Some("Male"))),
                GenderPolicy::Trusted,
            )],
            &ResolverConfig::default(),
        );

        let success = block_on(resolver.resolve(&query("Naruto"))).expect("trusted result");

        assert_eq!(success.record.gender, "Male");
    }

    #[test]
    fn empty_chain_reports_failure() {
        let resolver = Resolver::new(Vec::new(), &ResolverConfig::default());

        let failure = block_on(resolver.resolve(&query("Rem"))).expect_err("nothing to try");

        assert!(failure.source_chain.is_empty());
        assert!(failure.failures.is_empty());
    }
}
