mod common;

use std::sync::Arc;

use common::*;
use waifudex_core::{
    AnilistAdapter, CharacterQuery, CharacterSource, HttpClient, JikanAdapter, ProviderId,
    ResolverConfig, SourceErrorKind, WaifuImAdapter, WaifuItAdapter,
};

struct ProviderCase {
    id: ProviderId,
    url_prefix: &'static str,
    success_body: &'static str,
    query: &'static str,
}

fn provider_cases() -> Vec<ProviderCase> {
    vec![
        ProviderCase {
            id: ProviderId::Anilist,
            url_prefix: ANILIST,
            success_body: ANILIST_REM,
            query: "Rem",
        },
        ProviderCase {
            id: ProviderId::Jikan,
            url_prefix: JIKAN,
            success_body: JIKAN_NARUTO,
            query: "Naruto",
        },
        ProviderCase {
            id: ProviderId::WaifuIm,
            url_prefix: WAIFU_IM,
            success_body: WAIFU_IM_IMAGE,
            query: "Zero Two",
        },
        ProviderCase {
            id: ProviderId::WaifuIt,
            url_prefix: WAIFU_IT,
            success_body: WAIFU_IT_RESULT,
            query: "Megumin",
        },
    ]
}

fn adapter_for(id: ProviderId, client: Arc<dyn HttpClient>) -> Box<dyn CharacterSource> {
    let config = ResolverConfig::default();
    match id {
        ProviderId::Anilist => Box::new(AnilistAdapter::with_http_client(client, &config)),
        ProviderId::Jikan => Box::new(JikanAdapter::with_http_client(client, &config)),
        ProviderId::WaifuIm => Box::new(WaifuImAdapter::with_http_client(client, &config)),
        ProviderId::WaifuIt => Box::new(WaifuItAdapter::with_http_client(client, &config)),
    }
}

#[tokio::test]
async fn every_adapter_reports_its_own_id() {
    for case in provider_cases() {
        let adapter = adapter_for(case.id, Arc::new(ScriptedHttpClient::new()));
        assert_eq!(adapter.id(), case.id);
    }
}

#[tokio::test]
async fn every_adapter_yields_a_named_record_with_image() {
    for case in provider_cases() {
        let client = Arc::new(
            ScriptedHttpClient::new().respond(case.url_prefix, 200, case.success_body),
        );
        let adapter = adapter_for(case.id, client);
        let query = CharacterQuery::parse(case.query).expect("valid query");

        let record = adapter
            .attempt(&query)
            .await
            .unwrap_or_else(|error| panic!("provider '{}' failed: {error}", case.id));

        assert!(!record.name.is_empty(), "provider '{}': name", case.id);
        assert!(
            record.image_url.starts_with("https://"),
            "provider '{}': image url",
            case.id
        );
        assert!(!record.age.is_empty(), "provider '{}': age", case.id);
        assert!(!record.description.is_empty(), "provider '{}': description", case.id);
    }
}

#[tokio::test]
async fn transport_errors_are_unavailable_for_every_adapter() {
    for case in provider_cases() {
        let client = Arc::new(
            ScriptedHttpClient::new().fail(case.url_prefix, "connection reset by peer"),
        );
        let adapter = adapter_for(case.id, client);
        let query = CharacterQuery::parse(case.query).expect("valid query");

        let error = adapter.attempt(&query).await.expect_err("must fail");

        assert_eq!(error.kind(), SourceErrorKind::Unavailable, "provider '{}'", case.id);
        assert_eq!(error.code(), "provider.unavailable");
    }
}

#[tokio::test]
async fn server_errors_are_unavailable_for_every_adapter() {
    for case in provider_cases() {
        let client = Arc::new(
            ScriptedHttpClient::new().respond(case.url_prefix, 503, "Service Unavailable"),
        );
        let adapter = adapter_for(case.id, client);
        let query = CharacterQuery::parse(case.query).expect("valid query");

        let error = adapter.attempt(&query).await.expect_err("must fail");

        assert_eq!(error.kind(), SourceErrorKind::Unavailable, "provider '{}'", case.id);
        assert!(error.message().contains("503"), "provider '{}'", case.id);
    }
}

#[tokio::test]
async fn non_json_bodies_are_malformed_for_every_adapter() {
    for case in provider_cases() {
        let client = Arc::new(
            ScriptedHttpClient::new().respond(case.url_prefix, 200, "<!DOCTYPE html>"),
        );
        let adapter = adapter_for(case.id, client);
        let query = CharacterQuery::parse(case.query).expect("valid query");

        let error = adapter.attempt(&query).await.expect_err("must fail");

        assert_eq!(error.kind(), SourceErrorKind::Malformed, "provider '{}'", case.id);
    }
}

#[tokio::test]
async fn rest_adapters_percent_encode_the_query() {
    for case in provider_cases()
        .into_iter()
        .filter(|case| case.id != ProviderId::Anilist)
    {
        let client = Arc::new(ScriptedHttpClient::new().respond(case.url_prefix, 200, "{}"));
        let adapter = adapter_for(case.id, client.clone());
        let query = CharacterQuery::parse("Hatsune Miku & Co").expect("valid query");

        let _ = adapter.attempt(&query).await;

        let url = &client.recorded_requests()[0].url;
        assert!(
            url.ends_with("=Hatsune%20Miku%20%26%20Co"),
            "provider '{}' sent {url}",
            case.id
        );
    }
}

#[tokio::test]
async fn custom_endpoints_and_timeout_are_honoured() {
    let endpoints = waifudex_core::ProviderEndpoints {
        jikan: String::from("http://localhost:8080/v4/characters"),
        ..waifudex_core::ProviderEndpoints::default()
    };
    let config = ResolverConfig::default()
        .with_endpoints(endpoints)
        .with_timeout_ms(1_500);
    let client = Arc::new(
        ScriptedHttpClient::new().respond("http://localhost:8080", 200, JIKAN_NARUTO),
    );
    let adapter = JikanAdapter::with_http_client(client.clone(), &config);
    let query = CharacterQuery::parse("Naruto").expect("valid query");

    adapter.attempt(&query).await.expect("local jikan answers");

    let request = &client.recorded_requests()[0];
    assert_eq!(request.url, "http://localhost:8080/v4/characters?q=Naruto");
    assert_eq!(request.timeout_ms, 1_500);
}
