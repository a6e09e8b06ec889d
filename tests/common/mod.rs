#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use waifudex_core::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ResolverBuilder, ResolverConfig,
    WaifuCommand,
};

pub const ANILIST: &str = "https://graphql.anilist.co";
pub const JIKAN: &str = "https://api.jikan.moe";
pub const WAIFU_IM: &str = "https://api.waifu.im";
pub const WAIFU_IT: &str = "https://waifu.it";

pub const ANILIST_REM: &str = r#"{"data":{"Character":{
    "name":{"full":"Rem"},
    "age":"17",
    "gender":"Female",
    "dateOfBirth":{"year":null,"month":2,"day":2},
    "description":"Rem is one of the twin maids working in Roswaal L. Mathers' mansion.",
    "image":{"large":"https://s4.anilist.co/file/anilistcdn/character/large/rem.png"},
    "siteUrl":"https://anilist.co/character/88575",
    "media":{"nodes":[{"title":{"romaji":"Re:Zero kara Hajimeru Isekai Seikatsu"}}]}
}}}"#;

pub const ANILIST_NARUTO: &str = r#"{"data":{"Character":{
    "name":{"full":"Naruto Uzumaki"},
    "age":"12-13",
    "gender":"Male",
    "description":"Naruto is a ninja of Konohagakure.",
    "image":{"large":"https://s4.anilist.co/file/anilistcdn/character/large/naruto.png"},
    "siteUrl":"https://anilist.co/character/17",
    "media":{"nodes":[{"title":{"romaji":"NARUTO"}}]}
}}}"#;

pub const ANILIST_NOT_FOUND: &str = r#"{
    "errors":[{"message":"Not Found.","status":404,"locations":[{"line":2,"column":3}]}],
    "data":{"Character":null}
}"#;

pub const JIKAN_NARUTO: &str = r#"{"data":[{
    "mal_id":17,
    "name":"Naruto",
    "about":"Naruto Uzumaki is the title character.",
    "images":{"jpg":{"image_url":"https://cdn.myanimelist.net/images/characters/2/284121.jpg"}},
    "url":"https://myanimelist.net/character/17/Naruto_Uzumaki"
}]}"#;

pub const JIKAN_EMPTY: &str = r#"{"pagination":{"has_next_page":false},"data":[]}"#;

pub const WAIFU_IM_IMAGE: &str = r#"{"images":[{"url":"https://cdn.waifu.im/7581.jpg"}]}"#;

pub const WAIFU_IM_EMPTY: &str = r#"{"detail":"No image found matching the criteria given."}"#;

pub const WAIFU_IT_RESULT: &str =
    r#"{"results":[{"name":"Megumin","image_url":"https://waifu.it/images/megumin.png"}]}"#;

pub const WAIFU_IT_EMPTY: &str = r#"{"results":[]}"#;

/// In-memory transport answering by URL prefix and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Vec<(String, Result<HttpResponse, HttpError>)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url_prefix: &str, status: u16, body: &str) -> Self {
        self.routes
            .push((url_prefix.to_owned(), Ok(HttpResponse::new(status, body))));
        self
    }

    pub fn fail(mut self, url_prefix: &str, message: &str) -> Self {
        self.routes
            .push((url_prefix.to_owned(), Err(HttpError::new(message))));
        self
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    /// Hosts contacted, in call order.
    pub fn called_prefixes(&self) -> Vec<&'static str> {
        self.recorded_requests()
            .iter()
            .filter_map(|request| {
                [ANILIST, JIKAN, WAIFU_IM, WAIFU_IT]
                    .into_iter()
                    .find(|prefix| request.url.starts_with(prefix))
            })
            .collect()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        let response = self
            .routes
            .iter()
            .find(|(prefix, _)| request.url.starts_with(prefix.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| {
                Err(HttpError::new(format!(
                    "no scripted route for {}",
                    request.url
                )))
            });
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

/// A transport where every provider is down or empty.
pub fn all_providers_empty() -> ScriptedHttpClient {
    ScriptedHttpClient::new()
        .respond(ANILIST, 404, ANILIST_NOT_FOUND)
        .respond(JIKAN, 200, JIKAN_EMPTY)
        .respond(WAIFU_IM, 200, WAIFU_IM_EMPTY)
        .fail(WAIFU_IT, "connection refused")
}

pub fn command_with(client: Arc<ScriptedHttpClient>) -> WaifuCommand {
    WaifuCommand::new(
        ResolverBuilder::new(ResolverConfig::default())
            .with_http_client(client)
            .build(),
    )
}
