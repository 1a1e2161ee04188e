// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use kanji_etym::config::settings::Settings;
use kanji_etym::engines::reqwest_engine::ReqwestEngine;
use kanji_etym::engines::resilient_fetcher::ResilientFetcher;
use kanji_etym::utils::retry_policy::RetryPolicy;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ResilientFetcher {
    let settings = Settings::defaults().unwrap();
    ResilientFetcher::new(Arc::new(ReqwestEngine::new(&settings.http).unwrap()))
}

#[tokio::test]
async fn test_recovers_from_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kanji32.html"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kanji32.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("休", "text/html; charset=utf-8"))
        .expect(1)
        .mount(&server)
        .await;

    let text = fetcher()
        .fetch_text(
            &format!("{}/kanji32.html", server.uri()),
            &RetryPolicy::immediate(5),
        )
        .await;

    assert_eq!(text.as_deref(), Some("休"));
}

#[tokio::test]
async fn test_gives_up_after_exactly_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .expect(10)
        .mount(&server)
        .await;

    let bytes = fetcher()
        .fetch_bytes(
            &format!("{}/down", server.uri()),
            &RetryPolicy::immediate(10),
        )
        .await;

    assert!(bytes.is_none());
}
