#![cfg(feature = "server")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use rs_siteprofile::server::{router, AppState};
use rs_siteprofile::{Error, Fetch, FetchedPage, Options, ResponseHeaders, Result};
use serde_json::Value;
use tower::ServiceExt;

struct OnePage;

#[async_trait]
impl Fetch for OnePage {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        if url == "https://acme.test/" {
            Ok(FetchedPage {
                url: url.to_string(),
                body: r#"<title>Acme</title><a href="mailto:info@acme.test">Mail</a>"#.to_string(),
                headers: ResponseHeaders::new(),
            })
        } else {
            Err(Error::Fetch(format!("connection refused: {url}")))
        }
    }
}

fn app() -> axum::Router {
    router(AppState {
        fetcher: Arc::new(OnePage),
        options: Options::default(),
    })
}

async fn post_scrape(body: &str) -> (StatusCode, Value) {
    send_scrape(body, Some("application/json")).await
}

async fn send_scrape(body: &str, content_type: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/api/scrape");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("valid request");

    let response = app().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body reads");
    let json = serde_json::from_slice(&bytes).expect("JSON body");
    (status, json)
}

#[tokio::test]
async fn scrape_returns_record() {
    let (status, json) = post_scrape(r#"{"url":"https://acme.test/"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["websiteTitle"], "Acme");
    assert_eq!(json["email"], "info@acme.test");
    assert_eq!(json["businessType"], "Unknown");
}

#[tokio::test]
async fn missing_url_is_bad_request() {
    let (status, json) = post_scrape("{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "URL is required");

    let (status, _) = post_scrape(r#"{"url":""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn body_without_json_content_type_is_bad_request() {
    let (status, json) = send_scrape(r#"{"url":"https://acme.test/"}"#, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some_and(|e| e.starts_with("Invalid request body")));
}

#[tokio::test]
async fn mistyped_url_field_is_bad_request() {
    let (status, json) = post_scrape(r#"{"url": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, json) = post_scrape("not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn fetch_failure_is_server_error() {
    let (status, json) = post_scrape(r#"{"url":"https://down.test/"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "connection refused: https://down.test/");
}

#[tokio::test]
async fn health_is_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("valid request");
    let response = app().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body reads");
    let json: Value = serde_json::from_slice(&bytes).expect("JSON body");
    assert_eq!(json["status"], "ok");
}
