//! Tests for the GitHub Markdown API client against a wiremock server.
//!
//! The client is blocking, so each call runs inside `spawn_blocking` while
//! wiremock drives the async server.

use md2html::render::{GithubRenderer, Render};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_markdown_payload_and_returns_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/markdown"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "mode": "markdown",
            "text": "# Hi"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Hi</h1>"))
        .mount(&server)
        .await;

    let endpoint = format!("{}/markdown", server.uri());
    let html = tokio::task::spawn_blocking(move || {
        GithubRenderer::with_endpoint(&endpoint)?.render("# Hi")
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(html, "<h1>Hi</h1>");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/markdown"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let endpoint = format!("{}/markdown", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        GithubRenderer::with_endpoint(&endpoint)?.render("# Hi")
    })
    .await
    .unwrap();

    assert!(result.is_err());
}

#[tokio::test]
async fn unreachable_endpoint_is_an_error() {
    // port is allocated then dropped, so nothing listens on it
    let server = MockServer::start().await;
    let endpoint = format!("{}/markdown", server.uri());
    drop(server);

    let result = tokio::task::spawn_blocking(move || {
        GithubRenderer::with_endpoint(&endpoint)?.render("# Hi")
    })
    .await
    .unwrap();

    assert!(result.is_err());
}
