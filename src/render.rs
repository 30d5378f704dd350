use anyhow::Context;
use log::error;
use serde::Serialize;

pub const GITHUB_MARKDOWN_API: &str = "https://api.github.com/markdown";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("md2html/", env!("CARGO_PKG_VERSION"));

/// Markdown-to-HTML conversion seam. The production implementation talks to
/// the GitHub Markdown API; tests substitute a stub.
pub trait Render {
    fn render(&self, markdown: &str) -> anyhow::Result<String>;
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    mode: &'static str,
    text: &'a str,
}

/// Client for the GitHub Markdown rendering endpoint. One request per run,
/// no retries.
pub struct GithubRenderer {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GithubRenderer {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_endpoint(GITHUB_MARKDOWN_API)
    }

    pub fn with_endpoint(endpoint: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("while building the HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl Render for GithubRenderer {
    fn render(&self, markdown: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RenderRequest {
                mode: "markdown",
                text: markdown,
            })
            .send()
            .and_then(|response| response.error_for_status())
            .inspect_err(|err| error!("markdown rendering request failed: {err:?}"))
            .with_context(|| format!("while requesting {}", self.endpoint))?;

        response.text().context("while reading the response body")
    }
}
