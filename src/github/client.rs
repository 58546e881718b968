use crate::github::close::IssueCloser;
use crate::github::error::{Error, Result};
use crate::github::pagination::{Page, PageFetcher, next_link};
use crate::github::repo::RepoId;
use reqwest::StatusCode;

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "issue-closer";

/// Authenticated GitHub REST client
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(GitHubClient {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl PageFetcher for GitHubClient {
    async fn get_page(&self, url: &str) -> Result<Page> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let next = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_link);
        let body = response.json::<serde_json::Value>().await?;

        Ok(Page { body, next })
    }
}

impl IssueCloser for GitHubClient {
    async fn close_issue(&self, repo: &RepoId, number: u64) -> Result<StatusCode> {
        let url = format!("{}/repos/{}/issues/{}", self.api_base, repo, number);
        tracing::debug!(%url, "PATCH");
        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .json(&serde_json::json!({ "state": "closed" }))
            .send()
            .await?;
        Ok(response.status())
    }
}
