// github.rs — GitHubStore: ContentStore over the GitHub contents API.
//
// One GET and one PUT per file, both keyed by repository-relative path.
// Reads return the body base64-wrapped with the blob sha; writes carry the
// prior sha as an optimistic-concurrency guard when overwriting. Fetches
// are idempotent and get one bounded retry on transport or server errors;
// writes are never retried — without the sha guard a repeated PUT is not
// idempotent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::blob::RemoteBlob;
use crate::codec::{decode_transport, encode_transport};
use crate::config::RepoConfig;
use crate::error::RemoteError;
use crate::store::ContentStore;

const USER_AGENT: &str = concat!("vitrine/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const FETCH_RETRIES: u32 = 1;

/// ContentStore implementation backed by the GitHub contents API.
pub struct GitHubStore {
    client: Client,
    config: RepoConfig,
    token: String,
}

/// Response shape of a contents GET.
#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: String,
    sha: String,
}

/// Request body of a contents PUT.
#[derive(Debug, Serialize)]
struct PutRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Response shape of a contents PUT — only the new blob sha is needed.
#[derive(Debug, Deserialize)]
struct PutResponse {
    content: PutResponseContent,
}

#[derive(Debug, Deserialize)]
struct PutResponseContent {
    sha: String,
}

impl GitHubStore {
    /// Create a store for the given repository coordinates.
    ///
    /// The token comes from the caller (read once at process start), never
    /// from the environment inside this crate.
    pub fn new(config: RepoConfig, token: impl Into<String>) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(RemoteError::Client)?;

        Ok(Self {
            client,
            config,
            token: token.into(),
        })
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[async_trait]
impl ContentStore for GitHubStore {
    async fn fetch(&self, path: &str) -> Result<Option<RemoteBlob>, RemoteError> {
        let url = self.config.contents_url(path);
        let mut attempt = 0;

        loop {
            tracing::debug!(%path, attempt, "fetching remote blob");

            let result = self
                .client
                .get(&url)
                .query(&[("ref", self.config.branch.as_str())])
                .header("Authorization", self.auth_header())
                .header("Accept", "application/vnd.github.v3+json")
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    if attempt < FETCH_RETRIES {
                        attempt += 1;
                        continue;
                    }
                    return Err(RemoteError::FetchFailed {
                        path: path.to_string(),
                        detail: e.to_string(),
                    });
                }
            };

            if response.status() == StatusCode::NOT_FOUND {
                tracing::debug!(%path, "remote blob not found");
                return Ok(None);
            }

            let status = response.status();
            if !status.is_success() {
                if status.is_server_error() && attempt < FETCH_RETRIES {
                    attempt += 1;
                    continue;
                }
                return Err(RemoteError::FetchFailed {
                    path: path.to_string(),
                    detail: format!("HTTP {status}"),
                });
            }

            let body: ContentResponse =
                response
                    .json()
                    .await
                    .map_err(|e| RemoteError::FetchFailed {
                        path: path.to_string(),
                        detail: format!("unexpected response shape: {e}"),
                    })?;

            let content =
                decode_transport(&body.content).map_err(|e| RemoteError::FetchFailed {
                    path: path.to_string(),
                    detail: format!("invalid base64 payload: {e}"),
                })?;

            return Ok(Some(RemoteBlob {
                path: path.to_string(),
                content,
                sha: Some(body.sha),
            }));
        }
    }

    async fn put(
        &self,
        path: &str,
        content: &[u8],
        prior_sha: Option<&str>,
        message: &str,
    ) -> Result<String, RemoteError> {
        let url = self.config.contents_url(path);
        tracing::debug!(%path, update = prior_sha.is_some(), "committing remote blob");

        let body = PutRequest {
            message,
            content: encode_transport(content),
            sha: prior_sha,
        };

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/vnd.github.v3+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::CommitFailed {
                path: path.to_string(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // 409/422 cover stale-sha conflicts and sha-omitted-on-existing
            // rejections; the body names which.
            let detail = match response.text().await {
                Ok(text) if !text.is_empty() => format!("HTTP {status}: {text}"),
                _ => format!("HTTP {status}"),
            };
            return Err(RemoteError::CommitFailed {
                path: path.to_string(),
                detail,
            });
        }

        let body: PutResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::CommitFailed {
                path: path.to_string(),
                detail: format!("unexpected response shape: {e}"),
            })?;

        tracing::info!(%path, sha = %body.content.sha, "remote blob committed");
        Ok(body.content.sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_request_omits_sha_on_create() {
        let body = PutRequest {
            message: "Add image",
            content: "aGk=".to_string(),
            sha: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("\"sha\""));
    }

    #[test]
    fn put_request_carries_sha_on_update() {
        let body = PutRequest {
            message: "Update page",
            content: "aGk=".to_string(),
            sha: Some("abc123"),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"sha\":\"abc123\""));
    }

    #[test]
    fn content_response_parses_the_api_shape() {
        let body: ContentResponse = serde_json::from_str(
            r#"{"content":"aGVsbG8=\n","sha":"d0dd","encoding":"base64","size":5}"#,
        )
        .unwrap();
        assert_eq!(body.sha, "d0dd");
        assert_eq!(decode_transport(&body.content).unwrap(), b"hello");
    }
}
