// config.rs — Repository coordinates for the remote store.

use serde::{Deserialize, Serialize};

/// Coordinates of the hosting repository.
///
/// An explicit value object passed into store constructors — never read
/// from ambient globals — so tests can point the pipeline at a fake store
/// without touching the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Branch that serves the site.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Contents API endpoint.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Raw-content host used to build public asset addresses.
    #[serde(default = "default_raw_base")]
    pub raw_base: String,
}

impl RepoConfig {
    /// Contents API URL for a repository-relative path.
    pub fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.owner, self.repo, path
        )
    }

    /// Deterministic public address of a committed file.
    ///
    /// No round trip needed: once the path is known the address is fixed by
    /// the raw-content host layout.
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base, self.owner, self.repo, self.branch, path
        )
    }
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_base() -> String {
    "https://raw.githubusercontent.com".to_string()
}
