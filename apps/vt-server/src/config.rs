// config.rs — Server configuration from vitrine.toml.
//
// Everything the process needs, read once at startup and passed into
// constructors. The API token never lives in the file: the config names
// the environment variable it is read from.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use vt_remote::RepoConfig;

/// Top-level configuration for the vitrine server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Local JSON project list.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Local archive directory for uploaded images.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Environment variable holding the contents API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// The remote document that gets patched.
    #[serde(default)]
    pub document: DocumentConfig,

    /// Hosting repository coordinates.
    pub repo: RepoConfig,
}

/// Which file on the site is patched, and at which anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_document_path")]
    pub path: String,

    #[serde(default = "default_anchor")]
    pub anchor: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document_path(),
            anchor: default_anchor(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

// Serde default functions
fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/projects.json")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("public/images")
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_document_path() -> String {
    "index.html".to_string()
}

fn default_anchor() -> String {
    "<div class=\"carousel owl-carousel\">".to_string()
}
