// memory.rs — MemoryStore: in-memory ContentStore fake for tests.
//
// Behaves like the real store where the pipeline can observe it: missing
// paths fetch as None, overwrites demand the current sha, stale or absent
// guards fail the write. Shas are deterministic (SHA-256 of the content)
// so identical content yields identical identifiers.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::blob::RemoteBlob;
use crate::error::RemoteError;
use crate::store::ContentStore;

/// One recorded write, kept so tests can assert create-vs-update behavior
/// and commit messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecord {
    pub path: String,
    pub prior_sha: Option<String>,
    pub message: String,
}

/// In-memory ContentStore used by pipeline and server tests.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<String, (Vec<u8>, String)>>,
    history: Mutex<Vec<PutRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file as if it had been committed earlier; returns its sha.
    pub fn seed(&self, path: &str, content: &[u8]) -> String {
        let sha = synthetic_sha(content);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), (content.to_vec(), sha.clone()));
        sha
    }

    /// All writes observed so far, oldest first.
    pub fn history(&self) -> Vec<PutRecord> {
        self.history.lock().unwrap().clone()
    }

    /// Current content of a path, if present.
    pub fn content(&self, path: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(content, _)| content.clone())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn fetch(&self, path: &str) -> Result<Option<RemoteBlob>, RemoteError> {
        let files = self.files.lock().unwrap();
        Ok(files.get(path).map(|(content, sha)| RemoteBlob {
            path: path.to_string(),
            content: content.clone(),
            sha: Some(sha.clone()),
        }))
    }

    async fn put(
        &self,
        path: &str,
        content: &[u8],
        prior_sha: Option<&str>,
        message: &str,
    ) -> Result<String, RemoteError> {
        let mut files = self.files.lock().unwrap();

        match (files.get(path), prior_sha) {
            (Some(_), None) => {
                return Err(RemoteError::MissingShaForUpdate {
                    path: path.to_string(),
                })
            }
            (Some((_, current)), Some(given)) if current != given => {
                return Err(RemoteError::CommitFailed {
                    path: path.to_string(),
                    detail: format!("stale sha guard: expected {current}, got {given}"),
                })
            }
            (None, Some(given)) => {
                return Err(RemoteError::CommitFailed {
                    path: path.to_string(),
                    detail: format!("sha {given} supplied for a path that does not exist"),
                })
            }
            _ => {}
        }

        let sha = synthetic_sha(content);
        files.insert(path.to_string(), (content.to_vec(), sha.clone()));
        self.history.lock().unwrap().push(PutRecord {
            path: path.to_string(),
            prior_sha: prior_sha.map(str::to_string),
            message: message.to_string(),
        });
        Ok(sha)
    }
}

fn synthetic_sha(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
