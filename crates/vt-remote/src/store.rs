// store.rs — The ContentStore seam.

use async_trait::async_trait;

use crate::blob::RemoteBlob;
use crate::error::RemoteError;

/// Read/write access to versioned files in the remote store.
///
/// The publishing pipeline is written against this trait so the network
/// can be swapped out: [`crate::GitHubStore`] in production,
/// [`crate::MemoryStore`] in tests.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the current state of a path.
    ///
    /// Returns `Ok(None)` when the path does not exist — an expected
    /// outcome that decides whether a later write is a create or an
    /// update. Every other failure is a [`RemoteError::FetchFailed`].
    async fn fetch(&self, path: &str) -> Result<Option<RemoteBlob>, RemoteError>;

    /// Write a new revision of a path and return its new content sha.
    ///
    /// `prior_sha` must carry the current sha when the path already
    /// exists; omitting it on an existing path is a caller bug and fails
    /// the write rather than silently overwriting.
    async fn put(
        &self,
        path: &str,
        content: &[u8],
        prior_sha: Option<&str>,
        message: &str,
    ) -> Result<String, RemoteError>;
}
