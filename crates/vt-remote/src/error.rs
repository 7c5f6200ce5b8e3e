// error.rs — Error types for the remote content store.

use thiserror::Error;

/// Errors that can occur when talking to the remote content store.
///
/// "Not found" is deliberately absent: a missing path is an expected
/// outcome that branches caller logic, so fetches return `Ok(None)`
/// instead of an error.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Reading the current state of a path failed (transport, auth, or an
    /// unexpected response shape). The caller must not patch a document it
    /// could not fully fetch.
    #[error("fetch of '{path}' failed: {detail}")]
    FetchFailed { path: String, detail: String },

    /// Writing a new revision failed (transport, auth, validation, or a
    /// stale content-sha guard).
    #[error("commit to '{path}' failed: {detail}")]
    CommitFailed { path: String, detail: String },

    /// The caller tried to overwrite an existing path without supplying
    /// its current content sha. This is a programming-contract violation,
    /// not a transient failure.
    #[error("updating existing '{path}' requires its current content sha")]
    MissingShaForUpdate { path: String },

    /// Building the HTTP client failed at construction time.
    #[error("building HTTP client failed: {0}")]
    Client(#[source] reqwest::Error),
}
