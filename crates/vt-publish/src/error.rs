// error.rs — Error types for the publish pipeline.
//
// One variant per pipeline stage, because recovery differs by stage: a
// failed fetch is retryable as-is, a failed document commit after a
// successful asset upload leaves an orphaned asset that a whole-operation
// retry will find and reuse.

use thiserror::Error;
use vt_remote::RemoteError;

/// Errors that can occur while publishing a project to the remote site.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The site document does not exist at the configured path. The
    /// document is assumed pre-existing; this is a deployment problem,
    /// not a create-on-demand case.
    #[error("remote document '{path}' not found")]
    DocumentMissing { path: String },

    /// The site document did not decode as UTF-8 text.
    #[error("remote document '{path}' is not valid UTF-8")]
    DocumentNotText { path: String },

    /// Fetching the site document failed.
    #[error("document fetch failed: {0}")]
    Fetch(#[source] RemoteError),

    /// The insertion anchor was not found in the document. Nothing was
    /// written; patching never falls back to appending elsewhere.
    #[error("insertion anchor '{anchor}' not found in document")]
    AnchorMissing { anchor: String },

    /// Uploading the project image failed. The document commit is never
    /// attempted after this, so the site cannot reference a missing asset.
    #[error("asset upload failed: {0}")]
    AssetUpload(#[source] RemoteError),

    /// Committing the patched document failed.
    #[error("document commit failed: {0}")]
    Commit(#[source] RemoteError),
}
