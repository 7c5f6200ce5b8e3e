// assets.rs — Asset upload reconciliation.
//
// Ensure the remote store holds the image at its target path before the
// document ever references it. The existing blob (if any) supplies the
// sha guard for the write: present → update in place, absent → create.
// The check-then-write pair is racy under true concurrent operators;
// single-operator use is an assumption of the whole system, not something
// this module defends.

use vt_remote::{ContentStore, RepoConfig};

use crate::error::PublishError;

/// An image payload bound for the remote store.
#[derive(Debug, Clone)]
pub struct AssetPayload {
    /// Repository-relative target path (e.g. `images/17123-shot.png`).
    pub repo_path: String,

    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

/// Where a reconciled asset ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    /// Repository-relative path the asset was committed to.
    pub repo_path: String,

    /// Deterministic public address, embeddable in markup.
    pub public_url: String,

    /// Content sha of the committed blob.
    pub sha: String,
}

/// Ensure the remote store holds `payload` at its target path.
///
/// No payload → no-op, `Ok(None)`; the caller's fragment must then omit
/// the image reference. Any failure — including a stale-guard conflict —
/// surfaces as [`PublishError::AssetUpload`] and must abort the operation
/// before the document commit is attempted.
pub async fn ensure_asset<S: ContentStore + ?Sized>(
    store: &S,
    repo: &RepoConfig,
    payload: Option<&AssetPayload>,
    message: &str,
) -> Result<Option<AssetLocation>, PublishError> {
    let Some(payload) = payload else {
        return Ok(None);
    };

    // Existing blob supplies the concurrency guard; absence means create.
    let prior = store
        .fetch(&payload.repo_path)
        .await
        .map_err(PublishError::AssetUpload)?;
    let prior_sha = prior.and_then(|blob| blob.sha);

    match &prior_sha {
        Some(sha) => tracing::debug!(path = %payload.repo_path, %sha, "updating existing asset"),
        None => tracing::debug!(path = %payload.repo_path, "creating new asset"),
    }

    let sha = store
        .put(
            &payload.repo_path,
            &payload.bytes,
            prior_sha.as_deref(),
            message,
        )
        .await
        .map_err(PublishError::AssetUpload)?;

    let public_url = repo.raw_url(&payload.repo_path);
    tracing::info!(path = %payload.repo_path, %public_url, "asset reconciled");

    Ok(Some(AssetLocation {
        repo_path: payload.repo_path.clone(),
        public_url,
        sha,
    }))
}
