// publisher.rs — Publisher: the publish orchestration.
//
// The top-level operation the core exists to support, as a pipeline of
// typed stage results:
//
//   1. Fetch the site document (must exist) — abort on any fetch failure.
//   2. Reconcile the asset upload — must fully succeed before anything
//      references it.
//   3. Build the card fragment from the resolved asset address.
//   4. Splice the fragment in at the anchor — abort if the anchor is gone.
//   5. Commit the patched document guarded by the sha from step 1.
//
// Each remote interaction is a sequential await; nothing proceeds
// concurrently with another remote call because every request needs a
// result from the previous one. There is no compensating rollback: a
// commit failure after a successful asset upload is surfaced, and a retry
// of the whole operation finds the asset already present and reuses it.

use serde::Serialize;
use vt_remote::{ContentStore, RepoConfig};

use crate::assets::{ensure_asset, AssetLocation, AssetPayload};
use crate::error::PublishError;
use crate::fragment::project_card;
use crate::patch::insert_after_anchor;

/// Which document gets patched, and where inside it.
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    /// Repository-relative path of the site document.
    pub path: String,

    /// Literal anchor substring naming the carousel container.
    pub anchor: String,
}

/// One publish request: the project fields that land in markup, plus the
/// optional image bound for the remote store.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub name: String,
    pub link: String,
    pub asset: Option<AssetPayload>,
}

/// Stage result of the document fetch: the decoded page and the sha that
/// guards the later commit.
#[derive(Debug)]
struct FetchedDocument {
    html: String,
    sha: String,
}

/// What a successful publish produced.
#[derive(Debug, Clone, Serialize)]
pub struct PublishReceipt {
    /// Content sha of the committed document revision.
    pub document_sha: String,

    /// Public address of the reconciled asset, when one was uploaded.
    pub asset_url: Option<String>,
}

/// Orchestrates fetch → reconcile → patch → commit against one store.
pub struct Publisher<S> {
    store: S,
    repo: RepoConfig,
    document: DocumentSpec,
}

impl<S: ContentStore> Publisher<S> {
    pub fn new(store: S, repo: RepoConfig, document: DocumentSpec) -> Self {
        Self {
            store,
            repo,
            document,
        }
    }

    /// The underlying content store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Publish one project to the remote site.
    pub async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, PublishError> {
        tracing::info!(name = %request.name, "publishing project");

        let document = self.fetch_document().await?;

        let asset_message = format!("Add/update image for {}", request.name);
        let asset = ensure_asset(
            &self.store,
            &self.repo,
            request.asset.as_ref(),
            &asset_message,
        )
        .await?;

        let fragment = project_card(
            &request.name,
            &request.link,
            asset.as_ref().map(|a| a.public_url.as_str()),
        );

        let patched = insert_after_anchor(&document.html, &self.document.anchor, &fragment)?;

        let commit_message = format!("{} project updated", request.name);
        let document_sha = self
            .store
            .put(
                &self.document.path,
                patched.as_bytes(),
                Some(&document.sha),
                &commit_message,
            )
            .await
            .map_err(PublishError::Commit)?;

        tracing::info!(name = %request.name, sha = %document_sha, "project published");
        Ok(PublishReceipt {
            document_sha,
            asset_url: asset.map(|a: AssetLocation| a.public_url),
        })
    }

    /// Stage 1: the site document, decoded, with its guard sha.
    async fn fetch_document(&self) -> Result<FetchedDocument, PublishError> {
        let blob = self
            .store
            .fetch(&self.document.path)
            .await
            .map_err(PublishError::Fetch)?
            .ok_or_else(|| PublishError::DocumentMissing {
                path: self.document.path.clone(),
            })?;

        let html = String::from_utf8(blob.content).map_err(|_| PublishError::DocumentNotText {
            path: self.document.path.clone(),
        })?;

        // A fetched blob always carries a sha; treat its absence as a
        // fetch failure rather than committing unguarded.
        let sha = blob.sha.ok_or_else(|| PublishError::Fetch(
            vt_remote::RemoteError::FetchFailed {
                path: self.document.path.clone(),
                detail: "blob carried no content sha".to_string(),
            },
        ))?;

        Ok(FetchedDocument { html, sha })
    }
}
