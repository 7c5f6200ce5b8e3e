// routes.rs — HTTP boundary: multipart submission in, JSON out.
//
// Thin wrapper over the core. The handler parses the form into a
// ProjectSubmission, archives the image locally, hands the publish to the
// pipeline, and appends the accepted record — reporting which step failed
// when one does. Routing enforces method discipline: anything but POST on
// the submission route is a 405.

use std::sync::Arc;

use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use vt_projects::{ImageUpload, ProjectError, ProjectRecord, ProjectStore, ProjectSubmission};
use vt_publish::{AssetPayload, PublishError, PublishRequest, Publisher};
use vt_remote::ContentStore;

/// Uploads beyond this size are rejected at the body-parsing layer.
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Shared handler state: the publish pipeline plus the local store.
pub struct AppState<S> {
    pub publisher: Arc<Publisher<S>>,
    pub projects: Arc<ProjectStore>,
}

// Derived Clone would demand S: Clone; the Arcs make that bound spurious.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            publisher: Arc::clone(&self.publisher),
            projects: Arc::clone(&self.projects),
        }
    }
}

/// Build the application router.
pub fn build_app<S: ContentStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/projects", get(list_projects::<S>).post(add_project::<S>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
struct SubmitResponse {
    message: String,
    project: ProjectRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
}

/// Error body returned for every failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// A failure mapped to an HTTP status, with the step baked into the message.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("malformed form submission: {err}"),
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        let status = match &err {
            ProjectError::MissingField { .. } | ProjectError::InvalidImageName { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PublishError> for ApiError {
    fn from(err: PublishError) -> Self {
        // Remote-side failures are gateway errors; a missing anchor or
        // document means the configured site contract is broken.
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

/// GET /api/projects — the current local list, newest last.
async fn list_projects<S: ContentStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ProjectRecord>>, ApiError> {
    Ok(Json(state.projects.load()?))
}

/// POST /api/projects — accept one submission and publish it.
async fn add_project<S: ContentStore + 'static>(
    State(state): State<AppState<S>>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, ApiError> {
    let submission = parse_submission(multipart).await?;
    submission.validate()?;

    // Archive the upload first: archiving mints the unique filename the
    // remote asset path is derived from.
    let (image_rel, asset) = match &submission.image {
        Some(upload) => {
            let rel = state.projects.archive_image(upload)?;
            let repo_path = rel.trim_start_matches("./").to_string();
            let asset = AssetPayload {
                repo_path,
                bytes: upload.bytes.clone(),
            };
            (rel, Some(asset))
        }
        None => (String::new(), None),
    };

    let receipt = state
        .publisher
        .publish(&PublishRequest {
            name: submission.name.clone(),
            link: submission.link.clone(),
            asset,
        })
        .await?;

    // Outside the remote transactional boundary: if this append fails the
    // site and the local list diverge, and the caller sees the failure.
    let record = submission.into_record(image_rel);
    state.projects.append(record.clone())?;

    Ok(Json(SubmitResponse {
        message: "Project saved locally & remote site updated".to_string(),
        project: record,
        image_url: receipt.asset_url,
    }))
}

/// Parse the multipart form into a submission.
///
/// Fields: `name`, `link`, `description` (optional), `image` (optional
/// file). A file part with no filename or no bytes counts as "no image" —
/// browsers send an empty part when the picker is left blank.
async fn parse_submission(mut multipart: Multipart) -> Result<ProjectSubmission, ApiError> {
    let mut submission = ProjectSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        // Copy the field name out: reading the field's body consumes it.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => submission.name = field.text().await?,
            "link" => submission.link = field.text().await?,
            "description" => submission.description = field.text().await?,
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    submission.image = Some(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => {
                tracing::debug!(field = %other, "ignoring unknown form field");
            }
        }
    }

    Ok(submission)
}
