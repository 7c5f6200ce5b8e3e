// record.rs — ProjectRecord and the submission it is accepted from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProjectError;

/// An accepted portfolio project, as persisted in the local JSON list.
///
/// Immutable once accepted: records are only ever appended, never edited.
/// `image` holds the site-relative path of the archived upload
/// (`./images/<file>`) or the empty string when no image was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,

    pub link: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,

    /// When the submission was accepted. Defaults on deserialize so lists
    /// written before this field existed still load.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

/// An image file as it arrives off the form: display filename plus bytes.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Operator input before acceptance — the parsed multipart form fields.
#[derive(Debug, Clone, Default)]
pub struct ProjectSubmission {
    pub name: String,
    pub link: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

impl ProjectSubmission {
    /// Boundary validation: name and link are required, description and
    /// image are optional.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.name.trim().is_empty() {
            return Err(ProjectError::MissingField { field: "name" });
        }
        if self.link.trim().is_empty() {
            return Err(ProjectError::MissingField { field: "link" });
        }
        Ok(())
    }

    /// Build the accepted record, stamping the acceptance time.
    ///
    /// `image` is the site-relative archive path minted by
    /// [`crate::ProjectStore::archive_image`], or empty when the
    /// submission carried no image.
    pub fn into_record(self, image: String) -> ProjectRecord {
        ProjectRecord {
            name: self.name,
            link: self.link,
            description: self.description,
            image,
            added_at: Utc::now(),
        }
    }
}
