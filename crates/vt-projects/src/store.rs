// store.rs — ProjectStore: the local JSON project list and image archive.
//
// The list is a single JSON array, read fully into memory, appended to,
// and rewritten pretty-printed on each accepted submission. An absent or
// empty file is an empty list. Uploaded images are archived next to it
// under a millisecond-prefixed filename so repeated uploads of the same
// file never collide.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::ProjectError;
use crate::record::{ImageUpload, ProjectRecord};

/// Persistent store for accepted project records and archived images.
pub struct ProjectStore {
    list_path: PathBuf,
    images_dir: PathBuf,
}

impl ProjectStore {
    /// Create a store over the given list file and image directory.
    /// Creates the image directory and the list file's parent if needed.
    pub fn new(
        list_path: impl Into<PathBuf>,
        images_dir: impl Into<PathBuf>,
    ) -> Result<Self, ProjectError> {
        let list_path = list_path.into();
        let images_dir = images_dir.into();

        if let Some(parent) = list_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ProjectError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::create_dir_all(&images_dir).map_err(|source| ProjectError::Io {
            path: images_dir.clone(),
            source,
        })?;

        Ok(Self {
            list_path,
            images_dir,
        })
    }

    /// Load the full list. Absent or empty file → empty list.
    pub fn load(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
        if !self.list_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.list_path).map_err(|source| ProjectError::Io {
            path: self.list_path.clone(),
            source,
        })?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    /// Append a record and rewrite the list in full.
    pub fn append(&self, record: ProjectRecord) -> Result<(), ProjectError> {
        let mut projects = self.load()?;
        projects.push(record);

        let json = serde_json::to_string_pretty(&projects)?;
        fs::write(&self.list_path, json).map_err(|source| ProjectError::Io {
            path: self.list_path.clone(),
            source,
        })?;

        tracing::info!(count = projects.len(), "project list updated");
        Ok(())
    }

    /// Archive an uploaded image under a unique filename.
    ///
    /// The stored name is `<millis>-<original name>` with the original
    /// name reduced to its final path component. Returns the
    /// site-relative `./images/<file>` path recorded on the project.
    pub fn archive_image(&self, upload: &ImageUpload) -> Result<String, ProjectError> {
        let base = Path::new(&upload.file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ProjectError::InvalidImageName {
                name: upload.file_name.clone(),
            })?;

        let file_name = format!("{}-{}", Utc::now().timestamp_millis(), base);
        let path = self.images_dir.join(&file_name);
        fs::write(&path, &upload.bytes).map_err(|source| ProjectError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(file = %file_name, bytes = upload.bytes.len(), "image archived");
        Ok(format!("./images/{file_name}"))
    }
}
