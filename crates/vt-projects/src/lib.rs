//! Project records and local persistence
//!
//! The local side of a submission: the validated [`ProjectSubmission`]
//! coming off the form, the accepted [`ProjectRecord`] appended to the
//! JSON project list, and the image archive that mints the unique local
//! filename an upload is stored under.

pub mod error;
pub mod record;
pub mod store;

pub use error::ProjectError;
pub use record::{ImageUpload, ProjectRecord, ProjectSubmission};
pub use store::ProjectStore;
