//! Publish pipeline
//!
//! The core of Vitrine: take an accepted project, fetch the current site
//! document from the remote store, upload the project image if there is
//! one, splice a generated markup fragment in at the carousel anchor, and
//! commit the patched document back — each stage a typed result feeding
//! the next, so partial-failure states stay explicit.

pub mod assets;
pub mod error;
pub mod fragment;
pub mod patch;
pub mod publisher;

pub use assets::{ensure_asset, AssetLocation, AssetPayload};
pub use error::PublishError;
pub use fragment::project_card;
pub use patch::insert_after_anchor;
pub use publisher::{DocumentSpec, PublishReceipt, PublishRequest, Publisher};
