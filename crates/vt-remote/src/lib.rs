//! Versioned content store client
//!
//! This crate talks to the hosting repository's contents API: fetch the
//! current state of a file as a [`RemoteBlob`] (decoded bytes plus the
//! blob's content sha), and write a new revision guarded by the prior sha.
//! The [`ContentStore`] trait is the seam the rest of the pipeline is
//! written against, with a real [`GitHubStore`] implementation and an
//! in-memory [`MemoryStore`] fake for tests.

pub mod blob;
pub mod codec;
pub mod config;
pub mod error;
pub mod github;
pub mod memory;
pub mod store;

pub use blob::RemoteBlob;
pub use config::RepoConfig;
pub use error::RemoteError;
pub use github::GitHubStore;
pub use memory::{MemoryStore, PutRecord};
pub use store::ContentStore;
