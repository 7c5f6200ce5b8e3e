// blob.rs — RemoteBlob: the current state of one versioned file.

/// The current state of a single versioned file as known to the remote
/// store: its path, its decoded byte content, and the content sha the
/// store reported for it.
///
/// `sha` is `None` only for blobs that have never been written; every
/// blob fetched from the store carries one, and overwriting an existing
/// path requires handing that sha back as a concurrency guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBlob {
    /// Repository-relative file path.
    pub path: String,

    /// Decoded (non-base64) file content.
    pub content: Vec<u8>,

    /// Content sha reported by the store, absent for a not-yet-existing file.
    pub sha: Option<String>,
}
