use std::{fmt, io};

use {async_trait::async_trait, tokio::io::AsyncWrite};

/// Writable stream a registry hands out for a single entry.
pub type EntryWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Opaque identifier a registry assigns to a created entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata submitted to a registry when creating a media entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub display_name: String,
    pub mime_type: Option<String>,
    /// Target subfolder below the public media root. Populated only when the
    /// registry reports relative-path support.
    pub relative_path: Option<String>,
}

/// Platform media registry: creates entries in the public audio collection
/// and opens writable streams for them.
///
/// `Ok(None)` means the registry declined the request; `Err` means the
/// underlying platform call failed outright.
#[async_trait]
pub trait MediaRegistry: Send + Sync {
    /// Register a new entry in the public audio collection.
    async fn insert_audio(&self, meta: EntryMetadata) -> io::Result<Option<EntryId>>;

    /// Open a writable stream for a previously created entry.
    async fn open_output(&self, id: &EntryId) -> io::Result<Option<EntryWriter>>;

    /// Whether the registry can place entries under a relative subfolder.
    fn supports_relative_path(&self) -> bool {
        true
    }
}
