//! Filesystem-backed media registry.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use {
    async_trait::async_trait,
    tokio::{fs, sync::RwLock},
    tracing::debug,
    uuid::Uuid,
};

use crate::registry::{EntryId, EntryMetadata, EntryWriter, MediaRegistry};

/// Media registry rooted at a local directory.
///
/// Entries are created under `<root>/<relative_path>/` and identified as
/// `media://audio/<uuid>`. Display-name collisions get a numeric suffix
/// before the extension (`tone.wav`, `tone (1).wav`, ...), the way platform
/// registries de-duplicate.
pub struct FsMediaRegistry {
    root: PathBuf,
    entries: RwLock<HashMap<EntryId, PathBuf>>,
}

impl FsMediaRegistry {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Path backing an entry, if the registry knows it.
    pub async fn entry_path(&self, id: &EntryId) -> Option<PathBuf> {
        self.entries.read().await.get(id).cloned()
    }
}

#[async_trait]
impl MediaRegistry for FsMediaRegistry {
    async fn insert_audio(&self, meta: EntryMetadata) -> io::Result<Option<EntryId>> {
        let dir = match meta.relative_path.as_deref() {
            Some(rel) => self.root.join(rel),
            None => self.root.clone(),
        };
        fs::create_dir_all(&dir).await?;

        // Hold the write lock across probing so concurrent inserts cannot
        // reserve the same path.
        let mut entries = self.entries.write().await;
        let path = next_free_path(&entries, &dir, &meta.display_name).await?;
        let id = EntryId::new(format!("media://audio/{}", Uuid::new_v4()));
        debug!(id = %id, path = %path.display(), "registered media entry");
        entries.insert(id.clone(), path);
        Ok(Some(id))
    }

    async fn open_output(&self, id: &EntryId) -> io::Result<Option<EntryWriter>> {
        let Some(path) = self.entries.read().await.get(id).cloned() else {
            return Ok(None);
        };
        let file = fs::File::create(&path).await?;
        Ok(Some(Box::new(file)))
    }
}

async fn next_free_path(
    reserved: &HashMap<EntryId, PathBuf>,
    dir: &Path,
    display_name: &str,
) -> io::Result<PathBuf> {
    let mut index = 0u32;
    loop {
        let path = dir.join(candidate_name(display_name, index));
        let taken =
            reserved.values().any(|p| p == &path) || fs::try_exists(&path).await?;
        if !taken {
            return Ok(path);
        }
        index += 1;
    }
}

fn candidate_name(display_name: &str, index: u32) -> String {
    if index == 0 {
        return display_name.to_string();
    }
    match display_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({index}).{ext}"),
        _ => format!("{display_name} ({index})"),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
