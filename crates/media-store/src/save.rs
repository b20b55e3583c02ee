use std::sync::Arc;

use {
    bytes::Bytes,
    tokio::io::AsyncWriteExt,
    tracing::{debug, error},
};

use crate::{
    error::{Error, Result},
    registry::{EntryId, EntryMetadata, EntryWriter, MediaRegistry},
};

/// Subfolder below the public media root where audio entries land.
pub const AUDIO_RELATIVE_PATH: &str = "Music/Hertz";

/// A single request to persist an audio buffer into public media storage.
///
/// Optional fields model "argument absent"; validation happens inside
/// [`AudioSaver::save`] before any registry interaction.
#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub bytes: Bytes,
}

/// Writes audio buffers into a media registry.
pub struct AudioSaver {
    registry: Arc<dyn MediaRegistry>,
}

impl AudioSaver {
    #[must_use]
    pub fn new(registry: Arc<dyn MediaRegistry>) -> Self {
        Self { registry }
    }

    /// Validate the request, register a new entry, and stream the payload
    /// into it.
    ///
    /// Every failure is terminal: nothing is retried, and an entry created by
    /// an earlier step is not removed when a later step fails. Saving the
    /// same file name twice creates two entries; registries de-duplicate
    /// display names themselves.
    pub async fn save(&self, req: SaveRequest) -> Result<EntryId> {
        let file_name = match req.file_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::invalid_args("missing fileName")),
        };
        if req.bytes.is_empty() {
            return Err(Error::invalid_args("missing or empty bytes"));
        }

        let meta = EntryMetadata {
            display_name: file_name.to_string(),
            mime_type: req.mime_type.clone(),
            relative_path: self
                .registry
                .supports_relative_path()
                .then(|| AUDIO_RELATIVE_PATH.to_string()),
        };

        debug!(file_name, len = req.bytes.len(), "saving audio to public media");

        let id = match self.registry.insert_audio(meta).await {
            Ok(Some(id)) => id,
            Ok(None) => return Err(Error::insert_failed("registry declined to create entry")),
            Err(e) => {
                error!(file_name, error = %e, "media entry creation failed");
                return Err(Error::external("create entry", e));
            },
        };

        let out = match self.registry.open_output(&id).await {
            Ok(Some(out)) => out,
            Ok(None) => return Err(Error::stream_null("registry returned no output stream")),
            Err(e) => {
                error!(id = %id, error = %e, "opening output stream failed");
                return Err(Error::external("open output stream", e));
            },
        };

        write_and_release(out, &req.bytes).await.map_err(|e| {
            error!(id = %id, error = %e, "writing audio payload failed");
            e
        })?;

        debug!(id = %id, "audio saved");
        Ok(id)
    }
}

/// Write the full payload, flush, and shut the stream down. The stream is
/// released exactly once on every exit path, including write failure.
async fn write_and_release(mut out: EntryWriter, bytes: &Bytes) -> Result<()> {
    let written = async {
        out.write_all(bytes).await?;
        out.flush().await
    }
    .await;

    match written {
        Ok(()) => out
            .shutdown()
            .await
            .map_err(|e| Error::external("close output stream", e)),
        Err(e) => {
            let _ = out.shutdown().await;
            Err(Error::external("write payload", e))
        },
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
