//! `MediaService` implementation backed by the media-store crate.

use {async_trait::async_trait, base64::Engine as _, bytes::Bytes, serde_json::Value};

use hertz_media_store::{AudioSaver, SaveRequest};

use crate::services::{MediaService, ServiceError, ServiceResult};

/// Media service that writes through an [`AudioSaver`].
pub struct StoreMediaService {
    saver: AudioSaver,
}

impl StoreMediaService {
    #[must_use]
    pub fn new(saver: AudioSaver) -> Self {
        Self { saver }
    }
}

#[async_trait]
impl MediaService for StoreMediaService {
    async fn save_audio(&self, params: Value) -> ServiceResult {
        let request = parse_save_request(&params)?;
        let id = self.saver.save(request).await?;
        Ok(Value::String(id.to_string()))
    }
}

/// Extract a [`SaveRequest`] from the channel's camelCase argument mapping.
///
/// `bytes` may arrive base64-encoded or as an array of byte values. Parsing
/// happens before any registry interaction; malformed payloads are reported
/// as `invalid_args`.
fn parse_save_request(params: &Value) -> Result<SaveRequest, ServiceError> {
    let file_name = params
        .get("fileName")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let mime_type = params
        .get("mimeType")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let bytes = match params.get("bytes") {
        None | Some(Value::Null) => Bytes::new(),
        Some(value) => decode_bytes(value).ok_or_else(|| {
            ServiceError::invalid_args("bytes must be base64 text or an array of byte values")
        })?,
    };
    Ok(SaveRequest {
        file_name,
        mime_type,
        bytes,
    })
}

fn decode_bytes(value: &Value) -> Option<Bytes> {
    match value {
        Value::String(encoded) => base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .ok()
            .map(Bytes::from),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .map(Bytes::from),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
