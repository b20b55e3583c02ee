//! Service trait seam between the dispatcher and domain crates.
//!
//! The `Noop` implementation lets the bridge dispatch before a media store is
//! wired in.

use std::sync::Arc;

use {async_trait::async_trait, serde_json::Value};

use hertz_protocol::{ErrorShape, error_codes};

/// Error type returned by service methods.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{message}")]
    Categorized {
        code: &'static str,
        message: String,
    },
    #[error("{0}")]
    Serde(#[from] serde_json::Error),
}

impl ServiceError {
    #[must_use]
    pub fn categorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Categorized {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::categorized(error_codes::INVALID_ARGS, message)
    }
}

impl From<hertz_media_store::Error> for ServiceError {
    fn from(err: hertz_media_store::Error) -> Self {
        Self::Categorized {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<ServiceError> for ErrorShape {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Categorized { code, message } => Self::new(code, message),
            ServiceError::Serde(e) => Self::new(error_codes::INVALID_ARGS, e.to_string()),
        }
    }
}

pub type ServiceResult<T = Value> = Result<T, ServiceError>;

// ── Media ───────────────────────────────────────────────────────────────────

/// Media storage operations exposed over the channel.
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Persist an audio payload into public media storage, returning the
    /// string form of the created entry's identifier.
    async fn save_audio(&self, params: Value) -> ServiceResult;
}

pub struct NoopMediaService;

#[async_trait]
impl MediaService for NoopMediaService {
    async fn save_audio(&self, _params: Value) -> ServiceResult {
        Err(ServiceError::categorized(
            error_codes::EXCEPTION,
            "media store not configured",
        ))
    }
}

// ── Services bundle ─────────────────────────────────────────────────────────

/// Bundle of domain service trait objects the dispatcher hands to handlers.
pub struct Services {
    pub media: Arc<dyn MediaService>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            media: Arc::new(NoopMediaService),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
