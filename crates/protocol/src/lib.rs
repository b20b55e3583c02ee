//! Media-store channel protocol definitions.
//!
//! The application layer invokes native media operations over a single named
//! channel carrying JSON frames. Frame types:
//! - `MethodCall`  — application → native operation invocation
//! - `MethodReply` — native → application result
//!
//! A reply is one of three shapes: a success payload, a structured error, or
//! a distinct not-implemented signal for operation names the native side does
//! not recognize.

use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

/// Channel the application layer binds for media-store calls.
pub const CHANNEL: &str = "hertz/media_store";

// ── Error codes ──────────────────────────────────────────────────────────────

pub mod error_codes {
    pub const INVALID_ARGS: &str = "invalid_args";
    pub const INSERT_FAILED: &str = "insert_failed";
    pub const STREAM_NULL: &str = "stream_null";
    pub const EXCEPTION: &str = "exception";
}

// ── Error shape ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorShape {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorShape {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

// ── Frames ───────────────────────────────────────────────────────────────────

/// Application → native operation invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub args: serde_json::Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Native → application result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodReply {
    Ok { payload: serde_json::Value },
    Err { error: ErrorShape },
    NotImplemented,
}

impl MethodReply {
    pub fn ok(payload: serde_json::Value) -> Self {
        Self::Ok { payload }
    }

    pub fn err(error: ErrorShape) -> Self {
        Self::Err { error }
    }

    pub fn not_implemented() -> Self {
        Self::NotImplemented
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
