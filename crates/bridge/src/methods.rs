use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use tracing::{debug, warn};

use hertz_protocol::{ErrorShape, MethodReply};

use crate::services::Services;

// ── Types ────────────────────────────────────────────────────────────────────

/// Context passed to every method handler.
pub struct MethodContext {
    pub method: String,
    pub args: serde_json::Value,
    pub services: Arc<Services>,
}

/// The result a method handler produces.
pub type MethodResult = Result<serde_json::Value, ErrorShape>;

/// A boxed async method handler.
pub type HandlerFn =
    Box<dyn Fn(MethodContext) -> Pin<Box<dyn Future<Output = MethodResult> + Send>> + Send + Sync>;

// ── Method registry ──────────────────────────────────────────────────────────

/// Maps channel operation names to their handlers.
pub struct MethodRegistry {
    handlers: HashMap<String, HandlerFn>,
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodRegistry {
    pub fn new() -> Self {
        let mut reg = Self {
            handlers: HashMap::new(),
        };
        reg.register_defaults();
        reg
    }

    pub fn register(&mut self, method: impl Into<String>, handler: HandlerFn) {
        self.handlers.insert(method.into(), handler);
    }

    /// Dispatch one call. Unrecognized operation names get a distinct
    /// not-implemented reply rather than an error.
    pub async fn dispatch(&self, ctx: MethodContext) -> MethodReply {
        let method = ctx.method.clone();

        let Some(handler) = self.handlers.get(&method) else {
            debug!(method, "method not implemented");
            return MethodReply::not_implemented();
        };

        debug!(method, "dispatching method");
        match handler(ctx).await {
            Ok(payload) => {
                debug!(method, "method ok");
                MethodReply::ok(payload)
            },
            Err(err) => {
                warn!(method, code = %err.code, msg = %err.message, "method error");
                MethodReply::err(err)
            },
        }
    }

    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    fn register_defaults(&mut self) {
        // saveAudioToPublic
        self.register(
            "saveAudioToPublic",
            Box::new(|ctx| {
                Box::pin(async move {
                    ctx.services
                        .media
                        .save_audio(ctx.args.clone())
                        .await
                        .map_err(ErrorShape::from)
                })
            }),
        );
    }
}
