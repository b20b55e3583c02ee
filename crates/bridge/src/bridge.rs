//! Entry point the transport layer hands channel calls to.

use std::sync::Arc;

use tracing::debug;

use hertz_protocol::{CHANNEL, MethodCall, MethodReply};

use crate::{
    methods::{MethodContext, MethodRegistry},
    services::Services,
};

/// Dispatches calls arriving on the media-store channel.
pub struct MediaStoreBridge {
    registry: MethodRegistry,
    services: Arc<Services>,
}

impl MediaStoreBridge {
    #[must_use]
    pub fn new(services: Services) -> Self {
        let registry = MethodRegistry::new();
        debug!(channel = CHANNEL, methods = ?registry.method_names(), "media-store bridge ready");
        Self {
            registry,
            services: Arc::new(services),
        }
    }

    /// Handle one call end to end; every invocation is independent.
    pub async fn handle(&self, call: MethodCall) -> MethodReply {
        self.registry
            .dispatch(MethodContext {
                method: call.method,
                args: call.args,
                services: self.services.clone(),
            })
            .await
    }

    #[must_use]
    pub fn method_names(&self) -> Vec<String> {
        self.registry.method_names()
    }
}

impl Default for MediaStoreBridge {
    fn default() -> Self {
        Self::new(Services::default())
    }
}
