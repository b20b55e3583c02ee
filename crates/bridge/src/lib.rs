//! Bridge between the application layer's media-store channel and native
//! storage: method dispatch, the service seam, and the audio save handler.

pub mod bridge;
pub mod media;
pub mod methods;
pub mod services;

pub use {
    bridge::MediaStoreBridge,
    media::StoreMediaService,
    methods::{HandlerFn, MethodContext, MethodRegistry, MethodResult},
    services::{MediaService, NoopMediaService, ServiceError, ServiceResult, Services},
};
