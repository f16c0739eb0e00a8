//! Core abstractions: the error taxonomy and service traits.

pub mod error;
pub mod service;

pub use error::{ApiError, ApiResult};
pub use service::ApiService;
