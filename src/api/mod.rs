mod client;
mod error;
pub mod health;
#[cfg(test)]
pub mod mock;

pub use client::{ApiRequest, BackendClient, HttpResponse, ReqwestBackend};
pub use error::ApiError;
