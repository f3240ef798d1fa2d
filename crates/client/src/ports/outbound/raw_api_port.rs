//! Raw API Port - object-safe HTTP boundary.
//!
//! Adapters (reqwest on desktop, gloo-net on wasm) implement this trait;
//! the store and identity adapters are written against it so they stay
//! target-independent.

use serde_json::Value;
use thiserror::Error;

/// Errors crossing the HTTP boundary.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// Bearer token attached to subsequent requests; `None` clears it.
    fn set_auth_token(&self, token: Option<String>);
}
