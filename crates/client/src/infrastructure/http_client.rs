//! HTTP adapter implementing `RawApiPort`.
//!
//! reqwest on desktop, gloo-net on wasm; both behind the same object-safe
//! trait so the store and identity adapters never see the difference.

use std::sync::RwLock;

use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// JSON-over-HTTP client bound to one base URL.
pub struct ApiAdapter {
    base: Url,
    token: RwLock<Option<String>>,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            token: RwLock::new(None),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Network(format!("bad request path {path}: {e}")))
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use super::*;

    impl ApiAdapter {
        async fn send(
            &self,
            method: reqwest::Method,
            path: &str,
            body: Option<&Value>,
        ) -> Result<Value, ApiError> {
            let url = self.url(path)?;
            let mut request = self.client.request(method, url);
            if let Some(token) = self.bearer() {
                request = request.bearer_auth(token);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message: text,
                });
            }
            if text.is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(reqwest::Method::GET, path, None).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.send(reqwest::Method::POST, path, Some(body)).await
        }

        async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.send(reqwest::Method::PATCH, path, Some(body)).await
        }

        fn set_auth_token(&self, token: Option<String>) {
            if let Ok(mut slot) = self.token.write() {
                *slot = token;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use gloo_net::http::{Method, RequestBuilder};

    impl ApiAdapter {
        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<&Value>,
        ) -> Result<Value, ApiError> {
            let url = self.url(path)?;
            let mut request = RequestBuilder::new(url.as_str()).method(method);
            if let Some(token) = self.bearer() {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }

            let request = match body {
                Some(body) => request
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?,
                None => request
                    .build()
                    .map_err(|e| ApiError::Network(e.to_string()))?,
            };

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !(200..300).contains(&status) {
                return Err(ApiError::Status {
                    status,
                    message: text,
                });
            }
            if text.is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Method::GET, path, None).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.send(Method::POST, path, Some(body)).await
        }

        async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.send(Method::PATCH, path, Some(body)).await
        }

        fn set_auth_token(&self, token: Option<String>) {
            if let Ok(mut slot) = self.token.write() {
                *slot = token;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_handles_leading_slash() {
        let adapter = ApiAdapter::new(Url::parse("http://localhost:8080/api/").expect("base"));
        let url = adapter.url("/users/u1/worlds").expect("join");
        assert_eq!(url.as_str(), "http://localhost:8080/api/users/u1/worlds");
    }
}
