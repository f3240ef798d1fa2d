//! REST adapter for the external identity provider.
//!
//! Speaks an identity-toolkit style endpoint (`accounts:signInWithPassword`,
//! `accounts:signUp`), maps the provider's error codes onto the `AuthError`
//! taxonomy, and fans "current user changed" notifications out to
//! registered listeners. On sign-in the session token is pushed into the
//! document-store API client so subsequent requests are authenticated.

use std::sync::{Arc, RwLock};

use serde::Deserialize;
use serde_json::json;

use crate::ports::outbound::{ApiError, AuthError, AuthUser, IdentityPort, RawApiPort};
use crate::ports::outbound::AuthListener;

pub struct RestIdentity {
    api: Arc<dyn RawApiPort>,
    /// API clients that get the session bearer token on sign-in/out.
    token_sinks: Vec<Arc<dyn RawApiPort>>,
    current: RwLock<Option<AuthUser>>,
    listeners: RwLock<Vec<AuthListener>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    local_id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    id_token: String,
}

impl RestIdentity {
    pub fn new(api: Arc<dyn RawApiPort>, token_sinks: Vec<Arc<dyn RawApiPort>>) -> Self {
        Self {
            api,
            token_sinks,
            current: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
        }
    }

    fn establish_session(&self, response: SessionResponse) -> AuthUser {
        let user = AuthUser {
            uid: response.local_id,
            display_name: response.display_name.filter(|n| !n.is_empty()),
            email: response.email,
        };
        for sink in &self.token_sinks {
            sink.set_auth_token(Some(response.id_token.clone()));
        }
        if let Ok(mut slot) = self.current.write() {
            *slot = Some(user.clone());
        }
        self.notify();
        user
    }

    fn notify(&self) {
        let current = self.current.read().ok().and_then(|c| c.clone());
        if let Ok(listeners) = self.listeners.read() {
            for listener in listeners.iter() {
                listener(current.clone());
            }
        }
    }

    async fn post_credentials(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let value = self
            .api
            .post_json(endpoint, &body)
            .await
            .map_err(map_api_error)?;
        let response: SessionResponse = serde_json::from_value(value)
            .map_err(|e| AuthError::Other(format!("malformed session response: {e}")))?;
        Ok(self.establish_session(response))
    }
}

/// Translate a provider failure into the auth taxonomy. The provider
/// reports validation failures as an error code string in the body.
fn map_api_error(error: ApiError) -> AuthError {
    let ApiError::Status { message, .. } = &error else {
        return AuthError::Other(error.to_string());
    };
    if message.contains("WEAK_PASSWORD") {
        AuthError::WeakPassword
    } else if message.contains("EMAIL_EXISTS") {
        AuthError::EmailInUse
    } else if message.contains("INVALID_EMAIL") {
        AuthError::InvalidEmail
    } else if message.contains("INVALID_PASSWORD")
        || message.contains("INVALID_LOGIN_CREDENTIALS")
        || message.contains("EMAIL_NOT_FOUND")
    {
        AuthError::InvalidCredentials
    } else {
        AuthError::Other(error.to_string())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl IdentityPort for RestIdentity {
    async fn sign_in_with_provider(&self) -> Result<(), AuthError> {
        // Redirect-based provider sign-in only exists on the hosted web
        // build; this adapter has no browser to redirect.
        Err(AuthError::Other(
            "provider sign-in is not available on this target".to_string(),
        ))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        self.post_credentials("/v1/accounts:signInWithPassword", email, password)
            .await
    }

    async fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        self.post_credentials("/v1/accounts:signUp", email, password)
            .await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        for sink in &self.token_sinks {
            sink.set_auth_token(None);
        }
        if let Ok(mut slot) = self.current.write() {
            *slot = None;
        }
        self.notify();
        Ok(())
    }

    async fn current_user(&self) -> Option<AuthUser> {
        self.current.read().ok().and_then(|c| c.clone())
    }

    fn on_auth_changed(&self, listener: AuthListener) {
        let current = self.current.read().ok().and_then(|c| c.clone());
        listener(current);
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(message: &str) -> ApiError {
        ApiError::Status {
            status: 400,
            message: format!(r#"{{"error":{{"message":"{message}"}}}}"#),
        }
    }

    #[test]
    fn provider_error_codes_map_onto_the_taxonomy() {
        assert_eq!(
            map_api_error(status("WEAK_PASSWORD : Password should be at least 6 characters")),
            AuthError::WeakPassword
        );
        assert_eq!(map_api_error(status("EMAIL_EXISTS")), AuthError::EmailInUse);
        assert_eq!(map_api_error(status("INVALID_EMAIL")), AuthError::InvalidEmail);
        assert_eq!(
            map_api_error(status("INVALID_LOGIN_CREDENTIALS")),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            map_api_error(status("EMAIL_NOT_FOUND")),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn network_failures_stay_generic() {
        let mapped = map_api_error(ApiError::Network("connection refused".to_string()));
        assert!(matches!(mapped, AuthError::Other(_)));
    }
}
