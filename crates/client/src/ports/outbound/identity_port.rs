//! Identity Port - authentication against the external identity provider.
//!
//! Sign-in and sign-up report recoverable validation failures through the
//! `AuthError` taxonomy so the login view can show specific text; every
//! other failure is logged and swallowed at the service layer.

use thiserror::Error;

/// The authenticated user, as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl AuthUser {
    /// Name to greet the user with: display name, else email, else uid.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

/// Recoverable and terminal authentication failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("password too weak")]
    WeakPassword,

    #[error("email already in use")]
    EmailInUse,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("auth provider error: {0}")]
    Other(String),
}

/// Listener invoked whenever the current user changes.
pub type AuthListener = Box<dyn Fn(Option<AuthUser>) + Send + Sync>;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait IdentityPort: Send + Sync {
    /// Redirect-based provider sign-in. Completion is reported through the
    /// auth-changed listener, not the return value.
    async fn sign_in_with_provider(&self) -> Result<(), AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<AuthUser, AuthError>;

    async fn sign_up_with_password(&self, email: &str, password: &str)
        -> Result<AuthUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The currently signed-in user, if any.
    async fn current_user(&self) -> Option<AuthUser>;

    /// Register for "current user changed" notifications. The listener is
    /// also invoked once with the current state at registration time.
    fn on_auth_changed(&self, listener: AuthListener);
}
