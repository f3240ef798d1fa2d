//! Auth Service - sign-in/sign-up/sign-out with user-facing messages.
//!
//! Sign-up failures map to specific text per failure code; sign-in gets one
//! generic message (no hint whether the email exists); provider sign-in and
//! sign-out failures are logged only.

use std::sync::Arc;

use crate::ports::outbound::{AuthError, AuthUser, IdentityPort};

/// Wraps the identity port and turns its errors into display text for the
/// login view. The `Err` string of each method is ready to render as-is.
#[derive(Clone)]
pub struct AuthService {
    identity: Arc<dyn IdentityPort>,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityPort>) -> Self {
        Self { identity }
    }

    /// Redirect-based provider sign-in. Failures are logged, never shown.
    pub async fn sign_in_with_provider(&self) {
        if let Err(e) = self.identity.sign_in_with_provider().await {
            tracing::error!("Provider sign-in failed: {e}");
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, String> {
        if email.is_empty() || password.is_empty() {
            return Err("Please enter email and password.".to_string());
        }
        self.identity
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| {
                tracing::error!("Email sign-in failed: {e}");
                "Invalid email or password.".to_string()
            })
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, String> {
        if email.is_empty() || password.is_empty() {
            return Err("Please enter email and password.".to_string());
        }
        self.identity
            .sign_up_with_password(email, password)
            .await
            .map_err(|e| {
                tracing::error!("Email sign-up failed: {e}");
                sign_up_message(&e).to_string()
            })
    }

    /// Sign the user out; completion is reported through the auth-changed
    /// listener. Failures are logged only.
    pub async fn sign_out(&self) {
        if let Err(e) = self.identity.sign_out().await {
            tracing::error!("Sign out failed: {e}");
        }
    }
}

fn sign_up_message(error: &AuthError) -> &'static str {
    match error {
        AuthError::WeakPassword => "Password should be at least 6 characters.",
        AuthError::EmailInUse => "This email is already in use.",
        AuthError::InvalidEmail => "Please enter a valid email address.",
        AuthError::InvalidCredentials | AuthError::Other(_) => {
            "Error creating account. Please try again."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockIdentityPort;

    fn service_failing_sign_up(error: AuthError) -> AuthService {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_up_with_password()
            .returning(move |_, _| Err(error.clone()));
        AuthService::new(Arc::new(identity))
    }

    #[tokio::test]
    async fn sign_up_maps_each_failure_code_to_its_message() {
        let cases = [
            (
                AuthError::WeakPassword,
                "Password should be at least 6 characters.",
            ),
            (AuthError::EmailInUse, "This email is already in use."),
            (
                AuthError::InvalidEmail,
                "Please enter a valid email address.",
            ),
            (
                AuthError::Other("backend down".to_string()),
                "Error creating account. Please try again.",
            ),
        ];
        for (error, expected) in cases {
            let service = service_failing_sign_up(error);
            let message = service
                .sign_up("a@b.test", "hunter2")
                .await
                .expect_err("should fail");
            assert_eq!(message, expected);
        }
    }

    #[tokio::test]
    async fn sign_in_failures_all_map_to_the_generic_message() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_in_with_password()
            .returning(|_, _| Err(AuthError::InvalidCredentials));
        let service = AuthService::new(Arc::new(identity));

        let message = service
            .sign_in("a@b.test", "wrong")
            .await
            .expect_err("should fail");
        assert_eq!(message, "Invalid email or password.");
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_before_hitting_the_provider() {
        let identity = MockIdentityPort::new(); // no expectations: must not be called
        let service = AuthService::new(Arc::new(identity));

        let message = service.sign_in("", "").await.expect_err("should fail");
        assert_eq!(message, "Please enter email and password.");
        let message = service.sign_up("a@b.test", "").await.expect_err("should fail");
        assert_eq!(message, "Please enter email and password.");
    }
}
