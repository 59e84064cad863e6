//! Bearer-token authentication for the Medvoy dashboard API.
//!
//! Provides:
//! - [`AuthenticatedUser`] — Identity extracted from a validated token
//! - [`TokenValidator`] — Trait for async token validation (implement per provider)
//! - [`StaticTokenValidator`] — Config-driven validator for development and tests
//! - [`AuthLayer`] / [`AuthService`] — Tower middleware parameterised over `TokenValidator`
//! - [`AuthConfig`] — Configuration for the auth layer
//! - [`AuthError`] — Auth-specific error types
//!
//! Authentication answers "who is calling" (401 on failure); ownership
//! checks against the clinic record happen in the route handlers (403).

mod error;
mod middleware;
mod user;
mod validator;

pub use error::AuthError;
pub use middleware::{AuthLayer, AuthService};
pub use user::AuthenticatedUser;
pub use validator::StaticTokenValidator;

/// Configuration for the auth middleware.
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    /// Whether authentication is enabled. When false, all requests pass
    /// through as the anonymous development user.
    pub enabled: bool,
}

/// Trait for validating bearer tokens and extracting user identity.
///
/// Implement this for each identity provider. The middleware calls
/// `validate()` with the raw token and inserts the resulting user into
/// request extensions on success.
pub trait TokenValidator: Send + Sync + 'static {
    /// Validate a token and return the authenticated user.
    fn validate(
        &self,
        token: &str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>,
    >;
}
