//! Config-driven token validator.
//!
//! Maps opaque bearer tokens to identities. This stands in for an
//! external identity provider in development and tests; a JWT-backed
//! provider implements [`TokenValidator`] the same way.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::{AuthError, AuthenticatedUser, TokenValidator};

/// Validator backed by a fixed token → identity table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenValidator {
    tokens: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenValidator {
    /// Create an empty validator; every token is rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for an identity.
    pub fn with_token(mut self, token: &str, subject: &str, email: &str) -> Self {
        self.tokens.insert(
            token.to_string(),
            AuthenticatedUser {
                subject: subject.to_string(),
                email: email.to_string(),
            },
        );
        self
    }
}

impl TokenValidator for StaticTokenValidator {
    fn validate(
        &self,
        token: &str,
    ) -> Pin<Box<dyn Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>> {
        let user = self
            .tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::InvalidToken("unknown token".to_string()));
        Box::pin(async move { user })
    }
}
