//! Authenticated user identity.

/// An authenticated user identity, extracted from a validated token.
///
/// Stored in HTTP request extensions by the auth middleware; route
/// handlers read it to perform ownership checks against the clinic
/// record's `owner` subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable subject identifier; clinic records store this as `owner`.
    pub subject: String,
    /// The user's email address.
    pub email: String,
}

impl AuthenticatedUser {
    /// The pass-through identity used when authentication is disabled.
    pub fn anonymous() -> Self {
        Self {
            subject: "anonymous".to_string(),
            email: "anonymous@localhost".to_string(),
        }
    }

    /// Whether this user owns a record with the given owner subject.
    pub fn owns(&self, owner: &str) -> bool {
        self.subject == owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_check() {
        let user = AuthenticatedUser {
            subject: "sub_123".to_string(),
            email: "alice@example.com".to_string(),
        };
        assert!(user.owns("sub_123"));
        assert!(!user.owns("sub_456"));
    }

    #[test]
    fn test_anonymous_identity() {
        assert_eq!(AuthenticatedUser::anonymous().subject, "anonymous");
    }
}
