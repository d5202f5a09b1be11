//! Authentication provider trait - Abstraction over sign-in backends
//!
//! The login / sign-up form talks to an [`AuthProvider`]. RuleGo ships only
//! [`InertAuthProvider`], which verifies nothing. A real backend can be
//! substituted without touching the screens.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

/// What the user typed into the form
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Login {
        /// Email or username
        identifier: String,
        password: String,
    },
    SignUp {
        email: String,
        username: String,
        contact_number: String,
        password: String,
        confirm_password: String,
    },
}

impl Credentials {
    /// The identity the form was submitted for
    pub fn identity(&self) -> &str {
        match self {
            Credentials::Login { identifier, .. } => identifier,
            Credentials::SignUp { email, .. } => email,
        }
    }

    pub fn is_sign_up(&self) -> bool {
        matches!(self, Credentials::SignUp { .. })
    }
}

// Passwords stay out of logs and panics
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Login { identifier, .. } => f
                .debug_struct("Login")
                .field("identifier", identifier)
                .finish_non_exhaustive(),
            Credentials::SignUp {
                email, username, ..
            } => f
                .debug_struct("SignUp")
                .field("email", email)
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The backend accepted and verified the credentials
    Authenticated { display_name: String },
    /// The form was received but nothing was checked
    Unverified { identity: String },
}

/// Errors a real authentication backend may report
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credentials were checked and refused
    #[error("Sign-in rejected for {identity}")]
    Rejected { identity: String },

    /// The backend could not be reached or failed
    #[error("Authentication backend '{backend}' failed: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

/// Trait for authentication backends
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Submit the form
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}

/// Accepts every submission without verification
#[derive(Debug, Default, Clone, Copy)]
pub struct InertAuthProvider;

#[async_trait]
impl AuthProvider for InertAuthProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError> {
        match credentials {
            Credentials::Login { identifier, .. } => {
                info!(backend = self.name(), identifier, "Login submitted");
            }
            Credentials::SignUp {
                email, username, ..
            } => {
                info!(backend = self.name(), email, username, "Sign up submitted");
            }
        }

        Ok(AuthOutcome::Unverified {
            identity: credentials.identity().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "inert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that refuses everyone
    struct RejectingProvider;

    #[async_trait]
    impl AuthProvider for RejectingProvider {
        async fn authenticate(
            &self,
            credentials: &Credentials,
        ) -> Result<AuthOutcome, AuthError> {
            Err(AuthError::Rejected {
                identity: credentials.identity().to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "rejecting"
        }
    }

    fn login() -> Credentials {
        Credentials::Login {
            identifier: "traveler@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_inert_provider_verifies_nothing() {
        let outcome = InertAuthProvider.authenticate(&login()).await.unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::Unverified {
                identity: "traveler@example.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_inert_provider_accepts_sign_up() {
        let sign_up = Credentials::SignUp {
            email: "new@example.com".to_string(),
            username: "newbie".to_string(),
            contact_number: "+90 555 000 0000".to_string(),
            password: "a".to_string(),
            confirm_password: "b".to_string(),
        };
        assert!(sign_up.is_sign_up());
        let outcome = InertAuthProvider.authenticate(&sign_up).await.unwrap();
        assert!(matches!(outcome, AuthOutcome::Unverified { identity } if identity == "new@example.com"));
    }

    #[tokio::test]
    async fn test_provider_is_substitutable() {
        let providers: Vec<Box<dyn AuthProvider>> =
            vec![Box::new(InertAuthProvider), Box::new(RejectingProvider)];

        let mut results = Vec::new();
        for provider in &providers {
            results.push(provider.authenticate(&login()).await.is_ok());
        }
        assert_eq!(results, vec![true, false]);
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", login());
        assert!(rendered.contains("traveler@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
