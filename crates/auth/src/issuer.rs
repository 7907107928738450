use async_trait::async_trait;
use thiserror::Error;

use crate::{Role, UserSession};

/// A user record to be created by the credential issuer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email is already registered")]
    EmailTaken,

    #[error("credential issuer unavailable: {0}")]
    Unavailable(String),
}

/// Contract of the external credential issuer.
///
/// The issuer authenticates email/password pairs and owns the user records;
/// the gate never computes or verifies passwords. Implementations live at
/// the edges (`atrio-api` ships an in-memory one for development and tests).
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Authenticate an email/password pair, returning the user record to be
    /// encoded into the session credential.
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserSession, IssuerError>;

    /// Create a user record and return it as a freshly established session.
    async fn register(&self, user: NewUser) -> Result<UserSession, IssuerError>;
}
