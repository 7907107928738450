use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use atrio_auth::{CredentialIssuer, IssuerError, NewUser, RoutePolicy, UserSession};

/// Shared service wiring for the HTTP layer.
pub struct AppServices {
    pub issuer: Arc<dyn CredentialIssuer>,
    pub policy: Arc<RoutePolicy>,
}

/// Default wiring: in-memory issuer plus the given policy table.
pub fn build_services(policy: RoutePolicy) -> AppServices {
    AppServices {
        issuer: Arc::new(InMemoryIssuer::default()),
        policy: Arc::new(policy),
    }
}

struct StoredUser {
    session: UserSession,
    password: String,
}

/// In-memory stand-in for the external credential issuer.
///
/// Development/test double: records live for the process lifetime, ids are
/// sequential, and credentials are compared verbatim. The real issuer is an
/// external service; nothing in the portal itself verifies passwords.
#[derive(Default)]
pub struct InMemoryIssuer {
    users: Mutex<Vec<StoredUser>>,
}

#[async_trait]
impl CredentialIssuer for InMemoryIssuer {
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserSession, IssuerError> {
        let users = self
            .users
            .lock()
            .map_err(|_| IssuerError::Unavailable("user store poisoned".to_string()))?;

        users
            .iter()
            .find(|u| u.session.email == email && u.password == password)
            .map(|u| u.session.clone())
            .ok_or(IssuerError::InvalidCredentials)
    }

    async fn register(&self, user: NewUser) -> Result<UserSession, IssuerError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| IssuerError::Unavailable("user store poisoned".to_string()))?;

        if users.iter().any(|u| u.session.email == user.email) {
            return Err(IssuerError::EmailTaken);
        }

        let session = UserSession {
            id: users.len() as i64 + 1,
            name: user.name,
            email: user.email,
            role: user.role,
        };
        users.push(StoredUser {
            session: session.clone(),
            password: user.password,
        });

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrio_auth::Role;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ana Lima".to_string(),
            email: email.to_string(),
            password: "s3nha".to_string(),
            role: Role::Cliente,
        }
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let issuer = InMemoryIssuer::default();

        let registered = issuer.register(new_user("ana@example.com")).await.unwrap();
        assert_eq!(registered.id, 1);

        let session = issuer.authenticate("ana@example.com", "s3nha").await.unwrap();
        assert_eq!(session, registered);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let issuer = InMemoryIssuer::default();
        issuer.register(new_user("ana@example.com")).await.unwrap();

        let err = issuer.authenticate("ana@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, IssuerError::InvalidCredentials));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let issuer = InMemoryIssuer::default();
        issuer.register(new_user("ana@example.com")).await.unwrap();

        let err = issuer.register(new_user("ana@example.com")).await.unwrap_err();
        assert!(matches!(err, IssuerError::EmailTaken));
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let issuer = InMemoryIssuer::default();
        let first = issuer.register(new_user("a@example.com")).await.unwrap();
        let second = issuer.register(new_user("b@example.com")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
    }
}
