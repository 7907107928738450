use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Name of the cookie carrying the session credential.
pub const SESSION_COOKIE: &str = "user";

/// The decoded session credential.
///
/// A `UserSession` exists only as the decoded form of the credential string
/// carried by a request: it is built once per intercepted request and
/// discarded with the authorization decision. The gate never mutates it and
/// never keeps a copy across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Opaque identifier issued by the credential issuer.
    pub id: i64,
    /// Display name; not consulted by the gate.
    pub name: String,
    /// Not consulted by the gate.
    pub email: String,
    pub role: Role,
}

/// Why a credential string failed to decode into a [`UserSession`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    #[error("no session credential attached")]
    Missing,

    #[error("session credential is not a valid session record")]
    Malformed,

    #[error("session credential carries an unrecognized role: '{0}'")]
    UnknownRole(String),
}

/// Raw wire shape of the credential.
///
/// The role is decoded in a second step so an out-of-enumeration tag is
/// reported as [`DecodeFailure::UnknownRole`] instead of being folded into
/// `Malformed` (or, worse, waved through).
#[derive(Deserialize)]
struct WireSession {
    id: i64,
    name: String,
    email: String,
    role: String,
}

/// Decode the transport representation of a session.
///
/// Pure and synchronous: no network or storage I/O.
pub fn decode(raw: Option<&str>) -> Result<UserSession, DecodeFailure> {
    let raw = raw.ok_or(DecodeFailure::Missing)?;

    let wire: WireSession = serde_json::from_str(raw).map_err(|_| DecodeFailure::Malformed)?;
    let role = Role::from_str(&wire.role).map_err(|e| DecodeFailure::UnknownRole(e.0))?;

    Ok(UserSession {
        id: wire.id,
        name: wire.name,
        email: wire.email,
        role,
    })
}

/// Encode a session into its transport representation.
///
/// Consumed at session establishment (login/registration); the gate itself
/// only ever decodes.
pub fn encode(session: &UserSession) -> String {
    serde_json::json!({
        "id": session.id,
        "name": session.name,
        "email": session.email,
        "role": session.role.as_str(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserSession {
        UserSession {
            id: 7,
            name: "Ana Lima".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::Cliente,
        }
    }

    #[test]
    fn decodes_an_encoded_session() {
        let raw = encode(&sample());
        let decoded = decode(Some(&raw)).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn absent_credential_is_missing() {
        assert_eq!(decode(None), Err(DecodeFailure::Missing));
    }

    #[test]
    fn garbage_is_malformed() {
        for raw in ["", "not-json", "{}", "[1,2]", "{\"id\":\"x\"}"] {
            assert_eq!(decode(Some(raw)), Err(DecodeFailure::Malformed), "raw: {raw:?}");
        }
    }

    #[test]
    fn record_without_role_is_malformed() {
        let raw = r#"{"id":1,"name":"Ana","email":"ana@example.com"}"#;
        assert_eq!(decode(Some(raw)), Err(DecodeFailure::Malformed));
    }

    #[test]
    fn unrecognized_role_is_its_own_failure() {
        let raw = r#"{"id":1,"name":"Ana","email":"ana@example.com","role":"administrador"}"#;
        assert_eq!(
            decode(Some(raw)),
            Err(DecodeFailure::UnknownRole("administrador".to_string()))
        );
    }

    #[test]
    fn extra_fields_are_tolerated() {
        // Stale clients may attach more than the portal writes today.
        let raw = r#"{"id":1,"name":"Ana","email":"ana@example.com","role":"suporte","theme":"dark"}"#;
        let decoded = decode(Some(raw)).unwrap();
        assert_eq!(decoded.role, Role::Suporte);
    }
}
