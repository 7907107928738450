use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of an authenticated portal user.
///
/// This is a closed enumeration: the gate only ever makes authorization
/// decisions for these tags. Anything else coming off the wire is a decode
/// failure, never a fourth role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Customer-facing area (`/cliente`).
    Cliente,
    /// Support-staff area (`/suporte`).
    Suporte,
}

/// A role tag outside the recognized enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized role: '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 2] = [Role::Cliente, Role::Suporte];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cliente => "cliente",
            Role::Suporte => "suporte",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cliente" => Ok(Role::Cliente),
            "suporte" => Ok(Role::Suporte),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_tags() {
        assert_eq!("cliente".parse::<Role>().unwrap(), Role::Cliente);
        assert_eq!("suporte".parse::<Role>().unwrap(), Role::Suporte);
    }

    #[test]
    fn rejects_unrecognized_tags() {
        for tag in ["", "admin", "administrador", "comum", "Cliente", "CLIENTE"] {
            let err = tag.parse::<Role>().unwrap_err();
            assert_eq!(err, UnknownRole(tag.to_string()));
        }
    }

    #[test]
    fn wire_tag_round_trips_through_serde() {
        let json = serde_json::to_string(&Role::Suporte).unwrap();
        assert_eq!(json, "\"suporte\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Suporte);
    }
}
