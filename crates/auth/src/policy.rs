use core::str::FromStr;

use thiserror::Error;

use crate::{Role, UnknownRole};

/// Static mapping from protected route prefix to the role that owns it.
///
/// Each protected prefix belongs to exactly one role; a role may only enter
/// its own prefix. The table is built once at startup and read-only after
/// that, so concurrent gate invocations share it without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    entries: Vec<(String, Role)>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid policy entry '{0}': expected 'prefix=role'")]
    InvalidEntry(String),

    #[error("invalid protected prefix '{0}': must start with '/' and not be '/' itself")]
    InvalidPrefix(String),

    #[error("protected prefix '{0}' is mapped twice")]
    DuplicatePrefix(String),

    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),
}

impl RoutePolicy {
    pub fn new(entries: impl IntoIterator<Item = (String, Role)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a policy table from its configuration form: comma-separated
    /// `prefix=role` entries, e.g. `/cliente=cliente,/suporte=suporte`.
    pub fn parse(table: &str) -> Result<Self, PolicyError> {
        let mut entries: Vec<(String, Role)> = Vec::new();

        for item in table.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }

            let (prefix, role) = item
                .split_once('=')
                .ok_or_else(|| PolicyError::InvalidEntry(item.to_string()))?;
            let prefix = prefix.trim();
            if !prefix.starts_with('/') || prefix == "/" {
                return Err(PolicyError::InvalidPrefix(prefix.to_string()));
            }
            if entries.iter().any(|(p, _)| p == prefix) {
                return Err(PolicyError::DuplicatePrefix(prefix.to_string()));
            }

            let role = Role::from_str(role.trim())?;
            entries.push((prefix.to_string(), role));
        }

        Ok(Self { entries })
    }

    /// The protected prefix matching `path`, if any, with its owning role.
    ///
    /// Matching is per path segment: `/cliente` matches `/cliente` and
    /// `/cliente/dashboard` but never `/clientela`.
    pub fn matched_prefix(&self, path: &str) -> Option<(&str, Role)> {
        self.entries
            .iter()
            .find(|(prefix, _)| path_has_prefix(path, prefix))
            .map(|(prefix, role)| (prefix.as_str(), *role))
    }

    /// The role owning a protected prefix, if the prefix is in the table.
    pub fn owning_role(&self, prefix: &str) -> Option<Role> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, role)| *role)
    }

    /// Is `role` permitted to enter the protected prefix?
    pub fn is_allowed(&self, role: Role, prefix: &str) -> bool {
        self.owning_role(prefix) == Some(role)
    }

    /// The prefix owned by `role`: the redirect target when that role is
    /// denied elsewhere. `None` when the table is not exhaustive for the
    /// role; the gate then falls back to the public entry point.
    pub fn home_prefix(&self, role: Role) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, r)| *r == role)
            .map(|(prefix, _)| prefix.as_str())
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new([
            ("/cliente".to_string(), Role::Cliente),
            ("/suporte".to_string(), Role::Suporte),
        ])
    }
}

fn path_has_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
