//! `atrio-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the session
//! codec, the role policy table, and the gate decision function are pure,
//! synchronous code. Transport (cookies, redirects) lives in `atrio-api`.

pub mod gate;
pub mod issuer;
pub mod policy;
pub mod roles;
pub mod session;

pub use gate::{GateDecision, PUBLIC_ENTRY, evaluate};
pub use issuer::{CredentialIssuer, IssuerError, NewUser};
pub use policy::{PolicyError, RoutePolicy};
pub use roles::{Role, UnknownRole};
pub use session::{DecodeFailure, SESSION_COOKIE, UserSession, decode, encode};
