use crate::session::{self, DecodeFailure, UserSession};
use crate::policy::RoutePolicy;

/// Where unauthenticated callers are sent: the public entry point.
pub const PUBLIC_ENTRY: &str = "/";

/// Terminal outcome of evaluating one request against the gate.
///
/// There is no retry and no partial authorization: a request is forwarded
/// unchanged or answered with a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The path matches no protected prefix; the gate does not intercept.
    Bypass,
    /// Forward the request; the decoded session travels with it.
    Allow(UserSession),
    /// Answer with a redirect to the given path.
    Redirect(String),
}

/// Evaluate one request against the policy table.
///
/// This is the whole authorization state machine: stateless across requests,
/// no I/O, no suspension points. Identical `(path, credential)` input always
/// yields the identical decision. The only side effect is a diagnostic when
/// a credential is present but fails to decode — that indicates tampering or
/// a stale format, unlike the expected missing-credential and wrong-role
/// navigations, which are not errors.
pub fn evaluate(policy: &RoutePolicy, path: &str, credential: Option<&str>) -> GateDecision {
    let Some((prefix, _owner)) = policy.matched_prefix(path) else {
        return GateDecision::Bypass;
    };

    let session = match session::decode(credential) {
        Ok(session) => session,
        Err(DecodeFailure::Missing) => {
            return GateDecision::Redirect(PUBLIC_ENTRY.to_string());
        }
        Err(failure) => {
            tracing::warn!(path, error = %failure, "session credential rejected");
            return GateDecision::Redirect(PUBLIC_ENTRY.to_string());
        }
    };

    if policy.is_allowed(session.role, prefix) {
        return GateDecision::Allow(session);
    }

    // Wrong role for this area: send the caller to the prefix it does own,
    // or to the public entry point when the table has none for it.
    let target = policy.home_prefix(session.role).unwrap_or(PUBLIC_ENTRY);
    GateDecision::Redirect(target.to_string())
}
