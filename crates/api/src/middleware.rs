use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use atrio_auth::{GateDecision, RoutePolicy, SESSION_COOKIE, gate};

use crate::context::SessionContext;

#[derive(Clone)]
pub struct GateState {
    pub policy: Arc<RoutePolicy>,
}

/// The authentication gate, layered over the whole router.
///
/// Requests outside the protected prefixes pass through untouched. For
/// intercepted requests the decision is delegated to [`gate::evaluate`];
/// an allowed request reaches its handler with the decoded session attached
/// as a [`SessionContext`] extension.
pub async fn session_gate(
    State(state): State<GateState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let credential = session_cookie(req.headers());

    match gate::evaluate(&state.policy, req.uri().path(), credential.as_deref()) {
        GateDecision::Bypass => next.run(req).await,
        GateDecision::Allow(session) => {
            req.extensions_mut().insert(SessionContext::new(session));
            next.run(req).await
        }
        GateDecision::Redirect(to) => Redirect::to(&to).into_response(),
    }
}

/// Pull the session credential off the `Cookie` header, if attached.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(value) = value.to_str() else { continue };

        for pair in value.split(';') {
            let Some(rest) = pair.trim().strip_prefix(SESSION_COOKIE) else {
                continue;
            };
            let Some(raw) = rest.strip_prefix('=') else {
                continue;
            };
            // The login route percent-encodes the value; a credential that
            // is not valid percent-encoding is handed to the codec as-is
            // and rejected there.
            return Some(
                urlencoding::decode(raw)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| raw.to_string()),
            );
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn finds_the_session_cookie_among_others() {
        let headers = headers("theme=dark; user=%7B%22id%22%3A1%7D; lang=pt-BR");
        assert_eq!(session_cookie(&headers).as_deref(), Some("{\"id\":1}"));
    }

    #[test]
    fn ignores_cookies_with_a_matching_name_prefix() {
        let headers = headers("username=ana; userx=1");
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn absent_header_means_no_credential() {
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }
}
