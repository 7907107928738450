use atrio_auth::UserSession;

/// Authenticated session for the current request.
///
/// Inserted into request extensions by the gate middleware once the request
/// is allowed; area handlers read it and perform no authorization of their
/// own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session: UserSession,
}

impl SessionContext {
    pub fn new(session: UserSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }
}
