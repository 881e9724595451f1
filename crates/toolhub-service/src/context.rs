//! Request context carrying the caller's authentication for one tool invocation.

use toolhub_core::types::AuthContext;

/// Context for the current tool invocation.
///
/// Built by the dispatch shell and passed into service methods so that every
/// remote call is made with the right credentials.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// How remote calls are authenticated.
    pub auth: AuthContext,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    /// Returns whether the caller supplied its own credentials.
    pub fn is_forwarded(&self) -> bool {
        matches!(self.auth, AuthContext::Forwarded(_))
    }
}
