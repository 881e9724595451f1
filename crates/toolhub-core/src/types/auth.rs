//! Caller authentication context for remote requests.

use std::fmt;

/// How a single tool invocation authenticates against the remote platform.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// Credentials supplied by the caller, forwarded verbatim.
    Forwarded(ForwardedCredentials),
    /// The process-wide client-credentials token.
    ClientCredentials,
}

/// A bearer credential plus organization identifier issued by the identity provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ForwardedCredentials {
    /// Token scheme, usually `Bearer`.
    pub token_type: String,
    /// The access token.
    pub access_token: String,
    /// Organization SSO identifier, sent as `x-org-sso-id`.
    pub org_sso_id: Option<String>,
}

impl ForwardedCredentials {
    /// The `Authorization` header value.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for ForwardedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardedCredentials")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("org_sso_id", &self.org_sso_id)
            .finish()
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forwarded(creds) => f.debug_tuple("Forwarded").field(creds).finish(),
            Self::ClientCredentials => write!(f, "ClientCredentials"),
        }
    }
}
