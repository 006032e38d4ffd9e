//! Identity claims carried inside access tokens.

use serde::{Deserialize, Serialize};

/// The identity embedded in a credential.
///
/// Immutable once issued. The verifier returns it verbatim; it is never
/// re-derived from the store on each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Opaque user record identifier (users.id)
    pub subject_id: String,
    pub username: String,
    pub email: String,
}

impl IdentityClaim {
    pub fn new(
        subject_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Wire form of the token payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier (users.id)
    pub sub: String,
    pub username: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> IdentityClaim {
        IdentityClaim {
            subject_id: self.sub.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}
