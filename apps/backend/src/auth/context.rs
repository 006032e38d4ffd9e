//! Per-request trust state and the function that derives it from the
//! `Authorization` header.
//!
//! Per request: no header → `Anonymous`; header present → verify →
//! `Trusted` or rejected. A presented-but-invalid credential is never
//! downgraded to anonymous.

use std::time::SystemTime;

use crate::auth::claims::IdentityClaim;
use crate::auth::jwt::verify_access_token;
use crate::error::{AppError, AuthRejection};
use crate::state::security_config::SecurityConfig;

/// An identity recovered from a verified credential.
///
/// There is no public constructor: the only way to obtain one is through
/// [`bind_request_context`], so downstream code can rely on it having passed
/// signature and expiry checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedIdentity {
    claim: IdentityClaim,
}

impl TrustedIdentity {
    pub(crate) fn from_verified(claim: IdentityClaim) -> Self {
        Self { claim }
    }

    pub fn claim(&self) -> &IdentityClaim {
        &self.claim
    }

    pub fn subject_id(&self) -> &str {
        &self.claim.subject_id
    }
}

/// Execution context for one request. Created fresh, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    Anonymous,
    Trusted(TrustedIdentity),
}

impl RequestContext {
    pub fn user(&self) -> Option<&IdentityClaim> {
        match self {
            RequestContext::Anonymous => None,
            RequestContext::Trusted(identity) => Some(identity.claim()),
        }
    }

    pub fn is_trusted(&self) -> bool {
        matches!(self, RequestContext::Trusted(_))
    }
}

/// Pull the token out of `"<scheme> <token>"`.
///
/// Exactly two whitespace-separated fields are required and the scheme must be
/// `Bearer` (ASCII case-insensitive). `"Bearer"` alone is malformed, not
/// absent.
fn extract_bearer(raw: &str) -> Result<&str, AppError> {
    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Ok(token),
        _ => Err(AppError::unauthorized(AuthRejection::MalformedToken)),
    }
}

/// Derive the request context from the raw `Authorization` header value.
///
/// - `None` → `Ok(Anonymous)`; never fails.
/// - `Some(..)` → `Ok(Trusted(claim))` with the embedded claim verbatim, or
///   `Err(AppError::Unauthorized { .. })` for malformed, expired or tampered
///   credentials.
pub fn bind_request_context(
    raw_authorization: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<RequestContext, AppError> {
    let Some(raw) = raw_authorization else {
        return Ok(RequestContext::Anonymous);
    };

    let token = extract_bearer(raw)?;
    let claims = verify_access_token(token, now, security)?;

    Ok(RequestContext::Trusted(TrustedIdentity::from_verified(
        claims.identity(),
    )))
}
