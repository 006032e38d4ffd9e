//! Security-relevant events.
//!
//! Reasons are distinguished here and nowhere else: responses for every
//! reason in a family are identical.

use tracing::warn;

use crate::error::{AuthRejection, LoginFailure};
use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

pub fn login_failed(reason: LoginFailure, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason = reason.as_str(),
        "Authentication failure"
    );
}

/// A credential was presented but rejected, or a protected operation was
/// attempted anonymously.
pub fn access_denied(reason: AuthRejection, path: &str) {
    let trace_id = trace_ctx::trace_id();
    let event = if reason.is_invalid_token() {
        "SECURITY_TOKEN_REJECTED"
    } else {
        "SECURITY_UNAUTHENTICATED_ACCESS"
    };

    warn!(
        event,
        %trace_id,
        path,
        reason = reason.as_str(),
        "Access denied"
    );
}
