//! Ownership gate for mutations on a caller's own records.
//!
//! Protected store operations take an [`OwnerScope`] instead of an id. An
//! `OwnerScope` can only be produced here, from a `Trusted` request context,
//! so a client-supplied id can never become the scope key.

use crate::auth::context::RequestContext;
use crate::error::AppError;

/// The scope key for mutations: the subject id of the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerScope {
    subject_id: String,
}

impl OwnerScope {
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }
}

/// Require a trusted context and derive the owner scope from it.
///
/// Anonymous contexts fail with `AuthRejection::NotAuthenticated`, which
/// renders exactly like an invalid token.
pub fn require_owner(context: &RequestContext) -> Result<OwnerScope, AppError> {
    match context {
        RequestContext::Trusted(identity) => Ok(OwnerScope {
            subject_id: identity.subject_id().to_string(),
        }),
        RequestContext::Anonymous => Err(AppError::not_authenticated()),
    }
}
