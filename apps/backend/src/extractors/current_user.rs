use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::IdentityClaim;
use crate::auth::context::RequestContext;
use crate::auth::gate::{require_owner, OwnerScope};
use crate::error::{AppError, AuthRejection};
use crate::logging::security;

/// The authenticated caller.
///
/// Taking this extractor is how a handler declares that it needs a trusted
/// context: anonymous requests are rejected before the handler body runs, and
/// `scope` is the only key the handler gets for touching owned records.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub scope: OwnerScope,
    pub claim: IdentityClaim,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let extensions = req.extensions();
        let Some(ctx) = extensions.get::<RequestContext>() else {
            return ready(Err(AppError::internal("request context not bound")));
        };

        let result = match (require_owner(ctx), ctx.user()) {
            (Ok(scope), Some(claim)) => Ok(CurrentUser {
                scope,
                claim: claim.clone(),
            }),
            (Err(err), _) => {
                security::access_denied(AuthRejection::NotAuthenticated, req.path());
                Err(err)
            }
            (Ok(_), None) => Err(AppError::internal("owner scope without identity")),
        };
        ready(result)
    }
}
