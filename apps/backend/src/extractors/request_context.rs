use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::context::RequestContext;
use crate::error::AppError;

/// Hands the context bound by `ContextBinder` to a handler.
///
/// A missing context means the middleware was not mounted; that is a wiring
/// bug and fails the request rather than silently treating it as anonymous.
impl FromRequest for RequestContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<RequestContext>()
                .cloned()
                .ok_or_else(|| AppError::internal("request context not bound")),
        )
    }
}
