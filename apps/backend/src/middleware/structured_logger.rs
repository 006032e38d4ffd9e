use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::auth::context::RequestContext;

/// One `request_completed` line per request, levelled by status class and
/// tagged with the caller's auth state.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // The context is only there once `ContextBinder` has run and
            // accepted the request.
            let (status, auth, user_id) = match &result {
                Ok(res) => {
                    let extensions = res.request().extensions();
                    let ctx = extensions.get::<RequestContext>();
                    (
                        res.status(),
                        auth_label(ctx),
                        ctx.and_then(RequestContext::user)
                            .map(|claim| claim.subject_id.clone()),
                    )
                }
                Err(err) => (err.as_response_error().status_code(), auth_label(None), None),
            };
            let status_code = status.as_u16();
            let duration_us = start.elapsed().as_micros() as u64;
            let user_id = user_id.as_deref().unwrap_or("-");

            if status.is_server_error() {
                error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, auth, user_id, %trace_id, "request_completed");
            } else if status.is_client_error() {
                warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, auth, user_id, %trace_id, "request_completed");
            } else {
                info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, auth, user_id, %trace_id, "request_completed");
            }

            result
        })
    }
}

/// `trusted`, `anonymous`, or `unbound` when no context was attached
/// (a rejected credential, or a request that never reached the binder).
pub fn auth_label(ctx: Option<&RequestContext>) -> &'static str {
    match ctx {
        Some(RequestContext::Trusted(_)) => "trusted",
        Some(RequestContext::Anonymous) => "anonymous",
        None => "unbound",
    }
}
