//! Binds a [`RequestContext`] to every request.
//!
//! No `Authorization` header yields `Anonymous` and the request continues. A
//! header that fails verification ends the request here with 401; it is never
//! downgraded to anonymous. Handlers read the result through the
//! `RequestContext` and `CurrentUser` extractors.

use std::future::{ready, Ready};
use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::auth::context::{bind_request_context, RequestContext};
use crate::error::{AppError, AuthRejection};
use crate::logging::security;
use crate::state::app_state::AppState;

#[derive(Clone, Default)]
pub struct ContextBinder;

impl<S, B> Transform<S, ServiceRequest> for ContextBinder
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ContextBinderMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ContextBinderMiddleware { service }))
    }
}

pub struct ContextBinderMiddleware<S> {
    service: S,
}

fn bind(req: &ServiceRequest) -> Result<RequestContext, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not registered"))?;

    let raw = match req.headers().get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::unauthorized(AuthRejection::MalformedToken))?,
        ),
    };

    bind_request_context(raw, SystemTime::now(), &state.security)
}

impl<S, B> Service<ServiceRequest> for ContextBinderMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match bind(&req) {
            Ok(context) => {
                req.extensions_mut().insert(context);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            // Built inside the future so the response picks up the trace
            // context that `TraceSpan` scopes around polling.
            Err(err) => Box::pin(async move {
                if let AppError::Unauthorized { reason } = &err {
                    security::access_denied(*reason, req.path());
                }
                Ok(req.error_response(err).map_into_right_body())
            }),
        }
    }
}
