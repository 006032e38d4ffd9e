use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::users::{self, Registration};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Create an account; responds `201` with `{ token, user }`.
async fn register(
    body: ValidatedJson<Registration>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = users::register(
        body.into_inner(),
        SystemTime::now(),
        app_state.store.as_ref(),
        &app_state.security,
    )
    .await?;

    Ok(HttpResponse::Created().json(payload))
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = users::login(
        &body.email,
        &body.password,
        SystemTime::now(),
        app_state.store.as_ref(),
        &app_state.security,
    )
    .await?;

    Ok(HttpResponse::Ok().json(payload))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
