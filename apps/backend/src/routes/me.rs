//! The caller's own account. Every handler here takes `CurrentUser`, and the
//! store is scoped by `CurrentUser::scope`; no path or body field names the
//! owner.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::users::Book;
use crate::services::{books, users};
use crate::state::app_state::AppState;

async fn me(user: CurrentUser, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let profile = users::profile(&user.scope, app_state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

async fn save_book(
    user: CurrentUser,
    body: ValidatedJson<Book>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let profile = books::save_book(&user.scope, body.into_inner(), app_state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

async fn remove_book(
    user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let book_id = path.into_inner();
    let profile = books::remove_book(&user.scope, &book_id, app_state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(me))
        .route("/books", web::post().to(save_book))
        .route("/books/{book_id}", web::delete().to(remove_book));
}
