use actix_web::web;

pub mod auth;
pub mod health;
pub mod me;

/// Register every route. Middleware is wired by the caller (`main.rs`, or the
/// test app builder).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/me").configure(me::configure_routes));
}
