use actix_web::{web, App, HttpServer};
use bookshelf::config::ServerConfig;
use bookshelf::middleware::{
    cors_middleware, ContextBinder, RequestTrace, StructuredLogger, TraceSpan,
};
use bookshelf::routes;
use bookshelf::state::AppState;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker --env-file, or `set -a; . ./.env; set +a` locally).
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(AppState::in_memory(config.security.clone()));
    let cors_origins = config.cors_allowed_origins.clone();

    info!(host = %config.host, port = config.port, "Starting bookshelf backend");

    // `.wrap` order is innermost first: RequestTrace runs first on the way in.
    HttpServer::new(move || {
        App::new()
            .wrap(ContextBinder)
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
