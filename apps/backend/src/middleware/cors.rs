use actix_cors::Cors;
use actix_web::http::header;

use crate::middleware::request_trace::TRACE_ID_HEADER;

/// Origins used when none are configured: the web client and the API's own
/// dev port.
const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

/// Keep `http(s)://` entries only; drop blanks and `null`.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// Configured origins, or [`DEV_ORIGINS`] when the list is empty.
pub fn effective_origins(configured: &[String]) -> Vec<String> {
    if configured.is_empty() {
        DEV_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    }
}

/// CORS for the browser client: explicit origins, only the methods and
/// headers the API uses.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_ID_HEADER)])
        .max_age(3600);

    for origin in effective_origins(allowed_origins) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
