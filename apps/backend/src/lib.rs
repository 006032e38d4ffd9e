#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod web;

// Re-exports for public API
pub use auth::claims::{Claims, IdentityClaim};
pub use auth::context::{bind_request_context, RequestContext, TrustedIdentity};
pub use auth::gate::{require_owner, OwnerScope};
pub use auth::jwt::{mint_access_token, verify_access_token};
pub use error::{AppError, AuthRejection, LoginFailure};
pub use errors::ErrorCode;
pub use extractors::{CurrentUser, ValidatedJson};
pub use middleware::{ContextBinder, RequestTrace, StructuredLogger, TraceSpan};
pub use state::{AppState, SecurityConfig};

// Prelude for test convenience
pub mod prelude {
    pub use super::auth::*;
    pub use super::error::*;
    pub use super::errors::ErrorCode;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::repos::users::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
