use std::env;

use crate::error::AppError;
use crate::middleware::cors::parse_allowed_origins;
use crate::state::security_config::SecurityConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Everything the binary needs from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    /// Read `BACKEND_HOST`, `BACKEND_PORT`, `CORS_ALLOWED_ORIGINS` and
    /// `BACKEND_JWT_SECRET` (required).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BACKEND_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_allowed_origins(&raw))
            .unwrap_or_default();

        let secret = lookup("BACKEND_JWT_SECRET")
            .ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;
        let security = SecurityConfig::new(secret)?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            security,
        })
    }
}
