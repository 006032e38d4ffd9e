use std::fmt;
use std::sync::Arc;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Process-wide signing configuration.
///
/// Built once at startup and shared read-only by the issuer and the verifier.
/// The secret is private so the non-empty invariant checked in [`new`] holds
/// for every instance.
///
/// [`new`]: SecurityConfig::new
#[derive(Clone)]
pub struct SecurityConfig {
    jwt_secret: Arc<[u8]>,
    algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a SecurityConfig for HS256 with the given secret.
    ///
    /// An empty (or whitespace-only) secret makes every credential forgeable,
    /// so it is rejected with `AppError::Config`.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Result<Self, AppError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::config("JWT signing secret must not be empty"));
        }

        Ok(Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        })
    }

    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

// Never print the secret, not even in debug logs.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
