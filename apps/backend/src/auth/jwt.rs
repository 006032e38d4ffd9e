use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{Claims, IdentityClaim};
use crate::error::{AppError, AuthRejection};
use crate::state::security_config::SecurityConfig;

/// Lifetime of every access token, in seconds.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

fn unix_seconds(now: SystemTime) -> Result<i64, AppError> {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("System clock is before the Unix epoch"))?
        .as_secs();
    i64::try_from(secs).map_err(|_| AppError::internal("System clock out of range"))
}

/// Mint a HS256 JWT access token valid for exactly one hour from `now`.
///
/// Pure computation: no I/O and no store access. The caller is responsible for
/// passing the identity currently of record.
pub fn mint_access_token(
    identity: &IdentityClaim,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = unix_seconds(now)?;

    let claims = Claims {
        sub: identity.subject_id.clone(),
        username: identity.username.clone(),
        email: identity.email.clone(),
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm()),
        &claims,
        &EncodingKey::from_secret(security.jwt_secret()),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a JWT against the configured secret and the caller-supplied clock.
///
/// The token is accepted only while `now < exp`; there is no leeway. Expiry is
/// checked here rather than by `jsonwebtoken` so the boundary follows the
/// injected clock exactly.
///
/// Errors (all `AppError::Unauthorized`, identical on the wire):
/// - signature mismatch → `BadSignature`
/// - past expiry → `ExpiredToken`
/// - anything else (bad base64, bad JSON, wrong algorithm, missing claims,
///   inverted time window) → `MalformedToken`
pub fn verify_access_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm());
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(security.jwt_secret()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => AppError::unauthorized(AuthRejection::BadSignature),
        _ => AppError::unauthorized(AuthRejection::MalformedToken),
    })?;

    if claims.exp <= claims.iat {
        return Err(AppError::unauthorized(AuthRejection::MalformedToken));
    }

    let now = unix_seconds(now)?;
    if now >= claims.exp {
        return Err(AppError::unauthorized(AuthRejection::ExpiredToken));
    }

    Ok(claims)
}
