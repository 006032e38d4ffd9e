//! Argon2 password hashing.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use once_cell::sync::Lazy;
use password_hash::{PasswordHash, SaltString};

use crate::error::AppError;

/// Hash a password into an Argon2id PHC string with a random 16-byte salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| AppError::internal(format!("salt generation failed: {e}")))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::internal(format!("salt encoding failed: {e}")))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
}

/// Check a candidate password against a stored PHC string.
///
/// A malformed stored hash verifies as `false`.
pub fn verify_password(stored_hash: &str, candidate: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Hash used to burn the same Argon2 work when the email is unknown, so
/// response timing does not reveal whether an account exists.
static DECOY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("decoy-password-never-matches").ok());

pub fn burn_verification(candidate: &str) {
    if let Some(hash) = DECOY_HASH.as_deref() {
        let _ = verify_password(hash, candidate);
    }
}
