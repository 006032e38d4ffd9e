use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::claims::IdentityClaim;
use crate::auth::gate::OwnerScope;
use crate::auth::jwt::mint_access_token;
use crate::error::{AppError, LoginFailure};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users::{normalize_email, NewUser, UserProfile, UserRecord, UserStore};
use crate::services::passwords::{burn_verification, hash_password, verify_password};
use crate::state::security_config::SecurityConfig;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Response of registration and login: the credential plus the public
/// identity fields. Never the password or its hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::validation(ValidationKind::Email, "Email address is invalid");
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Username,
            "Username cannot be empty",
        ));
    }
    if email.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Email,
            "Email cannot be empty",
        ));
    }
    validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(
            ValidationKind::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

fn issue_for(
    record: UserRecord,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<AuthPayload, AppError> {
    let identity = IdentityClaim::new(&record.id, &record.username, &record.email);
    let token = mint_access_token(&identity, now, security)?;
    Ok(AuthPayload {
        token,
        user: UserProfile::from(record),
    })
}

/// Create an account and issue its first credential.
pub async fn register(
    registration: Registration,
    now: SystemTime,
    store: &dyn UserStore,
    security: &SecurityConfig,
) -> Result<AuthPayload, AppError> {
    let username = registration.username.trim().to_string();
    let email = normalize_email(&registration.email);
    validate_registration(&username, &email, &registration.password)?;

    let password_hash = hash_password(&registration.password)?;
    let record = store
        .create(NewUser {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
        })
        .await?;

    info!(user_id = %record.id, email = %Redacted(&record.email), "User registered");

    issue_for(record, now, security)
}

/// Verify email + password and issue a credential.
///
/// Unknown email and wrong password produce the same error; only the
/// security log tells them apart.
pub async fn login(
    email: &str,
    password: &str,
    now: SystemTime,
    store: &dyn UserStore,
    security: &SecurityConfig,
) -> Result<AuthPayload, AppError> {
    let Some(record) = store.find_by_email(email).await? else {
        burn_verification(password);
        security::login_failed(LoginFailure::UnknownIdentity, email);
        return Err(AppError::invalid_credentials(LoginFailure::UnknownIdentity));
    };

    if !verify_password(&record.password_hash, password) {
        security::login_failed(LoginFailure::WrongCredential, email);
        return Err(AppError::invalid_credentials(LoginFailure::WrongCredential));
    }

    info!(user_id = %record.id, "Login successful");
    issue_for(record, now, security)
}

/// Profile of the authenticated caller.
pub async fn profile(scope: &OwnerScope, store: &dyn UserStore) -> Result<UserProfile, AppError> {
    let record = store
        .find_by_id(scope.subject_id())
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))?;
    Ok(UserProfile::from(record))
}
