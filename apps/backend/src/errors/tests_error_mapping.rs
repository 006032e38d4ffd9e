// Unit tests for error mapping - pure domain logic without HTTP dependencies
use actix_web::body::to_bytes;
use actix_web::http::header::WWW_AUTHENTICATE;
use actix_web::ResponseError;

use crate::error::{AuthRejection, LoginFailure};
use crate::errors::domain::{
    ConflictKind, DomainError, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::Email, "bad email");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidEmail);
    assert_eq!(app.status().as_u16(), 400);

    let de = DomainError::validation(ValidationKind::Other("x".into()), "bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let unique = DomainError::conflict(ConflictKind::UniqueEmail, "email exists");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "EMAIL_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::User, "no user");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "USER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn every_domain_error_is_a_client_error() {
    let errors = [
        DomainError::validation(ValidationKind::Book, "title cannot be empty"),
        DomainError::validation(ValidationKind::Other("x".into()), "bad field"),
        DomainError::conflict(ConflictKind::UniqueEmail, "email exists"),
        DomainError::not_found(NotFoundKind::Other("x".into()), "gone"),
    ];
    for de in errors {
        let app: AppError = de.into();
        assert!(app.status().is_client_error(), "{app:?}");
    }
}

#[actix_web::test]
async fn every_rejection_reason_renders_the_same_response() {
    let reasons = [
        AuthRejection::NotAuthenticated,
        AuthRejection::MalformedToken,
        AuthRejection::ExpiredToken,
        AuthRejection::BadSignature,
    ];

    let mut bodies = Vec::new();
    for reason in reasons {
        let resp = AppError::unauthorized(reason).error_response();
        assert_eq!(resp.status().as_u16(), 401);
        assert_eq!(
            resp.headers().get(WWW_AUTHENTICATE).and_then(|v| v.to_str().ok()),
            Some("Bearer")
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        bodies.push(body);
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    let json: serde_json::Value = serde_json::from_slice(&bodies[0]).unwrap();
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["detail"], "Authentication required");
}

#[actix_web::test]
async fn login_failures_render_the_same_response() {
    let unknown = AppError::invalid_credentials(LoginFailure::UnknownIdentity).error_response();
    let wrong = AppError::invalid_credentials(LoginFailure::WrongCredential).error_response();
    assert_eq!(unknown.status(), wrong.status());

    let a = to_bytes(unknown.into_body()).await.unwrap();
    let b = to_bytes(wrong.into_body()).await.unwrap();
    assert_eq!(a, b);
}

#[actix_web::test]
async fn internal_detail_is_not_leaked() {
    let resp = AppError::internal("secret connection string").error_response();
    let body = to_bytes(resp.into_body()).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(!text.contains("secret connection string"));
    assert!(text.contains("\"title\":\"Internal\""));
}
