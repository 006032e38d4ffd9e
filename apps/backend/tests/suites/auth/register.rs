// Registration endpoint: credential issuance and input validation.

use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_email;
use bookshelf::{verify_access_token, Claims};
use serde_json::{json, Value};

use crate::support::app_builder::test_security;
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn register_returns_token_and_public_profile() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let email = unique_email("alice");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "alice",
            "email": email,
            "password": "password123",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let user = &body["user"];
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], email.as_str());
    assert_eq!(user["book_count"], 0);
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());

    let token = body["token"].as_str().expect("token should be a string");
    let claims: Claims = verify_access_token(token, SystemTime::now(), &test_security())
        .expect("issued token should verify");
    assert_eq!(claims.sub, user["id"].as_str().unwrap());
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, email);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[actix_web::test]
async fn duplicate_email_is_conflict() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let email = unique_email("dup");

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": "someone",
                "email": email.to_uppercase(),
                "password": "password123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        if expected == StatusCode::CONFLICT {
            assert_problem_details_from_service_response(
                resp,
                "EMAIL_TAKEN",
                StatusCode::CONFLICT,
                None,
            )
            .await;
        } else {
            assert_eq!(resp.status(), expected);
        }
    }
}

#[actix_web::test]
async fn invalid_input_is_rejected_with_field_codes() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let cases = [
        (json!({"username": "", "email": "a@x.com", "password": "password123"}), "INVALID_USERNAME"),
        (json!({"username": "a", "email": "not-an-email", "password": "password123"}), "INVALID_EMAIL"),
        (json!({"username": "a", "email": "a@x.com", "password": "short"}), "INVALID_PASSWORD"),
    ];

    for (body, code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(resp, code, StatusCode::BAD_REQUEST, None)
            .await;
    }
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"username": "alice", "email": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}
