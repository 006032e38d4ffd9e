// Login endpoint: success path and indistinguishable failures.

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_email;
use serde_json::{json, Value};

use crate::common::body_without_trace_id;
use crate::support::auth::{bearer, register_user, TEST_PASSWORD};
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn login_then_read_own_profile() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let email = unique_email("alice");
    let registered = register_user(&app, "alice", &email).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["id"], registered.id.as_str());
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(("Authorization", bearer(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["id"], registered.id.as_str());
    assert_eq!(me["username"], "alice");
    assert_eq!(me["email"], email.as_str());
}

#[actix_web::test]
async fn login_email_is_case_insensitive() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let email = unique_email("case");
    register_user(&app, "casey", &email).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": format!("  {}  ", email.to_uppercase()), "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_email_and_wrong_password_look_the_same() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let email = unique_email("bob");
    register_user(&app, "bob", &email).await;

    let unknown = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": unique_email("nobody"), "password": TEST_PASSWORD }))
        .to_request();
    let wrong = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": "not-the-password" }))
        .to_request();

    let unknown = test::call_service(&app, unknown).await;
    let wrong = test::call_service(&app, wrong).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let unknown = body_without_trace_id(unknown).await;
    let wrong = body_without_trace_id(wrong).await;
    assert_eq!(unknown, wrong);
    assert_eq!(unknown["code"], "INVALID_CREDENTIALS");
    assert_eq!(unknown["detail"], "Incorrect email or password");
}

#[actix_web::test]
async fn login_failure_has_problem_details_shape() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "ghost@example.test", "password": "whatever123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers()
            .get("WWW-Authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
    assert_problem_details_from_service_response(
        resp,
        "INVALID_CREDENTIALS",
        StatusCode::UNAUTHORIZED,
        Some("Incorrect email or password"),
    )
    .await;
}
