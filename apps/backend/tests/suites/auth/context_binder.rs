// Request context binding: anonymous, trusted and rejected requests.

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::problem_details::{
    assert_access_denied, assert_problem_details_from_service_response,
};
use bookshelf::auth::{IdentityClaim, RequestContext};
use bookshelf::routes;
use serde_json::Value;

use crate::common::body_without_trace_id;
use crate::support::app_builder::test_security;
use crate::support::auth::{bearer, mint_expired_token, mint_test_token, tamper_payload};
use crate::support::{create_test_app, test_state};

async fn whoami(ctx: RequestContext) -> HttpResponse {
    HttpResponse::Ok().json(ctx.user())
}

fn whoami_routes(cfg: &mut web::ServiceConfig) {
    routes::configure(cfg);
    cfg.route("/whoami", web::get().to(whoami));
}

fn alice() -> IdentityClaim {
    IdentityClaim::new("u1", "alice", "a@x.com")
}

#[actix_web::test]
async fn no_header_is_anonymous_and_public_routes_work() {
    let app = create_test_app(test_state())
        .with_routes(whoami_routes)
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let health: Value = test::read_body_json(resp).await;
    assert_eq!(health["status"], "ok");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = test::read_body_json(resp).await;
    assert!(user.is_null());
}

#[actix_web::test]
async fn valid_token_binds_the_embedded_claim_verbatim() {
    let app = create_test_app(test_state())
        .with_routes(whoami_routes)
        .build()
        .await;
    let token = mint_test_token(&alice(), &test_security());

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", bearer(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let user: IdentityClaim = test::read_body_json(resp).await;
    assert_eq!(user, alice());
}

#[actix_web::test]
async fn bearer_without_token_is_rejected_even_on_public_routes() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Authorization", "Bearer"))
        .to_request();
    assert_access_denied(test::call_service(&app, req).await).await;
}

#[actix_web::test]
async fn every_rejection_looks_the_same() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let security = test_security();
    let valid = mint_test_token(&alice(), &security);
    let foreign = bookshelf::state::SecurityConfig::new("some-other-secret").unwrap();

    let headers = [
        bearer(&mint_expired_token(&alice(), &security)),
        bearer(&tamper_payload(&valid)),
        bearer(&mint_test_token(&alice(), &foreign)),
        bearer("not.a.jwt"),
        format!("Basic {valid}"),
        "Bearer".to_string(),
    ];

    let anonymous =
        test::call_service(&app, test::TestRequest::get().uri("/api/me").to_request()).await;
    let baseline = body_without_trace_id(anonymous).await;
    assert_eq!(baseline["code"], "UNAUTHORIZED");

    for header in headers {
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", header.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header {header:?}");
        assert_eq!(body_without_trace_id(resp).await, baseline, "header {header:?}");
    }
}

#[actix_web::test]
async fn anonymous_protected_access_has_access_denied_shape() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    assert_access_denied(test::call_service(&app, req).await).await;
}

#[actix_web::test]
async fn trusted_identity_without_record_is_user_not_found() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let token = mint_test_token(&alice(), &test_security());

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(("Authorization", bearer(&token)))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "USER_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
}

#[actix_web::test]
async fn responses_carry_a_trace_id() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!trace_id.is_empty());
}
