#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a response body as JSON with `trace_id` removed, so two error
/// responses can be compared for equality.
pub async fn body_without_trace_id<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let mut body: Value = test::read_body_json(resp).await;
    if let Some(map) = body.as_object_mut() {
        map.remove("trace_id");
    }
    body
}
