// Mutations are scoped by the caller's verified identity, never by ids the
// client supplies.

use actix_web::dev::Service;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_email;
use serde_json::{json, Value};

use crate::support::auth::{bearer, register_user, RegisteredUser};
use crate::support::{create_test_app, test_state};

async fn profile_of<S, B>(app: &S, user: &RegisteredUser) -> Value
where
    S: Service<actix_http::Request, Response = actix_web::dev::ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(("Authorization", bearer(&user.token)))
        .to_request();
    test::read_body_json(test::call_service(app, req).await).await
}

#[actix_web::test]
async fn one_user_cannot_touch_another_users_list() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let owner = register_user(&app, "owner", &unique_email("owner")).await;
    let intruder = register_user(&app, "intruder", &unique_email("intruder")).await;

    let req = test::TestRequest::post()
        .uri("/api/me/books")
        .insert_header(("Authorization", bearer(&owner.token)))
        .set_json(json!({ "book_id": "b1", "title": "Owned" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // The intruder removes "b1": only their own (empty) list is in scope.
    let req = test::TestRequest::delete()
        .uri("/api/me/books/b1")
        .insert_header(("Authorization", bearer(&intruder.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let intruder_profile: Value = test::read_body_json(resp).await;
    assert_eq!(intruder_profile["id"], intruder.id.as_str());
    assert_eq!(intruder_profile["book_count"], 0);

    let owner_profile = profile_of(&app, &owner).await;
    assert_eq!(owner_profile["book_count"], 1);
}

#[actix_web::test]
async fn forged_owner_fields_in_the_body_are_ignored() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let victim = register_user(&app, "victim", &unique_email("victim")).await;
    let caller = register_user(&app, "caller", &unique_email("caller")).await;

    let req = test::TestRequest::post()
        .uri("/api/me/books")
        .insert_header(("Authorization", bearer(&caller.token)))
        .set_json(json!({
            "book_id": "b2",
            "title": "Planted",
            "user_id": victim.id,
            "sub": victim.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(profile_of(&app, &victim).await["book_count"], 0);
    assert_eq!(profile_of(&app, &caller).await["book_count"], 1);
}
