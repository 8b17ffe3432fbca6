//! Handler coverage for the users endpoints.

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{basic_auth, bearer, obtain_token, register_user, test_app};

#[actix_web::test]
async fn creating_a_user_returns_201_with_an_assigned_id() {
    let app = test::init_service(test_app()).await;
    let body = register_user(&app, "ada", "ada@example.com").await;

    assert_eq!(body["userId"], 1);
    assert_eq!(body["username"], "ada");
    assert_eq!(body["firstName"], "Test");
    assert_eq!(body["lastName"], "User");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body.get("dateAdded").is_some());
    assert!(body.get("password").is_none(), "password must never be serialised");
}

#[actix_web::test]
async fn missing_registration_fields_are_listed() {
    let app = test::init_service(test_app()).await;
    let request = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "ada" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["error"],
        "missing required fields: firstName, lastName, email, password"
    );
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(
        body["details"]["fields"],
        json!(["firstName", "lastName", "email", "password"])
    );
}

#[actix_web::test]
async fn non_json_bodies_are_rejected_with_400() {
    let app = test::init_service(test_app()).await;
    let request = test::TestRequest::post()
        .uri("/users")
        .insert_header((CONTENT_TYPE, "text/plain"))
        .set_payload("not json")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "request content type must be application/json");
}

#[actix_web::test]
async fn duplicate_registrations_conflict_case_insensitively() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;

    let request = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "username": "other",
            "firstName": "Other",
            "lastName": "User",
            "email": "ADA@Example.COM",
            "password": "password",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["error"],
        "user with that username and/or email already exists"
    );
}

#[actix_web::test]
async fn fetching_a_user_wraps_it_in_an_envelope() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["user"]["userId"], 1);
    assert_eq!(body["user"]["username"], "ada");
}

#[actix_web::test]
async fn fetching_an_unknown_user_is_404() {
    let app = test::init_service(test_app()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/users/42").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "user with id 42 does not exist");
}

#[actix_web::test]
async fn updating_without_a_token_is_unauthorized() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;

    let request = test::TestRequest::put()
        .uri("/users/1")
        .set_json(json!({ "firstName": "Augusta" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn users_update_their_own_profile_with_a_token() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;
    let token = obtain_token(&app, "ada@example.com").await;

    let request = test::TestRequest::put()
        .uri("/users/1")
        .insert_header(bearer(&token))
        .set_json(json!({ "firstName": "Augusta" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "user 1 was updated successfully");

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["user"]["firstName"], "Augusta");
}

#[actix_web::test]
async fn users_may_not_update_other_users() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;
    register_user(&app, "grace", "grace@example.com").await;
    let token = obtain_token(&app, "ada@example.com").await;

    let request = test::TestRequest::put()
        .uri("/users/2")
        .insert_header(bearer(&token))
        .set_json(json!({ "firstName": "Hacked" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "you are not authorized to update this user");
}

#[actix_web::test]
async fn deleting_the_own_account_removes_it() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;
    let token = obtain_token(&app, "ada@example.com").await;

    let request = test::TestRequest::delete()
        .uri("/users/1")
        .insert_header(bearer(&token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "user 1 was deleted successfully");

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn tokens_require_correct_basic_credentials() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;

    let request = test::TestRequest::get()
        .uri("/token")
        .insert_header(basic_auth("ada@example.com", "wrong"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["error"],
        "incorrect email and/or password, please try again"
    );
}

#[actix_web::test]
async fn token_responses_carry_value_and_expiry() {
    let app = test::init_service(test_app()).await;
    register_user(&app, "ada", "ada@example.com").await;

    let request = test::TestRequest::get()
        .uri("/token")
        .insert_header(basic_auth("ada@example.com", "password"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = test::read_body_json(response).await;
    let token = body["token"].as_str().expect("token string");
    assert_eq!(token.len(), 32);
    assert!(body.get("expiresAt").is_some());
}
