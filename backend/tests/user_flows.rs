//! End-to-end coverage of the user lifecycle over the HTTP surface.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use support::{bearer, obtain_token, register_user, spawn_app, wiring};

#[actix_web::test]
async fn full_user_lifecycle() {
    let app = spawn_app(wiring().state).await;

    let created = register_user(&app, "ada", "ada@example.com").await;
    assert_eq!(created["userId"], 1);

    let token = obtain_token(&app, "ada@example.com").await;

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/users/1")
            .insert_header(bearer(&token))
            .set_json(json!({ "lastName": "King", "password": "new password" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The new password mints tokens; the old one is rejected.
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/token")
            .insert_header(support::basic_auth("ada@example.com", "password"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/token")
            .insert_header(support::basic_auth("ada@example.com", "new password"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/users/1")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn identifiers_keep_increasing_across_deletions() {
    let app = spawn_app(wiring().state).await;

    let ada = register_user(&app, "ada", "ada@example.com").await;
    let grace = register_user(&app, "grace", "grace@example.com").await;
    assert_eq!(ada["userId"], 1);
    assert_eq!(grace["userId"], 2);

    let token = obtain_token(&app, "grace@example.com").await;
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/users/2")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let joan = register_user(&app, "joan", "joan@example.com").await;
    assert_eq!(joan["userId"], 3, "identifiers are never reused");
}

#[actix_web::test]
async fn deleting_another_user_is_forbidden() {
    let app = spawn_app(wiring().state).await;
    register_user(&app, "ada", "ada@example.com").await;
    register_user(&app, "grace", "grace@example.com").await;
    let token = obtain_token(&app, "ada@example.com").await;

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/users/2")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "you are not authorized to delete this user");

    // The target account is untouched.
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/users/2").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
