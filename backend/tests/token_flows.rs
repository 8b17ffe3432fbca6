//! End-to-end coverage of the token lifecycle, including expiry behaviour
//! seeded directly through the repository.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::{Duration, Utc};
use serde_json::json;

use backend::domain::ports::UserRepository;
use backend::domain::{AccessToken, TokenValue};

use support::{bearer, obtain_token, register_user, spawn_app, wiring};

#[actix_web::test]
async fn a_live_token_is_reused_until_close_to_expiry() {
    let app = spawn_app(wiring().state).await;
    register_user(&app, "ada", "ada@example.com").await;

    let first = obtain_token(&app, "ada@example.com").await;
    let second = obtain_token(&app, "ada@example.com").await;
    assert_eq!(first, second);
}

#[actix_web::test]
async fn a_token_close_to_expiry_is_rotated() {
    let wired = wiring();
    let users_repo = wired.users_repo.clone();
    let app = spawn_app(wired.state).await;
    register_user(&app, "ada", "ada@example.com").await;

    let mut ada = users_repo
        .find_by_email("ada@example.com")
        .await
        .expect("query succeeds")
        .expect("ada is stored");
    let stale = AccessToken::new(TokenValue::generate(), Utc::now() + Duration::minutes(2));
    ada.set_token(stale.clone());
    users_repo.update(&ada).await.expect("update succeeds");

    let fresh = obtain_token(&app, "ada@example.com").await;
    assert_ne!(fresh, stale.value().as_str());
}

#[actix_web::test]
async fn an_expired_token_no_longer_authorizes_mutations() {
    let wired = wiring();
    let users_repo = wired.users_repo.clone();
    let app = spawn_app(wired.state).await;
    register_user(&app, "ada", "ada@example.com").await;

    let mut ada = users_repo
        .find_by_email("ada@example.com")
        .await
        .expect("query succeeds")
        .expect("ada is stored");
    let expired = AccessToken::new(TokenValue::generate(), Utc::now() - Duration::hours(1));
    ada.set_token(expired.clone());
    users_repo.update(&ada).await.expect("update succeeds");

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/users/1")
            .insert_header(bearer(expired.value().as_str()))
            .set_json(json!({ "firstName": "Augusta" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn a_seeded_token_authorizes_until_its_stored_expiry() {
    let wired = wiring();
    let users_repo = wired.users_repo.clone();
    let app = spawn_app(wired.state).await;
    register_user(&app, "ada", "ada@example.com").await;

    let mut ada = users_repo
        .find_by_email("ada@example.com")
        .await
        .expect("query succeeds")
        .expect("ada is stored");
    let short_lived = AccessToken::new(TokenValue::generate(), Utc::now() + Duration::minutes(10));
    ada.set_token(short_lived.clone());
    users_repo.update(&ada).await.expect("update succeeds");

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/users/1")
            .insert_header(bearer(short_lived.value().as_str()))
            .set_json(json!({ "firstName": "Augusta" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
