//! Shared helpers for HTTP adapter tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use mockable::DefaultClock;
use serde_json::Value;

use crate::RequestTrace;
use crate::inbound::http::health::HealthState;
use crate::server::{build_state, routes};

/// Build an app over a fresh in-memory state.
pub(crate) fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let state = web::Data::new(build_state(Arc::new(DefaultClock)));
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new()
        .app_data(state)
        .app_data(health)
        .wrap(RequestTrace)
        .configure(routes)
}

/// Register a user through the API and return the created record.
pub(crate) async fn register_user<S>(app: &S, username: &str, email: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let request = test::TestRequest::post()
        .uri("/users")
        .set_json(serde_json::json!({
            "username": username,
            "firstName": "Test",
            "lastName": "User",
            "email": email,
            "password": "password",
        }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    test::read_body_json(response).await
}

/// `Authorization: Basic` header for the given credentials.
pub(crate) fn basic_auth(email: &str, password: &str) -> (&'static str, String) {
    let encoded = STANDARD.encode(format!("{email}:{password}"));
    ("authorization", format!("Basic {encoded}"))
}

/// `Authorization: Bearer` header for the given token.
pub(crate) fn bearer(token: &str) -> (&'static str, String) {
    ("authorization", format!("Bearer {token}"))
}

/// Exchange basic-auth credentials for a token through the API.
pub(crate) async fn obtain_token<S>(app: &S, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let request = test::TestRequest::get()
        .uri("/token")
        .insert_header(basic_auth(email, "password"))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    body.get("token")
        .and_then(Value::as_str)
        .expect("token in response")
        .to_owned()
}
