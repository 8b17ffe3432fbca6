//! Shared wiring for the HTTP integration suites.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use mockable::{Clock, DefaultClock};
use serde_json::Value;

use backend::RequestTrace;
use backend::domain::{IngredientService, UserService};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{InMemoryIngredientRepository, InMemoryUserRepository};
use backend::server::routes;

/// HTTP state plus direct repository handles for seeding scenarios.
pub struct Wiring {
    pub state: HttpState,
    pub users_repo: Arc<InMemoryUserRepository>,
    pub ingredients_repo: Arc<InMemoryIngredientRepository>,
}

/// Wire fresh in-memory repositories into the services the handlers use.
pub fn wiring() -> Wiring {
    let users_repo = Arc::new(InMemoryUserRepository::new());
    let ingredients_repo = Arc::new(InMemoryIngredientRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let user_service = Arc::new(UserService::new(
        Arc::clone(&users_repo),
        Arc::clone(&ingredients_repo),
        Arc::clone(&clock),
    ));
    let ingredient_service = Arc::new(IngredientService::new(Arc::clone(&ingredients_repo), clock));
    Wiring {
        state: HttpState {
            users: user_service.clone(),
            users_query: user_service.clone(),
            tokens: user_service,
            ingredients: ingredient_service.clone(),
            ingredients_query: ingredient_service,
        },
        users_repo,
        ingredients_repo,
    }
}

/// Initialise a test service over the given state.
pub async fn spawn_app(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(health)
            .wrap(RequestTrace)
            .configure(routes),
    )
    .await
}

/// `Authorization: Basic` header for the given credentials.
pub fn basic_auth(email: &str, password: &str) -> (&'static str, String) {
    let encoded = STANDARD.encode(format!("{email}:{password}"));
    ("authorization", format!("Basic {encoded}"))
}

/// `Authorization: Bearer` header for the given token.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("authorization", format!("Bearer {token}"))
}

/// Register a user through the API and return the created record.
pub async fn register_user<S>(app: &S, username: &str, email: &str) -> Value
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

/// Exchange basic-auth credentials for a token through the API.
pub async fn obtain_token<S>(app: &S, email: &str) -> String
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
