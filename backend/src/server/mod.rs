//! Server construction: state wiring and route registration.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use crate::domain::{IngredientService, UserService};
use crate::inbound::http::error::json_config;
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::index;
use crate::inbound::http::ingredients::{
    create_ingredient, delete_ingredient, get_ingredient, list_ingredients, update_ingredient,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, issue_token, update_user};
use crate::outbound::persistence::{InMemoryIngredientRepository, InMemoryUserRepository};

/// Build the HTTP state backed by the in-memory repositories.
///
/// The clock is injected so token expiry behaviour stays controllable in
/// tests.
pub fn build_state(clock: Arc<dyn Clock>) -> HttpState {
    let users_repo = Arc::new(InMemoryUserRepository::new());
    let ingredients_repo = Arc::new(InMemoryIngredientRepository::new());
    let user_service = Arc::new(UserService::new(
        Arc::clone(&users_repo),
        Arc::clone(&ingredients_repo),
        Arc::clone(&clock),
    ));
    let ingredient_service = Arc::new(IngredientService::new(ingredients_repo, clock));
    HttpState {
        users: user_service.clone(),
        users_query: user_service.clone(),
        tokens: user_service,
        ingredients: ingredient_service.clone(),
        ingredients_query: ingredient_service,
    }
}

/// Register the REST routes and the JSON payload error handling shared by
/// the binary and the test apps.
///
/// The caller provides [`HttpState`] and
/// [`crate::inbound::http::health::HealthState`] via `app_data`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(index)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(issue_token)
        .service(list_ingredients)
        .service(get_ingredient)
        .service(create_ingredient)
        .service(update_ingredient)
        .service(delete_ingredient)
        .service(ready)
        .service(live);
}
