//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (users, token,
//!   ingredients, health)
//! - **Schemas**: Request/response DTOs and the error envelope
//! - **Security**: Bearer-token and basic-auth schemes
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::ErrorCode;
use crate::inbound::http::MessageResponse;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::ingredients::{
    CreateIngredientBody, IngredientResponse, IngredientsEnvelope, UpdateIngredientBody,
};
use crate::inbound::http::users::{
    CreateUserBody, TokenResponse, UpdateUserBody, UserEnvelope, UserResponse,
};

/// Enrich the generated document with the authentication schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        components.add_security_scheme(
            "BasicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Larder backend API",
        description = "HTTP interface for the shared shopping-list application."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::issue_token,
        crate::inbound::http::ingredients::list_ingredients,
        crate::inbound::http::ingredients::get_ingredient,
        crate::inbound::http::ingredients::create_ingredient,
        crate::inbound::http::ingredients::update_ingredient,
        crate::inbound::http::ingredients::delete_ingredient,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        MessageResponse,
        CreateUserBody,
        UpdateUserBody,
        UserResponse,
        UserEnvelope,
        TokenResponse,
        CreateIngredientBody,
        UpdateIngredientBody,
        IngredientResponse,
        IngredientsEnvelope,
    )),
    tags(
        (name = "users", description = "Registration, profiles, and tokens"),
        (name = "ingredients", description = "The shared shopping list"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "meta", description = "Service metadata")
    )
)]
pub struct ApiDoc;
