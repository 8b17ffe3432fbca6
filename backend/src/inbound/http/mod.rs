//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod auth;
pub mod error;
pub mod health;
pub mod ingredients;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Confirmation payload returned by update and delete handlers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[schema(example = "ingredient 1 was updated successfully")]
    pub message: String,
}

impl MessageResponse {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Plain-text greeting at the API root.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String)),
    tags = ["meta"],
    security([])
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to the Larder shopping list API!\n")
}
