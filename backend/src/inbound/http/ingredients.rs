//! Shopping-list ingredient API handlers.
//!
//! ```text
//! GET /ingredients
//! POST /ingredients {"ingredient":"Flour","description":"Plain white flour"}
//! PUT /ingredients/1 {"status":true}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateIngredientRequest, UpdateIngredientRequest};
use crate::domain::{Ingredient, IngredientId};
use crate::inbound::http::auth::BearerToken;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_fields};
use crate::inbound::http::{ApiResult, MessageResponse};

/// Creation body for `POST /ingredients`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientBody {
    /// Name shown on the shopping list.
    #[schema(example = "Flour")]
    pub ingredient: Option<String>,
    /// Free-form description.
    #[schema(example = "Plain white flour")]
    pub description: Option<String>,
}

/// Whitelisted fields for `PUT /ingredients/{id}`.
///
/// Unknown keys in the body are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientBody {
    /// Replacement name.
    pub ingredient: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement done flag.
    pub status: Option<bool>,
}

/// Ingredient record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientResponse {
    /// Stable ingredient identifier.
    #[schema(example = 1)]
    pub ingredient_id: i64,
    /// Name shown on the shopping list.
    #[schema(example = "Flour")]
    pub ingredient: String,
    /// Free-form description.
    #[schema(example = "Plain white flour")]
    pub description: String,
    /// Whether the item has been marked done.
    pub status: bool,
    /// Creation timestamp.
    pub date_added: DateTime<Utc>,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            ingredient_id: ingredient.id().value(),
            ingredient: ingredient.name().as_str().to_owned(),
            description: ingredient.description().to_owned(),
            status: ingredient.status(),
            date_added: ingredient.date_added(),
        }
    }
}

/// Envelope returned by `GET /ingredients`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientsEnvelope {
    /// Every ingredient on the shared shopping list.
    pub ingredients: Vec<IngredientResponse>,
}

/// List every ingredient on the shared shopping list.
#[utoipa::path(
    get,
    path = "/ingredients",
    responses(
        (status = 200, description = "The shared shopping list", body = IngredientsEnvelope)
    ),
    tags = ["ingredients"],
    security([])
)]
#[get("/ingredients")]
pub async fn list_ingredients(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<IngredientsEnvelope>> {
    let ingredients = state.ingredients_query.list().await?;
    Ok(web::Json(IngredientsEnvelope {
        ingredients: ingredients.iter().map(IngredientResponse::from).collect(),
    }))
}

/// Fetch an ingredient by identifier.
#[utoipa::path(
    get,
    path = "/ingredients/{id}",
    params(("id" = i64, Path, description = "Ingredient identifier")),
    responses(
        (status = 200, description = "The requested ingredient", body = IngredientResponse),
        (status = 404, description = "No such ingredient", body = ApiError)
    ),
    tags = ["ingredients"],
    security([])
)]
#[get("/ingredients/{id}")]
pub async fn get_ingredient(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<IngredientResponse>> {
    let id = IngredientId::new(path.into_inner());
    let ingredient = state.ingredients_query.get(id).await?;
    Ok(web::Json(IngredientResponse::from(&ingredient)))
}

/// Add an ingredient owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/ingredients",
    request_body = CreateIngredientBody,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientResponse),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 401, description = "Missing or rejected token", body = ApiError),
        (status = 409, description = "Ingredient name already exists", body = ApiError)
    ),
    tags = ["ingredients"],
    security(("BearerToken" = []))
)]
#[post("/ingredients")]
pub async fn create_ingredient(
    state: web::Data<HttpState>,
    token: BearerToken,
    payload: web::Json<CreateIngredientBody>,
) -> ApiResult<HttpResponse> {
    let actor = state.tokens.authenticate(token.value()).await?;
    let body = payload.into_inner();
    require_fields(&[
        (FieldName::new("ingredient"), body.ingredient.is_some()),
        (FieldName::new("description"), body.description.is_some()),
    ])?;

    let request = CreateIngredientRequest {
        name: body.ingredient.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
    };
    let ingredient = state.ingredients.create(actor.id(), request).await?;
    Ok(HttpResponse::Created().json(IngredientResponse::from(&ingredient)))
}

/// Update an ingredient owned by the authenticated user.
#[utoipa::path(
    put,
    path = "/ingredients/{id}",
    params(("id" = i64, Path, description = "Ingredient identifier")),
    request_body = UpdateIngredientBody,
    responses(
        (status = 200, description = "Ingredient updated", body = MessageResponse),
        (status = 400, description = "Invalid field value", body = ApiError),
        (status = 401, description = "Missing or rejected token", body = ApiError),
        (status = 403, description = "Not the owner", body = ApiError),
        (status = 404, description = "No such ingredient", body = ApiError),
        (status = 409, description = "Ingredient name already exists", body = ApiError)
    ),
    tags = ["ingredients"],
    security(("BearerToken" = []))
)]
#[put("/ingredients/{id}")]
pub async fn update_ingredient(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    token: BearerToken,
    payload: web::Json<UpdateIngredientBody>,
) -> ApiResult<web::Json<MessageResponse>> {
    let actor = state.tokens.authenticate(token.value()).await?;
    let id = IngredientId::new(path.into_inner());
    let body = payload.into_inner();
    state
        .ingredients
        .update(
            actor.id(),
            id,
            UpdateIngredientRequest {
                name: body.ingredient,
                description: body.description,
                status: body.status,
            },
        )
        .await?;
    Ok(web::Json(MessageResponse::new(format!(
        "ingredient {id} was updated successfully"
    ))))
}

/// Remove an ingredient owned by the authenticated user.
#[utoipa::path(
    delete,
    path = "/ingredients/{id}",
    params(("id" = i64, Path, description = "Ingredient identifier")),
    responses(
        (status = 200, description = "Ingredient deleted", body = MessageResponse),
        (status = 401, description = "Missing or rejected token", body = ApiError),
        (status = 403, description = "Not the owner", body = ApiError),
        (status = 404, description = "No such ingredient", body = ApiError)
    ),
    tags = ["ingredients"],
    security(("BearerToken" = []))
)]
#[delete("/ingredients/{id}")]
pub async fn delete_ingredient(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    token: BearerToken,
) -> ApiResult<web::Json<MessageResponse>> {
    let actor = state.tokens.authenticate(token.value()).await?;
    let id = IngredientId::new(path.into_inner());
    state.ingredients.delete(actor.id(), id).await?;
    Ok(web::Json(MessageResponse::new(format!(
        "ingredient {id} was deleted successfully"
    ))))
}
