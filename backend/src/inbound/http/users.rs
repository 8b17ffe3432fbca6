//! Users API handlers.
//!
//! ```text
//! POST /users {"username":"ada","firstName":"Ada","lastName":"Lovelace",
//!              "email":"ada@example.com","password":"password"}
//! GET /token          (basic auth)
//! PUT /users/1        (bearer token)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{RegisterUserRequest, UpdateUserRequest};
use crate::domain::{User, UserId};
use crate::inbound::http::auth::{BasicAuth, BearerToken};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_fields};
use crate::inbound::http::{ApiResult, MessageResponse};

use crate::inbound::http::error::ApiError;

/// Registration body for `POST /users`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    /// Requested login/display handle.
    #[schema(example = "ada")]
    pub username: Option<String>,
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    /// Family name.
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    /// Email address used for basic-auth lookups.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Plaintext password.
    #[schema(example = "password")]
    pub password: Option<String>,
}

/// Whitelisted profile fields for `PUT /users/{id}`.
///
/// Unknown keys in the body are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    /// Replacement login/display handle.
    pub username: Option<String>,
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement plaintext password.
    pub password: Option<String>,
}

/// User record returned by the API. The password hash is never serialised.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Stable user identifier.
    #[schema(example = 1)]
    pub user_id: i64,
    /// Login/display handle.
    #[schema(example = "ada")]
    pub username: String,
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// Email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Creation timestamp.
    pub date_added: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().value(),
            username: user.username().as_str().to_owned(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            email: user.email().as_str().to_owned(),
            date_added: user.date_added(),
        }
    }
}

/// Envelope returned by `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    /// The requested user.
    pub user: UserResponse,
}

/// Token payload returned by `GET /token`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Bearer token value.
    #[schema(example = "9d3c1a2b4f5e6a7b8c9d0e1f2a3b4c5d")]
    pub token: String,
    /// Instant at which the token stops authenticating requests.
    pub expires_at: DateTime<Utc>,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 409, description = "Username or email already taken", body = ApiError)
    ),
    tags = ["users"],
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    require_fields(&[
        (FieldName::new("username"), body.username.is_some()),
        (FieldName::new("firstName"), body.first_name.is_some()),
        (FieldName::new("lastName"), body.last_name.is_some()),
        (FieldName::new("email"), body.email.is_some()),
        (FieldName::new("password"), body.password.is_some()),
    ])?;

    let request = RegisterUserRequest {
        username: body.username.unwrap_or_default(),
        first_name: body.first_name.unwrap_or_default(),
        last_name: body.last_name.unwrap_or_default(),
        email: body.email.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };
    let user = state.users.register(request).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The requested user", body = UserEnvelope),
        (status = 404, description = "No such user", body = ApiError)
    ),
    tags = ["users"],
    security([])
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let id = UserId::new(path.into_inner());
    let user = state.users_query.get(id).await?;
    Ok(web::Json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}

/// Update the authenticated user's own profile.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Invalid field value", body = ApiError),
        (status = 401, description = "Missing or rejected token", body = ApiError),
        (status = 403, description = "Not the user themselves", body = ApiError),
        (status = 404, description = "No such user", body = ApiError),
        (status = 409, description = "Username or email already taken", body = ApiError)
    ),
    tags = ["users"],
    security(("BearerToken" = []))
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    token: BearerToken,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<MessageResponse>> {
    let actor = state.tokens.authenticate(token.value()).await?;
    let id = UserId::new(path.into_inner());
    let body = payload.into_inner();
    state
        .users
        .update(
            actor.id(),
            id,
            UpdateUserRequest {
                username: body.username,
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                password: body.password,
            },
        )
        .await?;
    Ok(web::Json(MessageResponse::new(format!(
        "user {id} was updated successfully"
    ))))
}

/// Delete the authenticated user's own account and their ingredients.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 401, description = "Missing or rejected token", body = ApiError),
        (status = 403, description = "Not the user themselves", body = ApiError),
        (status = 404, description = "No such user", body = ApiError)
    ),
    tags = ["users"],
    security(("BearerToken" = []))
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    token: BearerToken,
) -> ApiResult<web::Json<MessageResponse>> {
    let actor = state.tokens.authenticate(token.value()).await?;
    let id = UserId::new(path.into_inner());
    state.users.delete(actor.id(), id).await?;
    Ok(web::Json(MessageResponse::new(format!(
        "user {id} was deleted successfully"
    ))))
}

/// Mint (or reuse) an access token for the basic-auth user.
#[utoipa::path(
    get,
    path = "/token",
    responses(
        (status = 200, description = "Access token for the caller", body = TokenResponse),
        (status = 401, description = "Rejected credentials", body = ApiError)
    ),
    tags = ["users"],
    security(("BasicAuth" = []))
)]
#[get("/token")]
pub async fn issue_token(
    state: web::Data<HttpState>,
    auth: BasicAuth,
) -> ApiResult<web::Json<TokenResponse>> {
    let token = state.tokens.issue(auth.credentials()).await?;
    Ok(web::Json(TokenResponse {
        token: token.value().as_str().to_owned(),
        expires_at: token.expires_at(),
    }))
}

#[cfg(test)]
mod tests;
