//! Domain primitives, ports, and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, the ports they cross, and the services implementing
//! the use-cases. Keep types immutable where possible and document
//! invariants in each type's Rustdoc.

pub mod auth;
pub mod error;
pub mod ingredient;
pub mod ingredients_service;
pub mod password;
pub mod ports;
pub mod token;
pub mod user;
pub mod users_service;


pub use self::auth::{BasicCredentials, CredentialsValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ingredient::{
    Ingredient, IngredientId, IngredientName, IngredientValidationError,
};
pub use self::ingredients_service::IngredientService;
pub use self::password::{PasswordHash, PasswordHashError};
pub use self::token::{
    AccessToken, TOKEN_REUSE_WINDOW_MINUTES, TOKEN_TTL_HOURS, TokenValidationError, TokenValue,
};
pub use self::user::{EmailAddress, User, UserId, UserValidationError, Username};
pub use self::users_service::UserService;
