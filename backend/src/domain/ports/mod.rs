//! Domain ports: driven persistence contracts and driving use-case
//! contracts, plus their error types.

pub(crate) mod macros;

pub mod ingredient_repository;
pub mod ingredients;
pub mod tokens;
pub mod user_repository;
pub mod users;

pub(crate) use macros::define_port_error;

pub use self::ingredient_repository::{
    IngredientRepository, IngredientRepositoryError, NewIngredient,
};
pub use self::ingredients::{
    CreateIngredientRequest, IngredientsCommand, IngredientsQuery, UpdateIngredientRequest,
};
pub use self::tokens::TokenService;
pub use self::user_repository::{NewUser, UserRepository, UserRepositoryError};
pub use self::users::{RegisterUserRequest, UpdateUserRequest, UsersCommand, UsersQuery};
