//! User domain service implementing the registration, profile, and token
//! driving ports over a user repository.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::auth::BasicCredentials;
use crate::domain::error::Error;
use crate::domain::password::PasswordHash;
use crate::domain::ports::{
    IngredientRepository, NewUser, RegisterUserRequest, TokenService, UpdateUserRequest,
    UserRepository, UserRepositoryError, UsersCommand, UsersQuery,
};
use crate::domain::token::{AccessToken, TokenValue};
use crate::domain::user::{EmailAddress, User, UserId, UserValidationError, Username};

const DUPLICATE_USER: &str = "user with that username and/or email already exists";
const INCORRECT_CREDENTIALS: &str = "incorrect email and/or password, please try again";
const INCORRECT_TOKEN: &str = "incorrect token, please try again";

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Duplicate { .. } => Error::conflict(DUPLICATE_USER),
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn invalid_field(err: UserValidationError) -> Error {
    let field = match err {
        UserValidationError::EmptyUsername => "username",
        UserValidationError::EmptyFirstName => "firstName",
        UserValidationError::EmptyLastName => "lastName",
        UserValidationError::EmptyEmail => "email",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": "empty_field" }))
}

fn empty_password() -> Error {
    Error::invalid_request("password must not be empty")
        .with_details(json!({ "field": "password", "code": "empty_field" }))
}

fn hash_password(plaintext: &str) -> Result<PasswordHash, Error> {
    if plaintext.is_empty() {
        return Err(empty_password());
    }
    PasswordHash::from_plaintext(plaintext)
        .map_err(|err| Error::internal(format!("password hashing failed: {err}")))
}

/// User service implementing [`UsersCommand`], [`UsersQuery`], and
/// [`TokenService`].
///
/// Holds the ingredient repository as well so removing a user can cascade to
/// the ingredients they own.
#[derive(Clone)]
pub struct UserService<U, I> {
    users: Arc<U>,
    ingredients: Arc<I>,
    clock: Arc<dyn Clock>,
}

impl<U, I> UserService<U, I> {
    /// Create a new service over the given repositories and clock.
    pub fn new(users: Arc<U>, ingredients: Arc<I>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            ingredients,
            clock,
        }
    }
}

#[async_trait]
impl<U, I> UsersCommand for UserService<U, I>
where
    U: UserRepository,
    I: IngredientRepository,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error> {
        let password = hash_password(&request.password)?;
        let record = NewUser::try_new(
            request.username,
            request.first_name,
            request.last_name,
            request.email,
            password,
            self.clock.utc(),
        )
        .map_err(invalid_field)?;

        let user = self
            .users
            .insert(record)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id(), username = %user.username(), "registered user");
        Ok(user)
    }

    async fn update(
        &self,
        actor: UserId,
        id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, Error> {
        if actor != id {
            return Err(Error::forbidden("you are not authorized to update this user"));
        }

        let mut user = self
            .users
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user with id {id} does not exist")))?;

        if let Some(username) = request.username {
            user.set_username(Username::new(username).map_err(invalid_field)?);
        }
        if let Some(first_name) = request.first_name {
            user.set_first_name(first_name).map_err(invalid_field)?;
        }
        if let Some(last_name) = request.last_name {
            user.set_last_name(last_name).map_err(invalid_field)?;
        }
        if let Some(email) = request.email {
            user.set_email(EmailAddress::new(email).map_err(invalid_field)?);
        }
        if let Some(password) = request.password {
            user.set_password(hash_password(&password)?);
        }

        self.users
            .update(&user)
            .await
            .map_err(map_repository_error)?;
        Ok(user)
    }

    async fn delete(&self, actor: UserId, id: UserId) -> Result<(), Error> {
        if actor != id {
            return Err(Error::forbidden("you are not authorized to delete this user"));
        }

        let removed = self
            .users
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(Error::not_found(format!("user with id {id} does not exist")));
        }

        let dropped = self
            .ingredients
            .delete_owned_by(id)
            .await
            .map_err(|err| Error::internal(format!("ingredient repository error: {err}")))?;
        debug!(user_id = %id, ingredients = dropped, "cascade removed owned ingredients");
        Ok(())
    }
}

#[async_trait]
impl<U, I> UsersQuery for UserService<U, I>
where
    U: UserRepository,
    I: IngredientRepository,
{
    async fn get(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user with id {id} does not exist")))
    }
}

#[async_trait]
impl<U, I> TokenService for UserService<U, I>
where
    U: UserRepository,
    I: IngredientRepository,
{
    async fn issue(&self, credentials: &BasicCredentials) -> Result<AccessToken, Error> {
        let Some(mut user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_repository_error)?
        else {
            return Err(Error::unauthorized(INCORRECT_CREDENTIALS));
        };

        if !user.password().verify(credentials.password()) {
            return Err(Error::unauthorized(INCORRECT_CREDENTIALS));
        }

        let now = self.clock.utc();
        if let Some(token) = user.token() {
            if token.outlives_reuse_window(now) {
                return Ok(token.clone());
            }
        }

        let token = AccessToken::issue(now);
        user.set_token(token.clone());
        self.users
            .update(&user)
            .await
            .map_err(map_repository_error)?;
        info!(
            user_id = %user.id(),
            token = %token.value().fingerprint(),
            "issued access token"
        );
        Ok(token)
    }

    async fn authenticate(&self, token: &TokenValue) -> Result<User, Error> {
        let Some(user) = self
            .users
            .find_by_token(token.as_str())
            .await
            .map_err(map_repository_error)?
        else {
            return Err(Error::unauthorized(INCORRECT_TOKEN));
        };

        let now = self.clock.utc();
        let live = user.token().is_some_and(|stored| stored.is_valid_at(now));
        if !live {
            return Err(Error::unauthorized(INCORRECT_TOKEN));
        }
        Ok(user)
    }
}
