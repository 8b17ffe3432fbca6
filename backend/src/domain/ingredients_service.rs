//! Ingredient domain service implementing the shopping-list driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::error::Error;
use crate::domain::ingredient::{
    Ingredient, IngredientId, IngredientName, IngredientValidationError,
};
use crate::domain::ports::{
    CreateIngredientRequest, IngredientRepository, IngredientRepositoryError, IngredientsCommand,
    IngredientsQuery, NewIngredient, UpdateIngredientRequest,
};
use crate::domain::user::UserId;

const DUPLICATE_INGREDIENT: &str = "ingredient with that name already exists";

fn map_repository_error(error: IngredientRepositoryError) -> Error {
    match error {
        IngredientRepositoryError::DuplicateName { .. } => Error::conflict(DUPLICATE_INGREDIENT),
        IngredientRepositoryError::Query { message } => {
            Error::internal(format!("ingredient repository error: {message}"))
        }
    }
}

fn invalid_field(err: IngredientValidationError) -> Error {
    let field = match err {
        IngredientValidationError::EmptyName => "ingredient",
        IngredientValidationError::EmptyDescription => "description",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": "empty_field" }))
}

fn not_found(id: IngredientId) -> Error {
    Error::not_found(format!("ingredient with id {id} does not exist"))
}

/// Ingredient service implementing [`IngredientsCommand`] and
/// [`IngredientsQuery`].
#[derive(Clone)]
pub struct IngredientService<R> {
    ingredients: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> IngredientService<R> {
    /// Create a new service over the given repository and clock.
    pub fn new(ingredients: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { ingredients, clock }
    }
}

#[async_trait]
impl<R> IngredientsCommand for IngredientService<R>
where
    R: IngredientRepository,
{
    async fn create(
        &self,
        actor: UserId,
        request: CreateIngredientRequest,
    ) -> Result<Ingredient, Error> {
        let record = NewIngredient::try_new(
            request.name,
            request.description,
            actor,
            self.clock.utc(),
        )
        .map_err(invalid_field)?;

        let ingredient = self
            .ingredients
            .insert(record)
            .await
            .map_err(map_repository_error)?;
        info!(
            ingredient_id = %ingredient.id(),
            owner = %actor,
            "added ingredient to the shopping list"
        );
        Ok(ingredient)
    }

    async fn update(
        &self,
        actor: UserId,
        id: IngredientId,
        request: UpdateIngredientRequest,
    ) -> Result<Ingredient, Error> {
        let mut ingredient = self
            .ingredients
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;

        if ingredient.owner() != actor {
            return Err(Error::forbidden(
                "you are not authorized to update this ingredient",
            ));
        }

        if let Some(name) = request.name {
            ingredient.set_name(IngredientName::new(name).map_err(invalid_field)?);
        }
        if let Some(description) = request.description {
            ingredient.set_description(description).map_err(invalid_field)?;
        }
        if let Some(status) = request.status {
            ingredient.set_status(status);
        }

        self.ingredients
            .update(&ingredient)
            .await
            .map_err(map_repository_error)?;
        Ok(ingredient)
    }

    async fn delete(&self, actor: UserId, id: IngredientId) -> Result<(), Error> {
        let ingredient = self
            .ingredients
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;

        if ingredient.owner() != actor {
            return Err(Error::forbidden(
                "you are not authorized to delete this ingredient",
            ));
        }

        let removed = self
            .ingredients
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> IngredientsQuery for IngredientService<R>
where
    R: IngredientRepository,
{
    async fn list(&self) -> Result<Vec<Ingredient>, Error> {
        self.ingredients.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: IngredientId) -> Result<Ingredient, Error> {
        self.ingredients
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}
