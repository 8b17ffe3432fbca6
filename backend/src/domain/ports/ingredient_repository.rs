//! Port abstraction for ingredient persistence adapters and their errors.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ingredient::{
    Ingredient, IngredientId, IngredientName, IngredientValidationError, validated_description,
};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by ingredient repository adapters.
    pub enum IngredientRepositoryError {
        /// Another ingredient already carries this name.
        DuplicateName { name: String } => "ingredient {name} already exists",
        /// Query or mutation failed during execution.
        Query { message: String } => "ingredient repository query failed: {message}",
    }
}

/// Insertable ingredient record; the repository assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewIngredient {
    /// Name shown on the shopping list, validated non-empty.
    pub name: IngredientName,
    /// Free-form description, trimmed non-empty.
    pub description: String,
    /// Identifier of the owning user.
    pub owner: UserId,
    /// Creation timestamp supplied by the calling service's clock.
    pub date_added: DateTime<Utc>,
}

impl NewIngredient {
    /// Validate raw strings into an insertable record. New items start with
    /// `status` false.
    pub fn try_new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner: UserId,
        date_added: DateTime<Utc>,
    ) -> Result<Self, IngredientValidationError> {
        Ok(Self {
            name: IngredientName::new(name)?,
            description: validated_description(description)?,
            owner,
            date_added,
        })
    }
}

/// Driven port for ingredient persistence.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Insert a new ingredient, assigning the next sequential identifier.
    ///
    /// Fails with [`IngredientRepositoryError::DuplicateName`] when another
    /// row carries the same name (compared case-insensitively).
    async fn insert(&self, ingredient: NewIngredient)
    -> Result<Ingredient, IngredientRepositoryError>;

    /// List every stored ingredient in identifier order.
    async fn list(&self) -> Result<Vec<Ingredient>, IngredientRepositoryError>;

    /// Fetch an ingredient by identifier.
    async fn find_by_id(
        &self,
        id: IngredientId,
    ) -> Result<Option<Ingredient>, IngredientRepositoryError>;

    /// Replace the stored record matching this ingredient's identifier.
    ///
    /// Name uniqueness against other rows is re-checked.
    async fn update(&self, ingredient: &Ingredient) -> Result<(), IngredientRepositoryError>;

    /// Remove an ingredient; returns whether a record was removed.
    async fn delete(&self, id: IngredientId) -> Result<bool, IngredientRepositoryError>;

    /// Remove every ingredient owned by the given user, returning the count.
    async fn delete_owned_by(&self, owner: UserId) -> Result<usize, IngredientRepositoryError>;
}
