//! Driving ports for shopping-list ingredient use-cases.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::ingredient::{Ingredient, IngredientId};
use crate::domain::user::UserId;

/// Payload for adding an ingredient to the shopping list.
#[derive(Debug, Clone)]
pub struct CreateIngredientRequest {
    /// Name shown on the shopping list.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Whitelisted fields accepted by `PUT /ingredients/{id}`.
///
/// Absent fields are left untouched; anything outside this whitelist is
/// ignored by the HTTP adapter.
#[derive(Debug, Clone, Default)]
pub struct UpdateIngredientRequest {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement done flag.
    pub status: Option<bool>,
}

/// Domain use-case port for ingredient mutations.
#[async_trait]
pub trait IngredientsCommand: Send + Sync {
    /// Add an ingredient owned by the acting user.
    async fn create(
        &self,
        actor: UserId,
        request: CreateIngredientRequest,
    ) -> Result<Ingredient, Error>;

    /// Apply whitelisted updates; only the owner may do so.
    async fn update(
        &self,
        actor: UserId,
        id: IngredientId,
        request: UpdateIngredientRequest,
    ) -> Result<Ingredient, Error>;

    /// Remove an ingredient; only the owner may do so.
    async fn delete(&self, actor: UserId, id: IngredientId) -> Result<(), Error>;
}

/// Domain use-case port for ingredient lookups.
#[async_trait]
pub trait IngredientsQuery: Send + Sync {
    /// List every ingredient on the shared shopping list.
    async fn list(&self) -> Result<Vec<Ingredient>, Error>;

    /// Fetch an ingredient by identifier.
    async fn get(&self, id: IngredientId) -> Result<Ingredient, Error>;
}
