//! Shopping-list ingredient entity.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::user::UserId;

/// Validation errors raised when constructing ingredient value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientValidationError {
    /// Ingredient name was blank once trimmed.
    EmptyName,
    /// Description was blank once trimmed.
    EmptyDescription,
}

impl fmt::Display for IngredientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "ingredient must not be empty"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
        }
    }
}

impl std::error::Error for IngredientValidationError {}

/// Stable ingredient identifier, assigned sequentially by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientId(i64);

impl IngredientId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ingredient name shown on the shopping list.
///
/// ## Invariants
/// - trimmed and non-empty; uniqueness is case-insensitive and enforced by
///   the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientName(String);

impl IngredientName {
    /// Validate and construct an [`IngredientName`].
    pub fn new(name: impl Into<String>) -> Result<Self, IngredientValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(IngredientValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn validated_description(
    description: impl Into<String>,
) -> Result<String, IngredientValidationError> {
    let description = description.into();
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(IngredientValidationError::EmptyDescription);
    }
    Ok(trimmed.to_owned())
}

/// A shopping-list line item owned by a user.
///
/// ## Invariants
/// - always owned by an existing user; deleting the owner removes the
///   ingredient as well;
/// - `status` starts false (not yet bought) and is flipped via updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    id: IngredientId,
    name: IngredientName,
    description: String,
    status: bool,
    date_added: DateTime<Utc>,
    owner: UserId,
}

impl Ingredient {
    /// Assemble an ingredient from already-validated components.
    pub fn new(
        id: IngredientId,
        name: IngredientName,
        description: String,
        status: bool,
        date_added: DateTime<Utc>,
        owner: UserId,
    ) -> Self {
        Self {
            id,
            name,
            description,
            status,
            date_added,
            owner,
        }
    }

    /// Stable ingredient identifier.
    pub fn id(&self) -> IngredientId {
        self.id
    }

    /// Name shown on the shopping list.
    pub fn name(&self) -> &IngredientName {
        &self.name
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Whether the item has been marked done.
    pub fn status(&self) -> bool {
        self.status
    }

    /// Creation timestamp.
    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// Identifier of the owning user.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// Replace the name.
    pub fn set_name(&mut self, name: IngredientName) {
        self.name = name;
    }

    /// Replace the description, enforcing the presence check.
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), IngredientValidationError> {
        self.description = validated_description(description)?;
        Ok(())
    }

    /// Flip the done flag.
    pub fn set_status(&mut self, status: bool) {
        self.status = status;
    }
}
