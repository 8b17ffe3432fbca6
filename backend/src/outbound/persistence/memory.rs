//! In-memory persistence adapters.
//!
//! Each table is an `RwLock` over its rows plus a monotonic id counter.
//! Uniqueness checks and writes happen under a single write guard so the
//! unique and sequential-id invariants hold under concurrent requests, and
//! identifiers are never reused after deletes.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    IngredientRepository, IngredientRepositoryError, NewIngredient, NewUser, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Ingredient, IngredientId, User, UserId};

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<User>,
    last_id: i64,
}

impl UserTable {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory [`UserRepository`] adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>, UserRepositoryError> {
        self.inner
            .read()
            .map_err(|_| UserRepositoryError::query("user table lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>, UserRepositoryError> {
        self.inner
            .write()
            .map_err(|_| UserRepositoryError::query("user table lock poisoned"))
    }
}

fn username_taken(rows: &[User], exclude: Option<UserId>, username: &str) -> bool {
    rows.iter().any(|row| {
        exclude != Some(row.id()) && row.username().as_str().eq_ignore_ascii_case(username)
    })
}

fn email_taken(rows: &[User], exclude: Option<UserId>, email: &str) -> bool {
    rows.iter()
        .any(|row| exclude != Some(row.id()) && row.email().as_str().eq_ignore_ascii_case(email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut table = self.write()?;
        if username_taken(&table.rows, None, user.username.as_str()) {
            return Err(UserRepositoryError::duplicate("username"));
        }
        if email_taken(&table.rows, None, user.email.as_str()) {
            return Err(UserRepositoryError::duplicate("email"));
        }
        let id = UserId::new(table.next_id());
        let record = User::new(
            id,
            user.username,
            user.first_name,
            user.last_name,
            user.email,
            user.password,
            user.date_added,
        );
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let table = self.read()?;
        Ok(table.rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let table = self.read()?;
        Ok(table
            .rows
            .iter()
            .find(|row| row.email().as_str().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserRepositoryError> {
        let table = self.read()?;
        Ok(table
            .rows
            .iter()
            .find(|row| {
                row.token()
                    .is_some_and(|stored| stored.value().as_str() == token)
            })
            .cloned())
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut table = self.write()?;
        if !table.rows.iter().any(|row| row.id() == user.id()) {
            return Err(UserRepositoryError::query(format!(
                "user {} is not stored",
                user.id()
            )));
        }
        if username_taken(&table.rows, Some(user.id()), user.username().as_str()) {
            return Err(UserRepositoryError::duplicate("username"));
        }
        if email_taken(&table.rows, Some(user.id()), user.email().as_str()) {
            return Err(UserRepositoryError::duplicate("email"));
        }
        if let Some(row) = table.rows.iter_mut().find(|row| row.id() == user.id()) {
            *row = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        let mut table = self.write()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.id() != id);
        Ok(table.rows.len() != before)
    }
}

#[derive(Debug, Default)]
struct IngredientTable {
    rows: Vec<Ingredient>,
    last_id: i64,
}

impl IngredientTable {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory [`IngredientRepository`] adapter.
#[derive(Debug, Default)]
pub struct InMemoryIngredientRepository {
    inner: RwLock<IngredientTable>,
}

impl InMemoryIngredientRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IngredientTable>, IngredientRepositoryError> {
        self.inner
            .read()
            .map_err(|_| IngredientRepositoryError::query("ingredient table lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IngredientTable>, IngredientRepositoryError> {
        self.inner
            .write()
            .map_err(|_| IngredientRepositoryError::query("ingredient table lock poisoned"))
    }
}

fn name_taken(rows: &[Ingredient], exclude: Option<IngredientId>, name: &str) -> bool {
    rows.iter()
        .any(|row| exclude != Some(row.id()) && row.name().as_str().eq_ignore_ascii_case(name))
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn insert(
        &self,
        ingredient: NewIngredient,
    ) -> Result<Ingredient, IngredientRepositoryError> {
        let mut table = self.write()?;
        if name_taken(&table.rows, None, ingredient.name.as_str()) {
            return Err(IngredientRepositoryError::duplicate_name(
                ingredient.name.as_str(),
            ));
        }
        let id = IngredientId::new(table.next_id());
        let record = Ingredient::new(
            id,
            ingredient.name,
            ingredient.description,
            false,
            ingredient.date_added,
            ingredient.owner,
        );
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Ingredient>, IngredientRepositoryError> {
        let table = self.read()?;
        Ok(table.rows.clone())
    }

    async fn find_by_id(
        &self,
        id: IngredientId,
    ) -> Result<Option<Ingredient>, IngredientRepositoryError> {
        let table = self.read()?;
        Ok(table.rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn update(&self, ingredient: &Ingredient) -> Result<(), IngredientRepositoryError> {
        let mut table = self.write()?;
        if !table.rows.iter().any(|row| row.id() == ingredient.id()) {
            return Err(IngredientRepositoryError::query(format!(
                "ingredient {} is not stored",
                ingredient.id()
            )));
        }
        if name_taken(&table.rows, Some(ingredient.id()), ingredient.name().as_str()) {
            return Err(IngredientRepositoryError::duplicate_name(
                ingredient.name().as_str(),
            ));
        }
        if let Some(row) = table
            .rows
            .iter_mut()
            .find(|row| row.id() == ingredient.id())
        {
            *row = ingredient.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: IngredientId) -> Result<bool, IngredientRepositoryError> {
        let mut table = self.write()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.id() != id);
        Ok(table.rows.len() != before)
    }

    async fn delete_owned_by(&self, owner: UserId) -> Result<usize, IngredientRepositoryError> {
        let mut table = self.write()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.owner() != owner);
        Ok(before - table.rows.len())
    }
}
