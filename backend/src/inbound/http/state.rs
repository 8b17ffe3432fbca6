//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    IngredientsCommand, IngredientsQuery, TokenService, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration, profile, and removal use-cases.
    pub users: Arc<dyn UsersCommand>,
    /// User lookups.
    pub users_query: Arc<dyn UsersQuery>,
    /// Token issue and verification.
    pub tokens: Arc<dyn TokenService>,
    /// Shopping-list mutations.
    pub ingredients: Arc<dyn IngredientsCommand>,
    /// Shopping-list lookups.
    pub ingredients_query: Arc<dyn IngredientsQuery>,
}
