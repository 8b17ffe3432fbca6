//! Larder backend: a shared shopping-list HTTP API.
//!
//! Users register, exchange basic-auth credentials for a bearer token, and
//! manage ingredient line items on a shared list. The crate follows a
//! hexagonal layout: `domain` holds entities, ports, and services;
//! `inbound::http` the actix-web adapter; `outbound::persistence` the
//! in-memory storage adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::trace::RequestTrace;
