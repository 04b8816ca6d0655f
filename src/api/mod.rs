//! HTTP surface: request handlers, route tables, and error mapping.
//!
//! # Endpoints
//!
//! - `GET /contacts` — list all records
//! - `POST /contacts` — create a record
//! - `GET /contacts/{id}` — fetch one record
//! - `PUT /contacts/{id}` — partial update
//! - `DELETE /contacts/{id}` — remove a record
//! - `GET /api-docs` — OpenAPI description of the above
//! - `GET /health` — liveness probe

pub mod contacts;
pub mod docs;
pub mod errors;
pub mod health;

pub use contacts::contact_routes;
pub use docs::docs_routes;
pub use errors::{ApiError, ApiResult};
pub use health::health_routes;
