//! Contact HTTP routes.
//!
//! Five handlers, one per operation, each a stateless translation from the
//! HTTP request to a store call and from the store result to a response.
//! No retries, no cross-request state.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::schema::{Contact, ContactInput};
use crate::store::ContactStore;

use super::errors::ApiResult;

/// Route table for the contacts collection.
pub fn contact_routes<S: ContactStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts::<S>))
        .route("/contacts", post(create_contact::<S>))
        .route("/contacts/{id}", get(get_contact::<S>))
        .route("/contacts/{id}", put(update_contact::<S>))
        .route("/contacts/{id}", delete(delete_contact::<S>))
        .with_state(store)
}

/// `GET /contacts` — every record, 200 even when empty.
async fn list_contacts<S: ContactStore>(
    State(store): State<Arc<S>>,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = store.list().await?;
    Ok(Json(contacts))
}

/// `GET /contacts/{id}` — 200 with the record, 404 when absent.
async fn get_contact<S: ContactStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let contact = store.find(&id).await?;
    Ok(Json(contact))
}

/// `POST /contacts` — 201 with the created record, 400 listing every
/// violated rule.
async fn create_contact<S: ContactStore>(
    State(store): State<Arc<S>>,
    Json(input): Json<ContactInput>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let created = store.insert(input).await?;
    tracing::info!(id = %created.id, "contact created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /contacts/{id}` — partial body merged over the stored record and
/// re-validated in full; 200 with the updated record.
async fn update_contact<S: ContactStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(patch): Json<ContactInput>,
) -> ApiResult<Json<Contact>> {
    let updated = store.update(&id, patch).await?;
    Ok(Json(updated))
}

/// `DELETE /contacts/{id}` — 204 with an empty body, 404 when absent.
async fn delete_contact<S: ContactStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
