//! Contact HTTP Routes
//!
//! Binds the five contact operations to the store. Each handler parses its
//! inputs, calls exactly one store operation, and serializes the outcome.
//!
//! | Method | Path            | Success            |
//! |--------|-----------------|--------------------|
//! | POST   | `/contacts/`    | 201, Contact       |
//! | GET    | `/contacts/`    | 200, `[Contact]`   |
//! | GET    | `/contacts/:id` | 200, Contact       |
//! | PUT    | `/contacts/:id` | 200, Contact       |
//! | DELETE | `/contacts/:id` | 204, empty         |
//!
//! The collection routes answer with and without the trailing slash.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{Contact, ContactId};
use crate::store::ContactStore;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Contact state shared across handlers
pub struct ContactState {
    pub store: Arc<dyn ContactStore>,
}

impl ContactState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

// ==================
// Contact Routes
// ==================

/// Create contact routes
pub fn contact_routes(state: Arc<ContactState>) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(list_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/contacts/",
            get(list_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/contacts/:id",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse the `:id` path segment as an unsigned integer
fn parse_contact_id(raw: Result<Path<String>, PathRejection>) -> ApiResult<ContactId> {
    let Path(raw) = raw.map_err(|e| ApiError::Validation(e.body_text()))?;
    raw.parse::<ContactId>()
        .map_err(|e| ApiError::Validation(format!("invalid contact id '{}': {}", raw, e)))
}

/// Decode a request body as a Contact
fn decode_contact(body: Result<Bytes, BytesRejection>) -> ApiResult<Contact> {
    let body = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    serde_json::from_slice(&body)
        .map_err(|e| ApiError::Validation(format!("invalid contact payload: {}", e)))
}

// ==================
// Handlers
// ==================

async fn create_contact_handler(
    State(state): State<Arc<ContactState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let contact = decode_contact(body)?;
    let created = state.store.create(&contact)?;

    let id = created.id.to_string();
    log_event_with_fields(Event::ContactCreated, &[("id", id.as_str())]);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_contacts_handler(
    State(state): State<Arc<ContactState>>,
) -> ApiResult<Json<Vec<Contact>>> {
    Ok(Json(state.store.read_all()?))
}

async fn get_contact_handler(
    State(state): State<Arc<ContactState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Contact>> {
    let id = parse_contact_id(id)?;
    Ok(Json(state.store.read_by_id(id)?))
}

async fn update_contact_handler(
    State(state): State<Arc<ContactState>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Contact>> {
    let id = parse_contact_id(id)?;
    let patch = decode_contact(body)?;
    let updated = state.store.update(id, &patch)?;

    log_event_with_fields(Event::ContactUpdated, &[("id", id.to_string().as_str())]);
    Ok(Json(updated))
}

async fn delete_contact_handler(
    State(state): State<Arc<ContactState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_contact_id(id)?;
    state.store.delete(id)?;

    log_event_with_fields(Event::ContactDeleted, &[("id", id.to_string().as_str())]);
    Ok(StatusCode::NO_CONTENT)
}
