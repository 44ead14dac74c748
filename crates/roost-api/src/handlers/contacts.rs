//! Contact-form handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::{error::ApiError, AppState};
use roost_core::{ContactMessage, ContactPayload};

/// Submit a contact message.
///
/// # Returns
/// - 201 Created with the stored record, including the server-assigned
///   `createdAt`
/// - 400 Bad Request when any of name, phone, message is missing
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    let created = state.intake.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all contact messages in storage order.
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    Ok(Json(state.intake.list().await?))
}
