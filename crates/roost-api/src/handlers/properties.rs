//! Property CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::ApiError, AppState};
use roost_core::{Property, PropertyPayload};

/// List the whole catalog.
///
/// # Returns
/// - 200 OK with the array of property records in storage order
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, ApiError> {
    Ok(Json(state.catalog.list().await?))
}

/// Create a property.
///
/// # Returns
/// - 201 Created with the stored record (id assigned, defaults applied)
/// - 400 Bad Request when a required field is missing or empty
/// - 500 Internal Server Error when the adapter cannot persist
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<PropertyPayload>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    let created = state.catalog.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a property. Fields absent from the body keep their
/// stored values; a merge that would blank a required field is rejected.
///
/// # Returns
/// - 200 OK with the merged record
/// - 400 Bad Request when the merged record fails validation
/// - 404 Not Found for an unknown id
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PropertyPayload>,
) -> Result<Json<Property>, ApiError> {
    let id = state.catalog.parse_id(&id)?;
    Ok(Json(state.catalog.update(&id, payload).await?))
}

/// Delete a property.
///
/// # Returns
/// - 200 OK with a confirmation message
/// - 404 Not Found for an unknown id (including a repeated delete)
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = state.catalog.parse_id(&id)?;
    state.catalog.delete(&id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted successfully" })))
}
