//! Image upload handler.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::{error::ApiError, AppState};

const MAX_IMAGES_PER_UPLOAD: usize = 10;

/// Accept a multipart batch of images under the `images` field and
/// return their public URLs.
///
/// # Returns
/// - 200 OK with `{"imageUrls": [...]}` in upload order
/// - 400 Bad Request when no files are sent, more than ten are sent, or
///   a file is not a JPEG/PNG image
/// - 500 Internal Server Error when storing a file fails
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut files: Vec<Vec<u8>> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("images") {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?;
        files.push(data.to_vec());
    }

    if files.is_empty() {
        return Err(ApiError::BadRequest("No files uploaded".to_string()));
    }
    if files.len() > MAX_IMAGES_PER_UPLOAD {
        return Err(ApiError::BadRequest(format!(
            "At most {} images per upload",
            MAX_IMAGES_PER_UPLOAD
        )));
    }

    let image_urls = state.uploads.store_batch(files).await?;
    Ok(Json(serde_json::json!({ "imageUrls": image_urls })))
}
