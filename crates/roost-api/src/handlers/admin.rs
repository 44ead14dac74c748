//! Admin gate: a bare secret comparison, not a session or token system.

use axum::{extract::State, Json};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct VerifyAdminRequest {
    pub code: Option<String>,
}

/// Check the admin code.
///
/// # Returns
/// - 400 Bad Request when `code` is absent or empty
/// - 200 OK `{"success": true}` when the code matches the configured
///   secret
/// - 401 Unauthorized otherwise, including when no secret is configured
pub async fn verify_admin(
    State(state): State<AppState>,
    Json(req): Json<VerifyAdminRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let code = match req.code {
        Some(c) if !c.is_empty() => c,
        _ => return Err(ApiError::BadRequest("No code provided".to_string())),
    };

    match &state.admin_code {
        Some(secret) if digests_match(&code, secret) => {
            Ok(Json(serde_json::json!({ "success": true })))
        }
        _ => Err(ApiError::Unauthorized("Invalid code".to_string())),
    }
}

/// Compare through SHA-256 digests so the comparison cost does not
/// depend on where the candidate diverges from the secret.
fn digests_match(candidate: &str, secret: &str) -> bool {
    Sha256::digest(candidate.as_bytes()) == Sha256::digest(secret.as_bytes())
}
