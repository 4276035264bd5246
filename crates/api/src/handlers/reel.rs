//! Admin handlers for individual reels.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use montage_core::catalog::validate_reel_input;
use montage_core::types::DbId;
use montage_db::models::reel::UpdateReel;
use montage_db::repositories::ReelRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/admin/reels/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReel>,
) -> AppResult<impl IntoResponse> {
    validate_reel_input(&input.name, &input.source_url)?;
    let reel = ReelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Reel", id))?;

    tracing::info!(admin_id = admin.admin_id, reel_id = id, "Reel updated");
    Ok(Json(DataResponse { data: reel }))
}

/// DELETE /api/v1/admin/reels/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ReelRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Reel", id));
    }
    tracing::info!(admin_id = admin.admin_id, reel_id = id, "Reel deleted");
    Ok(StatusCode::NO_CONTENT)
}
