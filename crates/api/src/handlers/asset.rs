//! Admin handlers for assets and the reels nested under them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use montage_core::catalog::{validate_asset_input, validate_reel_input};
use montage_core::pricing::{quote, PriceQuote};
use montage_core::types::DbId;
use montage_db::models::asset::{AssetWithReelCount, CreateAsset, UpdateAsset};
use montage_db::models::reel::{CreateReel, Reel, UpdateReel};
use montage_db::repositories::{AssetRepo, ReelRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// An asset with its reels and pricing breakdown.
#[derive(Debug, Serialize)]
pub struct AssetDetail {
    #[serde(flatten)]
    pub asset: AssetWithReelCount,
    pub reels: Vec<Reel>,
    pub quote: PriceQuote,
}

/// Reels of one asset, with the asset name for display.
#[derive(Debug, Serialize)]
pub struct AssetReels {
    pub asset_id: DbId,
    pub asset_name: String,
    pub reels: Vec<Reel>,
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/assets
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let kind = validate_asset_input(&input.as_input())?;
    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        admin_id = admin.admin_id,
        asset_id = asset.id,
        kind = %kind,
        "Asset created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/admin/assets/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_with_reel_count(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Asset", id))?;
    let reels = ReelRepo::list_for_asset(&state.pool, id).await?;

    let detail = AssetDetail {
        quote: quote(&asset),
        asset,
        reels,
    };
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/admin/assets/{id}
///
/// Full replacement: omitted optional fields reset to their defaults.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    validate_asset_input(&input.as_input())?;
    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Asset", id))?;

    tracing::info!(admin_id = admin.admin_id, asset_id = id, "Asset updated");
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/admin/assets/{id}
///
/// Removes the asset and, through the foreign key cascade, its reels.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AssetRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Asset", id));
    }
    tracing::info!(admin_id = admin.admin_id, asset_id = id, "Asset deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Nested reels
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/assets/{id}/reels
pub async fn list_reels(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Asset", id))?;
    let reels = ReelRepo::list_for_asset(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: AssetReels {
            asset_id: asset.id,
            asset_name: asset.name,
            reels,
        },
    }))
}

/// POST /api/v1/admin/assets/{id}/reels
pub async fn add_reel(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReel>,
) -> AppResult<impl IntoResponse> {
    validate_reel_input(&input.name, &input.source_url)?;

    if AssetRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Asset", id));
    }

    let reel = ReelRepo::create(
        &state.pool,
        &CreateReel {
            asset_id: id,
            name: input.name,
            source_url: input.source_url,
        },
    )
    .await?;

    tracing::info!(
        admin_id = admin.admin_id,
        asset_id = id,
        reel_id = reel.id,
        "Reel added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: reel })))
}
