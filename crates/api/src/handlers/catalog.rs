//! Priced catalog listings: the public display page and the admin dashboard.
//!
//! Both read every asset with its reel count in one statement, price each
//! row, and sum the rounded totals.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use montage_core::pricing::{grand_total, quote, total_for, PriceQuote};
use montage_core::types::DbId;
use montage_db::models::asset::AssetWithReelCount;
use montage_db::models::reel::Reel;
use montage_db::repositories::{AssetRepo, ReelRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One asset as shown in a listing.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub asset: AssetWithReelCount,
    pub reels: Vec<Reel>,
    pub calculated_total: f64,
    /// Only filled in on the admin dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<PriceQuote>,
}

#[derive(Debug, Serialize)]
pub struct CatalogListing {
    pub assets: Vec<CatalogEntry>,
    pub asset_count: usize,
    pub grand_total: f64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog
///
/// Public listing of every asset with its reels and rounded total.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let listing = build_listing(&state, false).await?;
    tracing::debug!(
        asset_count = listing.asset_count,
        grand_total = listing.grand_total,
        "Served public catalog"
    );
    Ok(Json(DataResponse { data: listing }))
}

/// GET /api/v1/admin/dashboard
///
/// Same listing with a pricing breakdown per asset.
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let listing = build_listing(&state, true).await?;
    tracing::info!(
        admin_id = admin.admin_id,
        asset_count = listing.asset_count,
        grand_total = listing.grand_total,
        "Served admin dashboard"
    );
    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn build_listing(state: &AppState, with_quotes: bool) -> AppResult<CatalogListing> {
    let assets = AssetRepo::list_with_reel_counts(&state.pool).await?;
    let ids: Vec<DbId> = assets.iter().map(|a| a.asset.id).collect();
    let reels = ReelRepo::list_for_assets(&state.pool, &ids).await?;

    let grand_total = grand_total(&assets);
    let entries = attach_reels(assets, reels, with_quotes);

    Ok(CatalogListing {
        asset_count: entries.len(),
        assets: entries,
        grand_total,
    })
}

/// Pair each asset with its reels, keeping the asset order.
///
/// Totals use the reel count read with the asset row, not `reels.len()`.
fn attach_reels(
    assets: Vec<AssetWithReelCount>,
    reels: Vec<Reel>,
    with_quotes: bool,
) -> Vec<CatalogEntry> {
    let mut by_asset: HashMap<DbId, Vec<Reel>> = HashMap::new();
    for reel in reels {
        by_asset.entry(reel.asset_id).or_default().push(reel);
    }

    assets
        .into_iter()
        .map(|asset| CatalogEntry {
            calculated_total: total_for(&asset),
            quote: with_quotes.then(|| quote(&asset)),
            reels: by_asset.remove(&asset.asset.id).unwrap_or_default(),
            asset,
        })
        .collect()
}
