//! Route definitions for the admin surface. Every handler here requires the
//! `admin` role.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{asset, catalog, reel};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /dashboard            -> catalog::dashboard
/// POST   /assets               -> asset::create
/// GET    /assets/{id}          -> asset::get_by_id
/// PUT    /assets/{id}          -> asset::update
/// DELETE /assets/{id}          -> asset::delete
/// GET    /assets/{id}/reels    -> asset::list_reels
/// POST   /assets/{id}/reels    -> asset::add_reel
/// PUT    /reels/{id}           -> reel::update
/// DELETE /reels/{id}           -> reel::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(catalog::dashboard))
        .route("/assets", post(asset::create))
        .route(
            "/assets/{id}",
            get(asset::get_by_id).put(asset::update).delete(asset::delete),
        )
        .route(
            "/assets/{id}/reels",
            get(asset::list_reels).post(asset::add_reel),
        )
        .route("/reels/{id}", put(reel::update).delete(reel::delete))
}
