pub mod admin;
pub mod auth;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /catalog                          public priced listing
///
/// /auth/login                       login (public)
/// /auth/refresh                     refresh (public)
/// /auth/logout                      logout (requires auth)
///
/// /admin/dashboard                  priced listing with quotes
/// /admin/assets                     create
/// /admin/assets/{id}                get, replace, delete
/// /admin/assets/{id}/reels          list, add
/// /admin/reels/{id}                 update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handlers::catalog::list))
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
