//! Shared response envelope types for API handlers.
//!
//! Catalog and admin responses use a `{ "data": ... }` envelope. Auth
//! responses are returned bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: reels }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
