//! Reel entity model and DTOs.

use montage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reel {
    pub id: DbId,
    pub asset_id: DbId,
    pub name: String,
    pub source_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a new reel to an asset.
#[derive(Debug, Clone)]
pub struct CreateReel {
    pub asset_id: DbId,
    pub name: String,
    pub source_url: String,
}

/// DTO for editing a reel. The owning asset cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReel {
    pub name: String,
    #[serde(default)]
    pub source_url: String,
}
