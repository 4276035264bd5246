//! Asset entity model and DTOs.

use montage_core::catalog::{
    AssetInput, AssetKind, DEFAULT_FLAT_RATE, DEFAULT_PER_MINUTE_RATE, DEFAULT_PER_REEL_RATE,
};
use montage_core::pricing::Priceable;
use montage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assets` table.
///
/// `kind` is kept as stored text; use [`Asset::kind`] for the parsed value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub kind: String,
    pub source_url: String,
    pub duration_minutes: i32,
    pub duration_seconds: i32,
    pub per_minute_rate: f64,
    pub per_reel_rate: f64,
    pub flat_rate: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        AssetKind::parse(&self.kind)
    }
}

/// An asset row plus the number of reels attached to it.
///
/// Both come from one statement, so the count is consistent with the row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetWithReelCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub asset: Asset,
    pub reel_count: i64,
}

impl Priceable for AssetWithReelCount {
    fn kind(&self) -> AssetKind {
        self.asset.kind()
    }
    fn duration_minutes(&self) -> i32 {
        self.asset.duration_minutes
    }
    fn duration_seconds(&self) -> i32 {
        self.asset.duration_seconds
    }
    fn per_minute_rate(&self) -> f64 {
        self.asset.per_minute_rate
    }
    fn per_reel_rate(&self) -> f64 {
        self.asset.per_reel_rate
    }
    fn flat_rate(&self) -> f64 {
        self.asset.flat_rate
    }
    fn reel_count(&self) -> i64 {
        self.reel_count
    }
}

fn default_per_minute_rate() -> f64 {
    DEFAULT_PER_MINUTE_RATE
}

fn default_per_reel_rate() -> f64 {
    DEFAULT_PER_REEL_RATE
}

fn default_flat_rate() -> f64 {
    DEFAULT_FLAT_RATE
}

/// DTO for creating an asset. Omitted fields take the catalog defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub duration_seconds: i32,
    #[serde(default = "default_per_minute_rate")]
    pub per_minute_rate: f64,
    #[serde(default = "default_per_reel_rate")]
    pub per_reel_rate: f64,
    #[serde(default = "default_flat_rate")]
    pub flat_rate: f64,
}

/// Updates replace every editable field, so omitted fields reset to defaults.
pub type UpdateAsset = CreateAsset;

impl CreateAsset {
    /// Borrow the fields for [`montage_core::catalog::validate_asset_input`].
    pub fn as_input(&self) -> AssetInput<'_> {
        AssetInput {
            name: &self.name,
            kind: &self.kind,
            source_url: &self.source_url,
            duration_minutes: self.duration_minutes,
            duration_seconds: self.duration_seconds,
            per_minute_rate: self.per_minute_rate,
            per_reel_rate: self.per_reel_rate,
            flat_rate: self.flat_rate,
        }
    }
}
