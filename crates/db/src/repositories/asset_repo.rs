//! Repository for the `assets` table.

use montage_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetWithReelCount, CreateAsset, UpdateAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, kind, source_url, duration_minutes, duration_seconds, \
                       per_minute_rate, per_reel_rate, flat_rate, created_at, updated_at";

/// Asset columns plus a correlated reel count, read in a single statement.
const PRICED_SELECT: &str = "SELECT a.id, a.name, a.kind, a.source_url, \
                                    a.duration_minutes, a.duration_seconds, \
                                    a.per_minute_rate, a.per_reel_rate, a.flat_rate, \
                                    a.created_at, a.updated_at, \
                                    (SELECT COUNT(*) FROM reels r WHERE r.asset_id = a.id) \
                                        AS reel_count \
                             FROM assets a";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, kind, source_url, duration_minutes, duration_seconds, \
                                 per_minute_rate, per_reel_rate, flat_rate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.source_url)
            .bind(input.duration_minutes)
            .bind(input.duration_seconds)
            .bind(input.per_minute_rate)
            .bind(input.per_reel_rate)
            .bind(input.flat_rate)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset together with its current reel count.
    pub async fn find_with_reel_count(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssetWithReelCount>, sqlx::Error> {
        let query = format!("{PRICED_SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, AssetWithReelCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every asset with its reel count, oldest first.
    pub async fn list_with_reel_counts(
        pool: &PgPool,
    ) -> Result<Vec<AssetWithReelCount>, sqlx::Error> {
        let query = format!("{PRICED_SELECT} ORDER BY a.created_at, a.id");
        sqlx::query_as::<_, AssetWithReelCount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every editable field of an asset.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                name = $2, \
                kind = $3, \
                source_url = $4, \
                duration_minutes = $5, \
                duration_seconds = $6, \
                per_minute_rate = $7, \
                per_reel_rate = $8, \
                flat_rate = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.source_url)
            .bind(input.duration_minutes)
            .bind(input.duration_seconds)
            .bind(input.per_minute_rate)
            .bind(input.per_reel_rate)
            .bind(input.flat_rate)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an asset. Its reels are removed by `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of assets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
