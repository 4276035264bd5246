//! Repository for the `reels` table.

use montage_core::types::DbId;
use sqlx::PgPool;

use crate::models::reel::{CreateReel, Reel, UpdateReel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, asset_id, name, source_url, created_at, updated_at";

/// Provides CRUD operations for reels.
pub struct ReelRepo;

impl ReelRepo {
    /// Attach a new reel to an asset, returning the created row.
    ///
    /// Fails with a foreign-key violation if the asset does not exist.
    pub async fn create(pool: &PgPool, input: &CreateReel) -> Result<Reel, sqlx::Error> {
        let query = format!(
            "INSERT INTO reels (asset_id, name, source_url) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reel>(&query)
            .bind(input.asset_id)
            .bind(&input.name)
            .bind(&input.source_url)
            .fetch_one(pool)
            .await
    }

    /// Find a reel by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reels WHERE id = $1");
        sqlx::query_as::<_, Reel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the reels of one asset in insertion order.
    pub async fn list_for_asset(pool: &PgPool, asset_id: DbId) -> Result<Vec<Reel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reels WHERE asset_id = $1 ORDER BY id");
        sqlx::query_as::<_, Reel>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }

    /// List the reels of several assets at once, grouped by asset then id.
    pub async fn list_for_assets(
        pool: &PgPool,
        asset_ids: &[DbId],
    ) -> Result<Vec<Reel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reels WHERE asset_id = ANY($1) ORDER BY asset_id, id"
        );
        sqlx::query_as::<_, Reel>(&query)
            .bind(asset_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a reel's descriptive fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReel,
    ) -> Result<Option<Reel>, sqlx::Error> {
        let query = format!(
            "UPDATE reels SET name = $2, source_url = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.source_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reel. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
