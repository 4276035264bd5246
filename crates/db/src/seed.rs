//! First-start seeding of the default admin and the demo catalog.
//!
//! Each part is skipped when its table already has rows, so the routine can
//! run on every process start.

use montage_core::seed::{demo_catalog, DEFAULT_ADMIN_USERNAME};
use sqlx::PgPool;

/// What a call to [`seed_defaults`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub assets_inserted: usize,
    pub reels_inserted: usize,
}

/// Insert the default admin if no admin exists, and the demo catalog if no
/// asset exists. Runs in a single transaction.
///
/// `admin_password_hash` must already be an Argon2 PHC string.
pub async fn seed_defaults(
    pool: &PgPool,
    admin_password_hash: &str,
) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    let (admin_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins")
        .fetch_one(&mut *tx)
        .await?;
    if admin_count == 0 {
        sqlx::query("INSERT INTO admins (username, password_hash) VALUES ($1, $2)")
            .bind(DEFAULT_ADMIN_USERNAME)
            .bind(admin_password_hash)
            .execute(&mut *tx)
            .await?;
        report.admin_created = true;
        tracing::info!(username = DEFAULT_ADMIN_USERNAME, "Created default admin account");
    }

    let (asset_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
        .fetch_one(&mut *tx)
        .await?;
    if asset_count == 0 {
        for asset in demo_catalog() {
            let (asset_id,): (i64,) = sqlx::query_as(
                "INSERT INTO assets (name, kind, source_url, duration_minutes, duration_seconds, \
                                     per_minute_rate, per_reel_rate, flat_rate) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING id",
            )
            .bind(asset.name)
            .bind(asset.kind)
            .bind(asset.source_url)
            .bind(asset.duration_minutes)
            .bind(asset.duration_seconds)
            .bind(asset.per_minute_rate)
            .bind(asset.per_reel_rate)
            .bind(asset.flat_rate)
            .fetch_one(&mut *tx)
            .await?;

            for reel in asset.reels {
                sqlx::query("INSERT INTO reels (asset_id, name, source_url) VALUES ($1, $2, $3)")
                    .bind(asset_id)
                    .bind(reel.name)
                    .bind(reel.source_url)
                    .execute(&mut *tx)
                    .await?;
                report.reels_inserted += 1;
            }
            report.assets_inserted += 1;
        }
        tracing::info!(
            assets = report.assets_inserted,
            reels = report.reels_inserted,
            "Inserted demo catalog"
        );
    }

    tx.commit().await?;
    Ok(report)
}
