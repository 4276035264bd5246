//! Public catalog listing and the admin dashboard.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, get_auth};
use montage_db::models::asset::CreateAsset;
use montage_db::models::reel::CreateReel;
use montage_db::repositories::{AssetRepo, ReelRepo};
use sqlx::PgPool;

fn asset(name: &str, kind: &str, minutes: i32, seconds: i32) -> CreateAsset {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "kind": kind,
        "duration_minutes": minutes,
        "duration_seconds": seconds,
    }))
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_catalog_totals_zero(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/catalog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["asset_count"], 0);
    assert_eq!(json["data"]["grand_total"], 0.0);
    assert!(json["data"]["assets"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_catalog_is_priced(pool: PgPool) {
    montage_db::seed::seed_defaults(&pool, "$argon2id$unused")
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/catalog").await).await;
    let data = &json["data"];

    assert_eq!(data["asset_count"], 9);
    assert_eq!(data["grand_total"], 135.5);

    let assets = data["assets"].as_array().unwrap();
    let totals: Vec<f64> = assets
        .iter()
        .map(|a| a["calculated_total"].as_f64().unwrap())
        .collect();
    assert_eq!(totals, vec![5.0, 23.5, 18.0, 15.0, 5.0, 20.0, 5.0, 29.5, 14.5]);

    assert_eq!(assets[0]["name"], "Milan reels video");
    assert_eq!(assets[1]["reel_count"], 3);
    assert_eq!(assets[1]["reels"].as_array().unwrap().len(), 3);
    assert!(assets[0].get("quote").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn grand_total_sums_rounded_totals(pool: PgPool) {
    // Two 1.2 flat-rate assets: 1.0 + 1.0, not round(2.4) = 2.5.
    for name in ["A", "B"] {
        let mut input = asset(name, "short_form_standalone", 0, 0);
        input.flat_rate = 1.2;
        AssetRepo::create(&pool, &input).await.unwrap();
    }
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/catalog").await).await;
    assert_eq!(json["data"]["grand_total"], 2.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_stored_kind_prices_at_zero(pool: PgPool) {
    let mut input = asset("Legacy", "yt_only", 9, 0);
    input.flat_rate = 50.0;
    AssetRepo::create(&pool, &input).await.unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/catalog").await).await;
    let entry = &json["data"]["assets"][0];
    assert_eq!(entry["kind"], "yt_only");
    assert_eq!(entry["calculated_total"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_includes_quotes(pool: PgPool) {
    let created = AssetRepo::create(&pool, &asset("Oddities 6", "composite_with_reels", 4, 31))
        .await
        .unwrap();
    for i in 1..=3 {
        ReelRepo::create(
            &pool,
            &CreateReel {
                asset_id: created.id,
                name: format!("reel {i}"),
                source_url: String::new(),
            },
        )
        .await
        .unwrap();
    }
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/v1/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entry = &json["data"]["assets"][0];
    assert_eq!(entry["calculated_total"], 23.5);
    assert_eq!(entry["quote"]["kind"], "composite_with_reels");
    assert_eq!(entry["quote"]["reel_count"], 3);
    assert_eq!(entry["quote"]["total"], 23.5);
    let precise = entry["quote"]["precise_total"].as_f64().unwrap();
    assert!((precise - 23.308_333).abs() < 1e-5);
    assert_eq!(json["data"]["grand_total"], 23.5);
}
