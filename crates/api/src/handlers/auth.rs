//! Admin login, token refresh, and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use montage_core::error::CoreError;
use montage_core::roles::ROLE_ADMIN;
use montage_core::types::DbId;
use montage_db::models::admin::Admin;
use montage_db::models::session::CreateSession;
use montage_db::repositories::{AdminRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Consecutive failed logins that lock the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let admin = AdminRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    ensure_active(&admin)?;

    if let Some(locked_until) = admin.locked_until {
        if locked_until > Utc::now() {
            tracing::warn!(admin_id = admin.id, %locked_until, "Login attempt on locked account");
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
        // The lock ran out; start counting failures from zero again.
        AdminRepo::clear_expired_lock(&state.pool, admin.id).await?;
    }

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failed = AdminRepo::increment_failed_login(&state.pool, admin.id).await?;
        if failed >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            AdminRepo::lock_account(&state.pool, admin.id, lock_until).await?;
            tracing::warn!(admin_id = admin.id, failed, "Admin account locked");
        }

        return Err(invalid_credentials());
    }

    AdminRepo::record_successful_login(&state.pool, admin.id).await?;
    tracing::info!(admin_id = admin.id, "Admin logged in");

    let response = create_auth_response(&state, &admin).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented session is revoked and a new one
/// issued.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::redeem_refresh_token(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let admin = AdminRepo::find_by_id(&state.pool, session.admin_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Admin no longer exists".into())))?;
    ensure_active(&admin)?;

    let response = create_auth_response(&state, &admin).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revokes every session of the calling admin.
pub async fn logout(State(state): State<AppState>, admin: AuthAdmin) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_admin(&state.pool, admin.admin_id).await?;
    tracing::info!(admin_id = admin.admin_id, revoked, "Admin logged out");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

fn ensure_active(admin: &Admin) -> AppResult<()> {
    if !admin.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }
    Ok(())
}

/// Issue a token pair, persist the refresh session, and build the response.
async fn create_auth_response(state: &AppState, admin: &Admin) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;

    let access_token = generate_access_token(admin.id, ROLE_ADMIN, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            admin_id: admin.id,
            refresh_token_hash: refresh_hash,
            expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: jwt.access_token_expiry_secs(),
        admin: AdminInfo {
            id: admin.id,
            username: admin.username.clone(),
            role: ROLE_ADMIN.to_string(),
        },
    })
}
