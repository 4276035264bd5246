//! Role check layered on top of [`AuthAdmin`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use montage_core::error::CoreError;
use montage_core::roles::ROLE_ADMIN;
use montage_db::repositories::AdminRepo;

use super::auth::AuthAdmin;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role claim and an admin row that is still active.
///
/// Missing or bad tokens are 401, as is a token whose admin no longer
/// exists. A token with another role, or for a deactivated admin, is 403.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        if admin.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }

        let account = AdminRepo::find_by_id(&state.pool, admin.admin_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Admin no longer exists".into()))
            })?;
        if !account.is_active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is deactivated".into(),
            )));
        }

        Ok(RequireAdmin(admin))
    }
}
