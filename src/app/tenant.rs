//! Tenant resolution.
//!
//! **Rule**: Never cache or default the tenant. Resolve it from the store on every request.

use sqlx::SqlitePool;

use crate::app::{
    db::{self, organizations::Organization},
    domain::UserId,
    error::AppError,
};

/// Load the organisation the user belongs to.
///
/// Returns `None` if the user doesn't exist or has no organisation. Store failures propagate.
pub async fn resolve_organization(
    pool: &SqlitePool,
    user_id: &UserId,
) -> Result<Option<Organization>, AppError> {
    let organization = db::organizations::find_for_user(pool, &user_id.as_str()).await?;
    Ok(organization)
}

/// Like [`resolve_organization`], but a missing organisation is `TenantNotFound`.
/// There is no fallback to a default or unscoped view.
pub async fn require_organization(
    pool: &SqlitePool,
    user_id: &UserId,
) -> Result<Organization, AppError> {
    match resolve_organization(pool, user_id).await? {
        Some(organization) => Ok(organization),
        None => {
            tracing::warn!(%user_id, "user has no organization");
            Err(AppError::TenantNotFound)
        }
    }
}
