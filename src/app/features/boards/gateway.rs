//! Board access gateway.
//!
//! Every board operation runs through [`execute`], which applies the
//! precondition chain once: principal, then input validation, then tenant.
//! Operations only ever see a [`TenantScope`], and only this module can build one.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::app::{
    domain::{OrganizationId, Principal},
    error::AppError,
    tenant,
};

/// The resolved tenant for one request, paired with the acting principal.
#[derive(Debug)]
pub struct TenantScope {
    organization_id: OrganizationId,
    principal: Principal,
}

impl TenantScope {
    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}

/// A board operation scoped to exactly one tenant.
///
/// `validate` runs before any store access; `run` receives its output.
#[async_trait]
pub trait ScopedOperation: Send + Sized {
    type Validated: Send;
    type Output: Send;

    fn validate(self) -> Result<Self::Validated, AppError>;

    async fn run(
        input: Self::Validated,
        pool: &SqlitePool,
        scope: &TenantScope,
    ) -> Result<Self::Output, AppError>;
}

/// Run `op` for `principal`. Each failed stage short-circuits before the next.
pub async fn execute<O: ScopedOperation>(
    pool: &SqlitePool,
    principal: Option<Principal>,
    op: O,
) -> Result<O::Output, AppError> {
    let principal = principal.ok_or(AppError::Unauthorized)?;
    let input = op.validate()?;

    let organization = tenant::require_organization(pool, &principal.user_id).await?;
    let organization_id = OrganizationId::from_string(&organization.id).map_err(|_| {
        tracing::error!(organization_id = %organization.id, "stored organization id is not a ULID");
        AppError::Internal
    })?;

    let scope = TenantScope {
        organization_id,
        principal,
    };
    O::run(input, pool, &scope).await
}
