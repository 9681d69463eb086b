use std::env;

use async_trait::async_trait;
use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};

use crate::app::config::Config;
use crate::app::db::{self, organizations::NewOrganization, users::NewUser};
use crate::app::domain::{OrganizationId, UserId};
use crate::app::session::session_cookie;
use crate::seeds::{Seed, SeedOutcome};

/// Development tenant: one organisation, one member, one session.
pub struct DevOrganization;

#[async_trait]
impl Seed for DevOrganization {
    fn version(&self) -> i64 {
        20260101120000
    }

    fn description(&self) -> &str {
        "dev_organization"
    }

    async fn run(&self, pool: &SqlitePool, config: &Config) -> Result<SeedOutcome, sqlx::Error> {
        let email = match env::var("SEED_USER_EMAIL") {
            Ok(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
            _ => return Ok(SeedOutcome::Skipped),
        };
        if let Some(existing) = db::users::find_by_email(pool, &email).await? {
            if existing.organization_id.is_none() {
                tracing::warn!(%email, "seed user exists without an organization; not recording seed");
                return Ok(SeedOutcome::Skipped);
            }
            return Ok(SeedOutcome::Applied);
        }

        let organization_name = env::var("SEED_ORGANIZATION_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Dev Organization".to_string());

        let mut tx = pool.begin().await?;

        let organization_id = OrganizationId::new();
        db::organizations::insert(
            &mut *tx,
            &NewOrganization {
                id: organization_id.clone(),
                name: organization_name,
            },
        )
        .await?;

        let user_id = UserId::new();
        db::users::insert(
            &mut *tx,
            &NewUser {
                id: user_id.clone(),
                email: email.clone(),
                organization_id: Some(organization_id),
            },
        )
        .await?;

        let expires_at = OffsetDateTime::now_utc() + Duration::days(config.session_ttl_days);
        let session_id = db::sessions::create(&mut *tx, &user_id, expires_at).await?;

        tx.commit().await?;

        let cookie = session_cookie(session_id);
        eprintln!("Created dev user {}. Cookie: {}={}", email, cookie.name(), cookie.value());
        Ok(SeedOutcome::Applied)
    }
}
