mod dev_organization;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::app::config::Config;

/// Outcome of running a seed. Skipped seeds are not recorded so they may run again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Seed executed and made changes; record in _gumboard_seeds.
    Applied,
    /// Seed chose not to run (e.g. env not set); do not record.
    Skipped,
}

/// A database seed. Seeds run in version order and are tracked for idempotency.
#[async_trait]
pub trait Seed: Send + Sync {
    /// Unique version identifier (timestamp format: YYYYMMDDHHMMSS).
    fn version(&self) -> i64;

    fn description(&self) -> &str;

    /// Execute the seed through the db layer.
    /// Return Skipped when the seed opts out (e.g. missing env); it will not be recorded.
    async fn run(&self, pool: &SqlitePool, config: &Config) -> Result<SeedOutcome, sqlx::Error>;
}

/// All seeds in execution order (sorted by version).
pub fn all_seeds() -> Vec<Box<dyn Seed>> {
    let mut seeds: Vec<Box<dyn Seed>> = vec![Box::new(dev_organization::DevOrganization)];
    seeds.sort_by_key(|s| s.version());
    seeds
}

/// Run all pending seeds. With `force`, previously applied seeds run again.
pub async fn run_seeds(pool: &SqlitePool, config: &Config, force: bool) -> Result<(), sqlx::Error> {
    ensure_seeds_table(pool).await?;
    let applied = applied_versions(pool).await?;
    for seed in all_seeds() {
        let version = seed.version();
        let description = seed.description();
        let already_applied = applied.contains(&version);

        if already_applied && !force {
            tracing::info!(seed = description, "skipping seed (already applied)");
            continue;
        }
        if already_applied {
            sqlx::query("DELETE FROM _gumboard_seeds WHERE version = ?")
                .bind(version)
                .execute(pool)
                .await?;
        }

        match seed.run(pool, config).await? {
            SeedOutcome::Applied => {
                record_seed(pool, version, description).await?;
                tracing::info!(seed = description, "seed applied");
            }
            SeedOutcome::Skipped => {
                tracing::info!(seed = description, "seed skipped (conditions not met)");
            }
        }
    }
    Ok(())
}

async fn ensure_seeds_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _gumboard_seeds (
            version INTEGER PRIMARY KEY NOT NULL,
            description TEXT NOT NULL,
            installed_on INTEGER NOT NULL DEFAULT (unixepoch())
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn applied_versions(pool: &SqlitePool) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT version FROM _gumboard_seeds")
        .fetch_all(pool)
        .await
}

async fn record_seed(pool: &SqlitePool, version: i64, description: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO _gumboard_seeds (version, description) VALUES (?, ?)")
        .bind(version)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(())
}
