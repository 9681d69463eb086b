//! Dev seed: creates a tenant whose session can immediately use the board API.

use std::sync::Mutex;

use gumboard::app::{config::Config, db};
use gumboard::seeds::{Seed, SeedOutcome};

mod common;

use crate::common::*;

/// Seeds read process-wide env vars; tests that set them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[tokio::test]
async fn dev_organization_seed_creates_usable_tenant_once() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let pool = test_pool().await;
    std::env::set_var("SEED_USER_EMAIL", "Dev@Example.com");
    std::env::set_var("SEED_ORGANIZATION_NAME", "Seeded Org");

    gumboard::seeds::run_seeds(&pool, &Config::for_tests(), false)
        .await
        .unwrap();

    let user = db::users::find_by_email(&pool, "dev@example.com")
        .await
        .unwrap()
        .expect("seeded user exists");
    let organization_id = user.organization_id.expect("seeded user has an organization");
    let organization = db::organizations::find_by_id(&pool, &organization_id)
        .await
        .unwrap()
        .expect("seeded organization exists");
    assert_eq!(organization.name, "Seeded Org");

    let session_id: String = sqlx::query_scalar("SELECT id FROM sessions WHERE user_id = ?")
        .bind(&user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    let app = test_router(pool.clone());
    let cookie = format!("session_id={}", session_id);
    let (status, _) = send(&app, list_request(Some(&cookie))).await;
    assert_eq!(status, http::StatusCode::OK);

    // Already recorded: a second run must not create another tenant.
    gumboard::seeds::run_seeds(&pool, &Config::for_tests(), false)
        .await
        .unwrap();
    let organizations: i64 = sqlx::query_scalar("SELECT count(*) FROM organizations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(organizations, 1);
}

#[tokio::test]
async fn seed_is_not_recorded_for_existing_user_without_organization() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let pool = test_pool().await;
    create_user(&pool, "orphan@example.com", None).await;

    let seed = gumboard::seeds::all_seeds()
        .into_iter()
        .find(|s| s.description() == "dev_organization")
        .expect("dev organization seed is registered");
    std::env::set_var("SEED_USER_EMAIL", "orphan@example.com");
    let outcome = seed.run(&pool, &Config::for_tests()).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped);
}
