use dotenvy::dotenv;
use gumboard::{app, seeds};
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gumboard=info".into()),
        )
        .init();

    let config = app::config::Config::from_env()
        .expect("Failed to load config (check DATABASE_URL and other env vars)");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await
        .expect("Failed to set busy timeout");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let force_all = env::args().any(|a| a == "--force-all");

    if let Err(e) = seeds::run_seeds(&pool, &config, force_all).await {
        eprintln!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}
