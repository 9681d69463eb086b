#![allow(dead_code)]

use axum::body::Body;
use gumboard::app::{
    config::Config,
    db,
    domain::{OrganizationId, UserId},
    AppState,
};
use gumboard::create_router;
use http_body_util::BodyExt;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use time::{Duration, OffsetDateTime};
use tower::ServiceExt;

/// In-memory database with migrations applied. One connection, kept open,
/// so every query sees the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_router(pool: SqlitePool) -> axum::Router {
    create_router(AppState {
        db: pool,
        config: Config::for_tests(),
    })
}

pub async fn create_organization(pool: &SqlitePool, name: &str) -> OrganizationId {
    let id = OrganizationId::new();
    db::organizations::insert(
        pool,
        &db::organizations::NewOrganization {
            id: id.clone(),
            name: name.to_string(),
        },
    )
    .await
    .unwrap();
    id
}

pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    organization_id: Option<&OrganizationId>,
) -> UserId {
    let id = UserId::new();
    db::users::insert(
        pool,
        &db::users::NewUser {
            id: id.clone(),
            email: email.to_string(),
            organization_id: organization_id.cloned(),
        },
    )
    .await
    .unwrap();
    id
}

/// Mint a session for the user and return a `cookie` header value.
pub async fn session_cookie_for(pool: &SqlitePool, user_id: &UserId) -> String {
    let expires_at = OffsetDateTime::now_utc() + Duration::days(1);
    let session_id = db::sessions::create(pool, user_id, expires_at).await.unwrap();
    format!("session_id={}", session_id)
}

/// Organisation plus a member with a live session.
pub async fn member_with_cookie(
    pool: &SqlitePool,
    organization: &str,
    email: &str,
) -> (OrganizationId, UserId, String) {
    let organization_id = create_organization(pool, organization).await;
    let user_id = create_user(pool, email, Some(&organization_id)).await;
    let cookie = session_cookie_for(pool, &user_id).await;
    (organization_id, user_id, cookie)
}

pub async fn board_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT count(*) FROM boards")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn list_request(cookie: Option<&str>) -> http::Request<Body> {
    let mut builder = http::Request::builder().method("GET").uri("/api/boards");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn create_request(cookie: Option<&str>, body: &str) -> http::Request<Body> {
    let mut builder = http::Request::builder()
        .method("POST")
        .uri("/api/boards")
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Send a request and return status plus parsed JSON body.
pub async fn send(app: &axum::Router, request: http::Request<Body>) -> (http::StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
