use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::{OrganizationId, UserId};

/// Database row for users table.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub organization_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Data structure for inserting a new user.
pub struct NewUser {
    pub id: UserId,
    pub email: String,
    pub organization_id: Option<OrganizationId>,
}

/// Find a user by email address.
pub async fn find_by_email<'e, E>(
    executor: E,
    email: &str,
) -> Result<Option<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "SELECT id, email, organization_id, created_at, updated_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

/// Insert a new user into the database.
pub async fn insert<'e, E>(
    executor: E,
    user: &NewUser,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = super::now_millis();

    sqlx::query(
        "INSERT INTO users (id, email, organization_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user.id.as_str())
    .bind(&user.email)
    .bind(user.organization_id.as_ref().map(|o| o.as_str()))
    .bind(now)
    .bind(now)
    .execute(executor)
    .await?;

    Ok(())
}
