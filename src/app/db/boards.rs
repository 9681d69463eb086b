use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::{BoardDescription, BoardId, BoardName, OrganizationId, UserId};

/// Database row for boards table.
#[derive(Debug, Clone, FromRow)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub organization_id: String,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Board projection without internal-only columns.
#[derive(Debug, Clone, FromRow)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Data structure for inserting a new board.
pub struct NewBoard {
    pub id: BoardId,
    pub name: BoardName,
    pub description: BoardDescription,
    pub organization_id: OrganizationId,
    pub created_by: UserId,
}

/// Insert a new board and return the stored row.
/// `created_at` and `updated_at` are both set to the current instant.
pub async fn insert<'e, E>(
    executor: E,
    board: &NewBoard,
) -> Result<Board, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = super::now_millis();

    sqlx::query_as::<_, Board>(
        "INSERT INTO boards (id, name, description, organization_id, created_by, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, name, description, organization_id, created_by, created_at, updated_at",
    )
    .bind(board.id.as_str())
    .bind(board.name.as_str())
    .bind(board.description.as_deref())
    .bind(board.organization_id.as_str())
    .bind(board.created_by.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// All boards owned by an organisation, newest first. Ties on `created_at` fall back to `id`.
pub async fn find_by_organization<'e, E>(
    executor: E,
    organization_id: &str,
) -> Result<Vec<BoardSummary>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, BoardSummary>(
        "SELECT id, name, description, created_by, created_at, updated_at FROM boards \
         WHERE organization_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(organization_id)
    .fetch_all(executor)
    .await
}
