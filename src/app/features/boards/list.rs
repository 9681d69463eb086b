use async_trait::async_trait;
use axum::{extract::State, routing::get, Json, Router};
use sqlx::SqlitePool;

use super::{
    gateway::{self, ScopedOperation, TenantScope},
    types::{BoardSummaryResponse, ListBoardsResponse},
};
use crate::app::{db, error::AppError, session::MaybePrincipal, AppState};

/// List every board of the caller's organisation, newest first.
pub struct ListBoards;

#[async_trait]
impl ScopedOperation for ListBoards {
    type Validated = ();
    type Output = Vec<BoardSummaryResponse>;

    fn validate(self) -> Result<(), AppError> {
        Ok(())
    }

    async fn run(
        _input: (),
        pool: &SqlitePool,
        scope: &TenantScope,
    ) -> Result<Self::Output, AppError> {
        let boards = db::boards::find_by_organization(pool, &scope.organization_id().as_str()).await?;
        tracing::debug!(
            organization_id = %scope.organization_id(),
            count = boards.len(),
            "listed boards"
        );
        Ok(boards.into_iter().map(Into::into).collect())
    }
}

/// GET /api/boards — List boards (scoped by org).
pub async fn list(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
) -> Result<Json<ListBoardsResponse>, AppError> {
    let boards = gateway::execute(&state.db, principal, ListBoards).await?;
    Ok(Json(ListBoardsResponse { boards }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/boards", get(list))
}
