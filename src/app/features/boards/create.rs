use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use sqlx::SqlitePool;
use validator::Validate;

use super::{
    gateway::{self, ScopedOperation, TenantScope},
    types::{validation_message, BoardResponse, CreateBoardRequest, CreateBoardResponse},
};
use crate::app::{
    db,
    domain::{BoardDescription, BoardId, BoardName},
    error::AppError,
    session::MaybePrincipal,
    AppState,
};

/// Create a board in the caller's organisation. Not idempotent.
///
/// `request` is `None` when the body could not be parsed.
pub struct CreateBoard {
    pub request: Option<CreateBoardRequest>,
}

impl CreateBoard {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            request: Some(CreateBoardRequest {
                name: Some(name.into()),
                description,
            }),
        }
    }
}

/// Input that passed validation.
pub struct ValidBoard {
    name: BoardName,
    description: BoardDescription,
}

#[async_trait]
impl ScopedOperation for CreateBoard {
    type Validated = ValidBoard;
    type Output = BoardResponse;

    fn validate(self) -> Result<ValidBoard, AppError> {
        let request = self
            .request
            .ok_or_else(|| AppError::Validation("Invalid request body".to_string()))?
            .trimmed();

        let name = request
            .name
            .as_deref()
            .ok_or_else(|| AppError::Validation("Board name is required".to_string()))
            .and_then(|n| BoardName::new(n).map_err(|e| AppError::Validation(e.to_string())))?;

        request
            .validate()
            .map_err(|errors| AppError::Validation(validation_message(&errors)))?;

        let description = BoardDescription::new(request.description.as_deref());

        Ok(ValidBoard { name, description })
    }

    async fn run(
        input: ValidBoard,
        pool: &SqlitePool,
        scope: &TenantScope,
    ) -> Result<BoardResponse, AppError> {
        let new_board = db::boards::NewBoard {
            id: BoardId::new(),
            name: input.name,
            description: input.description,
            organization_id: scope.organization_id().clone(),
            created_by: scope.principal().user_id.clone(),
        };

        let board = db::boards::insert(pool, &new_board).await?;

        tracing::info!(
            board_id = %board.id,
            organization_id = %board.organization_id,
            user_id = %board.created_by,
            "board created"
        );

        Ok(board.into())
    }
}

/// POST /api/boards — Create a board.
pub async fn create(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    payload: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBoardResponse>), AppError> {
    let request = match payload {
        Ok(Json(request)) => Some(request),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected create board body");
            None
        }
    };

    let board = gateway::execute(&state.db, principal, CreateBoard { request }).await?;
    Ok((StatusCode::CREATED, Json(CreateBoardResponse { board })))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/boards", post(create))
}
