mod create;
pub mod gateway;
mod list;
pub mod types;

use axum::Router;

use crate::app::AppState;

pub use create::CreateBoard;
pub use list::ListBoards;

/// Board routes (list, create).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(list::routes())
        .merge(create::routes())
}
