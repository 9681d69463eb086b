pub mod logout;

use axum::Router;

use crate::app::AppState;

/// Session routes. Sign-in itself belongs to the identity provider.
pub fn routes() -> Router<AppState> {
    Router::new().merge(logout::routes())
}
