use axum::{extract::State, http::StatusCode, routing::delete, Router};
use axum_extra::extract::cookie::CookieJar;

use crate::app::{
    db,
    error::AppError,
    session::{clear_session_cookie, SESSION_COOKIE},
    AppState,
};

/// DELETE /api/session — End the current session. Succeeds without one.
pub async fn submit(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        db::sessions::delete(&state.db, cookie.value()).await?;
    }

    let jar = jar.add(clear_session_cookie());
    Ok((jar, StatusCode::NO_CONTENT))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/session", delete(submit))
}
