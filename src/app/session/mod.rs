//! Identity resolution: session cookie → principal.
//!
//! Absence is a normal result. Nothing here rejects a request; the board
//! gateway decides what an absent principal means.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sqlx::SqlitePool;

use crate::app::{
    db,
    domain::{Principal, UserId},
    AppState,
};

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "session_id";

pub fn session_cookie(session_id: impl Into<String>) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.into()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .removal()
        .into()
}

/// Resolve zero or one principal from request headers.
///
/// No cookie means no store access. Unknown, expired or malformed sessions
/// resolve to `None`, as do store errors (logged).
pub async fn resolve_principal(pool: &SqlitePool, headers: &HeaderMap) -> Option<Principal> {
    let jar = CookieJar::from_headers(headers);
    let session_id = jar.get(SESSION_COOKIE)?.value().to_string();
    if session_id.is_empty() {
        return None;
    }

    let session = match db::sessions::find_valid(pool, &session_id).await {
        Ok(Some(s)) => s,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(%err, "session lookup failed; treating request as unauthenticated");
            return None;
        }
    };

    match UserId::from_string(&session.user_id) {
        Ok(user_id) => Some(Principal::new(user_id)),
        Err(_) => {
            tracing::warn!(session_user_id = %session.user_id, "session references malformed user id");
            None
        }
    }
}

/// Extractor yielding the request's principal, if any. Never rejects.
pub struct MaybePrincipal(pub Option<Principal>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybePrincipal
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        Ok(MaybePrincipal(resolve_principal(&state.db, &parts.headers).await))
    }
}
