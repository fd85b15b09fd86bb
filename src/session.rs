//! In-memory sessions, flash messages, and the cookie middleware
//!
//! Sessions are resolved once per request from the `sid` cookie and handed to
//! handlers as a typed `SessionContext` request extension. Handlers never
//! reach into an untyped attribute bag; everything they may read is on the
//! context struct.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::api::AppState;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "sid";

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One queued flash message, consumed by the next page render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// Stored session state
#[derive(Debug, Clone)]
struct Session {
    uid: u64,
    csrf_token: String,
    flash: Vec<FlashMessage>,
}

/// What a handler receives for an authenticated request
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: Uuid,
    pub uid: u64,
    pub csrf_token: String,
}

/// In-memory session store
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a user; returns the new session id
    pub fn create(&self, uid: u64) -> Uuid {
        let session_id = Uuid::new_v4();
        let csrf_token = format!("{:032x}", rand::rng().random::<u128>());
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(
            session_id,
            Session {
                uid,
                csrf_token,
                flash: Vec::new(),
            },
        );
        tracing::debug!(uid, %session_id, "session created");
        session_id
    }

    pub fn context(&self, session_id: Uuid) -> Option<SessionContext> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(&session_id).map(|session| SessionContext {
            session_id,
            uid: session.uid,
            csrf_token: session.csrf_token.clone(),
        })
    }

    pub fn push_flash(&self, session_id: Uuid, level: FlashLevel, text: impl Into<String>) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(session) = sessions.get_mut(&session_id) {
            session.flash.push(FlashMessage {
                level,
                text: text.into(),
            });
        }
    }

    /// Drain the session's queued flash messages
    pub fn take_flashes(&self, session_id: Uuid) -> Vec<FlashMessage> {
        let mut sessions = self.sessions.write().unwrap();
        sessions
            .get_mut(&session_id)
            .map(|session| std::mem::take(&mut session.flash))
            .unwrap_or_default()
    }

    /// Resolve the session context from a request's cookie header
    pub fn resolve(&self, headers: &axum::http::HeaderMap) -> Option<SessionContext> {
        let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
        let session_id = cookies.split(';').find_map(|part| {
            part.trim()
                .strip_prefix(SESSION_COOKIE)?
                .strip_prefix('=')?
                .parse::<Uuid>()
                .ok()
        })?;
        self.context(session_id)
    }
}

/// Attach the `SessionContext` extension when the request carries a valid session
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(context) = state.sessions.resolve(request.headers()) {
        request.extensions_mut().insert(context);
    }
    next.run(request).await
}

/// Shared store handle, mirroring the other service handles
pub type SessionStoreHandle = Arc<SessionStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn test_create_and_context() {
        let store = SessionStore::new();
        let sid = store.create(42);
        let ctx = store.context(sid).unwrap();
        assert_eq!(ctx.uid, 42);
        assert_eq!(ctx.csrf_token.len(), 32);
        assert!(store.context(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_flash_queue_drains() {
        let store = SessionStore::new();
        let sid = store.create(1);
        store.push_flash(sid, FlashLevel::Success, "User data changed");
        store.push_flash(sid, FlashLevel::Error, "nope");

        let flashes = store.take_flashes(sid);
        assert_eq!(flashes.len(), 2);
        assert_eq!(flashes[0].level, FlashLevel::Success);
        assert!(store.take_flashes(sid).is_empty());
    }

    #[test]
    fn test_resolve_from_cookie_header() {
        let store = SessionStore::new();
        let sid = store.create(7);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; sid={}", sid)).unwrap(),
        );
        assert_eq!(store.resolve(&headers).unwrap().uid, 7);

        headers.insert(header::COOKIE, HeaderValue::from_static("sid=not-a-uuid"));
        assert!(store.resolve(&headers).is_none());

        assert!(store.resolve(&HeaderMap::new()).is_none());
    }
}
