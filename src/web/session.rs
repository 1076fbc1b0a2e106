//! Server-side sessions keyed by a signed cookie token.
//!
//! Each browser gets a random token delivered in the `sid` cookie as
//! `{token}.{signature}`, where the signature is a SHA-256 digest over
//! the configured secret and the token. The session data itself never
//! leaves the server: a map from token to `{lang, form, flash}`.
//! Entries idle past [`SESSION_TTL`] are swept whenever a new session
//! is minted, so abandoned visits do not accumulate.
//! One session serves one request at a time, so a write lock held for
//! the duration of a handler's read-modify-write is all the
//! coordination needed.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::labels::Lang;
use crate::wizard::FormState;

const COOKIE_NAME: &str = "sid";

/// Sessions idle longer than this are dropped the next time a new
/// session is minted, so the map does not grow with abandoned visits.
const SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Per-visitor wizard state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub lang: Lang,
    pub form: FormState,
    /// One-shot message shown on the next rendered page.
    pub flash: Option<String>,
}

/// Result of resolving the session for a request. When a new session
/// was minted, `set_cookie` carries the header value the response must
/// include.
pub struct SessionRef {
    pub token: String,
    pub set_cookie: Option<String>,
}

impl SessionRef {
    /// Attach the Set-Cookie header to a response, if one is pending.
    pub fn apply(&self, response: &mut Response) {
        if let Some(cookie) = &self.set_cookie {
            if let Ok(value) = HeaderValue::from_str(cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
    }
}

/// A stored session plus the last time a request touched it.
#[derive(Debug)]
struct Entry {
    session: Session,
    touched: Instant,
}

impl Entry {
    fn fresh() -> Self {
        Self {
            session: Session::default(),
            touched: Instant::now(),
        }
    }
}

/// In-memory session store.
#[derive(Clone)]
pub struct SessionStore {
    secret: Arc<str>,
    ttl: Duration,
    inner: Arc<RwLock<HashMap<String, Entry>>>,
}

impl SessionStore {
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, SESSION_TTL)
    }

    fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            secret: Arc::from(secret),
            ttl,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Resolve the request's session, minting a fresh one when the
    /// cookie is missing or its signature does not verify.
    pub async fn establish(&self, headers: &HeaderMap) -> SessionRef {
        if let Some(token) = self.token_from_headers(headers) {
            return SessionRef {
                token,
                set_cookie: None,
            };
        }
        self.mint().await
    }

    /// Create a brand-new session and its cookie. Minting also sweeps
    /// idle sessions past their TTL out of the map.
    pub async fn mint(&self) -> SessionRef {
        let token = Uuid::new_v4().simple().to_string();
        {
            let mut sessions = self.inner.write().await;
            let now = Instant::now();
            sessions.retain(|_, entry| now.duration_since(entry.touched) < self.ttl);
            sessions.insert(token.clone(), Entry::fresh());
        }

        let cookie = format!(
            "{COOKIE_NAME}={}.{}; Path=/; HttpOnly; SameSite=Lax",
            token,
            self.sign(&token)
        );
        SessionRef {
            token,
            set_cookie: Some(cookie),
        }
    }

    /// Snapshot of the session without consuming the flash message.
    pub async fn load(&self, token: &str) -> Session {
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(token.to_string()).or_insert_with(Entry::fresh);
        entry.touched = Instant::now();
        entry.session.clone()
    }

    /// Snapshot of the session, taking any pending flash message.
    pub async fn load_taking_flash(&self, token: &str) -> Session {
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(token.to_string()).or_insert_with(Entry::fresh);
        entry.touched = Instant::now();
        let flash = entry.session.flash.take();
        let mut snapshot = entry.session.clone();
        snapshot.flash = flash;
        snapshot
    }

    /// Read-modify-write the session under the store lock.
    pub async fn update<R>(&self, token: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(token.to_string()).or_insert_with(Entry::fresh);
        entry.touched = Instant::now();
        f(&mut entry.session)
    }

    /// Reset the session for a (re-)selected language: fresh form,
    /// chosen language, no pending flash.
    pub async fn reset(&self, token: &str, lang: Lang) {
        self.update(token, |session| {
            *session = Session {
                lang,
                ..Session::default()
            };
        })
        .await;
    }

    fn token_from_headers(&self, headers: &HeaderMap) -> Option<String> {
        let raw = headers.get(COOKIE)?.to_str().ok()?;
        for pair in raw.split(';') {
            let Some((name, value)) = pair.trim().split_once('=') else {
                continue;
            };
            if name != COOKIE_NAME {
                continue;
            }
            let (token, signature) = value.split_once('.')?;
            if self.sign(token) == signature {
                return Some(token.to_string());
            }
            tracing::debug!("session cookie signature mismatch");
            return None;
        }
        None
    }

    fn sign(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b".");
        hasher.update(token.as_bytes());
        let digest = hasher.finalize();
        let mut out = String::with_capacity(64);
        for byte in digest {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}
