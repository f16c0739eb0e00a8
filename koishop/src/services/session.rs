//! # Session Store & Session Manager
//!
//! The persisted session store is an opaque async key-value capability: the
//! device keeps a single bearer token under one canonical key across app
//! restarts. [`Session`] layers the Anonymous/Authenticated state machine on
//! top of it.
//!
//! State machine:
//! - initial: **Anonymous** (possibly rehydrated to Authenticated via
//!   [`Session::load`] at startup)
//! - Anonymous → Authenticated: successful login ([`Session::establish`])
//! - Authenticated → Anonymous: explicit logout ([`Session::clear`]), or an
//!   auth-rejection on any authenticated call — that second transition is
//!   driven by the event handler, not inside this type
//!
//! At most one token is live at a time; presence of a token is the sole
//! signal of "logged in". There is no refresh flow: token lifetime is
//! server-determined and opaque here.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Canonical storage key for the bearer token. Earlier client iterations
/// disagreed between "token" and "accessToken"; this is the single source of
/// truth now.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session store corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Opaque asynchronous key-value store for session data.
///
/// Implementations must survive app restarts (except the in-memory test
/// store) but not app uninstall.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;
    async fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.values.write().remove(key);
        Ok(())
    }
}

/// JSON-file-backed store: a flat string map persisted on every write.
pub struct FileSessionStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store, reading existing contents if the file is present.
    /// A missing or unreadable file starts the store empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Session file corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            values: RwLock::new(values),
        }
    }

    async fn flush(&self) -> Result<(), SessionStoreError> {
        let snapshot = self.values.read().clone();
        let raw = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.values.write().insert(key.to_string(), value.to_string());
        self.flush().await
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.values.write().remove(key);
        self.flush().await
    }
}

/// Client-side belief about whether a valid token is held.
///
/// The token lives on this value, scoped to the owning [`ApiClient`] instance,
/// rather than as a process-wide default header on a shared HTTP client.
///
/// [`ApiClient`]: crate::services::api::ApiClient
pub struct Session {
    store: Arc<dyn SessionStore>,
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            token: RwLock::new(None),
        }
    }

    /// Hydrate the in-memory token from the persisted store. Called once at
    /// startup; a store failure leaves the session Anonymous.
    pub async fn load(&self) {
        match self.store.get(TOKEN_KEY).await {
            Ok(Some(token)) => {
                tracing::info!("Restored persisted session token");
                *self.token.write() = Some(token);
            }
            Ok(None) => {
                tracing::debug!("No persisted session token");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session store, starting anonymous");
            }
        }
    }

    /// Current token, if Authenticated.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Transition Anonymous → Authenticated: hold the token in memory and
    /// persist it. A persistence failure is logged but does not fail the
    /// login; the in-memory session is still live.
    pub async fn establish(&self, token: String) {
        *self.token.write() = Some(token.clone());
        if let Err(e) = self.store.set(TOKEN_KEY, &token).await {
            tracing::warn!(error = %e, "Failed to persist session token");
        }
    }

    /// Transition Authenticated → Anonymous. Best-effort: never fails
    /// fatally, a store error only means the stale token survives on disk
    /// until the next login overwrites it.
    pub async fn clear(&self) {
        *self.token.write() = None;
        if let Err(e) = self.store.remove(TOKEN_KEY).await {
            tracing::warn!(error = %e, "Failed to remove persisted session token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);

        store.set(TOKEN_KEY, "abc123").await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), Some("abc123".to_string()));

        store.remove(TOKEN_KEY).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_establish_and_clear() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());
        assert!(!session.is_authenticated());

        session.establish("tok-1".to_string()).await;
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1".to_string()));
        // Token is persisted, not just held in memory
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), Some("tok-1".to_string()));

        session.clear().await;
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_load_rehydrates() {
        let store = Arc::new(MemorySessionStore::new());
        store.set(TOKEN_KEY, "persisted").await.unwrap();

        let session = Session::new(store);
        assert!(!session.is_authenticated());
        session.load().await;
        assert_eq!(session.token(), Some("persisted".to_string()));
    }

    #[tokio::test]
    async fn test_single_live_token() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());

        session.establish("first".to_string()).await;
        session.establish("second".to_string()).await;

        assert_eq!(session.token(), Some("second".to_string()));
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let path = std::env::temp_dir().join(format!(
            "koishop-session-test-{}.json",
            std::process::id()
        ));
        let _ = tokio::fs::remove_file(&path).await;

        {
            let store = FileSessionStore::open(&path).await;
            store.set(TOKEN_KEY, "durable").await.unwrap();
        }

        let reopened = FileSessionStore::open(&path).await;
        assert_eq!(
            reopened.get(TOKEN_KEY).await.unwrap(),
            Some("durable".to_string())
        );

        let _ = tokio::fs::remove_file(&path).await;
    }
}
