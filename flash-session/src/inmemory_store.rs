//! # In-Memory Session Store
//!
//! [`SessionStore`] backed by a `HashMap` behind a tokio `RwLock`. Sessions are lost on
//! restart; meant for tests, development and single-process apps.
//!
//! ## Example
//!
//! ```rust
//! use flash_session::{InMemorySessionStore, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), flash_core::FlashError> {
//!     let store = InMemorySessionStore::new();
//!     let session_id = store.create().await?;
//!
//!     let data = store.load(&session_id).await?;
//!     assert!(data.is_empty());
//!
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use flash_core::Result;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::store::{SessionData, SessionStore};

/// In-memory session store. Clones share the same sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<String> {
        let session_id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), SessionData::new());
        debug!(session_id = %session_id, "Session created");
        Ok(session_id)
    }

    async fn load(&self, session_id: &str) -> Result<SessionData> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned().unwrap_or_default())
    }

    async fn save(&self, session_id: &str, data: SessionData) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        debug!(session_id = %session_id, keys = data.len(), "Session saved");
        sessions.insert(session_id.to_string(), data);
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> Result<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(session_id).is_some())
    }
}
