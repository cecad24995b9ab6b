//! Session storage abstraction.
//!
//! A session is a JSON object of key/value data; each flash bag owns the entry at its
//! storage key. Implementations decide where sessions live (memory, database, cookie).

use async_trait::async_trait;
use flash_core::Result;

/// All data of one session.
pub type SessionData = serde_json::Map<String, serde_json::Value>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Starts an empty session and returns its id.
    async fn create(&self) -> Result<String>;
    /// Data of the session; an unknown id yields empty data.
    async fn load(&self, session_id: &str) -> Result<SessionData>;
    async fn save(&self, session_id: &str, data: SessionData) -> Result<()>;
    /// Returns whether a session was removed.
    async fn destroy(&self, session_id: &str) -> Result<bool>;
}
