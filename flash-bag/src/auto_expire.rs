//! # Auto-expiring flash bag
//!
//! [`AutoExpireFlashBag`] keeps two generations of messages. Whatever is set during a
//! request lands in `new`; the next call to `initialize` (start of the next request)
//! promotes it to `display`, where it can be read or popped. Anything still in `display`
//! at the following rotation is dropped, so a message survives exactly one request
//! whether or not it was read.
//!
//! ## Example
//!
//! ```rust
//! use flash_bag::{AutoExpireFlashBag, FlashBag, Generations};
//!
//! let mut bag: AutoExpireFlashBag<String> = AutoExpireFlashBag::new();
//!
//! // Request 1 queues a message.
//! bag.initialize(Generations::new());
//! bag.set("notice", "Profile saved".to_string());
//! let stored = bag.flush();
//!
//! // Request 2 shows it.
//! bag.initialize(stored);
//! assert_eq!(bag.get("notice").unwrap(), "Profile saved");
//! ```
//!
//! ## Ownership
//!
//! The bag owns its generations between `initialize` and `flush`. The session layer gets
//! the current state only through `flush` (or a copy through [`AutoExpireFlashBag::export`]),
//! so resets done by `pop_all`/`clear` are what gets persisted.

use flash_core::{FlashBag, FlashConfig, FlashError, Generations, Messages, Result};
use flash_core::{DEFAULT_BAG_NAME, DEFAULT_STORAGE_KEY};
use serde_json::Value;
use tracing::{debug, warn};

/// Two-generation flash container. `T` is the payload stored per type; sequences are
/// just `T = Vec<_>`.
#[derive(Debug, Clone)]
pub struct AutoExpireFlashBag<T = Value> {
    name: String,
    storage_key: String,
    generations: Generations<T>,
    /// Set by `initialize`, cleared by `flush`.
    rotated: bool,
}

impl<T> AutoExpireFlashBag<T> {
    /// Creates a bag stored under `_sf2_flashes`.
    pub fn new() -> Self {
        Self::with_storage_key(DEFAULT_STORAGE_KEY)
    }

    /// Creates a bag stored under `storage_key`. Reads no session state until `initialize`.
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_BAG_NAME.to_string(),
            storage_key: storage_key.into(),
            generations: Generations::new(),
            rotated: false,
        }
    }

    pub fn from_config(config: &FlashConfig) -> Self {
        let mut bag = Self::with_storage_key(config.storage_key.clone());
        bag.name = config.bag_name.clone();
        bag
    }

    /// Messages queued during this request.
    pub fn queued(&self) -> &Messages<T> {
        &self.generations.new
    }

    /// Copy of the current generations, leaving the bag untouched.
    pub fn export(&self) -> Generations<T>
    where
        T: Clone,
    {
        self.generations.clone()
    }
}

impl<T> Default for AutoExpireFlashBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FlashBag<T> for AutoExpireFlashBag<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn initialize(&mut self, generations: Generations<T>) {
        if self.rotated {
            warn!(
                name = %self.name,
                storage_key = %self.storage_key,
                dropped = self.generations.display.len(),
                "flash bag initialized twice in one cycle, unread display messages are dropped"
            );
        }

        let Generations { display: expired, new } = generations;
        debug!(
            name = %self.name,
            storage_key = %self.storage_key,
            expired = expired.len(),
            display = new.len(),
            "rotated flash generations"
        );

        self.generations = Generations {
            display: new,
            new: Messages::new(),
        };
        self.rotated = true;
    }

    fn get(&self, ty: &str) -> Result<&T> {
        self.generations
            .display
            .get(ty)
            .ok_or_else(|| FlashError::NotFound(ty.to_string()))
    }

    fn all(&self) -> &Messages<T> {
        &self.generations.display
    }

    fn pop(&mut self, ty: &str) -> Result<T> {
        let message = self
            .generations
            .display
            .remove(ty)
            .ok_or_else(|| FlashError::NotFound(ty.to_string()))?;
        self.generations.new.remove(ty);
        Ok(message)
    }

    fn pop_all(&mut self) -> Messages<T> {
        std::mem::take(&mut self.generations).display
    }

    fn set_all(&mut self, messages: Messages<T>) {
        self.generations.new = messages;
    }

    fn set(&mut self, ty: &str, message: T) {
        self.generations.new.insert(ty, message);
    }

    fn has(&self, ty: &str) -> bool {
        self.generations.display.contains_key(ty)
    }

    fn keys(&self) -> Vec<String> {
        self.generations.display.keys().map(str::to_string).collect()
    }

    fn clear(&mut self) -> Messages<T> {
        self.pop_all()
    }

    fn flush(&mut self) -> Generations<T> {
        self.rotated = false;
        std::mem::take(&mut self.generations)
    }
}
