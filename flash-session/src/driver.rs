//! Per-request driver for a flash bag.
//!
//! [`FlashSessionDriver::begin`] loads the session, hands the bag its stored generations
//! and rotates them; [`FlashSessionDriver::commit`] flushes the bag back into the session
//! and saves it. Other session keys pass through untouched.

use flash_core::{FlashBag, Generations, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::store::{SessionData, SessionStore};

/// One request's view of a session: the id plus every key except the bag's own entry,
/// which lives in the bag until [`FlashSessionDriver::commit`].
#[derive(Debug, Clone)]
pub struct FlashCycle {
    session_id: String,
    data: SessionData,
}

impl FlashCycle {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Session data other than the flash bag's entry.
    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut SessionData {
        &mut self.data
    }
}

#[derive(Debug, Clone)]
pub struct FlashSessionDriver<S> {
    store: S,
}

impl<S: SessionStore> FlashSessionDriver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the session and initializes `bag` from the entry at its storage key.
    ///
    /// A missing or `null` entry initializes the bag with empty generations. An entry that
    /// does not deserialize fails with `Serialization`, leaving the bag untouched.
    #[instrument(skip(self, bag), fields(storage_key = %bag.storage_key()))]
    pub async fn begin<T, B>(&self, session_id: &str, bag: &mut B) -> Result<FlashCycle>
    where
        T: DeserializeOwned,
        B: FlashBag<T>,
    {
        let mut data = self.store.load(session_id).await?;

        let generations = match data.remove(bag.storage_key()) {
            None | Some(Value::Null) => Generations::new(),
            Some(stored) => serde_json::from_value::<Generations<T>>(stored)?,
        };
        let queued = generations.new.len();
        bag.initialize(generations);

        info!(
            session_id = %session_id,
            bag = %bag.name(),
            display = queued,
            "step: flash cycle begin, generations rotated"
        );

        Ok(FlashCycle {
            session_id: session_id.to_string(),
            data,
        })
    }

    /// Flushes `bag` back under its storage key and saves the session.
    #[instrument(skip(self, cycle, bag), fields(session_id = %cycle.session_id))]
    pub async fn commit<T, B>(&self, cycle: FlashCycle, bag: &mut B) -> Result<()>
    where
        T: Serialize,
        B: FlashBag<T>,
    {
        let FlashCycle {
            session_id,
            mut data,
        } = cycle;

        let generations = bag.flush();
        let queued = generations.new.len();
        data.insert(
            bag.storage_key().to_string(),
            serde_json::to_value(&generations)?,
        );
        self.store.save(&session_id, data).await?;

        info!(
            bag = %bag.name(),
            queued = queued,
            "step: flash cycle commit, session saved"
        );
        Ok(())
    }
}
