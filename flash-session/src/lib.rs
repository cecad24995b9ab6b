//! Session crate: where flash bags live between requests.
//!
//! ## Modules
//!
//! - [`store`] – SessionStore trait and SessionData
//! - [`inmemory_store`] – InMemorySessionStore
//! - [`driver`] – FlashSessionDriver, FlashCycle (load → initialize → flush → save)

pub mod driver;
pub mod inmemory_store;
pub mod store;


pub use driver::{FlashCycle, FlashSessionDriver};
pub use inmemory_store::InMemorySessionStore;
pub use store::{SessionData, SessionStore};
