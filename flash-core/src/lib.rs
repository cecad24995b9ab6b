//! # flash-core
//!
//! Core types for auto-expiring flash messages: the ordered [`Messages`] bucket, the
//! two-bucket [`Generations`] record, the [`FlashBag`] trait, errors, configuration
//! and tracing initialization. Storage-agnostic; used by flash-bag and flash-session.

pub mod bag;
pub mod config;
pub mod error;
pub mod logger;
pub mod types;


pub use bag::FlashBag;
pub use config::{FlashConfig, DEFAULT_BAG_NAME, DEFAULT_STORAGE_KEY};
pub use error::{FlashError, Result};
pub use logger::init_tracing;
pub use types::{Generation, Generations, Messages};
