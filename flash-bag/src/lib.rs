//! Auto-expiring flash bag.
//!
//! ## Modules
//!
//! - [`auto_expire`] – [`AutoExpireFlashBag`], the two-generation flash container

pub mod auto_expire;


pub use auto_expire::AutoExpireFlashBag;
pub use flash_core::{FlashBag, FlashError, Generations, Messages};
