//! The [`FlashBag`] trait: the contract between a flash bag and the session layer driving it.

use crate::error::Result;
use crate::types::{Generations, Messages};

/// A container of flash messages that rotates once per request cycle.
///
/// The session layer hands the persisted [`Generations`] in with [`initialize`](FlashBag::initialize)
/// at the start of a request and takes them back with [`flush`](FlashBag::flush) at the end.
/// Reads (`get`, `all`, `has`, `keys`) see the `display` bucket; writes (`set`, `set_all`)
/// go to `new`.
pub trait FlashBag<T> {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// Key under which the session layer stores this bag's generations.
    fn storage_key(&self) -> &str;

    /// Takes ownership of the stored generations and rotates them: `new` becomes `display`,
    /// `new` starts empty. Whatever was in the incoming `display` is dropped.
    fn initialize(&mut self, generations: Generations<T>);

    /// Message for `ty` in the display bucket. Errors with `NotFound` when absent.
    fn get(&self, ty: &str) -> Result<&T>;

    fn all(&self) -> &Messages<T>;

    /// Removes and returns the message for `ty`. Errors with `NotFound` when absent from display.
    fn pop(&mut self, ty: &str) -> Result<T>;

    /// Returns the display bucket and empties both buckets.
    fn pop_all(&mut self) -> Messages<T>;

    /// Replaces the whole `new` bucket.
    fn set_all(&mut self, messages: Messages<T>);

    fn set(&mut self, ty: &str, message: T);

    fn has(&self, ty: &str) -> bool;

    fn keys(&self) -> Vec<String>;

    /// Same as [`pop_all`](FlashBag::pop_all).
    fn clear(&mut self) -> Messages<T>;

    /// Hands the generations back for persistence, leaving the bag empty.
    fn flush(&mut self) -> Generations<T>;
}
