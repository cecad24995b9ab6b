//! Core types: the ordered [`Messages`] bucket, the [`Generations`] pair and [`Generation`] names.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the two buckets a flash bag rotates between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    /// Messages visible during the current request.
    Display,
    /// Messages queued during the current request, visible during the next one.
    New,
}

impl Generation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Display => "display",
            Generation::New => "new",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flash messages keyed by type ("notice", "error", ...), kept in insertion order.
///
/// Overwriting a type keeps its position; removing one keeps the order of the rest.
/// Serializes as a map in that same order. Buckets hold a handful of entries, so
/// lookups are a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages<T> {
    entries: Vec<(String, T)>,
}

impl<T> Messages<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, ty: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == ty)
    }

    pub fn contains_key(&self, ty: &str) -> bool {
        self.position(ty).is_some()
    }

    pub fn get(&self, ty: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == ty)
            .map(|(_, message)| message)
    }

    /// Stores `message` under `ty`, returning the value it replaced.
    pub fn insert(&mut self, ty: impl Into<String>, message: T) -> Option<T> {
        let ty = ty.into();
        match self.position(&ty) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, message)),
            None => {
                self.entries.push((ty, message));
                None
            }
        }
    }

    pub fn remove(&mut self, ty: &str) -> Option<T> {
        self.position(ty).map(|idx| self.entries.remove(idx).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, message)| (key.as_str(), message))
    }
}

impl<T> Default for Messages<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Messages<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut messages = Messages::new();
        for (ty, message) in iter {
            messages.insert(ty, message);
        }
        messages
    }
}

impl<T> IntoIterator for Messages<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for Messages<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ty, message) in &self.entries {
            map.serialize_entry(ty, message)?;
        }
        map.end()
    }
}

struct MessagesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for MessagesVisitor<T> {
    type Value = Messages<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of flash type to message")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut messages = Messages::new();
        while let Some((ty, message)) = access.next_entry::<String, T>()? {
            messages.insert(ty, message);
        }
        Ok(messages)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Messages<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MessagesVisitor(PhantomData))
    }
}

/// The two buckets of a flash bag, as persisted by a session store.
///
/// A missing bucket deserializes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Generations<T> {
    #[serde(default)]
    pub display: Messages<T>,
    #[serde(default)]
    pub new: Messages<T>,
}

impl<T> Generations<T> {
    pub fn new() -> Self {
        Self {
            display: Messages::new(),
            new: Messages::new(),
        }
    }

    /// Generations carrying `new` as the queued bucket, as left by a previous request.
    pub fn queued(new: Messages<T>) -> Self {
        Self {
            display: Messages::new(),
            new,
        }
    }

    pub fn bucket(&self, generation: Generation) -> &Messages<T> {
        match generation {
            Generation::Display => &self.display,
            Generation::New => &self.new,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty() && self.new.is_empty()
    }
}

impl<T> Default for Generations<T> {
    fn default() -> Self {
        Self::new()
    }
}
