//! Strongly-typed identifier value objects.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a journal entry, unique within the loaded collection.
///
/// Serializes as a JSON number. Deserializes from either a number or a
/// numeric string, since the journal server persists ids as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Creates an EntryId from a raw integer.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the id that follows a collection of `count` entries.
    ///
    /// Saturates at `u32::MAX`.
    pub fn next_after(count: usize) -> Self {
        Self(u32::try_from(count).map_or(u32::MAX, |n| n.saturating_add(1)))
    }

    /// Returns the inner integer.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("id", format!("'{}': {}", s, e)))
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryIdVisitor;

        impl<'de> Visitor<'de> for EntryIdVisitor {
            type Value = EntryId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative integer or a numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EntryId, E> {
                u32::try_from(v)
                    .map(EntryId)
                    .map_err(|_| E::custom(format!("entry id {} out of range", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EntryId, E> {
                u32::try_from(v)
                    .map(EntryId)
                    .map_err(|_| E::custom(format!("entry id {} out of range", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EntryId, E> {
                v.parse::<EntryId>().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(EntryIdVisitor)
    }
}
