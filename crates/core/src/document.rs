//! Document record and related value types.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Document identifier.
///
/// Allocated once from a shared monotonically increasing counter, never
/// reused after deletion. Always strictly positive for persisted records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for DocumentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<DocumentId> for u64 {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl FromStr for DocumentId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s
            .parse()
            .map_err(|e| StoreError::invalid_id(format!("DocumentId: {e}")))?;
        Ok(Self(id))
    }
}

/// A live inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "document_id")]
    pub id: DocumentId,
    #[serde(rename = "document_name")]
    pub name: String,
    pub quantity: i64,
}

/// Result of a quantity removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The decrement reached (or crossed) zero; the record and both index
    /// entries were removed together.
    Deleted,
    /// The record survived with `remaining` units.
    Decremented { remaining: i64 },
}
