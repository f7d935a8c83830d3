//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod document;
pub mod error;

pub use document::{Document, DocumentId, RemoveOutcome};
pub use error::{StoreError, StoreResult};
