//! The inventory store contract.

use std::sync::Arc;

use stockroom_core::{Document, DocumentId, RemoveOutcome, StoreResult};

/// Consistent inventory store over a key-value backend.
///
/// Implementations own two mappings (name→id, id→record) plus a shared id
/// counter, and must keep them mutually consistent: no caller may observe a
/// record without its name-index entry or vice versa. Operations on the same
/// id or name are linearizable; distinct entities may proceed in parallel.
pub trait InventoryStore: Send + Sync {
    /// Create-or-increment.
    ///
    /// Fails with `InvalidQuantity` when `quantity <= 0`. If a live document
    /// named `name` exists, atomically adds `quantity` to it; otherwise
    /// allocates a fresh id, writes the record, and inserts the name-index
    /// entry as one atomic unit. Returns the resulting record either way.
    fn add(&self, name: &str, quantity: i64) -> StoreResult<Document>;

    /// Pure read; `NotFound` if no live record has this id.
    fn get(&self, id: DocumentId) -> StoreResult<Document>;

    /// All live records, sorted by id.
    ///
    /// Derived by resolving the name index and reading each record. A
    /// dangling index entry (record missing) is skipped with a warning
    /// rather than failing the call.
    fn list(&self) -> StoreResult<Vec<Document>>;

    /// Decrement-or-delete.
    ///
    /// Fails with `NotFound` if the id is absent and `InvalidQuantity` when
    /// `quantity <= 0`. If `quantity` covers the full stock, the record and
    /// both index entries are removed together; otherwise the quantity is
    /// decremented in place.
    fn remove(&self, id: DocumentId, quantity: i64) -> StoreResult<RemoveOutcome>;

    /// Remove the record and its name-index entry; `NotFound` if absent.
    fn delete(&self, id: DocumentId) -> StoreResult<()>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn add(&self, name: &str, quantity: i64) -> StoreResult<Document> {
        (**self).add(name, quantity)
    }

    fn get(&self, id: DocumentId) -> StoreResult<Document> {
        (**self).get(id)
    }

    fn list(&self) -> StoreResult<Vec<Document>> {
        (**self).list()
    }

    fn remove(&self, id: DocumentId, quantity: i64) -> StoreResult<RemoveOutcome> {
        (**self).remove(id, quantity)
    }

    fn delete(&self, id: DocumentId) -> StoreResult<()> {
        (**self).delete(id)
    }
}
