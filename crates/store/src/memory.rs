//! In-memory inventory store (dev/test backend).

use std::collections::HashMap;
use std::sync::RwLock;

use stockroom_core::{Document, DocumentId, RemoveOutcome, StoreError, StoreResult};

use crate::inventory::InventoryStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    by_id: HashMap<DocumentId, Document>,
    by_name: HashMap<String, DocumentId>,
}

/// In-memory inventory store.
///
/// One lock guards the counter and both maps, so every mutation is a single
/// atomic unit and operations on the same name or id serialize. Reads share
/// the lock. Coarse, but the operations are tiny read-modify-writes and this
/// makes the consistency argument trivial.
#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    inner: RwLock<Inner>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let inner = self.inner.read().unwrap();
        assert_eq!(inner.by_id.len(), inner.by_name.len());
        for (name, id) in &inner.by_name {
            let doc = inner
                .by_id
                .get(id)
                .unwrap_or_else(|| panic!("name index points at missing record {id}"));
            assert_eq!(&doc.name, name);
            assert_eq!(doc.id, *id);
            assert!(doc.quantity >= 0, "negative quantity for {name}");
            assert!(id.get() <= inner.next_id, "record id beyond the counter");
        }
    }
}

// A poisoned lock means a writer panicked mid-mutation; treat the store as
// unavailable rather than serving possibly torn state.
fn poisoned<T>(_: T) -> StoreError {
    StoreError::unavailable("store lock poisoned")
}

impl InventoryStore for MemoryInventoryStore {
    fn add(&self, name: &str, quantity: i64) -> StoreResult<Document> {
        if quantity <= 0 {
            return Err(StoreError::invalid_quantity(quantity));
        }
        if name.trim().is_empty() {
            return Err(StoreError::invalid_name("name cannot be empty"));
        }

        let mut inner = self.inner.write().map_err(poisoned)?;
        if let Some(id) = inner.by_name.get(name).copied() {
            let doc = inner
                .by_id
                .get_mut(&id)
                .ok_or_else(|| StoreError::unavailable("name index points at missing record"))?;
            doc.quantity = doc
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| StoreError::overflow(format!("document {id}")))?;
            return Ok(doc.clone());
        }

        inner.next_id += 1;
        let doc = Document {
            id: DocumentId::new(inner.next_id),
            name: name.to_string(),
            quantity,
        };
        inner.by_id.insert(doc.id, doc.clone());
        inner.by_name.insert(doc.name.clone(), doc.id);
        Ok(doc)
    }

    fn get(&self, id: DocumentId) -> StoreResult<Document> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner.by_id.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn list(&self) -> StoreResult<Vec<Document>> {
        let inner = self.inner.read().map_err(poisoned)?;
        let mut docs: Vec<Document> = inner
            .by_name
            .iter()
            .filter_map(|(name, id)| {
                let doc = inner.by_id.get(id);
                if doc.is_none() {
                    tracing::warn!(name = %name, id = %id, "skipping dangling name index entry");
                }
                doc.cloned()
            })
            .collect();
        docs.sort_by_key(|d| d.id);
        Ok(docs)
    }

    fn remove(&self, id: DocumentId, quantity: i64) -> StoreResult<RemoveOutcome> {
        if quantity <= 0 {
            return Err(StoreError::invalid_quantity(quantity));
        }

        let mut inner = self.inner.write().map_err(poisoned)?;
        let current = inner.by_id.get(&id).ok_or(StoreError::NotFound)?.quantity;

        if current <= quantity {
            let doc = inner.by_id.remove(&id).ok_or(StoreError::NotFound)?;
            inner.by_name.remove(&doc.name);
            return Ok(RemoveOutcome::Deleted);
        }

        let doc = inner.by_id.get_mut(&id).ok_or(StoreError::NotFound)?;
        doc.quantity -= quantity;
        Ok(RemoveOutcome::Decremented {
            remaining: doc.quantity,
        })
    }

    fn delete(&self, id: DocumentId) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let doc = inner.by_id.remove(&id).ok_or(StoreError::NotFound)?;
        inner.by_name.remove(&doc.name);
        Ok(())
    }
}
