//! Redis-backed inventory store (optional).
//!
//! Key layout:
//! - `document_ids` — shared id counter (atomic `INCR`).
//! - `document_name_to_id` — hash, name → id.
//! - `document_id:{id}` — hash per record (`document_id`, `document_name`,
//!   `quantity`).
//!
//! Multi-key read-modify-writes run inside `redis::transaction`
//! (WATCH/MULTI/EXEC with retry on conflict), so a record and its name-index
//! entry always change together. Ids are allocated with `INCR` before the
//! MULTI block; a retry burns the allocated id, which is fine — ids are
//! monotonic and never reused, only uniqueness matters.

use std::collections::HashMap;

use redis::Commands;

use stockroom_core::{Document, DocumentId, RemoveOutcome, StoreError, StoreResult};

use crate::inventory::InventoryStore;

const ID_COUNTER: &str = "document_ids";
const NAME_INDEX: &str = "document_name_to_id";

const FIELD_ID: &str = "document_id";
const FIELD_NAME: &str = "document_name";
const FIELD_QUANTITY: &str = "quantity";

fn record_key(id: DocumentId) -> String {
    format!("document_id:{id}")
}

fn to_unavailable(e: redis::RedisError) -> StoreError {
    StoreError::unavailable(e.to_string())
}

/// Inventory store over a shared Redis instance.
#[derive(Debug, Clone)]
pub struct RedisInventoryStore {
    client: redis::Client,
}

impl RedisInventoryStore {
    pub fn new(redis_url: impl AsRef<str>) -> StoreResult<Self> {
        let client = redis::Client::open(redis_url.as_ref()).map_err(to_unavailable)?;
        Ok(Self { client })
    }

    fn connect(&self) -> StoreResult<redis::Connection> {
        self.client.get_connection().map_err(to_unavailable)
    }
}

/// Rebuild a `Document` from a record hash. `None` when the hash has no name
/// (torn or foreign key material); a missing quantity reads as zero.
fn parse_record(id: DocumentId, fields: &HashMap<String, String>) -> Option<Document> {
    let name = fields.get(FIELD_NAME)?.clone();
    let quantity = fields
        .get(FIELD_QUANTITY)
        .and_then(|q| q.parse().ok())
        .unwrap_or(0);
    Some(Document { id, name, quantity })
}

impl InventoryStore for RedisInventoryStore {
    fn add(&self, name: &str, quantity: i64) -> StoreResult<Document> {
        if quantity <= 0 {
            return Err(StoreError::invalid_quantity(quantity));
        }
        if name.trim().is_empty() {
            return Err(StoreError::invalid_name("name cannot be empty"));
        }

        let mut con = self.connect()?;
        // WATCH on the name index: a concurrent create or delete of any name
        // aborts EXEC and the closure re-runs against fresh state.
        redis::transaction(&mut con, &[NAME_INDEX], |con, pipe| {
            let existing: Option<u64> = con.hget(NAME_INDEX, name)?;
            match existing {
                Some(raw) => {
                    let id = DocumentId::new(raw);
                    let res: Option<(i64,)> = pipe
                        .hincr(record_key(id), FIELD_QUANTITY, quantity)
                        .query(con)?;
                    Ok(res.map(|(remaining,)| Document {
                        id,
                        name: name.to_string(),
                        quantity: remaining,
                    }))
                }
                None => {
                    let raw: u64 = con.incr(ID_COUNTER, 1)?;
                    let id = DocumentId::new(raw);
                    let fields = [
                        (FIELD_ID, raw.to_string()),
                        (FIELD_NAME, name.to_string()),
                        (FIELD_QUANTITY, quantity.to_string()),
                    ];
                    let res: Option<()> = pipe
                        .hset_multiple(record_key(id), &fields)
                        .ignore()
                        .hset(NAME_INDEX, name, raw)
                        .ignore()
                        .query(con)?;
                    Ok(res.map(|_| Document {
                        id,
                        name: name.to_string(),
                        quantity,
                    }))
                }
            }
        })
        .map_err(to_unavailable)
    }

    fn get(&self, id: DocumentId) -> StoreResult<Document> {
        let mut con = self.connect()?;
        let fields: HashMap<String, String> =
            con.hgetall(record_key(id)).map_err(to_unavailable)?;
        if fields.is_empty() {
            return Err(StoreError::NotFound);
        }
        parse_record(id, &fields).ok_or(StoreError::NotFound)
    }

    fn list(&self) -> StoreResult<Vec<Document>> {
        let mut con = self.connect()?;
        let index: HashMap<String, u64> = con.hgetall(NAME_INDEX).map_err(to_unavailable)?;

        let mut docs = Vec::with_capacity(index.len());
        for (name, raw) in index {
            let id = DocumentId::new(raw);
            let fields: HashMap<String, String> =
                con.hgetall(record_key(id)).map_err(to_unavailable)?;
            match parse_record(id, &fields) {
                Some(doc) => docs.push(doc),
                None => {
                    tracing::warn!(name = %name, id = %id, "skipping dangling name index entry");
                }
            }
        }
        docs.sort_by_key(|d| d.id);
        Ok(docs)
    }

    fn remove(&self, id: DocumentId, quantity: i64) -> StoreResult<RemoveOutcome> {
        if quantity <= 0 {
            return Err(StoreError::invalid_quantity(quantity));
        }

        let mut con = self.connect()?;
        let key = record_key(id);
        // WATCH the record and the name index so a concurrent add/delete on
        // either side forces a retry instead of a torn removal.
        redis::transaction(&mut con, &[NAME_INDEX, key.as_str()], |con, pipe| {
            let current: Option<i64> = con.hget(&key, FIELD_QUANTITY)?;
            let Some(current) = current else {
                return Ok(Some(Err(StoreError::NotFound)));
            };

            if current <= quantity {
                let name: Option<String> = con.hget(&key, FIELD_NAME)?;
                if let Some(name) = name {
                    pipe.hdel(NAME_INDEX, name).ignore();
                }
                let res: Option<()> = pipe.del(&key).ignore().query(con)?;
                Ok(res.map(|_| Ok(RemoveOutcome::Deleted)))
            } else {
                let res: Option<(i64,)> =
                    pipe.hincr(&key, FIELD_QUANTITY, -quantity).query(con)?;
                Ok(res.map(|(remaining,)| Ok(RemoveOutcome::Decremented { remaining })))
            }
        })
        .map_err(to_unavailable)?
    }

    fn delete(&self, id: DocumentId) -> StoreResult<()> {
        let mut con = self.connect()?;
        let key = record_key(id);
        redis::transaction(&mut con, &[NAME_INDEX, key.as_str()], |con, pipe| {
            let name: Option<String> = con.hget(&key, FIELD_NAME)?;
            let Some(name) = name else {
                return Ok(Some(Err(StoreError::NotFound)));
            };

            let res: Option<()> = pipe
                .hdel(NAME_INDEX, name)
                .ignore()
                .del(&key)
                .ignore()
                .query(con)?;
            Ok(res.map(|_| Ok(())))
        })
        .map_err(to_unavailable)?
    }
}
