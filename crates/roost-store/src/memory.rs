//! In-memory storage adapter.
//!
//! A mutable vector plus a monotonic counter behind one async mutex. The
//! lock spans the whole read-modify-write of every mutation, so id
//! assignment cannot race even under a multi-threaded runtime. Lookup is
//! O(n); catalogs are expected to stay in the hundreds of records.

use async_trait::async_trait;
use tokio::sync::Mutex;

use roost_core::{Error, IdKind, Record, RecordId, RecordStore, Result};

struct Inner<T> {
    records: Vec<T>,
    next_id: i64,
}

/// Process-memory adapter. Ids start at 1 and are never reused, even
/// after deletion.
pub struct MemoryStore<T: Record> {
    inner: Mutex<Inner<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn id_kind(&self) -> IdKind {
        IdKind::Int
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.inner.lock().await.records.clone())
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>> {
        let inner = self.inner.lock().await;
        Ok(inner.records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, draft: T::Draft) -> Result<T> {
        let mut inner = self.inner.lock().await;
        let id = RecordId::Int(inner.next_id);
        inner.next_id += 1;
        let record = T::assemble(id, draft);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: &RecordId, record: T) -> Result<T> {
        let mut inner = self.inner.lock().await;
        match inner.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                inner.records[idx] = record.clone();
                Ok(record)
            }
            None => Err(Error::NotFound(format!(
                "{}: no record with id {}",
                T::COLLECTION,
                id
            ))),
        }
    }

    async fn remove(&self, id: &RecordId) -> Result<()> {
        let mut inner = self.inner.lock().await;
        match inner.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                inner.records.remove(idx);
                Ok(())
            }
            None => Err(Error::NotFound(format!(
                "{}: no record with id {}",
                T::COLLECTION,
                id
            ))),
        }
    }
}
