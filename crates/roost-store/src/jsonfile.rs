//! JSON-file storage adapter.
//!
//! One JSON array file per collection, read wholesale on every access and
//! rewritten wholesale on every mutation. Acceptable only at small scale.
//! Writers are serialized through an async mutex per collection; the file
//! is replaced atomically (temp file + rename) so readers never observe a
//! torn write. I/O and parse failures surface as `Error::Storage`.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use roost_core::{Error, IdKind, Record, RecordId, RecordStore, Result};

/// Counter state guarded by the writer lock.
struct Counter {
    next_id: i64,
}

/// File-backed adapter. The collection file is auto-created as `[]` when
/// absent; the id counter seeds from `max(id) + 1` at open and is
/// monotonic for the process lifetime.
pub struct JsonFileStore<T: Record> {
    path: PathBuf,
    writer: Mutex<Counter>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
    /// Open (and if needed create) the collection file under `data_dir`.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).await.map_err(|e| {
            Error::Storage(format!("create data dir {}: {}", data_dir.display(), e))
        })?;
        let path = data_dir.join(format!("{}.json", T::COLLECTION));

        if !path.exists() {
            fs::write(&path, b"[]")
                .await
                .map_err(|e| Error::Storage(format!("create {}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "Created empty collection file");
        }

        let store = Self {
            path,
            writer: Mutex::new(Counter { next_id: 1 }),
            _marker: PhantomData,
        };

        let records = store.load().await?;
        let max_id = records
            .iter()
            .filter_map(|r| match r.id() {
                RecordId::Int(n) => Some(*n),
                RecordId::Str(_) => None,
            })
            .max()
            .unwrap_or(0);
        store.writer.lock().await.next_id = max_id + 1;

        Ok(store)
    }

    async fn load(&self) -> Result<Vec<T>> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| Error::Storage(format!("read {}: {}", self.path.display(), e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Storage(format!("parse {}: {}", self.path.display(), e)))
    }

    /// Rewrite the whole collection atomically: temp file + rename.
    async fn save(&self, records: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| Error::Storage(format!("encode {}: {}", self.path.display(), e)))?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| Error::Storage(format!("write {}: {}", temp_path.display(), e)))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::Storage(format!("rename {}: {}", self.path.display(), e)))?;
        debug!(path = %self.path.display(), count = records.len(), "Rewrote collection file");
        Ok(())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for JsonFileStore<T> {
    fn id_kind(&self) -> IdKind {
        IdKind::Int
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        self.load().await
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    async fn insert(&self, draft: T::Draft) -> Result<T> {
        let mut counter = self.writer.lock().await;
        let mut records = self.load().await?;
        let id = RecordId::Int(counter.next_id);
        counter.next_id += 1;
        let record = T::assemble(id, draft);
        records.push(record.clone());
        self.save(&records).await?;
        Ok(record)
    }

    async fn replace(&self, id: &RecordId, record: T) -> Result<T> {
        let _counter = self.writer.lock().await;
        let mut records = self.load().await?;
        match records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                records[idx] = record.clone();
                self.save(&records).await?;
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
        let _counter = self.writer.lock().await;
        let mut records = self.load().await?;
        match records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                records.remove(idx);
                self.save(&records).await?;
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
