//! Postgres document-store adapter.
//!
//! One table per collection holding the whole record as JSONB next to an
//! opaque TEXT id. Ids are freshly generated UUID strings; the `seq`
//! column gives list operations a stable order. Zero-rows-affected on
//! replace/remove translates to `Error::NotFound`; every other driver
//! failure passes through as a database error.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use roost_core::{Error, IdKind, Record, RecordId, RecordStore, Result};

pub struct PgStore<T: Record> {
    pool: Pool<Postgres>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> PgStore<T> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Create the collection table if it does not exist yet.
    ///
    /// `T::COLLECTION` is a compile-time constant, never user input.
    pub async fn ensure_schema(&self) -> Result<()> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, doc JSONB NOT NULL, seq BIGSERIAL)",
            T::COLLECTION
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        debug!(table = T::COLLECTION, "Ensured collection table");
        Ok(())
    }

    fn decode(doc: serde_json::Value) -> Result<T> {
        Ok(serde_json::from_value(doc)?)
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for PgStore<T> {
    fn id_kind(&self) -> IdKind {
        IdKind::Str
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT doc FROM {} ORDER BY seq", T::COLLECTION);
        let rows: Vec<(serde_json::Value,)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(|(doc,)| Self::decode(doc)).collect()
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>> {
        // Integer ids cannot match this adapter's string keys.
        let RecordId::Str(key) = id else {
            return Ok(None);
        };
        let sql = format!("SELECT doc FROM {} WHERE id = $1", T::COLLECTION);
        let row: Option<(serde_json::Value,)> = sqlx::query_as(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|(doc,)| Self::decode(doc)).transpose()
    }

    async fn insert(&self, draft: T::Draft) -> Result<T> {
        let key = Uuid::new_v4().to_string();
        let record = T::assemble(RecordId::Str(key.clone()), draft);
        let doc = serde_json::to_value(&record)?;
        let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", T::COLLECTION);
        sqlx::query(&sql)
            .bind(&key)
            .bind(&doc)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn replace(&self, id: &RecordId, record: T) -> Result<T> {
        let RecordId::Str(key) = id else {
            return Err(Error::NotFound(format!(
                "{}: no record with id {}",
                T::COLLECTION,
                id
            )));
        };
        let doc = serde_json::to_value(&record)?;
        let sql = format!("UPDATE {} SET doc = $2 WHERE id = $1", T::COLLECTION);
        let result = sqlx::query(&sql)
            .bind(key)
            .bind(&doc)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!(
                "{}: no record with id {}",
                T::COLLECTION,
                id
            )));
        }
        Ok(record)
    }

    async fn remove(&self, id: &RecordId) -> Result<()> {
        let RecordId::Str(key) = id else {
            return Err(Error::NotFound(format!(
                "{}: no record with id {}",
                T::COLLECTION,
                id
            )));
        };
        let sql = format!("DELETE FROM {} WHERE id = $1", T::COLLECTION);
        let result = sqlx::query(&sql).bind(key).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!(
                "{}: no record with id {}",
                T::COLLECTION,
                id
            )));
        }
        Ok(())
    }
}
