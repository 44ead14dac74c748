//! # roost-store
//!
//! Storage adapters for roost.
//!
//! This crate provides:
//! - An in-memory adapter for tests and throwaway deployments
//! - A JSON-file adapter that rewrites one array file per collection
//! - A Postgres document-store adapter with opaque string ids
//!
//! All three implement the same [`RecordStore`] contract from
//! `roost-core`, so the catalog services never know which one is active.
//! The backend is selected once at process start via [`StoreConfig`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use roost_store::{Store, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::open(StoreConfig::Memory).await?;
//!     let all = store.properties.get_all().await?;
//!     println!("{} properties", all.len());
//!     Ok(())
//! }
//! ```

pub mod jsonfile;
pub mod memory;
pub mod postgres;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use roost_core::{ContactMessage, Property, RecordStore, Result};

pub use jsonfile::JsonFileStore;
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Which persistence backend to construct, with its settings.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Process-memory vectors. State is lost on exit.
    Memory,
    /// One JSON array file per collection under the given directory.
    File { data_dir: PathBuf },
    /// Postgres document tables reached through the given URL.
    Postgres { url: String },
}

/// Combined storage context holding one adapter instance per entity.
///
/// Constructed once at process start and injected into the services; no
/// module-level singletons, so tests can open isolated stores per case.
pub struct Store {
    pub properties: Arc<dyn RecordStore<Property>>,
    pub contacts: Arc<dyn RecordStore<ContactMessage>>,
}

impl Store {
    /// Open the configured backend, creating files or tables as needed.
    pub async fn open(config: StoreConfig) -> Result<Store> {
        match config {
            StoreConfig::Memory => {
                info!(backend = "memory", "Opening store");
                Ok(Store {
                    properties: Arc::new(MemoryStore::new()),
                    contacts: Arc::new(MemoryStore::new()),
                })
            }
            StoreConfig::File { data_dir } => {
                info!(backend = "file", data_dir = %data_dir.display(), "Opening store");
                Ok(Store {
                    properties: Arc::new(JsonFileStore::open(&data_dir).await?),
                    contacts: Arc::new(JsonFileStore::open(&data_dir).await?),
                })
            }
            StoreConfig::Postgres { url } => {
                info!(backend = "postgres", "Opening store");
                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect(&url)
                    .await?;
                let properties = PgStore::<Property>::new(pool.clone());
                properties.ensure_schema().await?;
                let contacts = PgStore::<ContactMessage>::new(pool);
                contacts.ensure_schema().await?;
                Ok(Store {
                    properties: Arc::new(properties),
                    contacts: Arc::new(contacts),
                })
            }
        }
    }
}
