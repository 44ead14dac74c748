//! Storage adapter contract.
//!
//! These traits define the interface every persistence backend must
//! satisfy, enabling pluggable adapters and per-test isolated stores.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::RecordId;

/// Which id representation an adapter assigns. Fixed per adapter; a
/// deployment never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Monotonically increasing integers starting at 1 (memory, file).
    Int,
    /// Opaque generated strings (document store).
    Str,
}

/// A storable entity: knows its collection name, exposes its id, and can
/// be assembled from a draft once the adapter has assigned one.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The not-yet-stored form of the record (no id).
    type Draft: Send + 'static;

    /// Collection name used for file names and table names.
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;

    /// Build the full record from an assigned id and a draft.
    fn assemble(id: RecordId, draft: Self::Draft) -> Self;
}

/// Persistence contract implemented by every storage adapter, per entity.
///
/// Lookups compare ids by strict value equality: an `Int` id never
/// matches a `Str` id, whatever their textual forms.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// The id representation this adapter assigns.
    fn id_kind(&self) -> IdKind;

    /// All records in stable storage order.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Fetch one record, `None` if the id is unknown.
    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>>;

    /// Persist a draft, assigning a fresh id. Returns the stored record.
    async fn insert(&self, draft: T::Draft) -> Result<T>;

    /// Overwrite the record with the given id. Fails `NotFound` if absent.
    async fn replace(&self, id: &RecordId, record: T) -> Result<T>;

    /// Remove the record with the given id. Fails `NotFound` if absent;
    /// the id is never reassigned afterwards.
    async fn remove(&self, id: &RecordId) -> Result<()>;
}

use crate::models::{ContactDraft, ContactMessage, Property, PropertyDraft};

impl Record for Property {
    type Draft = PropertyDraft;

    const COLLECTION: &'static str = "properties";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(id: RecordId, draft: PropertyDraft) -> Self {
        Property {
            id,
            title: draft.title,
            location: draft.location,
            price: draft.price,
            description: draft.description,
            images: draft.images,
        }
    }
}

impl Record for ContactMessage {
    type Draft = ContactDraft;

    const COLLECTION: &'static str = "contacts";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assemble(id: RecordId, draft: ContactDraft) -> Self {
        ContactMessage {
            id,
            name: draft.name,
            phone: draft.phone,
            message: draft.message,
            created_at: draft.created_at,
        }
    }
}
