//! Property catalog service.
//!
//! Owns create/list/update/delete semantics over property records:
//! validation before storage, id parsing per the active adapter, and
//! partial-merge updates. Listing returns the catalog exactly as stored;
//! filtering and sorting are the client's job.

use std::sync::Arc;

use tracing::info;

use roost_core::{
    validate_property, Error, IdKind, PriceInput, Property, PropertyPayload, Record, RecordId,
    RecordStore, Result,
};

pub struct PropertyCatalog {
    store: Arc<dyn RecordStore<Property>>,
}

impl PropertyCatalog {
    pub fn new(store: Arc<dyn RecordStore<Property>>) -> Self {
        Self { store }
    }

    /// Parse a raw path segment into this deployment's id type.
    ///
    /// Under an integer-id adapter a non-numeric segment can never name a
    /// record, so it maps to `NotFound` rather than being coerced.
    pub fn parse_id(&self, raw: &str) -> Result<RecordId> {
        match self.store.id_kind() {
            IdKind::Int => raw
                .parse::<i64>()
                .map(RecordId::Int)
                .map_err(|_| Error::NotFound("Property not found".to_string())),
            IdKind::Str => Ok(RecordId::Str(raw.to_string())),
        }
    }

    /// The full catalog in stable storage order.
    pub async fn list(&self) -> Result<Vec<Property>> {
        self.store.get_all().await
    }

    /// Validate and store a new property. The adapter assigns the id.
    pub async fn create(&self, payload: PropertyPayload) -> Result<Property> {
        let draft = validate_property(&payload)?;
        let created = self.store.insert(draft).await?;
        info!(id = %created.id, title = %created.title, "Created property");
        Ok(created)
    }

    /// Merge the payload's present fields over the stored record and
    /// persist the result. Absent fields keep their previous values and
    /// the id never changes.
    ///
    /// The merged record is re-validated before persisting, so an update
    /// cannot blank out a required field.
    pub async fn update(&self, id: &RecordId, patch: PropertyPayload) -> Result<Property> {
        let existing = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Property not found".to_string()))?;

        let merged = PropertyPayload {
            title: patch.title.or(Some(existing.title)),
            location: patch.location.or(Some(existing.location)),
            price: patch.price.or(Some(PriceInput::Number(existing.price))),
            description: patch.description.or(Some(existing.description)),
            images: patch.images.or(Some(existing.images)),
        };
        let draft = validate_property(&merged)?;
        let record = Property::assemble(id.clone(), draft);
        let updated = self.store.replace(id, record).await?;
        info!(id = %updated.id, "Updated property");
        Ok(updated)
    }

    /// Remove the record. A second delete of the same id fails `NotFound`
    /// again; ids are never reassigned.
    pub async fn delete(&self, id: &RecordId) -> Result<()> {
        if self.store.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Property not found".to_string()));
        }
        self.store.remove(id).await?;
        info!(id = %id, "Deleted property");
        Ok(())
    }
}
