//! Contact intake service.
//!
//! Create-only: a message is validated, stamped with the server time, and
//! stored. No update or delete is exposed.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use roost_core::{
    validate_contact, ContactDraft, ContactMessage, ContactPayload, RecordStore, Result,
};

pub struct ContactIntake {
    store: Arc<dyn RecordStore<ContactMessage>>,
}

impl ContactIntake {
    pub fn new(store: Arc<dyn RecordStore<ContactMessage>>) -> Self {
        Self { store }
    }

    /// Validate, stamp `created_at`, and store an inbound message.
    pub async fn create(&self, payload: ContactPayload) -> Result<ContactMessage> {
        let (name, phone, message) = validate_contact(&payload)?;
        let created = self
            .store
            .insert(ContactDraft {
                name,
                phone,
                message,
                created_at: Utc::now(),
            })
            .await?;
        info!(id = %created.id, "Stored contact message");
        Ok(created)
    }

    /// All stored messages in storage order.
    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        self.store.get_all().await
    }
}
