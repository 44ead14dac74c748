//! # roost-core
//!
//! Core types, validation, and storage contracts for the roost listing
//! service.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the storage adapters, catalog services, and HTTP
//! layer depend on.

pub mod error;
pub mod models;
pub mod traits;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    ContactDraft, ContactMessage, ContactPayload, PriceInput, Property, PropertyDraft,
    PropertyPayload, RecordId,
};
pub use traits::{IdKind, Record, RecordStore};
pub use validate::{validate_contact, validate_property};
