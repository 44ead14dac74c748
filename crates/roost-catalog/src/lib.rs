//! # roost-catalog
//!
//! The property catalog service and the contact intake service.
//!
//! Both are written against the `RecordStore` contract from `roost-core`
//! only, so any storage adapter can be substituted without touching
//! validation or HTTP-facing behavior. Neither service holds state of
//! its own; the adapter owns the durable representation.

pub mod catalog;
pub mod intake;

pub use catalog::PropertyCatalog;
pub use intake::ContactIntake;
