//! Core data models for roost.
//!
//! These types are shared across all roost crates and represent the
//! persisted domain entities plus the wire payloads they are built from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD IDS
// =============================================================================

/// Identifier of a stored record.
///
/// The in-memory and file-backed adapters assign monotonically increasing
/// integers; the Postgres adapter assigns opaque UUID strings. A deployment
/// uses exactly one variant, and comparison is strict: `Int(5)` never
/// equals `Str("5")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// PROPERTY TYPES
// =============================================================================

/// A property listing as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: RecordId,
    pub title: String,
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Image URLs in display order. Always present, possibly empty.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Normalized property fields produced by validation, not yet stored.
///
/// The adapter assigns the id when the draft is inserted.
#[derive(Debug, Clone)]
pub struct PropertyDraft {
    pub title: String,
    pub location: String,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
}

/// Incoming property payload, used both for create bodies and partial
/// update bodies. Every field is optional at the wire boundary; the
/// validation layer decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyPayload {
    pub title: Option<String>,
    pub location: Option<String>,
    pub price: Option<PriceInput>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Price as it arrives on the wire: a JSON number, or a numeric string
/// from clients that send form-ish payloads. Normalized to `f64` during
/// validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Coerce to a numeric price. `None` when the text form does not
    /// parse as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PriceInput::Number(n) => Some(*n),
            PriceInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<f64> for PriceInput {
    fn from(n: f64) -> Self {
        PriceInput::Number(n)
    }
}

// =============================================================================
// CONTACT TYPES
// =============================================================================

/// An inbound contact-form message. Create-only: no update or delete
/// operation exists for these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Validated contact fields plus the server-assigned timestamp, not yet
/// stored.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Incoming contact-form payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}
