//! Records - typed entities with identity, a storage version, and a field descriptor.
//!
//! The descriptor (`Record::fields`) is what the rest of the crate works from:
//! the criteria builder and store address fields by name, and the reconciler
//! walks the editable fields to diff a rejected write against storage.
//!
//! ## Example
//!
//! ```ignore
//! use setlist::Record;
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(collection = "albums", label = "Album")]
//! struct Album {
//!     #[record(id)]
//!     pub id: String,
//!     #[record(editable)]
//!     pub name: String,
//!     #[record(editable, format = "currency")]
//!     pub price: f64,
//! }
//! ```

mod path;
mod value;

use serde::{de::DeserializeOwned, Serialize};

use crate::version::VersionToken;

pub use path::FieldPath;
pub use value::{compare_values, display_value, matches_key, searchable_text};

/// Trait for types managed by the list pipeline and the reconciler.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Storage collection name (a table in SQL, a key prefix in KV stores).
    const COLLECTION: &'static str;

    /// Entity name used in user-facing messages, e.g. "Musician".
    const LABEL: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;

    /// Descriptor of the fields that carry editing or storage semantics.
    fn fields() -> &'static [FieldSpec];

    /// Fields compared when a conditional write is rejected, in declaration order.
    fn editable_fields() -> Vec<&'static FieldSpec> {
        Self::fields().iter().filter(|spec| spec.editable).collect()
    }

    /// Fields storage keeps unique across the collection.
    fn unique_fields() -> Vec<&'static FieldSpec> {
        Self::fields().iter().filter(|spec| spec.unique).collect()
    }

    fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|spec| spec.name == name)
    }
}

/// One entry of a record's field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Serialized field name.
    pub name: &'static str,
    /// Label shown to users.
    pub label: &'static str,
    pub editable: bool,
    pub unique: bool,
    pub format: FieldFormat,
}

/// How a field value is rendered in conflict messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Plain,
    Currency,
    Date,
    Phone,
    /// Foreign key; rendered as the `display` field of the referenced record.
    Reference {
        collection: &'static str,
        display: &'static str,
    },
}

/// A record paired with the version token storage assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub data: T,
    pub version: VersionToken,
}

impl<T> Versioned<T> {
    pub fn new(data: T, version: VersionToken) -> Self {
        Self { data, version }
    }
}
