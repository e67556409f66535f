//! Storage collaborator: the `RecordStore` trait, its errors, and an
//! in-memory implementation.

mod error;
mod in_memory;
mod repository;
#[allow(clippy::module_inception)]
mod store;

pub use error::{StoreError, StoreResult, WriteRejection};
pub use in_memory::InMemoryRecordStore;
pub use repository::{RecordRepository, RecordsExt};
pub use store::RecordStore;
