//! InMemoryRecordStore - HashMap-backed record store for testing and development.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{RecordStore, StoreError, StoreResult, WriteRejection};
use crate::query::{QueryCriteria, SortDirection, SortOrder, Window};
use crate::record::{compare_values, FieldPath, Record, Versioned};
use crate::version::VersionToken;

/// Internal stored representation of a record.
struct StoredRecord {
    bytes: Vec<u8>,
    version: u64,
}

type Storage = HashMap<String, StoredRecord>;

/// In-memory record store backed by a HashMap.
///
/// Storage key is `"collection:id"`. Versions come from one store-wide
/// sequence, so a token is never reused, even across delete and re-insert.
/// Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<Storage>>,
    version_seq: Arc<AtomicU64>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A matching record held while a query sorts and slices.
struct Candidate<'a> {
    id: String,
    keys: Vec<Value>,
    stored: &'a StoredRecord,
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            version_seq: Arc::new(AtomicU64::new(1)),
        }
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn next_version(&self) -> u64 {
        self.version_seq.fetch_add(1, AtomicOrdering::Relaxed)
    }

    fn token(version: u64) -> VersionToken {
        VersionToken::from_bytes(version.to_be_bytes().to_vec())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Storage>> {
        self.storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Storage>> {
        self.storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }

    fn key_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Records of `M` matching the criteria, with their sort keys resolved.
    fn select<'a, M: Record>(
        storage: &'a Storage,
        criteria: &QueryCriteria,
        order: &SortOrder,
    ) -> StoreResult<Vec<Candidate<'a>>> {
        let prefix = format!("{}:", M::COLLECTION);
        let mut references: HashMap<(&'static str, String), Value> = HashMap::new();
        let mut candidates = Vec::new();

        for (key, stored) in storage.iter() {
            let Some(id) = key.strip_prefix(&prefix) else {
                continue;
            };
            let doc: Value = serde_json::from_slice(&stored.bytes)?;
            if !criteria.matches(&doc) {
                continue;
            }

            let mut keys = Vec::with_capacity(order.keys.len());
            for ordered in &order.keys {
                let value = match ordered.path {
                    FieldPath::Field(name) => doc[name].clone(),
                    FieldPath::Reference {
                        field,
                        collection,
                        target,
                    } => match Self::key_text(&doc[field]) {
                        Some(foreign) => {
                            let cache_key = (collection, foreign);
                            if let Some(cached) = references.get(&cache_key) {
                                cached.clone()
                            } else {
                                let resolved = match storage
                                    .get(&Self::make_key(collection, &cache_key.1))
                                {
                                    Some(referenced) => {
                                        let referenced: Value =
                                            serde_json::from_slice(&referenced.bytes)?;
                                        referenced[target].clone()
                                    }
                                    None => Value::Null,
                                };
                                references.insert(cache_key, resolved.clone());
                                resolved
                            }
                        }
                        None => Value::Null,
                    },
                };
                keys.push(value);
            }

            candidates.push(Candidate {
                id: id.to_string(),
                keys,
                stored,
            });
        }

        candidates.sort_by(|a, b| {
            for (i, ordered) in order.keys.iter().enumerate() {
                let ordering = compare_values(&a.keys[i], &b.keys[i]);
                let ordering = match ordered.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            a.id.cmp(&b.id)
        });

        Ok(candidates)
    }

    fn materialize<M: Record>(candidates: &[Candidate<'_>]) -> StoreResult<Vec<Versioned<M>>> {
        candidates
            .iter()
            .map(|candidate| {
                let data: M = serde_json::from_slice(&candidate.stored.bytes)?;
                Ok::<_, StoreError>(Versioned::new(
                    data,
                    Self::token(candidate.stored.version),
                ))
            })
            .collect()
    }

    fn slice<'c, 'a>(
        candidates: &'c [Candidate<'a>],
        offset: usize,
        limit: usize,
    ) -> &'c [Candidate<'a>] {
        let start = offset.min(candidates.len());
        let end = start.saturating_add(limit).min(candidates.len());
        &candidates[start..end]
    }

    /// Reject `doc` if another record of `M` already holds one of its unique values.
    fn check_unique<M: Record>(storage: &Storage, id: &str, doc: &Value) -> StoreResult<()> {
        let unique = M::unique_fields();
        if unique.is_empty() {
            return Ok(());
        }

        let prefix = format!("{}:", M::COLLECTION);
        let own_key = Self::make_key(M::COLLECTION, id);
        for (key, stored) in storage.iter() {
            if !key.starts_with(&prefix) || *key == own_key {
                continue;
            }
            let other: Value = serde_json::from_slice(&stored.bytes)?;
            for spec in &unique {
                let value = &doc[spec.name];
                if !value.is_null() && other[spec.name] == *value {
                    return Err(StoreError::UniqueViolation {
                        collection: M::COLLECTION.to_string(),
                        field: spec.name,
                    });
                }
            }
        }
        Ok(())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn count<M: Record>(&self, criteria: &QueryCriteria) -> StoreResult<usize> {
        let storage = self.read()?;
        Ok(Self::select::<M>(&storage, criteria, &SortOrder::default())?.len())
    }

    fn fetch_slice<M: Record>(
        &self,
        criteria: &QueryCriteria,
        order: &SortOrder,
        offset: usize,
        limit: usize,
    ) -> StoreResult<Vec<Versioned<M>>> {
        let storage = self.read()?;
        let candidates = Self::select::<M>(&storage, criteria, order)?;
        Self::materialize(Self::slice(&candidates, offset, limit))
    }

    fn fetch_window<M: Record>(
        &self,
        criteria: &QueryCriteria,
        order: &SortOrder,
        window: &dyn Fn(usize) -> Window,
    ) -> StoreResult<(Window, Vec<Versioned<M>>)> {
        // One read guard for count and slice.
        let storage = self.read()?;
        let candidates = Self::select::<M>(&storage, criteria, order)?;
        let window = window(candidates.len());
        let items = Self::materialize(Self::slice(&candidates, window.offset(), window.limit()))?;
        Ok((window, items))
    }

    fn get_raw<M: Record>(&self, id: &str) -> StoreResult<Option<Versioned<M>>> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self.read()?;

        match storage.get(&key) {
            Some(stored) => {
                let data: M = serde_json::from_slice(&stored.bytes)?;
                Ok(Some(Versioned::new(data, Self::token(stored.version))))
            }
            None => Ok(None),
        }
    }

    fn get_value(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let key = Self::make_key(collection, id);
        let storage = self.read()?;

        match storage.get(&key) {
            Some(stored) => Ok(Some(serde_json::from_slice(&stored.bytes)?)),
            None => Ok(None),
        }
    }

    fn insert<M: Record>(&self, record: &M) -> StoreResult<Versioned<M>> {
        let key = Self::make_key(M::COLLECTION, record.id());
        let doc = serde_json::to_value(record)?;
        let bytes = serde_json::to_vec(&doc)?;

        let mut storage = self.write()?;

        if storage.contains_key(&key) {
            return Err(StoreError::DuplicateKey {
                collection: M::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }
        Self::check_unique::<M>(&storage, record.id(), &doc)?;

        let version = self.next_version();
        storage.insert(key, StoredRecord { bytes, version });

        Ok(Versioned::new(record.clone(), Self::token(version)))
    }

    fn conditional_write<M: Record>(
        &self,
        record: &M,
        expected: &VersionToken,
    ) -> Result<VersionToken, WriteRejection> {
        let key = Self::make_key(M::COLLECTION, record.id());
        let doc = serde_json::to_value(record).map_err(StoreError::from)?;
        let bytes = serde_json::to_vec(&doc).map_err(StoreError::from)?;

        let mut storage = self.write()?;

        let current = match storage.get(&key) {
            Some(stored) => Self::token(stored.version),
            None => return Err(WriteRejection::RecordGone),
        };
        if current != *expected {
            return Err(WriteRejection::VersionMismatch { current });
        }
        Self::check_unique::<M>(&storage, record.id(), &doc)?;

        let version = self.next_version();
        storage.insert(key, StoredRecord { bytes, version });

        Ok(Self::token(version))
    }

    fn delete<M: Record>(&self, id: &str) -> StoreResult<bool> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write()?;

        Ok(storage.remove(&key).is_some())
    }
}
