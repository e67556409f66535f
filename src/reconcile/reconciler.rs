//! Reconciler - conditional write plus conflict diffing.
//!
//! Applying -> Committed | VersionMismatch | RecordGone | OtherWriteFailure
//!
//! A rejected write is never retried and never overwrites: the caller gets
//! the stored values next to its own and must resubmit explicitly.

use serde_json::Value;
use tracing::{info, warn};

use super::report::{messages, ConflictReport, FailureKind, FieldDiff, WriteFailure, WriteOutcome};
use crate::record::{display_value, FieldFormat, FieldSpec, Record, Versioned};
use crate::store::{RecordStore, StoreError, WriteRejection};
use crate::version::VersionToken;

pub struct Reconciler<'a, S> {
    store: &'a S,
}

impl<'a, S: RecordStore> Reconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Write `attempted` if storage still holds `client_version`; otherwise
    /// describe what changed underneath the client.
    pub fn reconcile<M: Record>(
        &self,
        attempted: &M,
        client_version: &VersionToken,
    ) -> WriteOutcome<M> {
        match self.store.conditional_write(attempted, client_version) {
            Ok(version) => {
                info!(collection = M::COLLECTION, id = attempted.id(), "record saved");
                WriteOutcome::Committed(Versioned::new(attempted.clone(), version))
            }
            Err(WriteRejection::VersionMismatch { .. }) => self.version_mismatch(attempted),
            Err(WriteRejection::RecordGone) => Self::gone(attempted),
            Err(WriteRejection::Failed(err)) => {
                WriteOutcome::OtherWriteFailure(Self::failure::<M>(attempted, err))
            }
        }
    }

    fn version_mismatch<M: Record>(&self, attempted: &M) -> WriteOutcome<M> {
        let current = match self.store.get_raw::<M>(attempted.id()) {
            Ok(Some(current)) => current,
            Ok(None) => return Self::gone(attempted),
            Err(err) => return WriteOutcome::OtherWriteFailure(Self::failure::<M>(attempted, err)),
        };

        let field_diffs = match self.diff(&current.data, attempted) {
            Ok(diffs) => diffs,
            Err(err) => return WriteOutcome::OtherWriteFailure(Self::failure::<M>(attempted, err)),
        };

        info!(
            collection = M::COLLECTION,
            id = attempted.id(),
            changed_fields = field_diffs.len(),
            "edit rejected: record modified by another user"
        );

        WriteOutcome::VersionMismatch(ConflictReport {
            field_diffs,
            record_deleted: false,
            refreshed_version: Some(current.version.clone()),
            summary: messages::modified(M::LABEL),
            resubmission: Some(Versioned::new(attempted.clone(), current.version)),
        })
    }

    fn gone<M: Record>(attempted: &M) -> WriteOutcome<M> {
        info!(
            collection = M::COLLECTION,
            id = attempted.id(),
            "edit rejected: record deleted by another user"
        );
        WriteOutcome::RecordGone(ConflictReport {
            field_diffs: Vec::new(),
            record_deleted: true,
            refreshed_version: None,
            summary: messages::deleted(M::LABEL),
            resubmission: None,
        })
    }

    fn failure<M: Record>(attempted: &M, err: StoreError) -> WriteFailure {
        warn!(
            collection = M::COLLECTION,
            id = attempted.id(),
            error = %err,
            "edit failed"
        );
        match err {
            StoreError::UniqueViolation { field, .. } => {
                let label = M::field_spec(field).map(|spec| spec.label).unwrap_or(field);
                WriteFailure {
                    kind: FailureKind::Duplicate { field },
                    message: messages::duplicate(label),
                }
            }
            _ => WriteFailure {
                kind: FailureKind::Storage,
                message: messages::STORAGE.to_string(),
            },
        }
    }

    /// Walk the editable fields in declaration order and keep the ones whose
    /// stored value differs from the attempted one.
    fn diff<M: Record>(&self, current: &M, attempted: &M) -> Result<Vec<FieldDiff>, StoreError> {
        let current = serde_json::to_value(current)?;
        let attempted = serde_json::to_value(attempted)?;

        Ok(M::editable_fields()
            .into_iter()
            .filter(|spec| current[spec.name] != attempted[spec.name])
            .map(|spec| FieldDiff {
                field: spec.name,
                label: spec.label,
                current_display: self.display(spec, &current[spec.name]),
                current: current[spec.name].clone(),
                attempted: attempted[spec.name].clone(),
            })
            .collect())
    }

    fn display(&self, spec: &FieldSpec, value: &Value) -> String {
        let FieldFormat::Reference {
            collection,
            display,
        } = spec.format
        else {
            return display_value(spec.format, value);
        };

        let key = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return String::new(),
        };
        match self.store.get_value(collection, &key) {
            Ok(Some(referenced)) => display_value(FieldFormat::Plain, &referenced[display]),
            Ok(None) => String::new(),
            Err(err) => {
                warn!(collection, key = %key, error = %err, "could not resolve reference");
                key
            }
        }
    }
}
