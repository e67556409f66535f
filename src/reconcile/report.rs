use serde_json::Value;
use thiserror::Error;

use crate::record::Versioned;
use crate::version::VersionToken;

/// Result of saving an edit.
#[derive(Debug)]
pub enum WriteOutcome<M> {
    /// The write was applied; carries the stored record and its new version.
    Committed(Versioned<M>),
    /// Someone else changed the record since it was read.
    VersionMismatch(ConflictReport<M>),
    /// Someone else deleted the record since it was read.
    RecordGone(ConflictReport<M>),
    /// Storage refused the write for a reason unrelated to versioning.
    OtherWriteFailure(WriteFailure),
}

impl<M> WriteOutcome<M> {
    pub fn is_committed(&self) -> bool {
        matches!(self, WriteOutcome::Committed(_))
    }

    pub fn report(&self) -> Option<&ConflictReport<M>> {
        match self {
            WriteOutcome::VersionMismatch(report) | WriteOutcome::RecordGone(report) => {
                Some(report)
            }
            _ => None,
        }
    }

    /// Messages to show next to the form: `(field, message)`, where `None`
    /// marks a message about the record as a whole.
    pub fn messages(&self) -> Vec<(Option<&'static str>, String)> {
        match self {
            WriteOutcome::Committed(_) => Vec::new(),
            WriteOutcome::VersionMismatch(report) | WriteOutcome::RecordGone(report) => {
                report.messages()
            }
            WriteOutcome::OtherWriteFailure(failure) => vec![(None, failure.message.clone())],
        }
    }
}

/// One editable field whose stored value differs from what the client sent.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDiff {
    pub field: &'static str,
    pub label: &'static str,
    pub current: Value,
    pub attempted: Value,
    /// `current` rendered for the user; foreign keys show the referenced name.
    pub current_display: String,
}

impl FieldDiff {
    pub fn message(&self) -> String {
        format!("Current value: {}", self.current_display)
    }
}

/// What the user needs to resolve a rejected edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictReport<M> {
    pub field_diffs: Vec<FieldDiff>,
    pub record_deleted: bool,
    /// Version now in storage; absent when the record was deleted.
    pub refreshed_version: Option<VersionToken>,
    pub summary: String,
    /// The client's values carrying the refreshed version, ready to be
    /// submitted again as-is. Absent when the record was deleted.
    pub resubmission: Option<Versioned<M>>,
}

impl<M> ConflictReport<M> {
    pub fn diff(&self, field: &str) -> Option<&FieldDiff> {
        self.field_diffs.iter().find(|diff| diff.field == field)
    }

    pub fn messages(&self) -> Vec<(Option<&'static str>, String)> {
        let mut messages: Vec<_> = self
            .field_diffs
            .iter()
            .map(|diff| (Some(diff.field), diff.message()))
            .collect();
        messages.push((None, self.summary.clone()));
        messages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A unique field collided with another record.
    Duplicate { field: &'static str },
    Storage,
}

/// A write failure unrelated to versioning. Not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WriteFailure {
    pub kind: FailureKind,
    pub message: String,
}

pub(crate) mod messages {
    pub fn modified(label: &str) -> String {
        format!(
            "The record you attempted to edit was modified by another user after you \
             received your values. The edit operation was canceled and the current values \
             in the database have been displayed. If you still want to save your version \
             of this record, click the Save button again. Otherwise click the 'Back to {} \
             List' hyperlink.",
            label
        )
    }

    pub fn deleted(label: &str) -> String {
        format!(
            "Unable to save changes. The {} was deleted by another user.",
            label
        )
    }

    pub fn duplicate(field_label: &str) -> String {
        format!(
            "Unable to save changes. Remember, you cannot have duplicate {} values.",
            field_label
        )
    }

    pub const STORAGE: &str =
        "Unable to save changes. Try again, and if the problem persists see your system administrator.";
}
