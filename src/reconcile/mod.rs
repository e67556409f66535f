//! Optimistic-concurrency reconciliation of edits.

mod reconciler;
mod report;

pub use reconciler::Reconciler;
pub use report::{ConflictReport, FailureKind, FieldDiff, WriteFailure, WriteOutcome};
