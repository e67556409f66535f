//! Per-musician fee statistics over every recorded performance.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::models::{Musician, Performance};
use crate::query::{OrderedKey, QueryCriteria, SortDirection, SortOrder, SortState};
use crate::record::FieldPath;
use crate::store::{RecordStore, StoreResult};

/// One row of the performance summary report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub musician_id: String,
    pub first_name: String,
    pub last_name: String,
    /// "First M. Last", as on the musician screens.
    pub formal_name: String,
    pub average_fee_paid: f64,
    pub highest_fee_paid: f64,
    pub lowest_fee_paid: f64,
    pub total_performances: usize,
}

impl PerformanceSummary {
    fn new(musician: &Musician, fees: &[f64]) -> Self {
        let total: f64 = fees.iter().sum();
        Self {
            musician_id: musician.id.clone(),
            first_name: musician.first_name.clone(),
            last_name: musician.last_name.clone(),
            formal_name: musician.formal_name(),
            average_fee_paid: total / fees.len() as f64,
            highest_fee_paid: fees.iter().copied().fold(f64::MIN, f64::max),
            lowest_fee_paid: fees.iter().copied().fold(f64::MAX, f64::min),
            total_performances: fees.len(),
        }
    }
}

fn everything() -> QueryCriteria {
    QueryCriteria::new(SortState::new("Musician", SortDirection::Ascending))
}

fn by_name() -> SortOrder {
    SortOrder {
        keys: ["last_name", "first_name"]
            .into_iter()
            .map(|field| OrderedKey {
                path: FieldPath::field(field),
                direction: SortDirection::Ascending,
            })
            .collect(),
    }
}

/// Fee statistics for every musician with at least one performance,
/// ordered by last name and then first name.
pub fn performance_summary<S: RecordStore>(store: &S) -> StoreResult<Vec<PerformanceSummary>> {
    let performances =
        store.fetch_slice::<Performance>(&everything(), &SortOrder::default(), 0, usize::MAX)?;

    let mut fees: HashMap<String, Vec<f64>> = HashMap::new();
    for performance in performances {
        fees.entry(performance.data.musician_id)
            .or_default()
            .push(performance.data.fee_paid);
    }

    let musicians = store.fetch_slice::<Musician>(&everything(), &by_name(), 0, usize::MAX)?;
    let rows: Vec<_> = musicians
        .iter()
        .filter_map(|musician| {
            fees.get(&musician.data.id)
                .map(|fees| PerformanceSummary::new(&musician.data, fees))
        })
        .collect();

    debug!(
        musicians = rows.len(),
        performances = rows.iter().map(|row| row.total_performances).sum::<usize>(),
        "performance summary built"
    );
    Ok(rows)
}
