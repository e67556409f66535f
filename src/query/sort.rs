//! Sort state and the transitions driven by list-view controls.
//!
//! The state is never stored server-side: each response echoes the resolved
//! field and direction, and the next request sends them back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::FieldPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// The form value this direction is echoed as.
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Apply the control that triggered this request.
    ///
    /// - no action: unchanged, page kept
    /// - a sortable column: page reset; same column flips direction, another
    ///   column becomes active in ascending order
    /// - anything else (the filter button): page reset, sort unchanged
    pub fn next(&self, action: Option<&str>, available: &[&str]) -> SortTransition {
        self.next_with_selection(action, available, None)
    }

    /// Like [`SortState::next`], but a non-column action may carry an explicit
    /// selection made in the filter panel. An unknown selected field is ignored.
    pub fn next_with_selection(
        &self,
        action: Option<&str>,
        available: &[&str],
        selection: Option<SortSelection<'_>>,
    ) -> SortTransition {
        let action = match action.filter(|a| !a.is_empty()) {
            Some(action) => action,
            None => {
                return SortTransition {
                    state: self.clone(),
                    reset_page: false,
                }
            }
        };

        let state = if available.contains(&action) {
            if action == self.field {
                SortState::new(action, self.direction.flip())
            } else {
                SortState::new(action, SortDirection::Ascending)
            }
        } else {
            match selection {
                Some(selection) if available.contains(&selection.field) => {
                    SortState::new(selection.field, selection.direction)
                }
                _ => self.clone(),
            }
        };

        SortTransition {
            state,
            reset_page: true,
        }
    }
}

/// Sort picked explicitly in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSelection<'a> {
    pub field: &'a str,
    pub direction: SortDirection,
}

/// Result of one sort-state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTransition {
    pub state: SortState,
    /// The caller must go back to page 1.
    pub reset_page: bool,
}

/// Free-function form of [`SortState::next`].
pub fn next_sort(
    current_field: &str,
    current_direction: SortDirection,
    action: Option<&str>,
    available: &[&str],
) -> SortTransition {
    SortState::new(current_field, current_direction).next(action, available)
}

/// How a sort key's direction relates to the requested direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Same as requested.
    Follow,
    /// Opposite of requested ("Age" ascending is date of birth descending).
    Reverse,
    /// Always ascending, regardless of the request.
    Ascending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub path: FieldPath,
    pub order: KeyOrder,
}

impl SortKey {
    pub const fn follow(path: FieldPath) -> Self {
        Self {
            path,
            order: KeyOrder::Follow,
        }
    }

    pub const fn reverse(path: FieldPath) -> Self {
        Self {
            path,
            order: KeyOrder::Reverse,
        }
    }

    pub const fn ascending(path: FieldPath) -> Self {
        Self {
            path,
            order: KeyOrder::Ascending,
        }
    }

    fn direction(&self, requested: SortDirection) -> SortDirection {
        match self.order {
            KeyOrder::Follow => requested,
            KeyOrder::Reverse => requested.flip(),
            KeyOrder::Ascending => SortDirection::Ascending,
        }
    }
}

/// A sortable column: the primary key followed by its tie-breakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub name: &'static str,
    pub keys: &'static [SortKey],
}

impl SortOption {
    /// Panics (at compile time when used in a const) unless the option has
    /// a primary key and at least one tie-breaker.
    pub const fn new(name: &'static str, keys: &'static [SortKey]) -> Self {
        assert!(
            keys.len() >= 2,
            "a sort option needs a primary key and at least one tie-breaker"
        );
        Self { name, keys }
    }

    pub fn resolve(&self, direction: SortDirection) -> SortOrder {
        SortOrder {
            keys: self
                .keys
                .iter()
                .map(|key| OrderedKey {
                    path: key.path,
                    direction: key.direction(direction),
                })
                .collect(),
        }
    }
}

/// One key of a resolved ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedKey {
    pub path: FieldPath,
    pub direction: SortDirection,
}

/// Fully resolved ordering handed to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub keys: Vec<OrderedKey>,
}
