use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{CellValue, Filterable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field_id: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            direction: SortDirection::Asc,
        }
    }
}

/// Header click cycle: unsorted -> asc -> desc -> unsorted. Clicking a
/// different column always restarts at asc.
pub fn toggle_sort(current: Option<SortState>, field_id: &str) -> Option<SortState> {
    match current {
        Some(state) if state.field_id == field_id => match state.direction {
            SortDirection::Asc => Some(SortState {
                field_id: state.field_id,
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortState::asc(field_id)),
    }
}

pub fn compare_records<R: Filterable>(a: &R, b: &R, sort: &SortState) -> Ordering {
    let ordering = match (a.attribute(&sort.field_id), b.attribute(&sort.field_id)) {
        (Some(left), Some(right)) => compare_cells(&left, &right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(left), CellValue::Number(right)) => {
            left.partial_cmp(right).unwrap_or(Ordering::Equal)
        }
        (CellValue::Day(left), CellValue::Day(right)) => left.cmp(right),
        (CellValue::Flag(left), CellValue::Flag(right)) => left.cmp(right),
        (CellValue::Text(left), CellValue::Text(right)) => left.cmp(right),
        _ => a.render().cmp(&b.render()),
    }
}

/// Stable in-place sort; no-op when no column is sorted, keeping the source
/// order as the unsorted baseline.
#[allow(dead_code)]
pub fn sort_records<R: Filterable>(records: &mut [R], sort: &Option<SortState>) {
    if let Some(sort) = sort {
        records.sort_by(|a, b| compare_records(a, b, sort));
    }
}
