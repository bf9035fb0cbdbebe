use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::field::{find_field, FilterField};
use crate::domain::entities::record::{Filterable, DAY_FORMAT};

/// Value of one applied filter. Which arm a field uses follows its kind:
/// text fields carry `Text`, selects carry `One` or `Many`, boolean selects
/// carry `Flag`, date fields carry `Day`, date-range fields carry `Span`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    One(String),
    Many(Vec<String>),
    Flag(bool),
    Day(NaiveDate),
    Span {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Inactive values are never counted, displayed as badges, or sent to
    /// the server. Only emptiness makes a value inactive; `false` and a
    /// single date are meaningful selections.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Text(text) | FilterValue::One(text) => !text.trim().is_empty(),
            FilterValue::Many(values) => !values.is_empty(),
            FilterValue::Flag(_) => true,
            FilterValue::Day(_) => true,
            FilterValue::Span { from, to } => from.is_some() || to.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFilter {
    pub field_id: String,
    pub value: FilterValue,
}

impl AppliedFilter {
    pub fn new(field_id: impl Into<String>, value: FilterValue) -> Self {
        Self {
            field_id: field_id.into(),
            value,
        }
    }
}

/// Server-side filter map entry: scalar or sequence (spans collapse to one
/// `"from,to"` scalar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterParam {
    One(String),
    Many(Vec<String>),
}

pub fn active_filters(filters: &[AppliedFilter]) -> Vec<&AppliedFilter> {
    filters
        .iter()
        .filter(|filter| filter.value.is_active())
        .collect()
}

pub fn active_count(filters: &[AppliedFilter]) -> usize {
    active_filters(filters).len()
}

/// Replaces the entry for the same field, or appends. At most one entry per
/// field id is kept.
pub fn upsert_filter(filters: &mut Vec<AppliedFilter>, next: AppliedFilter) {
    if let Some(existing) = filters
        .iter_mut()
        .find(|filter| filter.field_id == next.field_id)
    {
        existing.value = next.value;
    } else {
        filters.push(next);
    }
}

pub fn remove_filter(filters: &mut Vec<AppliedFilter>, field_id: &str) {
    filters.retain(|filter| filter.field_id != field_id);
}

pub fn reset_filters(filters: &mut Vec<AppliedFilter>) {
    filters.clear();
}

/// Record-level predicate: free-text search over every attribute AND every
/// active filter. Unknown field ids are skipped; a missing or unparsable
/// attribute fails only the filter that needs it. Never panics.
pub fn matches<R: Filterable>(
    record: &R,
    search: &str,
    filters: &[AppliedFilter],
    fields: &[FilterField],
) -> bool {
    if !matches_search(record, search) {
        return false;
    }

    filters
        .iter()
        .filter(|filter| filter.value.is_active())
        .all(|filter| match find_field(fields, &filter.field_id) {
            Some(field) => matches_value(record, &field.id, &filter.value),
            None => true,
        })
}

fn matches_search<R: Filterable>(record: &R, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .attributes()
        .iter()
        .any(|(_, value)| value.render().to_lowercase().contains(&needle))
}

fn matches_value<R: Filterable>(record: &R, field_id: &str, value: &FilterValue) -> bool {
    let Some(cell) = record.attribute(field_id) else {
        return false;
    };

    match value {
        FilterValue::Text(term) => cell
            .render()
            .to_lowercase()
            .contains(&term.trim().to_lowercase()),
        FilterValue::One(wanted) => cell.render() == *wanted,
        FilterValue::Many(wanted) => wanted.iter().any(|candidate| cell.render() == *candidate),
        FilterValue::Flag(flag) => cell.render() == flag.to_string(),
        FilterValue::Day(day) => cell.as_day() == Some(*day),
        FilterValue::Span { from, to } => match cell.as_day() {
            Some(day) => {
                from.map_or(true, |lower| day >= lower) && to.map_or(true, |upper| day <= upper)
            }
            None => false,
        },
    }
}

/// Badge text for one active filter. Raw option values resolve to their
/// declared labels when the field is known, and fall back to the raw value.
pub fn badge_label(filter: &AppliedFilter, fields: &[FilterField]) -> String {
    let field = find_field(fields, &filter.field_id);
    let resolve = |raw: &str| {
        field
            .and_then(|field| field.option_label(raw))
            .map(str::to_string)
            .unwrap_or_else(|| raw.to_string())
    };

    match &filter.value {
        FilterValue::Text(text) | FilterValue::One(text) => resolve(text),
        FilterValue::Many(values) => values
            .iter()
            .map(|value| resolve(value))
            .collect::<Vec<_>>()
            .join(", "),
        FilterValue::Flag(flag) => resolve(&flag.to_string()),
        FilterValue::Day(day) => day.format(DAY_FORMAT).to_string(),
        FilterValue::Span { from, to } => [*from, *to]
            .iter()
            .flatten()
            .map(|day| day.format(DAY_FORMAT).to_string())
            .collect::<Vec<_>>()
            .join(" - "),
    }
}

/// Active filters as the server-side filter map.
pub fn to_filter_params(filters: &[AppliedFilter]) -> BTreeMap<String, FilterParam> {
    let mut params = BTreeMap::new();
    for filter in filters {
        if !filter.value.is_active() {
            continue;
        }
        let param = match &filter.value {
            FilterValue::Text(text) | FilterValue::One(text) => {
                FilterParam::One(text.trim().to_string())
            }
            FilterValue::Many(values) => FilterParam::Many(values.clone()),
            FilterValue::Flag(flag) => FilterParam::One(flag.to_string()),
            FilterValue::Day(day) => FilterParam::One(day.format(DAY_FORMAT).to_string()),
            FilterValue::Span { from, to } => {
                let render = |bound: &Option<NaiveDate>| {
                    bound
                        .map(|day| day.format(DAY_FORMAT).to_string())
                        .unwrap_or_default()
                };
                FilterParam::One(format!("{},{}", render(from), render(to)))
            }
        };
        params.insert(filter.field_id.clone(), param);
    }
    params
}
