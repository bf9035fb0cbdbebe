use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::entities::employee::Employee;
use crate::domain::entities::field::FilterField;
use crate::domain::entities::filter::{matches, to_filter_params, AppliedFilter};
use crate::domain::entities::page::PageState;
use crate::domain::entities::record::Filterable;
use crate::domain::entities::settings::UiSettings;
use crate::domain::entities::sort::{compare_records, SortState};
use crate::usecase::ports::gateway::{
    DirectoryGateway, GatewayError, PageMeta, PageRequest, PageResponse,
};

/// Everything the view has dialed in for the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub filters: Vec<AppliedFilter>,
    pub sort: Option<SortState>,
    pub page: PageState,
}

impl TableQuery {
    pub fn new(page: PageState) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: None,
            page,
        }
    }
}

pub fn build_request(query: &TableQuery) -> PageRequest {
    let search = query.search.trim();
    PageRequest {
        page: query.page.page_index + 1,
        limit: query.page.limit,
        search: (!search.is_empty()).then(|| search.to_string()),
        sort_by: query.sort.as_ref().map(|sort| sort.field_id.clone()),
        sort_order: query.sort.as_ref().map(|sort| sort.direction),
        filters: to_filter_params(&query.filters),
    }
}

/// Folds the server's answer back into view page state. The server clamps
/// out-of-range pages, so its 1-based `meta.page` wins over whatever was
/// asked for.
pub fn reconcile_page(meta: &PageMeta) -> PageState {
    PageState {
        page_index: meta.page.saturating_sub(1),
        limit: meta.limit.max(1),
        total: meta.total,
    }
}

/// Full-scan composition for data already in memory: filter, stable sort,
/// then slice the current page. Returns the page rows and the filtered
/// total. Only sensible for unpaginated sources.
#[allow(dead_code)]
pub fn select_page<'a, R: Filterable>(
    records: &'a [R],
    query: &TableQuery,
    fields: &[FilterField],
) -> (Vec<&'a R>, usize) {
    let mut hits: Vec<&R> = records
        .iter()
        .filter(|record| matches(*record, &query.search, &query.filters, fields))
        .collect();
    if let Some(sort) = &query.sort {
        hits.sort_by(|a, b| compare_records(*a, *b, sort));
    }

    let total = hits.len();
    let limit = query.page.limit.max(1);
    let start = query.page.page_index * limit;
    let rows = if start < total {
        hits[start..(start + limit).min(total)].to_vec()
    } else {
        Vec::new()
    };
    (rows, total)
}

/// Monotonic fetch generation. Every fetch takes a ticket before it starts;
/// a completion is applied only while its ticket is still the newest one,
/// so a slow older response can never overwrite a newer one.
pub struct FetchGuard {
    issued: AtomicU64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued.load(Ordering::SeqCst)
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TableService {
    gateway: Arc<dyn DirectoryGateway>,
    guard: FetchGuard,
}

impl TableService {
    pub fn new(gateway: Arc<dyn DirectoryGateway>) -> Self {
        Self {
            gateway,
            guard: FetchGuard::new(),
        }
    }

    pub fn init(&self) -> Result<(), GatewayError> {
        self.gateway.init()
    }

    /// Runs one guarded fetch. `Ok(None)` means a newer fetch was issued
    /// while this one was in flight and its result must be dropped.
    pub fn load_page(
        &self,
        query: &TableQuery,
    ) -> Result<Option<(PageResponse<Employee>, PageState)>, GatewayError> {
        let ticket = self.guard.begin();
        let response = self.gateway.fetch_page(&build_request(query))?;
        if !self.guard.is_current(ticket) {
            return Ok(None);
        }
        let page = reconcile_page(&response.meta);
        Ok(Some((response, page)))
    }

    pub fn load_settings(&self) -> Result<UiSettings, GatewayError> {
        self.gateway.load_settings()
    }

    pub fn save_settings(&self, settings: &UiSettings) -> Result<(), GatewayError> {
        self.gateway.save_settings(settings)
    }
}
