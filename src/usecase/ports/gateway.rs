use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::employee::Employee;
use crate::domain::entities::filter::FilterParam;
use crate::domain::entities::settings::UiSettings;
use crate::domain::entities::sort::SortDirection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    Message(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl Error for GatewayError {}

/// One page query as it crosses the wire. `page` is 1-based here; the view
/// owns a 0-based index and converts at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, FilterParam>,
}

/// `page` is the 1-based page the server actually answered, which may be
/// lower than the requested one when the result shrank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

pub trait DirectoryGateway: Send + Sync {
    fn init(&self) -> Result<(), GatewayError>;
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Employee>, GatewayError>;
    fn load_settings(&self) -> Result<UiSettings, GatewayError>;
    fn save_settings(&self, settings: &UiSettings) -> Result<(), GatewayError>;
}
