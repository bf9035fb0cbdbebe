use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::employee::Employee;
use crate::domain::entities::filter::AppliedFilter;
use crate::domain::entities::page::PageState;
use crate::domain::entities::settings::{Theme, DEFAULT_PAGE_SIZE};
use crate::domain::entities::sort::SortState;

pub struct AppState {
    pub employees: Signal<Vec<Employee>>,
    pub search: Signal<String>,
    pub filters: Signal<Vec<AppliedFilter>>,
    pub sort: Signal<Option<SortState>>,
    pub page: Signal<PageState>,
    pub show_filters: Signal<bool>,
    pub office_query: Signal<String>,
    pub theme: Signal<Theme>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub load_failed: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            employees: use_signal(Vec::<Employee>::new),
            search: use_signal(String::new),
            filters: use_signal(Vec::<AppliedFilter>::new),
            sort: use_signal(|| None::<SortState>),
            page: use_signal(|| PageState::new(DEFAULT_PAGE_SIZE)),
            show_filters: use_signal(|| false),
            office_query: use_signal(String::new),
            theme: use_signal(|| Theme::Light),
            busy: use_signal(|| false),
            status: use_signal(|| "就緒".to_string()),
            load_failed: use_signal(|| false),
        }
    }
}
