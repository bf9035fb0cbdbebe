use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::domain::entities::employee::{directory_fields, Employee};
use crate::domain::entities::field::{find_field, FilterField};
use crate::domain::entities::filter::{
    active_count, active_filters, badge_label, remove_filter, reset_filters, upsert_filter,
    AppliedFilter, FilterValue,
};
use crate::domain::entities::page::PageState;
use crate::domain::entities::record::DAY_FORMAT;
use crate::domain::entities::settings::{Theme, UiSettings, PAGE_SIZE_CHOICES};
use crate::domain::entities::sort::{toggle_sort, SortDirection};
use crate::infra::sqlite::repo::SqliteDirectory;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::table_service::{TableQuery, TableService};
use crate::default_db_path;

const TABLE_COLUMNS: [(&str, &str); 7] = [
    ("name", "姓名"),
    ("email", "電子郵件"),
    ("department", "部門"),
    ("office", "辦公室"),
    ("position", "職稱"),
    ("status", "狀態"),
    ("hired_on", "到職日"),
];

pub(crate) fn first_page(page: PageState) -> PageState {
    PageState {
        page_index: 0,
        ..page
    }
}

fn filter_text(filters: &[AppliedFilter], field_id: &str) -> String {
    filters
        .iter()
        .find(|filter| filter.field_id == field_id)
        .and_then(|filter| match &filter.value {
            FilterValue::Text(text) => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn filter_many(filters: &[AppliedFilter], field_id: &str) -> Vec<String> {
    filters
        .iter()
        .find(|filter| filter.field_id == field_id)
        .and_then(|filter| match &filter.value {
            FilterValue::Many(values) => Some(values.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn filter_one(filters: &[AppliedFilter], field_id: &str) -> Option<String> {
    filters
        .iter()
        .find(|filter| filter.field_id == field_id)
        .and_then(|filter| match &filter.value {
            FilterValue::One(value) => Some(value.clone()),
            _ => None,
        })
}

fn filter_span(
    filters: &[AppliedFilter],
    field_id: &str,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    filters
        .iter()
        .find(|filter| filter.field_id == field_id)
        .and_then(|filter| match &filter.value {
            FilterValue::Span { from, to } => Some((*from, *to)),
            _ => None,
        })
        .unwrap_or((None, None))
}

fn status_display(fields: &[FilterField], raw: &str) -> String {
    find_field(fields, "status")
        .and_then(|field| field.option_label(raw))
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

/// Runs one guarded fetch and folds the outcome into the view signals. A
/// superseded fetch changes nothing; a failed one empties the table and
/// reports through the status line.
fn apply_reload(
    service: &Arc<TableService>,
    query: &TableQuery,
    mut employees: Signal<Vec<Employee>>,
    mut page: Signal<PageState>,
    mut status: Signal<String>,
    mut load_failed: Signal<bool>,
    failure_label: &str,
) {
    match run_blocking(|| service.load_page(query)) {
        Ok(Some((response, next_page))) => {
            *employees.write() = response.data;
            *page.write() = next_page;
            *status.write() = format!("共 {} 筆", next_page.total);
            *load_failed.write() = false;
        }
        Ok(None) => {}
        Err(err) => {
            *employees.write() = Vec::new();
            *status.write() = format!("{failure_label}：{err}");
            *load_failed.write() = true;
        }
    }
}

#[component]
pub fn App() -> Element {
    let db_path = match default_db_path() {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "無法取得資料庫路徑：{err}" }
                }
            };
        }
    };

    let AppState {
        employees,
        mut search,
        mut filters,
        mut sort,
        mut page,
        mut show_filters,
        mut office_query,
        mut theme,
        mut busy,
        mut status,
        load_failed,
    } = AppState::new();

    let service = Arc::new(TableService::new(Arc::new(SqliteDirectory::new(db_path))));
    let fields = directory_fields();

    let service_for_init = service.clone();
    use_effect(move || {
        *busy.write() = true;
        let settings = match run_blocking(|| {
            service_for_init
                .init()
                .and_then(|_| service_for_init.load_settings())
        }) {
            Ok(settings) => settings,
            Err(err) => {
                *status.write() = format!("初始化資料庫失敗：{err}");
                *busy.write() = false;
                return;
            }
        };
        *theme.write() = settings.theme;
        *page.write() = PageState::new(settings.page_size);

        let query = TableQuery::new(PageState::new(settings.page_size));
        apply_reload(
            &service_for_init,
            &query,
            employees,
            page,
            status,
            load_failed,
            "載入資料失敗",
        );
        *busy.write() = false;
    });

    let filters_snapshot = filters();
    let badge_count = active_count(&filters_snapshot);
    let badges = active_filters(&filters_snapshot)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let page_snapshot = page();
    let sort_snapshot = sort();
    let employees_snapshot = employees();
    let department_options = find_field(&fields, "department")
        .map(|field| field.options.clone())
        .unwrap_or_default();
    let status_options = find_field(&fields, "status")
        .map(|field| field.options.clone())
        .unwrap_or_default();
    let office_options = find_field(&fields, "office")
        .map(|field| field.options.clone())
        .unwrap_or_default();

    let (page_bg, panel_bg, text_color, border_color, muted_color) = match theme() {
        Theme::Light => ("#f5f6f8", "#ffffff", "#1d242e", "#ccd2da", "#667085"),
        Theme::Dark => ("#161b22", "#21262e", "#e6e9ee", "#3c434d", "#9aa4b2"),
    };

    let service_for_theme = service.clone();
    let service_for_search = service.clone();
    let service_for_reset = service.clone();
    let service_for_limit = service.clone();

    rsx! {
        div {
            style: "min-height: 100vh; background: {page_bg}; color: {text_color}; font-family: 'Noto Sans TC', sans-serif; padding: 16px 24px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0;", "員工名錄" }
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    span { style: "color: {muted_color};", "{status()}" }
                    button {
                        style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            let next_theme = theme().toggled();
                            theme.set(next_theme);
                            let settings = UiSettings {
                                theme: next_theme,
                                page_size: page().limit,
                            };
                            let result = run_blocking(|| service_for_theme.save_settings(&settings));
                            if let Err(err) = result {
                                *status.write() = format!("儲存主題設定失敗：{err}");
                            }
                        },
                        if theme() == Theme::Light { "深色模式" } else { "淺色模式" }
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; margin: 12px 0;",
                input {
                    style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 6px 10px; border-radius: 6px; min-width: 260px;",
                    placeholder: "搜尋姓名、部門、職稱…",
                    value: search(),
                    oninput: {
                        let service_for_typing = service.clone();
                        move |event: FormEvent| {
                            search.set(event.value());
                            let query = TableQuery {
                                search: event.value(),
                                filters: filters(),
                                sort: sort(),
                                page: first_page(page()),
                            };
                            apply_reload(
                                &service_for_typing,
                                &query,
                                employees,
                                page,
                                status,
                                load_failed,
                                "搜尋失敗",
                            );
                        }
                    },
                }
                button {
                    style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                    disabled: busy(),
                    onclick: {
                        let service_for_search = service_for_search.clone();
                        move |_| {
                            *busy.write() = true;
                            let query = TableQuery {
                                search: search(),
                                filters: filters(),
                                sort: sort(),
                                page: first_page(page()),
                            };
                            apply_reload(
                                &service_for_search,
                                &query,
                                employees,
                                page,
                                status,
                                load_failed,
                                "搜尋失敗",
                            );
                            *busy.write() = false;
                        }
                    },
                    "搜尋"
                }
                button {
                    style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let open = show_filters();
                        show_filters.set(!open);
                    },
                    "篩選（{badge_count}）"
                }
                if !badges.is_empty() {
                    button {
                        style: "border: none; background: transparent; color: {muted_color}; cursor: pointer; text-decoration: underline;",
                        onclick: {
                            let service_for_reset = service_for_reset.clone();
                            move |_| {
                                let mut next = filters();
                                reset_filters(&mut next);
                                filters.set(next.clone());
                                let query = TableQuery {
                                    search: search(),
                                    filters: next,
                                    sort: sort(),
                                    page: first_page(page()),
                                };
                                apply_reload(
                                    &service_for_reset,
                                    &query,
                                    employees,
                                    page,
                                    status,
                                    load_failed,
                                    "清除篩選失敗",
                                );
                            }
                        },
                        "清除全部"
                    }
                }
            }

            if !badges.is_empty() {
                div {
                    style: "display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 12px;",
                    {badges.iter().map(|badge| {
                        let field_id = badge.field_id.clone();
                        let field_label = find_field(&fields, &field_id)
                            .map(|field| field.label.clone())
                            .unwrap_or_else(|| field_id.clone());
                        let value_label = badge_label(badge, &fields);
                        let service_for_badge = service.clone();
                        rsx!(
                            span {
                                style: "display: inline-flex; gap: 6px; align-items: center; border: 1px solid {border_color}; background: {panel_bg}; border-radius: 999px; padding: 3px 10px;",
                                "{field_label}：{value_label}"
                                button {
                                    style: "border: none; background: transparent; color: {muted_color}; cursor: pointer;",
                                    onclick: move |_| {
                                        let mut next = filters();
                                        remove_filter(&mut next, &field_id);
                                        filters.set(next.clone());
                                        let query = TableQuery {
                                            search: search(),
                                            filters: next,
                                            sort: sort(),
                                            page: first_page(page()),
                                        };
                                        apply_reload(
                                            &service_for_badge,
                                            &query,
                                            employees,
                                            page,
                                            status,
                                            load_failed,
                                            "移除篩選失敗",
                                        );
                                    },
                                    "×"
                                }
                            }
                        )
                    })}
                }
            }

            if show_filters() {
                div {
                    style: "border: 1px solid {border_color}; background: {panel_bg}; border-radius: 8px; padding: 12px 16px; margin-bottom: 12px; display: flex; gap: 24px; flex-wrap: wrap;",

                    div {
                        span { style: "display: block; margin-bottom: 6px; color: {muted_color};", "姓名" }
                        input {
                            style: "border: 1px solid {border_color}; background: {page_bg}; color: {text_color}; padding: 4px 8px; border-radius: 6px;",
                            value: filter_text(&filters_snapshot, "name"),
                            oninput: {
                                let service_for_name = service.clone();
                                move |event: FormEvent| {
                                    let mut next = filters();
                                    upsert_filter(
                                        &mut next,
                                        AppliedFilter::new("name", FilterValue::Text(event.value())),
                                    );
                                    filters.set(next.clone());
                                    let query = TableQuery {
                                        search: search(),
                                        filters: next,
                                        sort: sort(),
                                        page: first_page(page()),
                                    };
                                    apply_reload(
                                        &service_for_name,
                                        &query,
                                        employees,
                                        page,
                                        status,
                                        load_failed,
                                        "套用篩選失敗",
                                    );
                                }
                            },
                        }
                    }

                    div {
                        span { style: "display: block; margin-bottom: 6px; color: {muted_color};", "部門" }
                        {department_options.iter().map(|option| {
                                let raw = option.value.render();
                                let label = option.label.clone();
                                let selected = filter_many(&filters_snapshot, "department");
                                let checked = selected.contains(&raw);
                                let service_for_department = service.clone();
                                rsx!(
                                    label {
                                        style: "display: flex; gap: 6px; align-items: center; padding: 2px 0; cursor: pointer;",
                                        input {
                                            r#type: "checkbox",
                                            checked: checked,
                                            onclick: move |_| {
                                                let mut values = filter_many(&filters(), "department");
                                                if checked {
                                                    values.retain(|value| value != &raw);
                                                } else {
                                                    values.push(raw.clone());
                                                }
                                                let mut next = filters();
                                                upsert_filter(
                                                    &mut next,
                                                    AppliedFilter::new("department", FilterValue::Many(values)),
                                                );
                                                filters.set(next.clone());
                                                let query = TableQuery {
                                                    search: search(),
                                                    filters: next,
                                                    sort: sort(),
                                                    page: first_page(page()),
                                                };
                                                apply_reload(
                                                    &service_for_department,
                                                    &query,
                                                    employees,
                                                    page,
                                                    status,
                                                    load_failed,
                                                    "套用篩選失敗",
                                                );
                                            }
                                        }
                                        span { "{label}" }
                                    }
                                )
                            })}
                    }

                    div {
                        span { style: "display: block; margin-bottom: 6px; color: {muted_color};", "辦公室" }
                        input {
                            style: "border: 1px solid {border_color}; background: {page_bg}; color: {text_color}; padding: 4px 8px; border-radius: 6px; margin-bottom: 6px;",
                            placeholder: "輸入以過濾選項",
                            value: office_query(),
                            oninput: move |event| office_query.set(event.value()),
                        }
                        {office_options
                                .iter()
                                .filter(|option| {
                                    let needle = office_query().trim().to_lowercase();
                                    needle.is_empty()
                                        || option.label.to_lowercase().contains(&needle)
                                })
                                .map(|option| {
                                    let raw = option.value.render();
                                    let label = option.label.clone();
                                    let is_selected =
                                        filter_one(&filters_snapshot, "office").as_deref()
                                            == Some(raw.as_str());
                                    let service_for_office = service.clone();
                                    rsx!(
                                        div {
                                            style: if is_selected {
                                                "padding: 4px 8px; cursor: pointer; border-radius: 6px; background: {page_bg};"
                                            } else {
                                                "padding: 4px 8px; cursor: pointer; border-radius: 6px;"
                                            },
                                            onclick: move |_| {
                                                let mut next = filters();
                                                if is_selected {
                                                    remove_filter(&mut next, "office");
                                                } else {
                                                    upsert_filter(
                                                        &mut next,
                                                        AppliedFilter::new("office", FilterValue::One(raw.clone())),
                                                    );
                                                }
                                                filters.set(next.clone());
                                                let query = TableQuery {
                                                    search: search(),
                                                    filters: next,
                                                    sort: sort(),
                                                    page: first_page(page()),
                                                };
                                                apply_reload(
                                                    &service_for_office,
                                                    &query,
                                                    employees,
                                                    page,
                                                    status,
                                                    load_failed,
                                                    "套用篩選失敗",
                                                );
                                            },
                                            "{label}"
                                        }
                                    )
                                })}
                    }

                    div {
                        span { style: "display: block; margin-bottom: 6px; color: {muted_color};", "狀態" }
                        {status_options.iter().map(|option| {
                                let raw = option.value.render();
                                let label = option.label.clone();
                                let selected = filter_many(&filters_snapshot, "status");
                                let checked = selected.contains(&raw);
                                let service_for_status = service.clone();
                                rsx!(
                                    label {
                                        style: "display: flex; gap: 6px; align-items: center; padding: 2px 0; cursor: pointer;",
                                        input {
                                            r#type: "checkbox",
                                            checked: checked,
                                            onclick: move |_| {
                                                let mut values = filter_many(&filters(), "status");
                                                if checked {
                                                    values.retain(|value| value != &raw);
                                                } else {
                                                    values.push(raw.clone());
                                                }
                                                let mut next = filters();
                                                upsert_filter(
                                                    &mut next,
                                                    AppliedFilter::new("status", FilterValue::Many(values)),
                                                );
                                                filters.set(next.clone());
                                                let query = TableQuery {
                                                    search: search(),
                                                    filters: next,
                                                    sort: sort(),
                                                    page: first_page(page()),
                                                };
                                                apply_reload(
                                                    &service_for_status,
                                                    &query,
                                                    employees,
                                                    page,
                                                    status,
                                                    load_failed,
                                                    "套用篩選失敗",
                                                );
                                            }
                                        }
                                        span { "{label}" }
                                    }
                                )
                            })}
                    }

                    div {
                        span { style: "display: block; margin-bottom: 6px; color: {muted_color};", "到職日" }
                        div {
                            style: "display: flex; gap: 8px; align-items: center;",
                            input {
                                r#type: "date",
                                style: "border: 1px solid {border_color}; background: {page_bg}; color: {text_color}; padding: 4px 8px; border-radius: 6px;",
                                value: filter_span(&filters_snapshot, "hired_on").0
                                    .map(|day| day.format(DAY_FORMAT).to_string())
                                    .unwrap_or_default(),
                                oninput: {
                                    let service_for_from = service.clone();
                                    move |event: FormEvent| {
                                        let from = NaiveDate::parse_from_str(
                                            event.value().trim(),
                                            DAY_FORMAT,
                                        )
                                        .ok();
                                        let (_, to) = filter_span(&filters(), "hired_on");
                                        let mut next = filters();
                                        upsert_filter(
                                            &mut next,
                                            AppliedFilter::new("hired_on", FilterValue::Span { from, to }),
                                        );
                                        filters.set(next.clone());
                                        let query = TableQuery {
                                            search: search(),
                                            filters: next,
                                            sort: sort(),
                                            page: first_page(page()),
                                        };
                                        apply_reload(
                                            &service_for_from,
                                            &query,
                                            employees,
                                            page,
                                            status,
                                            load_failed,
                                            "套用篩選失敗",
                                        );
                                    }
                                },
                            }
                            span { style: "color: {muted_color};", "～" }
                            input {
                                r#type: "date",
                                style: "border: 1px solid {border_color}; background: {page_bg}; color: {text_color}; padding: 4px 8px; border-radius: 6px;",
                                value: filter_span(&filters_snapshot, "hired_on").1
                                    .map(|day| day.format(DAY_FORMAT).to_string())
                                    .unwrap_or_default(),
                                oninput: {
                                    let service_for_to = service.clone();
                                    move |event: FormEvent| {
                                        let to = NaiveDate::parse_from_str(
                                            event.value().trim(),
                                            DAY_FORMAT,
                                        )
                                        .ok();
                                        let (from, _) = filter_span(&filters(), "hired_on");
                                        let mut next = filters();
                                        upsert_filter(
                                            &mut next,
                                            AppliedFilter::new("hired_on", FilterValue::Span { from, to }),
                                        );
                                        filters.set(next.clone());
                                        let query = TableQuery {
                                            search: search(),
                                            filters: next,
                                            sort: sort(),
                                            page: first_page(page()),
                                        };
                                        apply_reload(
                                            &service_for_to,
                                            &query,
                                            employees,
                                            page,
                                            status,
                                            load_failed,
                                            "套用篩選失敗",
                                        );
                                    }
                                },
                            }
                        }
                    }
                }
            }

            div {
                style: "border: 1px solid {border_color}; border-radius: 8px; overflow: hidden;",
                table {
                    style: "border-collapse: collapse; width: 100%; background: {panel_bg};",
                    thead {
                        tr {
                            {TABLE_COLUMNS.iter().map(|(field_id, header)| {
                                let field_id = field_id.to_string();
                                let indicator = match &sort_snapshot {
                                    Some(state) if state.field_id == field_id => match state.direction {
                                        SortDirection::Asc => " ▲",
                                        SortDirection::Desc => " ▼",
                                    },
                                    _ => "",
                                };
                                let service_for_sort = service.clone();
                                rsx!(
                                    th {
                                        style: "text-align: left; padding: 8px 12px; border-bottom: 1px solid {border_color}; cursor: pointer; user-select: none; color: {muted_color};",
                                        onclick: move |_| {
                                            let next_sort = toggle_sort(sort(), &field_id);
                                            sort.set(next_sort.clone());
                                            let query = TableQuery {
                                                search: search(),
                                                filters: filters(),
                                                sort: next_sort,
                                                page: page(),
                                            };
                                            apply_reload(
                                                &service_for_sort,
                                                &query,
                                                employees,
                                                page,
                                                status,
                                                load_failed,
                                                "排序失敗",
                                            );
                                        },
                                        "{header}{indicator}"
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if employees_snapshot.is_empty() {
                            tr {
                                td {
                                    colspan: TABLE_COLUMNS.len() as i64,
                                    style: "padding: 24px; text-align: center; color: {muted_color};",
                                    if load_failed() { "載入失敗，請重試" } else { "沒有符合條件的資料" }
                                }
                            }
                        } else {
                            {employees_snapshot.iter().map(|employee| {
                                let status_label = status_display(&fields, employee.status.as_str());
                                let hired_on = employee.hired_on.format(DAY_FORMAT).to_string();
                                rsx!(
                                    tr {
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{employee.name}" }
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{employee.email}" }
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{employee.department}" }
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{employee.office}" }
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{employee.position}" }
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{status_label}" }
                                        td { style: "padding: 8px 12px; border-bottom: 1px solid {border_color};", "{hired_on}" }
                                    }
                                )
                            })}
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; margin-top: 12px;",
                button {
                    style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    disabled: busy() || !page_snapshot.can_go_back(),
                    onclick: {
                        let service_for_prev = service.clone();
                        move |_| {
                            let current = page();
                            if !current.can_go_back() {
                                return;
                            }
                            let query = TableQuery {
                                search: search(),
                                filters: filters(),
                                sort: sort(),
                                page: PageState {
                                    page_index: current.page_index - 1,
                                    ..current
                                },
                            };
                            apply_reload(
                                &service_for_prev,
                                &query,
                                employees,
                                page,
                                status,
                                load_failed,
                                "上一頁失敗",
                            );
                        }
                    },
                    "上一頁"
                }
                {page_snapshot.window().into_iter().map(|target| {
                    let is_current = target == page_snapshot.page_index;
                    let service_for_jump = service.clone();
                    let style = if is_current {
                        format!("border: 1px solid {border_color}; background: {text_color}; color: {panel_bg}; padding: 4px 10px; border-radius: 6px;")
                    } else {
                        format!("border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 4px 10px; border-radius: 6px; cursor: pointer;")
                    };
                    rsx!(
                        button {
                            style: "{style}",
                            disabled: busy() || is_current,
                            onclick: move |_| {
                                let current = page();
                                let query = TableQuery {
                                    search: search(),
                                    filters: filters(),
                                    sort: sort(),
                                    page: PageState {
                                        page_index: current.go_to(target),
                                        ..current
                                    },
                                };
                                apply_reload(
                                    &service_for_jump,
                                    &query,
                                    employees,
                                    page,
                                    status,
                                    load_failed,
                                    "切換頁面失敗",
                                );
                            },
                            "{target + 1}"
                        }
                    )
                })}
                button {
                    style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    disabled: busy() || !page_snapshot.can_go_forward(),
                    onclick: {
                        let service_for_next = service.clone();
                        move |_| {
                            let current = page();
                            if !current.can_go_forward() {
                                return;
                            }
                            let query = TableQuery {
                                search: search(),
                                filters: filters(),
                                sort: sort(),
                                page: PageState {
                                    page_index: current.page_index + 1,
                                    ..current
                                },
                            };
                            apply_reload(
                                &service_for_next,
                                &query,
                                employees,
                                page,
                                status,
                                load_failed,
                                "下一頁失敗",
                            );
                        }
                    },
                    "下一頁"
                }
                span { style: "color: {muted_color};", "共 {page_snapshot.page_count()} 頁，{page_snapshot.total} 筆" }
                span { style: "margin-left: auto; color: {muted_color};", "每頁" }
                {PAGE_SIZE_CHOICES.iter().map(|choice| {
                    let choice = *choice;
                    let is_current = choice == page_snapshot.limit;
                    let service_for_limit = service_for_limit.clone();
                    rsx!(
                        button {
                            style: "border: 1px solid {border_color}; background: {panel_bg}; color: {text_color}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                            disabled: busy() || is_current,
                            onclick: move |_| {
                                let next_page = page().with_limit(choice);
                                let settings = UiSettings {
                                    theme: theme(),
                                    page_size: choice,
                                };
                                if let Err(err) =
                                    run_blocking(|| service_for_limit.save_settings(&settings))
                                {
                                    *status.write() = format!("儲存每頁筆數失敗：{err}");
                                }
                                let query = TableQuery {
                                    search: search(),
                                    filters: filters(),
                                    sort: sort(),
                                    page: next_page,
                                };
                                apply_reload(
                                    &service_for_limit,
                                    &query,
                                    employees,
                                    page,
                                    status,
                                    load_failed,
                                    "調整每頁筆數失敗",
                                );
                            },
                            "{choice}"
                        }
                    )
                })}
            }
        }
    }
}
