use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, types::Value};

use crate::domain::entities::employee::{Employee, EmployeeId, EmployeeStatus};
use crate::domain::entities::filter::FilterParam;
use crate::domain::entities::record::DAY_FORMAT;
use crate::domain::entities::settings::{Theme, UiSettings};
use crate::domain::entities::sort::SortDirection;
use crate::infra::sqlite::schema::open_connection;
use crate::usecase::ports::gateway::{PageMeta, PageRequest, PageResponse};

/// Columns that may appear as a filter key or sort key. Anything else in
/// the request is ignored (filters) or rejected (sort).
const FILTER_COLUMNS: [&str; 7] = [
    "name",
    "email",
    "department",
    "office",
    "position",
    "status",
    "hired_on",
];

/// Text columns matched by substring rather than equality.
const CONTAINS_COLUMNS: [&str; 3] = ["name", "email", "position"];

const SEARCH_COLUMNS: [&str; 7] = FILTER_COLUMNS;

pub fn query_page(db_path: &Path, request: &PageRequest) -> Result<PageResponse<Employee>> {
    if request.limit == 0 {
        anyhow::bail!("limit must be greater than zero")
    }

    let conn = open_connection(db_path)?;

    let mut filter_clauses = Vec::<String>::new();
    let mut filter_params = Vec::<Value>::new();

    if let Some(search) = request.search.as_deref() {
        let search = search.trim();
        if !search.is_empty() {
            let search_sql = SEARCH_COLUMNS
                .iter()
                .map(|column| format!("{column} LIKE ?"))
                .collect::<Vec<_>>()
                .join(" OR ");
            filter_clauses.push(format!("({search_sql})"));
            for _ in SEARCH_COLUMNS {
                filter_params.push(Value::Text(format!("%{search}%")));
            }
        }
    }

    for (key, param) in &request.filters {
        if !FILTER_COLUMNS.contains(&key.as_str()) {
            continue;
        }
        match param {
            FilterParam::One(value) if key == "hired_on" && value.contains(',') => {
                let (from, to) = value.split_once(',').unwrap_or((value.as_str(), ""));
                if !from.is_empty() {
                    filter_clauses.push("hired_on >= ?".to_string());
                    filter_params.push(Value::Text(from.to_string()));
                }
                if !to.is_empty() {
                    filter_clauses.push("hired_on <= ?".to_string());
                    filter_params.push(Value::Text(to.to_string()));
                }
            }
            FilterParam::One(value) => {
                if CONTAINS_COLUMNS.contains(&key.as_str()) {
                    filter_clauses.push(format!("{key} LIKE ?"));
                    filter_params.push(Value::Text(format!("%{value}%")));
                } else {
                    filter_clauses.push(format!("{key} = ?"));
                    filter_params.push(Value::Text(value.clone()));
                }
            }
            FilterParam::Many(values) => {
                if values.is_empty() {
                    continue;
                }
                let placeholders = vec!["?"; values.len()].join(",");
                filter_clauses.push(format!("{key} IN ({placeholders})"));
                for value in values {
                    filter_params.push(Value::Text(value.clone()));
                }
            }
        }
    }

    let where_sql = if filter_clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", filter_clauses.join(" AND "))
    };

    let count_sql = format!("SELECT COUNT(*) FROM employee {where_sql}");
    let total: i64 = conn
        .query_row(
            &count_sql,
            rusqlite::params_from_iter(filter_params.iter().cloned()),
            |row| row.get(0),
        )
        .context("failed to query filtered employee count")?;
    let total = total.max(0) as usize;

    let limit = request.limit;
    let page_count = ((total + limit - 1) / limit).max(1);
    let page = request.page.clamp(1, page_count);
    let offset = (page - 1) * limit;

    let mut order_sql = String::from("id ASC");
    if let Some(sort_by) = request.sort_by.as_deref() {
        if !FILTER_COLUMNS.contains(&sort_by) {
            anyhow::bail!("sort column out of range: {sort_by}");
        }
        let direction = match request.sort_order.unwrap_or(SortDirection::Asc) {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };
        order_sql = format!("{sort_by} {direction}, id ASC");
    }

    let row_sql = format!(
        "SELECT id, name, email, department, office, position, status, hired_on
         FROM employee
         {where_sql}
         ORDER BY {order_sql}
         LIMIT ? OFFSET ?"
    );

    let mut row_params = filter_params.clone();
    row_params.push(Value::Integer(limit as i64));
    row_params.push(Value::Integer(offset as i64));

    let mut row_stmt = conn
        .prepare(&row_sql)
        .context("failed to prepare employee page query")?;
    let row_iter = row_stmt
        .query_map(rusqlite::params_from_iter(row_params), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
            ))
        })
        .context("failed to query employee page")?;

    let mut data = Vec::new();
    for item in row_iter {
        let (id, name, email, department, office, position, status, hired_on) =
            item.context("failed to read employee row")?;
        let status = EmployeeStatus::parse(&status)
            .with_context(|| format!("unknown employee status: {status}"))?;
        let hired_on = NaiveDate::parse_from_str(&hired_on, DAY_FORMAT)
            .with_context(|| format!("invalid hire date: {hired_on}"))?;
        data.push(Employee {
            id: EmployeeId(id),
            name,
            email,
            department,
            office,
            position,
            status,
            hired_on,
        });
    }

    Ok(PageResponse {
        data,
        meta: PageMeta { total, page, limit },
    })
}

pub fn load_settings(db_path: &Path) -> Result<UiSettings> {
    let conn = open_connection(db_path)?;

    let read = |key: &str| -> Result<Option<String>> {
        let mut stmt = conn
            .prepare("SELECT value FROM app_setting WHERE key = ?1")
            .context("failed to prepare setting query")?;
        let mut rows = stmt
            .query_map([key], |row| row.get::<_, String>(0))
            .context("failed to query setting")?;
        match rows.next() {
            Some(value) => Ok(Some(value.context("failed to read setting row")?)),
            None => Ok(None),
        }
    };

    let mut settings = UiSettings::default();
    if let Some(theme) = read("theme")?.as_deref().and_then(Theme::parse) {
        settings.theme = theme;
    }
    if let Some(page_size) = read("page_size")?.and_then(|value| value.parse::<usize>().ok()) {
        if page_size > 0 {
            settings.page_size = page_size;
        }
    }

    Ok(settings)
}

pub fn save_settings(db_path: &Path, settings: &UiSettings) -> Result<()> {
    let conn = open_connection(db_path)?;

    let mut upsert = conn
        .prepare(
            "INSERT INTO app_setting(key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .context("failed to prepare setting upsert")?;
    upsert
        .execute(params!["theme", settings.theme.as_str()])
        .context("failed to save theme")?;
    upsert
        .execute(params!["page_size", settings.page_size.to_string()])
        .context("failed to save page size")?;

    Ok(())
}
