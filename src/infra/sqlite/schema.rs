use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS employee (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            department  TEXT NOT NULL,
            office      TEXT NOT NULL,
            position    TEXT NOT NULL,
            status      TEXT NOT NULL,
            hired_on    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS app_setting (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_employee_department
            ON employee(department);

        CREATE INDEX IF NOT EXISTS idx_employee_status
            ON employee(status);

        CREATE INDEX IF NOT EXISTS idx_employee_hired_on
            ON employee(hired_on);
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}

/// First-run seed so the directory is usable immediately. Rows are only
/// inserted into an empty table.
pub fn seed_if_empty(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;

    let existing: i64 = conn
        .query_row("SELECT COUNT(*) FROM employee", [], |row| row.get(0))
        .context("failed to count employees")?;
    if existing > 0 {
        return Ok(());
    }

    let staff: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
        ("林雅婷", "yating.lin@staffdesk.test", "工程", "台北", "資深工程師", "active", "2019-03-11"),
        ("陳冠宇", "guanyu.chen@staffdesk.test", "工程", "新竹", "工程師", "active", "2021-07-01"),
        ("張書豪", "shuhao.chang@staffdesk.test", "工程", "台北", "技術主管", "active", "2017-09-18"),
        ("黃郁涵", "yuhan.huang@staffdesk.test", "產品", "台北", "產品經理", "active", "2020-01-06"),
        ("李承翰", "chenghan.lee@staffdesk.test", "產品", "高雄", "產品設計師", "on_leave", "2022-04-25"),
        ("王思涵", "szuhan.wang@staffdesk.test", "人資", "台北", "人資專員", "active", "2018-11-05"),
        ("吳佩珊", "peishan.wu@staffdesk.test", "人資", "高雄", "招募專員", "inactive", "2016-05-30"),
        ("劉建宏", "chienhung.liu@staffdesk.test", "財務", "台北", "財務分析師", "active", "2023-02-13"),
        ("蔡欣怡", "hsinyi.tsai@staffdesk.test", "財務", "新竹", "會計", "active", "2021-10-04"),
        ("鄭宇軒", "yuhsuan.cheng@staffdesk.test", "工程", "高雄", "測試工程師", "active", "2024-06-17"),
        ("許家瑜", "chiayu.hsu@staffdesk.test", "產品", "新竹", "資料分析師", "on_leave", "2020-08-24"),
        ("楊子儀", "tzuyi.yang@staffdesk.test", "工程", "台北", "實習生", "inactive", "2024-01-08"),
    ];

    let mut insert = conn
        .prepare(
            "INSERT INTO employee(name, email, department, office, position, status, hired_on)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .context("failed to prepare seed insert")?;
    for (name, email, department, office, position, status, hired_on) in staff {
        insert
            .execute(params![name, email, department, office, position, status, hired_on])
            .context("failed to insert seed employee")?;
    }

    Ok(())
}
