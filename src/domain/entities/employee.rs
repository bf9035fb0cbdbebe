use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::field::{FieldOption, FilterField};
use crate::domain::entities::record::{CellValue, Filterable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::OnLeave => "on_leave",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "active" => Some(EmployeeStatus::Active),
            "on_leave" => Some(EmployeeStatus::OnLeave),
            "inactive" => Some(EmployeeStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub office: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub hired_on: NaiveDate,
}

impl Filterable for Employee {
    fn attributes(&self) -> Vec<(&'static str, CellValue)> {
        vec![
            ("name", CellValue::Text(self.name.clone())),
            ("email", CellValue::Text(self.email.clone())),
            ("department", CellValue::Text(self.department.clone())),
            ("office", CellValue::Text(self.office.clone())),
            ("position", CellValue::Text(self.position.clone())),
            ("status", CellValue::Text(self.status.as_str().to_string())),
            ("hired_on", CellValue::Day(self.hired_on)),
        ]
    }
}

/// Filter drawer layout for the directory view. Ids match `Employee`
/// attribute ids.
pub fn directory_fields() -> Vec<FilterField> {
    vec![
        FilterField::text("name", "姓名"),
        FilterField::select(
            "department",
            "部門",
            vec![
                FieldOption::text("工程", "工程"),
                FieldOption::text("產品", "產品"),
                FieldOption::text("人資", "人資"),
                FieldOption::text("財務", "財務"),
            ],
        ),
        FilterField::searchable_select(
            "office",
            "辦公室",
            vec![
                FieldOption::text("台北", "台北"),
                FieldOption::text("新竹", "新竹"),
                FieldOption::text("高雄", "高雄"),
            ],
        ),
        FilterField::select(
            "status",
            "狀態",
            vec![
                FieldOption::text("在職", "active"),
                FieldOption::text("留職停薪", "on_leave"),
                FieldOption::text("離職", "inactive"),
            ],
        ),
        FilterField::date_range("hired_on", "到職日"),
    ]
}
