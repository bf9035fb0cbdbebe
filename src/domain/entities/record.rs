use chrono::NaiveDate;

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Runtime value of one record attribute, as seen by search, filters and sort.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Day(NaiveDate),
}

impl CellValue {
    /// Stringified form used for search, equality filters and display.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => {
                if number.fract() == 0.0 {
                    format!("{}", *number as i64)
                } else {
                    number.to_string()
                }
            }
            CellValue::Flag(flag) => flag.to_string(),
            CellValue::Day(day) => day.format(DAY_FORMAT).to_string(),
        }
    }

    /// Calendar-day view of the value; `None` when it is not a date and
    /// cannot be parsed as one.
    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Day(day) => Some(*day),
            CellValue::Text(text) => NaiveDate::parse_from_str(text.trim(), DAY_FORMAT).ok(),
            _ => None,
        }
    }
}

/// Anything the table can search, filter and sort. Attribute ids double as
/// filter-field ids and sort keys.
pub trait Filterable {
    fn attributes(&self) -> Vec<(&'static str, CellValue)>;

    fn attribute(&self, id: &str) -> Option<CellValue> {
        self.attributes()
            .into_iter()
            .find(|(name, _)| *name == id)
            .map(|(_, value)| value)
    }
}
