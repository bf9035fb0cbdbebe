/// Input widget a filter field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    DateRange,
    Select,
    SearchableSelect,
}

/// Raw value carried by a select option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
}

impl OptionValue {
    pub fn render(&self) -> String {
        match self {
            OptionValue::Text(text) => text.clone(),
            OptionValue::Flag(flag) => flag.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldOption {
    pub label: String,
    pub value: OptionValue,
}

impl FieldOption {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: OptionValue::Text(value.into()),
        }
    }

    #[allow(dead_code)]
    pub fn flag(label: impl Into<String>, value: bool) -> Self {
        Self {
            label: label.into(),
            value: OptionValue::Flag(value),
        }
    }
}

/// One filter the drawer offers. `id` must match the attribute id of the
/// records it filters and be unique within a field set.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub options: Vec<FieldOption>,
}

impl FilterField {
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::Text,
            options: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::Date,
            options: Vec::new(),
        }
    }

    pub fn date_range(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::DateRange,
            options: Vec::new(),
        }
    }

    pub fn select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::Select,
            options,
        }
    }

    pub fn searchable_select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::SearchableSelect,
            options,
        }
    }

    /// Display label for a raw option value, when this field declares it.
    pub fn option_label(&self, raw: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value.render() == raw)
            .map(|option| option.label.as_str())
    }
}

pub fn find_field<'a>(fields: &'a [FilterField], id: &str) -> Option<&'a FilterField> {
    fields.iter().find(|field| field.id == id)
}
