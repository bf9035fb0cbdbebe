pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_CHOICES: [usize; 3] = [10, 25, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Per-user view preferences, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiSettings {
    pub theme: Theme,
    pub page_size: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
