/// At most this many page buttons are rendered.
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 0-based.
    pub page_index: usize,
    pub limit: usize,
    pub total: usize,
}

impl PageState {
    pub fn new(limit: usize) -> Self {
        Self {
            page_index: 0,
            limit: limit.max(1),
            total: 0,
        }
    }

    /// Never 0, even with no rows: an empty table still has one page.
    pub fn page_count(&self) -> usize {
        let limit = self.limit.max(1);
        ((self.total + limit - 1) / limit).max(1)
    }

    /// Contiguous run of page indices to render: all pages when five or
    /// fewer, otherwise pinned to the head near the start, pinned to the
    /// tail near the end, and centered on the current page in between.
    pub fn window(&self) -> Vec<usize> {
        let count = self.page_count();
        if count <= PAGE_WINDOW {
            return (0..count).collect();
        }
        if self.page_index <= 1 {
            return (0..PAGE_WINDOW).collect();
        }
        if self.page_index >= count - 2 {
            return (count - PAGE_WINDOW..count).collect();
        }
        (self.page_index - 2..=self.page_index + 2).collect()
    }

    pub fn can_go_back(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Clamped target index; out-of-range requests land on the last valid
    /// page instead of navigating past it.
    pub fn go_to(&self, target: usize) -> usize {
        target.min(self.page_count() - 1)
    }

    /// Changing the page size returns to the first page.
    pub fn with_limit(self, limit: usize) -> Self {
        Self {
            page_index: 0,
            limit: limit.max(1),
            total: self.total,
        }
    }

    pub fn with_total(self, total: usize) -> Self {
        let next = Self { total, ..self };
        Self {
            page_index: next.page_index.min(next.page_count() - 1),
            ..next
        }
    }
}
