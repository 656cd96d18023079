/// Maximum page size accepted by list endpoints.
pub const MAX_LIMIT: u64 = 100;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Clamps the page to at least 1 and the limit to `1..=MAX_LIMIT`.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Zero-based page index as used by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}
