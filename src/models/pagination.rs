use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10_000;

/// Raw `page` / `per_page` query values. Values that do not parse as integers
/// fall back to the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Keeps the caller's values as sent; the page number is echoed back in the
    /// attachment name.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// `(page - 1) * per_page`, floored at zero.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page).max(0)
    }

    /// A negative limit is passed through; SQLite reads it as "no limit".
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

impl From<PaginationQuery> for Pagination {
    fn from(query: PaginationQuery) -> Self {
        let parse = |value: Option<String>, default: i64| {
            value
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(default)
        };

        Pagination::new(
            parse(query.page, DEFAULT_PAGE),
            parse(query.per_page, DEFAULT_PER_PAGE),
        )
    }
}
