//! Page selection for listings.
//!
//! Invalid or out-of-range page tokens never fail: a token that is not an
//! integer selects the first page, an integer outside `1..=num_pages` selects
//! the last page.

use serde::Serialize;

/// Number of posts shown per listing page.
pub const POSTS_PER_PAGE: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: i64,
    count: i64,
}

impl Paginator {
    pub fn new(count: i64, per_page: i64) -> Self {
        Self {
            per_page: per_page.max(1),
            count: count.max(0),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Always at least one page, even when there is nothing to show.
    pub fn num_pages(&self) -> i64 {
        if self.count == 0 {
            1
        } else {
            (self.count + self.per_page - 1) / self.per_page
        }
    }

    pub fn resolve(&self, token: Option<&str>) -> i64 {
        let Some(raw) = token else {
            return 1;
        };
        match raw.trim().parse::<i64>() {
            Err(_) => 1,
            Ok(n) if n < 1 || n > self.num_pages() => self.num_pages(),
            Ok(n) => n,
        }
    }

    /// `(limit, offset)` of the given page, for the storage query.
    pub fn window(&self, number: i64) -> (i64, i64) {
        (self.per_page, (number - 1) * self.per_page)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: i64, paginator: &Paginator) -> Self {
        Self {
            items,
            number,
            num_pages: paginator.num_pages(),
            count: paginator.count(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page_number(&self) -> Option<i64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_page_number(&self) -> Option<i64> {
        self.has_next().then(|| self.number + 1)
    }
}
