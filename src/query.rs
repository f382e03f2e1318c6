//! Domain queries and pagination
//!
//! A [`ContentQuery`] describes what the view layer wants: filters, a sort
//! key, and a page window. The service resolves it into a [`Page`] of records
//! plus [`Pagination`] metadata. Totals are computed client-side from a
//! bounded scan, so they are approximations capped at the scan bound.

use serde::{Deserialize, Serialize};

/// Default page size for listings
pub const DEFAULT_PAGE_LIMIT: u32 = 12;

/// Largest page size a caller may request
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Sort keys understood by the aggregation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// By rollup-derived popularity score, highest first
    Popular,
    /// By last update, newest first
    Recent,
    /// By display name, case-insensitive
    Alphabetical,
}

impl SortKey {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "popular" => Some(Self::Popular),
            "recent" => Some(Self::Recent),
            "alphabetical" | "name" => Some(Self::Alphabetical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Recent => "recent",
            Self::Alphabetical => "alphabetical",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Popular
    }
}

/// A domain query: filters, sort, and page window, all defaulted
#[derive(Debug, Clone)]
pub struct ContentQuery {
    /// Restrict to records of this culture (by id)
    pub culture: Option<String>,
    /// Restrict to this category (meaning varies by content type)
    pub category: Option<String>,
    /// Restrict to records in this language
    pub language: Option<String>,
    /// Case-insensitive substring search over the record's text fields
    pub search: Option<String>,
    /// All of these tags must be present
    pub tags: Vec<String>,
    /// Sort key
    pub sort: SortKey,
    /// 1-based page number
    pub page: u32,
    /// Page size, clamped to `1..=MAX_PAGE_LIMIT`
    pub limit: u32,
}

impl Default for ContentQuery {
    fn default() -> Self {
        Self {
            culture: None,
            category: None,
            language: None,
            search: None,
            tags: Vec::new(),
            sort: SortKey::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ContentQuery {
    /// Create a query with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a culture
    pub fn for_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Restrict to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Add a search term
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Require a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the sort key
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page number (1-based)
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Effective page window after defaulting and clamping
    pub fn window(&self) -> (u32, u32) {
        let page = self.page.max(1);
        let limit = self.limit.clamp(1, MAX_PAGE_LIMIT);
        (page, limit)
    }
}

/// Pagination metadata for a page of records.
///
/// `total` counts filtered records within the scan bound, not the whole
/// network; treat it as an approximation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Page size used
    pub limit: u32,
    /// Filtered record count (bounded by the scan)
    pub total: u64,
    /// ceil(total / limit)
    pub total_pages: u32,
    /// Whether a later page exists
    pub has_next: bool,
    /// Whether an earlier page exists
    pub has_prev: bool,
}

impl Pagination {
    /// Compute metadata for a page window over `total` records
    pub fn compute(total: u64, page: u32, limit: u32) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit as u64) as u32;
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Where a page's records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSource {
    /// Decoded from live network events
    Live,
    /// Served from the static fallback catalog
    Fallback,
}

/// A page of typed records plus pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub source: PageSource,
}

impl<T> Page<T> {
    /// Slice the requested window out of filtered, sorted records
    pub fn from_records(records: Vec<T>, page: u32, limit: u32, source: PageSource) -> Self {
        let pagination = Pagination::compute(records.len() as u64, page, limit);
        let items = records
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .collect();
        Self {
            items,
            pagination,
            source,
        }
    }

    /// Whether this page was served from the fallback catalog
    pub fn is_fallback(&self) -> bool {
        self.source == PageSource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_ceiling() {
        let p = Pagination::compute(7, 1, 3);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(!p.has_prev);

        let p = Pagination::compute(6, 2, 3);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::compute(0, 1, 12);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_page_window_slicing() {
        let page = Page::from_records((0..10).collect::<Vec<_>>(), 2, 4, PageSource::Live);
        assert_eq!(page.items, vec![4, 5, 6, 7]);
        assert_eq!(page.pagination.total, 10);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next);
    }

    #[test]
    fn test_query_window_clamps() {
        let query = ContentQuery::new().with_page(0).with_limit(500);
        assert_eq!(query.window(), (1, MAX_PAGE_LIMIT));

        let query = ContentQuery::new();
        assert_eq!(query.window(), (1, DEFAULT_PAGE_LIMIT));
    }
}
