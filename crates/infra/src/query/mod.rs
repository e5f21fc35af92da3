//! Read-side queries over store collections.
//!
//! Pagination primitives are shared; `sku` holds the product SKU listing
//! (filter, sort, paginate).

use serde::Serialize;

use categorydesk_core::{DomainError, DomainResult};

pub mod sku;

pub use sku::{SkuFilter, SkuQuery, SkuSort, SkuSortField, SortOrder};

/// 1-based page request. Only `new` and `Default` build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageRequest {
    /// `page` must be at least 1 and `limit` greater than 0.
    pub fn new(page: u32, limit: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::validation("page", "page must be at least 1"));
        }
        if limit == 0 {
            return Err(DomainError::validation("limit", "limit must be greater than 0"));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.limit as usize)
    }
}

/// One page of results plus the size of the whole (filtered) result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    /// Slice `items` according to `request`. Out-of-range pages are empty,
    /// not an error.
    pub fn paginate<I>(items: I, request: PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let total = items.len() as u64;
        let data = items
            .skip(request.offset())
            .take(request.limit() as usize)
            .collect();
        Self { data, total }
    }
}
