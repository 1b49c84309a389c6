//! Page arithmetic for listing entries.
//!
//! Pages are 1-indexed. A page past the end is not an error; the store simply
//! returns no rows for it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest page size accepted by the HTTP list endpoint.
pub const MAX_API_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must be at least 1 (got {0})")]
    InvalidPage(u32),
    #[error("page_size must be at least 1 (got {0})")]
    InvalidPageSize(u32),
    #[error("page_size must be at most {max} (got {got})")]
    PageSizeTooLarge { got: u32, max: u32 },
}

/// A validated (page, page_size) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage(page));
        }
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }
        Ok(Self { page, page_size })
    }

    /// Like [`PageRequest::new`], but also caps the page size.
    pub fn bounded(page: u32, page_size: u32, max: u32) -> Result<Self, PaginationError> {
        let request = Self::new(page, page_size)?;
        if page_size > max {
            return Err(PaginationError::PageSizeTooLarge {
                got: page_size,
                max,
            });
        }
        Ok(request)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// Number of pages needed to show `total_count` rows, i.e. `ceil(total / size)`.
pub fn total_pages(total_count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size))
}

/// One page of results plus the totals a client needs to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub entries: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(entries: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            entries,
            total,
            page: request.page(),
            page_size: request.page_size(),
            total_pages: total_pages(total, request.page_size()),
        }
    }
}
