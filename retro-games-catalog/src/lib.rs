//! Retro games catalog data model, field validation, and pagination arithmetic.
//!
//! This crate has no database or I/O dependencies. Both front doors (CLI and
//! HTTP API) validate raw input here before handing an [`EntryFields`] to
//! `retro-games-db` for persistence.

pub mod pagination;
pub mod types;
pub mod validate;

pub use pagination::{MAX_API_PAGE_SIZE, PageRequest, Paginated, PaginationError, total_pages};
pub use types::*;
pub use validate::{
    ValidationError, check_date, parse_year, validate_condition, validate_date, validate_platform,
    validate_title, validate_year,
};
