//! HTTP front door for the retro games catalog.
//!
//! ## Routes
//!
//! - `GET /`: service name and version.
//! - `POST /games`: create an entry; `201` with the stored entry.
//! - `GET /games?page=&page_size=`: paged listing, newest release first.
//! - `GET /games/:id`: fetch one entry.
//! - `PUT /games/:id`: replace every field of an entry.
//! - `DELETE /games/:id`: remove an entry; `204` on success.
//!
//! Errors are returned as `{ "detail": "<message>" }`.

pub mod error;
pub mod extract;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, serve};
