//! Pagination module
//!
//! Supports: skip/take offsets, page numbers, and unpaged endpoints
//!
//! # Overview
//!
//! Every paged endpoint is driven through one offset cursor
//! ([`PageRequest`]). The endpoint's [`PaginationStyle`] projects the
//! cursor onto its query string, its response envelope implements
//! [`Paginated`], and [`PageStream`] turns the whole thing into one lazy
//! sequence of items.

mod stream;
mod types;

pub use stream::PageStream;
pub use types::{next_request, Page, PageRequest, Paginated, PaginationStyle};

#[cfg(test)]
mod tests;
