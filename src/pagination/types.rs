//! Pagination types and traits
//!
//! Defines the page cursor, the page result, the wire projection of the
//! cursor and the termination policy shared by every paged endpoint.

use crate::http::Query;

/// Position and size of one page request
///
/// Every API is driven through an offset cursor. The [`PaginationStyle`]
/// of an endpoint decides how it appears on the wire. The page size is
/// always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    offset: u32,
    page_size: u32,
}

impl PageRequest {
    /// Create a page request; a zero page size is raised to 1
    pub fn new(offset: u32, page_size: u32) -> Self {
        Self {
            offset,
            page_size: page_size.max(1),
        }
    }

    /// Number of items to skip
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of items requested
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// First page of the given size
    pub fn first(page_size: u32) -> Self {
        Self::new(0, page_size)
    }

    /// Page number for page-numbered APIs
    pub fn page_number(&self, first_page: u32) -> u32 {
        first_page.saturating_add(self.offset / self.page_size)
    }

    /// The request that follows this one, or `None` once the offset
    /// would overflow
    pub fn advance(&self) -> Option<Self> {
        Some(Self {
            offset: self.offset.checked_add(self.page_size)?,
            page_size: self.page_size,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(20)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Total result count, when the API reports one
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// A page without a reported total
    pub fn new(items: Vec<T>) -> Self {
        Self { items, total: None }
    }

    /// A page with a reported total
    pub fn with_total(items: Vec<T>, total: u64) -> Self {
        Self {
            items,
            total: Some(total),
        }
    }

    /// Map every item, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Response envelopes that carry one page of items
pub trait Paginated {
    /// The individual item type within a page
    type Item;

    /// Unwrap the envelope; `request` is the request that produced it
    fn into_page(self, request: &PageRequest) -> Page<Self::Item>;
}

/// Flat JSON arrays: no total, termination by count alone
impl<T> Paginated for Vec<T> {
    type Item = T;

    fn into_page(self, _request: &PageRequest) -> Page<T> {
        Page::new(self)
    }
}

/// How an endpoint accepts pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationStyle {
    /// Everything comes back in one response
    #[default]
    Unpaged,

    /// Offset/limit parameters (e.g. `skip=40&take=20`)
    SkipTake {
        /// Query parameter name for the offset
        skip: &'static str,
        /// Query parameter name for the page size
        take: &'static str,
    },

    /// Page number parameters (e.g. `page=3`)
    PageNumber {
        /// Query parameter name for the page number
        page: &'static str,
        /// Query parameter name for the page size, if the API accepts one
        size: Option<&'static str>,
        /// Number of the first page (usually 1)
        first_page: u32,
    },
}

impl PaginationStyle {
    /// Skip/take pagination with the given parameter names
    pub const fn skip_take(skip: &'static str, take: &'static str) -> Self {
        Self::SkipTake { skip, take }
    }

    /// Page-number pagination with no page-size parameter
    pub const fn page_number(page: &'static str, first_page: u32) -> Self {
        Self::PageNumber {
            page,
            size: None,
            first_page,
        }
    }

    /// Whether the endpoint supports paging at all
    pub fn is_paged(&self) -> bool {
        !matches!(self, Self::Unpaged)
    }

    /// Write the request's parameters into `query`, replacing any present
    pub fn apply(&self, request: PageRequest, query: &mut Query) {
        match *self {
            Self::Unpaged => {}
            Self::SkipTake { skip, take } => {
                query.set(skip, request.offset());
                query.set(take, request.page_size());
            }
            Self::PageNumber {
                page,
                size,
                first_page,
            } => {
                query.set(page, request.page_number(first_page));
                if let Some(size) = size {
                    query.set(size, request.page_size());
                }
            }
        }
    }
}

/// Termination policy, evaluated after each fetch
///
/// Returns the next request, or `None` when the page just fetched was the
/// last one. `returned` is the number of items actually received, so an
/// API that silently caps the page size ends the sequence instead of
/// looping.
pub fn next_request(request: PageRequest, returned: usize, total: Option<u64>) -> Option<PageRequest> {
    if returned == 0 || returned < request.page_size() as usize {
        return None;
    }
    if let Some(total) = total {
        if u64::from(request.offset()) + u64::from(request.page_size()) >= total {
            return None;
        }
    }
    request.advance()
}
