//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::http::Query;
use futures::future::{ready, Ready};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use test_case::test_case;
use tokio_util::sync::CancellationToken;

/// A deterministic source of `total_items` sequential numbers
fn numbers(
    total_items: u32,
    report_total: bool,
) -> impl FnMut(PageRequest) -> Ready<crate::Result<Page<u32>>> + Send + 'static {
    move |request| {
        let start = request.offset().min(total_items);
        let end = request
            .offset()
            .saturating_add(request.page_size())
            .min(total_items);
        let items: Vec<u32> = (start..end).collect();
        let page = if report_total {
            Page::with_total(items, u64::from(total_items))
        } else {
            Page::new(items)
        };
        ready(Ok(page))
    }
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_page_request_clamps_zero_size() {
    let request = PageRequest::new(10, 0);
    assert_eq!(request.page_size(), 1);
}

#[test]
fn test_page_request_page_number() {
    assert_eq!(PageRequest::new(0, 50).page_number(1), 1);
    assert_eq!(PageRequest::new(50, 50).page_number(1), 2);
    assert_eq!(PageRequest::new(100, 50).page_number(0), 2);
}

#[test]
fn test_page_request_advance() {
    let next = PageRequest::new(20, 20).advance();
    assert_eq!(next, Some(PageRequest::new(40, 20)));
}

#[test]
fn test_page_request_advance_stops_at_overflow() {
    let last = PageRequest::new(u32::MAX - 5, 10);
    assert_eq!(last.advance(), None);
    assert_eq!(next_request(last, 10, None), None);
}

#[test]
fn test_zero_size_never_reaches_the_wire() {
    let request = PageRequest::new(40, 0);
    assert_eq!(request.page_number(1), 41);

    let mut query = Query::new();
    PaginationStyle::skip_take("skip", "take").apply(request, &mut query);
    assert_eq!(query.get("take"), Some("1"));
    assert_eq!(query.get("skip"), Some("40"));
}

// ============================================================================
// Termination Policy Tests
// ============================================================================

#[test]
fn test_next_request_empty_page_stops() {
    assert_eq!(next_request(PageRequest::first(10), 0, None), None);
    assert_eq!(next_request(PageRequest::first(10), 0, Some(100)), None);
}

#[test]
fn test_next_request_short_page_stops() {
    assert_eq!(next_request(PageRequest::first(10), 7, None), None);
    // total claims more, but the short page wins
    assert_eq!(next_request(PageRequest::first(10), 7, Some(100)), None);
}

#[test]
fn test_next_request_total_reached_stops() {
    assert_eq!(next_request(PageRequest::new(10, 10), 10, Some(20)), None);
    assert_eq!(
        next_request(PageRequest::new(10, 10), 10, Some(25)),
        Some(PageRequest::new(20, 10))
    );
}

#[test]
fn test_next_request_full_page_without_total_continues() {
    assert_eq!(
        next_request(PageRequest::first(10), 10, None),
        Some(PageRequest::new(10, 10))
    );
}

// ============================================================================
// PaginationStyle Tests
// ============================================================================

#[test]
fn test_style_skip_take() {
    let style = PaginationStyle::skip_take("skip", "take");
    let mut query = Query::new().with("Name", "Smith").with("skip", 999);
    style.apply(PageRequest::new(40, 20), &mut query);

    assert_eq!(query.get("skip"), Some("40"));
    assert_eq!(query.get("take"), Some("20"));
    assert_eq!(query.get("Name"), Some("Smith"));
    assert_eq!(query.len(), 3, "existing skip is replaced, not repeated");
}

#[test]
fn test_style_page_number() {
    let style = PaginationStyle::page_number("page", 1);
    let mut query = Query::new();
    style.apply(PageRequest::new(100, 50), &mut query);
    assert_eq!(query.get("page"), Some("3"));
    assert_eq!(query.len(), 1);

    let sized = PaginationStyle::PageNumber {
        page: "page",
        size: Some("pageSize"),
        first_page: 0,
    };
    let mut query = Query::new();
    sized.apply(PageRequest::new(20, 10), &mut query);
    assert_eq!(query.get("page"), Some("2"));
    assert_eq!(query.get("pageSize"), Some("10"));
}

#[test]
fn test_style_unpaged() {
    let style = PaginationStyle::Unpaged;
    assert!(!style.is_paged());
    let mut query = Query::new();
    style.apply(PageRequest::first(10), &mut query);
    assert!(query.is_empty());
}

// ============================================================================
// PageStream Tests
// ============================================================================

#[test_case(25, 10 ; "partial final page")]
#[test_case(20, 10 ; "empty final page")]
#[test_case(1, 1 ; "single item pages")]
#[test_case(0, 5 ; "no items")]
#[test_case(7, 50 ; "one short page")]
#[tokio::test]
async fn test_exhaustion_yields_all_items(total: u32, page_size: u32) {
    let mut stream = PageStream::new(numbers(total, false), PageRequest::first(page_size));

    let mut seen = Vec::new();
    while let Some(item) = stream.next().await.unwrap() {
        seen.push(item);
    }

    assert_eq!(seen, (0..total).collect::<Vec<_>>());
    // every full page, plus the short or empty page that ends the sequence
    assert_eq!(stream.pages_fetched(), total / page_size + 1);
    assert!(stream.is_exhausted());
}

#[tokio::test]
async fn test_exhaustion_with_total_skips_empty_page() {
    let mut stream = PageStream::new(numbers(20, true), PageRequest::first(10));
    let mut count = 0;
    while stream.next().await.unwrap().is_some() {
        count += 1;
    }
    assert_eq!(count, 20);
    assert_eq!(stream.pages_fetched(), 2);
}

#[tokio::test]
async fn test_short_page_stops_after_one_fetch() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let stream = PageStream::new(
        move |_request: PageRequest| {
            counter.fetch_add(1, Ordering::SeqCst);
            ready(Ok::<_, Error>(Page::new((0..7).collect::<Vec<u32>>())))
        },
        PageRequest::first(10),
    );

    let items = stream.collect().await.unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_total_based_termination() {
    let mut stream = PageStream::new(numbers(25, true), PageRequest::first(10));
    let mut items = Vec::new();
    while let Some(item) = stream.next().await.unwrap() {
        items.push(item);
    }
    assert_eq!(items.len(), 25);
    assert_eq!(stream.pages_fetched(), 3);
}

#[tokio::test]
async fn test_silently_capped_page_size_terminates() {
    // Server ignores the requested size and never returns more than 20
    let stream = PageStream::new(
        |request: PageRequest| {
            let end = request.offset() + request.page_size().min(20);
            ready(Ok::<_, Error>(Page::with_total(
                (request.offset()..end).collect::<Vec<u32>>(),
                1000,
            )))
        },
        PageRequest::first(50),
    );

    let items = stream.collect().await.unwrap();
    assert_eq!(items, (0..20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_early_stop_bounds_fetches() {
    let mut stream = PageStream::new(numbers(1000, false), PageRequest::first(10));

    for expected in 0..15 {
        assert_eq!(stream.next().await.unwrap(), Some(expected));
    }
    assert_eq!(stream.pages_fetched(), 2);
    drop(stream);
}

#[tokio::test]
async fn test_nothing_fetched_until_pulled() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let stream = PageStream::new(
        move |_request: PageRequest| {
            counter.fetch_add(1, Ordering::SeqCst);
            ready(Ok::<_, Error>(Page::new(vec![1u32])))
        },
        PageRequest::first(10),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    drop(stream);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_collect_is_repeatable() {
    let first = PageStream::new(numbers(33, false), PageRequest::first(10))
        .collect()
        .await
        .unwrap();
    let second = PageStream::new(numbers(33, false), PageRequest::first(10))
        .collect()
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 33);
}

#[tokio::test]
async fn test_initial_offset() {
    let items = PageStream::new(numbers(30, true), PageRequest::new(25, 10))
        .collect()
        .await
        .unwrap();
    assert_eq!(items, (25..30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_error_surfaces_at_failing_page() {
    let stream_source = |request: PageRequest| {
        if request.offset() == 0 {
            ready(Ok(Page::new(vec![1u32, 2])))
        } else {
            ready(Err(Error::http_status(500, "boom")))
        }
    };
    let mut stream = PageStream::new(stream_source, PageRequest::first(2));

    assert_eq!(stream.next().await.unwrap(), Some(1));
    assert_eq!(stream.next().await.unwrap(), Some(2));
    let err = stream.next().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    // fused after the error
    assert_eq!(stream.next().await.unwrap(), None);
    assert_eq!(stream.pages_fetched(), 2);
}

#[tokio::test]
async fn test_cancellation_stops_fetching() {
    let token = CancellationToken::new();
    let mut stream =
        PageStream::new(numbers(100, false), PageRequest::first(3)).with_cancellation(token.clone());

    assert_eq!(stream.next().await.unwrap(), Some(0));
    token.cancel();

    // buffered items still drain
    assert_eq!(stream.next().await.unwrap(), Some(1));
    assert_eq!(stream.next().await.unwrap(), Some(2));
    assert!(stream.next().await.unwrap_err().is_cancelled());
    assert_eq!(stream.pages_fetched(), 1);
    assert_eq!(stream.next().await.unwrap(), None);
}

#[tokio::test]
async fn test_next_page() {
    let mut stream = PageStream::new(numbers(5, false), PageRequest::first(2));

    assert_eq!(stream.next_page().await.unwrap(), Some(vec![0, 1]));
    assert_eq!(stream.next().await.unwrap(), Some(2));
    assert_eq!(stream.next_page().await.unwrap(), Some(vec![3]));
    assert_eq!(stream.next_page().await.unwrap(), Some(vec![4]));
    assert_eq!(stream.next_page().await.unwrap(), None);
}

#[tokio::test]
async fn test_into_stream() {
    let items: Vec<u32> = PageStream::new(numbers(12, true), PageRequest::first(5))
        .into_stream()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(items, (0..12).collect::<Vec<_>>());
}

#[test]
fn test_page_map_keeps_total() {
    let page = Page::with_total(vec![1, 2, 3], 10).map(|n| n * 2);
    assert_eq!(page.items, vec![2, 4, 6]);
    assert_eq!(page.total, Some(10));
    assert_eq!(page.len(), 3);
}

#[test]
fn test_vec_is_paginated() {
    let page = vec!["a", "b"].into_page(&PageRequest::first(2));
    assert_eq!(page.items, vec!["a", "b"]);
    assert!(page.total.is_none());
}
