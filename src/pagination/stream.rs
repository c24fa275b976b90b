//! Lazy page stream
//!
//! Turns a page-fetch function into a single sequence of items. Pages are
//! fetched strictly one at a time, only when the caller pulls past the end
//! of the current buffer.

use super::types::{next_request, Page, PageRequest};
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use futures::{FutureExt, Stream};
use std::collections::VecDeque;
use std::future::Future;
use tokio_util::sync::CancellationToken;

type FetchFn<T> = Box<dyn FnMut(PageRequest) -> BoxFuture<'static, Result<Page<T>>> + Send>;

/// An async item stream over a paginated endpoint
///
/// Owns all its state, so there are no lifetime parameters. Restarting
/// means building a new stream; nothing is checkpointed.
pub struct PageStream<T> {
    fetch: FetchFn<T>,
    request: Option<PageRequest>,
    buffer: VecDeque<T>,
    pages_fetched: u32,
    cancel: Option<CancellationToken>,
}

impl<T: Send + 'static> PageStream<T> {
    /// Create a stream starting at `start`
    pub fn new<F, Fut>(mut fetch: F, start: PageRequest) -> Self
    where
        F: FnMut(PageRequest) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    {
        Self {
            fetch: Box::new(move |request| fetch(request).boxed()),
            request: Some(PageRequest::new(start.offset(), start.page_size())),
            buffer: VecDeque::new(),
            pages_fetched: 0,
            cancel: None,
        }
    }

    /// Stop fetching once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Number of fetch calls issued so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Whether every page has been fetched
    pub fn is_exhausted(&self) -> bool {
        self.request.is_none()
    }

    /// Fetch the next individual item, requesting new pages as needed.
    ///
    /// Returns `Ok(None)` when all pages have been exhausted. After an
    /// error the stream is finished.
    pub async fn next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.request.is_none() {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
    }

    /// Fetch the next full page.
    ///
    /// Items already buffered by [`next`](Self::next) are returned first
    /// as a (partial) page.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>> {
        if self.buffer.is_empty() {
            if self.request.is_none() {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
        if self.buffer.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.buffer.drain(..).collect()))
    }

    /// Collect all remaining items into a `Vec`.
    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while let Some(item) = self.next().await? {
            all.push(item);
        }
        Ok(all)
    }

    /// Adapt into a [`futures::Stream`]; ends after the first error
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        futures::stream::try_unfold(self, |mut stream| async move {
            Ok::<_, Error>(stream.next().await?.map(|item| (item, stream)))
        })
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let Some(request) = self.request.take() else {
            return Ok(());
        };

        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        self.pages_fetched += 1;
        let fetch = (self.fetch)(request);
        let page = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                page = fetch => page,
            },
            None => fetch.await,
        }?;

        tracing::trace!(
            offset = request.offset(),
            page_size = request.page_size(),
            returned = page.items.len(),
            total = ?page.total,
            "page fetched"
        );

        self.request = next_request(request, page.items.len(), page.total);
        self.buffer.extend(page.items);
        Ok(())
    }
}

impl<T> std::fmt::Debug for PageStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStream")
            .field("request", &self.request)
            .field("buffered", &self.buffer.len())
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
