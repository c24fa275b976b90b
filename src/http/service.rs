//! One sub-API's view of the shared HTTP client
//!
//! A [`ServiceClient`] is the shared [`HttpClient`] bound to one base URL
//! and, optionally, a cancellation token. Domain clients wrap one and
//! route every call through [`ServiceClient::invoke`] or
//! [`ServiceClient::paginate`].

use super::client::HttpClient;
use super::endpoint::{Endpoint, Query};
use crate::error::Result;
use crate::pagination::{PageRequest, PageStream, Paginated};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The shared HTTP client bound to one base URL
#[derive(Clone)]
pub struct ServiceClient {
    http: Arc<HttpClient>,
    service: &'static str,
    base_url: Arc<str>,
    cancel: Option<CancellationToken>,
}

impl ServiceClient {
    pub fn new(http: Arc<HttpClient>, service: &'static str, base_url: &str) -> Self {
        Self {
            http,
            service,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            cancel: None,
        }
    }

    /// Observe `token` on every call made through this client
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    /// Full URL for an endpoint and its path arguments
    pub fn url_for(&self, endpoint: &Endpoint, args: &[&str]) -> Result<String> {
        let path = endpoint.render(args)?;
        Ok(format!("{}{}", self.base_url, path))
    }

    /// Call an endpoint and decode its JSON response
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        args: &[&str],
        query: &Query,
    ) -> Result<T> {
        let url = self.url_for(endpoint, args)?;
        debug!(service = self.service, endpoint = endpoint.name, "invoke");
        self.http.get_json(&url, query, self.cancel.as_ref()).await
    }

    /// Call a paged endpoint for a single page
    pub async fn invoke_page<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        args: &[&str],
        mut query: Query,
        request: PageRequest,
    ) -> Result<T> {
        endpoint.paging.apply(request, &mut query);
        self.invoke(endpoint, args, &query).await
    }

    /// Stream every item of a paged endpoint
    ///
    /// `query` carries the filters; the endpoint's pagination style adds
    /// the paging parameters for each request.
    pub fn paginate<P>(
        &self,
        endpoint: Endpoint,
        args: Vec<String>,
        query: Query,
        start: PageRequest,
    ) -> PageStream<P::Item>
    where
        P: Paginated + DeserializeOwned + Send + 'static,
        P::Item: Send + 'static,
    {
        debug_assert!(
            endpoint.paging.is_paged(),
            "{} does not support pagination",
            endpoint.name
        );

        let client = self.clone();
        let stream = PageStream::new(
            move |request: PageRequest| {
                let client = client.clone();
                let args = args.clone();
                let mut query = query.clone();
                endpoint.paging.apply(request, &mut query);
                async move {
                    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
                    let page: P = client.invoke(&endpoint, &arg_refs, &query).await?;
                    Ok(page.into_page(&request))
                }
            },
            start,
        );

        match &self.cancel {
            Some(token) => stream.with_cancellation(token.clone()),
            None => stream,
        }
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .field("base_url", &self.base_url)
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}
