//! Domain clients, one per Parliament sub-API
//!
//! Each submodule declares its endpoint table, its typed filters and its
//! response models, and exposes one cloneable client. The clients are
//! handed out by [`crate::Parliament`]; they all share one
//! [`crate::http::HttpClient`].
//!
//! The envelopes below are the list shapes several APIs have in common.

pub mod annunciator;
pub mod bills;
pub mod committees;
pub mod divisions;
pub mod erskine_may;
pub mod interests;
pub mod members;
pub mod oral_questions;
pub mod petitions;
pub mod treaties;
pub mod written_questions;

use crate::pagination::{Page, PageRequest, Paginated};
use crate::types::{Link, ValueWrapper};
use serde::{Deserialize, Serialize};

/// The `{ items, totalResults }` list envelope
///
/// Used by the members, bills, committees, interests, treaties and
/// written questions APIs. Which of the optional fields appear varies
/// per API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub items_per_page: Option<u32>,
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub take: Option<u32>,
    #[serde(default)]
    pub result_context: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl<T> ItemsPage<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> ItemsPage<ValueWrapper<T>> {
    /// Unwrap every `{ value, links }` item
    pub fn into_values(self) -> Vec<T> {
        self.items.into_iter().map(ValueWrapper::into_value).collect()
    }
}

impl<T> Paginated for ItemsPage<T> {
    type Item = T;

    fn into_page(self, _request: &PageRequest) -> Page<T> {
        Page {
            items: self.items,
            total: self.total_results,
        }
    }
}

/// [`ItemsPage`] whose items are wrapped in `{ value, links }`
///
/// Paginating over it yields the bare values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueItemsPage<T>(pub ItemsPage<ValueWrapper<T>>);

impl<T> Paginated for ValueItemsPage<T> {
    type Item = T;

    fn into_page(self, request: &PageRequest) -> Page<T> {
        self.0.into_page(request).map(ValueWrapper::into_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_items_page_into_page() {
        let page: ItemsPage<u32> = serde_json::from_value(json!({
            "items": [1, 2, 3],
            "totalResults": 12,
            "itemsPerPage": 3
        }))
        .unwrap();

        let page = page.into_page(&PageRequest::first(3));
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, Some(12));
    }

    #[test]
    fn test_value_items_page_unwraps_values() {
        let page: ValueItemsPage<String> = serde_json::from_value(json!({
            "items": [
                {"value": "a", "links": []},
                {"value": "b", "links": [{"rel": "self", "href": "/b", "method": "GET"}]}
            ],
            "totalResults": 2
        }))
        .unwrap();

        let page = page.into_page(&PageRequest::first(20));
        assert_eq!(page.items, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.total, Some(2));
    }

    #[test]
    fn test_items_page_without_total() {
        let page: ItemsPage<u32> = serde_json::from_value(json!({"items": []})).unwrap();
        assert!(page.total_results.is_none());
        assert!(page.into_items().is_empty());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::http::{HttpClient, HttpClientConfig, ServiceClient};
    use std::sync::Arc;

    /// A service client for `base_url` with the given validation mode
    pub(crate) fn service(name: &'static str, base_url: &str, strict: bool) -> ServiceClient {
        let config = HttpClientConfig::builder()
            .strict_validation(strict)
            .build();
        let http = HttpClient::with_config(config).unwrap();
        ServiceClient::new(Arc::new(http), name, base_url)
    }
}
