//! Registered interests API (`interests-api.parliament.uk`)
//!
//! The Register of Members' Financial Interests.

mod types;

pub use types::{Category, Interest, InterestField, InterestMember, Register};

use super::ItemsPage;
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("Skip", "Take");

const LIST: Endpoint = Endpoint::get("interests.list", "/Interests").paged(PAGING);
const GET: Endpoint = Endpoint::get("interests.get", "/Interests/{}");
const CATEGORIES: Endpoint = Endpoint::get("interests.categories", "/Categories");
const REGISTERS: Endpoint = Endpoint::get("interests.registers", "/Registers");

/// Filters for `/Interests`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestQuery {
    pub member_id: Option<u32>,
    pub category_id: Option<u32>,
    pub published_from: Option<NaiveDate>,
    pub published_to: Option<NaiveDate>,
    pub expand_child_interests: Option<bool>,
    pub page: PageRequest,
}

impl ToQuery for InterestQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("MemberId", self.member_id)
            .push_opt("CategoryId", self.category_id)
            .push_opt("PublishedFrom", self.published_from)
            .push_opt("PublishedTo", self.published_to)
            .push_opt("ExpandChildInterests", self.expand_child_interests);
        query
    }
}

/// Client for the registered interests API
#[derive(Debug, Clone)]
pub struct InterestsClient {
    service: ServiceClient,
}

impl InterestsClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn list(&self, query: &InterestQuery) -> Result<ItemsPage<Interest>> {
        self.service
            .invoke_page(&LIST, &[], query.to_query(), query.page)
            .await
    }

    pub fn list_all(&self, query: &InterestQuery) -> PageStream<Interest> {
        self.service
            .paginate::<ItemsPage<Interest>>(LIST, Vec::new(), query.to_query(), query.page)
    }

    pub async fn get(&self, id: u32) -> Result<Interest> {
        self.service
            .invoke(&GET, &[&id.to_string()], &Query::new())
            .await
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        let page: ItemsPage<Category> = self.service.invoke(&CATEGORIES, &[], &Query::new()).await?;
        Ok(page.into_items())
    }

    pub async fn registers(&self) -> Result<Vec<Register>> {
        let page: ItemsPage<Register> = self.service.invoke(&REGISTERS, &[], &Query::new()).await?;
        Ok(page.into_items())
    }
}
