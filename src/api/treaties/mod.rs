//! Treaties API (`treaties-api.parliament.uk`)
//!
//! Treaties laid before Parliament under the Constitutional Reform and
//! Governance Act 2010, and their scrutiny steps.

mod types;

pub use types::{BusinessItem, GovernmentOrganisation, Treaty};

use super::{ItemsPage, ValueItemsPage};
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use crate::types::{House, ValueWrapper};
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("Skip", "Take");

const SEARCH: Endpoint = Endpoint::get("treaties.search", "/Treaty").paged(PAGING);
const GET: Endpoint = Endpoint::get("treaties.get", "/Treaty/{}");
const BUSINESS_ITEMS: Endpoint = Endpoint::get("treaties.business_items", "/Treaty/{}/BusinessItems");
const GOVERNMENT_ORGANISATIONS: Endpoint =
    Endpoint::get("treaties.government_organisations", "/GovernmentOrganisation");

/// Filters for `/Treaty`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatyQuery {
    pub search_text: Option<String>,
    pub government_organisation_id: Option<u32>,
    pub series: Option<String>,
    pub parliamentary_process: Option<String>,
    pub debate_scheduled: Option<bool>,
    pub house: Option<House>,
    pub page: PageRequest,
}

impl ToQuery for TreatyQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("SearchText", self.search_text.as_deref())
            .push_opt("GovernmentOrganisationId", self.government_organisation_id)
            .push_opt("Series", self.series.as_deref())
            .push_opt("ParliamentaryProcess", self.parliamentary_process.as_deref())
            .push_opt("DebateScheduled", self.debate_scheduled)
            .push_opt("House", self.house);
        query
    }
}

/// Client for the treaties API
#[derive(Debug, Clone)]
pub struct TreatiesClient {
    service: ServiceClient,
}

impl TreatiesClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn search(&self, query: &TreatyQuery) -> Result<ItemsPage<ValueWrapper<Treaty>>> {
        self.service
            .invoke_page(&SEARCH, &[], query.to_query(), query.page)
            .await
    }

    pub fn search_all(&self, query: &TreatyQuery) -> PageStream<Treaty> {
        self.service
            .paginate::<ValueItemsPage<Treaty>>(SEARCH, Vec::new(), query.to_query(), query.page)
    }

    pub async fn get(&self, id: &str) -> Result<Treaty> {
        let treaty: ValueWrapper<Treaty> = self.service.invoke(&GET, &[id], &Query::new()).await?;
        Ok(treaty.into_value())
    }

    /// Every scrutiny step of a treaty; the API returns them in one response
    pub async fn business_items(&self, id: &str) -> Result<Vec<BusinessItem>> {
        let items: ItemsPage<ValueWrapper<BusinessItem>> = self
            .service
            .invoke(&BUSINESS_ITEMS, &[id], &Query::new())
            .await?;
        Ok(items.into_values())
    }

    pub async fn government_organisations(&self) -> Result<Vec<GovernmentOrganisation>> {
        let items: ItemsPage<ValueWrapper<GovernmentOrganisation>> = self
            .service
            .invoke(&GOVERNMENT_ORGANISATIONS, &[], &Query::new())
            .await?;
        Ok(items.into_values())
    }
}
