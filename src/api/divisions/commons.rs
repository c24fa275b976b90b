//! Commons votes API (`commonsvotes-api.parliament.uk`)

use super::{DivisionDocument, DivisionSearch, ParamNames};
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient};
use crate::pagination::{PageStream, PaginationStyle};
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle =
    PaginationStyle::skip_take("queryParameters.skip", "queryParameters.take");

const SEARCH: Endpoint =
    Endpoint::get("commons_divisions.search", "/divisions.json/search").paged(PAGING);
const GET: Endpoint = Endpoint::get("commons_divisions.get", "/division/{}.json");
const TOTAL: Endpoint = Endpoint::get(
    "commons_divisions.total_results",
    "/divisions.json/searchTotalResults",
);

pub(super) const PARAMS: ParamNames = ParamNames {
    search_term: "queryParameters.searchTerm",
    member_id: "queryParameters.memberId",
    start_date: "queryParameters.startDate",
    end_date: "queryParameters.endDate",
    division_number: "queryParameters.divisionNumber",
};

/// Client for Commons divisions
#[derive(Debug, Clone)]
pub struct CommonsDivisionsClient {
    service: ServiceClient,
}

impl CommonsDivisionsClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn search(&self, search: &DivisionSearch) -> Result<Vec<DivisionDocument>> {
        self.service
            .invoke_page(&SEARCH, &[], search.query(&PARAMS), search.page)
            .await
    }

    pub fn search_all(&self, search: &DivisionSearch) -> PageStream<DivisionDocument> {
        self.service.paginate::<Vec<DivisionDocument>>(
            SEARCH,
            Vec::new(),
            search.query(&PARAMS),
            search.page,
        )
    }

    pub async fn get(&self, id: u32) -> Result<DivisionDocument> {
        self.service
            .invoke(&GET, &[&id.to_string()], &Query::new())
            .await
    }

    /// Number of divisions matching `search` (paging is ignored)
    pub async fn total_results(&self, search: &DivisionSearch) -> Result<u64> {
        self.service
            .invoke(&TOTAL, &[], &search.query(&PARAMS))
            .await
    }
}
