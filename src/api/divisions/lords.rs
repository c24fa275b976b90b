//! Lords votes API (`lordsvotes-api.parliament.uk`)

use super::{DivisionDocument, DivisionSearch, ParamNames};
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient};
use crate::pagination::{PageStream, PaginationStyle};
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("skip", "take");

const SEARCH: Endpoint = Endpoint::get("lords_divisions.search", "/Divisions/search").paged(PAGING);
const GET: Endpoint = Endpoint::get("lords_divisions.get", "/Divisions/{}");
const TOTAL: Endpoint = Endpoint::get(
    "lords_divisions.total_results",
    "/Divisions/searchTotalResults",
);

pub(super) const PARAMS: ParamNames = ParamNames {
    search_term: "SearchTerm",
    member_id: "MemberId",
    start_date: "StartDate",
    end_date: "EndDate",
    division_number: "DivisionNumber",
};

/// Client for Lords divisions
#[derive(Debug, Clone)]
pub struct LordsDivisionsClient {
    service: ServiceClient,
}

impl LordsDivisionsClient {
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

    pub async fn total_results(&self, search: &DivisionSearch) -> Result<u64> {
        self.service
            .invoke(&TOTAL, &[], &search.query(&PARAMS))
            .await
    }
}
