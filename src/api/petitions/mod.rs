//! Petitions API (`petition.parliament.uk`)
//!
//! Open and archived petitions. The site pages by page number with a
//! fixed page size of 50.

mod types;

pub use types::{
    ConstituencySignatures, CountrySignatures, Debate, Department, DocumentLinks,
    GovernmentResponse, Petition, PetitionAttributes, PetitionDocument, PetitionList,
    PetitionState, RegionSignatures, Rejection, ResourceLinks,
};

use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use tokio_util::sync::CancellationToken;

/// Petitions per page; the site does not accept a page size
pub const PAGE_SIZE: u32 = 50;

const PAGING: PaginationStyle = PaginationStyle::page_number("page", 1);

const LIST: Endpoint = Endpoint::get("petitions.list", "/petitions.json").paged(PAGING);
const GET: Endpoint = Endpoint::get("petitions.get", "/petitions/{}.json");
const LIST_ARCHIVED: Endpoint =
    Endpoint::get("petitions.list_archived", "/archived/petitions.json").paged(PAGING);
const GET_ARCHIVED: Endpoint = Endpoint::get("petitions.get_archived", "/archived/petitions/{}.json");

/// Path of a petition's JSON document
pub fn petition_path(id: u64) -> String {
    format!("/petitions/{id}.json")
}

/// Filters for petition listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetitionQuery {
    pub state: Option<PetitionState>,
    /// Free-text search
    pub search: Option<String>,
    /// Page to fetch (or start streaming from); 1 when unset
    pub page: Option<u32>,
}

impl PetitionQuery {
    fn start(&self) -> PageRequest {
        let page = self.page.unwrap_or(1).max(1);
        PageRequest::new((page - 1).saturating_mul(PAGE_SIZE), PAGE_SIZE)
    }
}

impl ToQuery for PetitionQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("state", self.state)
            .push_opt("q", self.search.as_deref());
        query
    }
}

/// Client for the petitions API
#[derive(Debug, Clone)]
pub struct PetitionsClient {
    service: ServiceClient,
}

impl PetitionsClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    /// One page of current petitions
    pub async fn list(&self, query: &PetitionQuery) -> Result<PetitionList> {
        self.service
            .invoke_page(&LIST, &[], query.to_query(), query.start())
            .await
    }

    /// Every current petition from `query.page` on
    pub fn list_all(&self, query: &PetitionQuery) -> PageStream<Petition> {
        self.service
            .paginate::<PetitionList>(LIST, Vec::new(), query.to_query(), query.start())
    }

    pub async fn get(&self, id: u64) -> Result<PetitionDocument> {
        self.service
            .invoke(&GET, &[&id.to_string()], &Query::new())
            .await
    }

    /// One page of petitions from previous Parliaments
    pub async fn list_archived(&self, query: &PetitionQuery) -> Result<PetitionList> {
        self.service
            .invoke_page(&LIST_ARCHIVED, &[], query.to_query(), query.start())
            .await
    }

    pub fn list_archived_all(&self, query: &PetitionQuery) -> PageStream<Petition> {
        self.service.paginate::<PetitionList>(
            LIST_ARCHIVED,
            Vec::new(),
            query.to_query(),
            query.start(),
        )
    }

    pub async fn get_archived(&self, id: u64) -> Result<PetitionDocument> {
        self.service
            .invoke(&GET_ARCHIVED, &[&id.to_string()], &Query::new())
            .await
    }
}
