//! Bills API (`bills-api.parliament.uk`)

mod types;

pub use types::{
    Bill, BillPublications, BillStage, BillType, Organisation, Publication, PublicationFile,
    PublicationLink, PublicationType, Sponsor, SponsorMember, StageSitting,
};

use super::ItemsPage;
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use crate::types::House;
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("Skip", "Take");

const LIST: Endpoint = Endpoint::get("bills.list", "/Bills").paged(PAGING);
const GET: Endpoint = Endpoint::get("bills.get", "/Bills/{}");
const STAGES: Endpoint = Endpoint::get("bills.stages", "/Bills/{}/Stages").paged(PAGING);
const PUBLICATIONS: Endpoint = Endpoint::get("bills.publications", "/Bills/{}/Publications");
const BILL_TYPES: Endpoint = Endpoint::get("bills.bill_types", "/BillTypes");

/// Sort orders accepted by `/Bills`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillSortOrder {
    TitleAscending,
    TitleDescending,
    DateUpdatedAscending,
    DateUpdatedDescending,
}

impl BillSortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            BillSortOrder::TitleAscending => "TitleAscending",
            BillSortOrder::TitleDescending => "TitleDescending",
            BillSortOrder::DateUpdatedAscending => "DateUpdatedAscending",
            BillSortOrder::DateUpdatedDescending => "DateUpdatedDescending",
        }
    }
}

/// Filters for `/Bills`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillQuery {
    pub search_term: Option<String>,
    pub session_id: Option<u32>,
    pub current_house: Option<House>,
    pub originating_house: Option<House>,
    pub member_id: Option<u32>,
    pub department_id: Option<u32>,
    pub bill_type_ids: Vec<u32>,
    pub is_defeated: Option<bool>,
    pub is_withdrawn: Option<bool>,
    pub sort_order: Option<BillSortOrder>,
    pub page: PageRequest,
}

impl ToQuery for BillQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("SearchTerm", self.search_term.as_deref())
            .push_opt("SessionId", self.session_id)
            .push_opt("CurrentHouse", self.current_house)
            .push_opt("OriginatingHouse", self.originating_house)
            .push_opt("MemberId", self.member_id)
            .push_opt("DepartmentId", self.department_id)
            .push_all("BillType", &self.bill_type_ids)
            .push_opt("IsDefeated", self.is_defeated)
            .push_opt("IsWithdrawn", self.is_withdrawn)
            .push_opt("SortOrder", self.sort_order.map(BillSortOrder::as_str));
        query
    }
}

/// Client for the bills API
#[derive(Debug, Clone)]
pub struct BillsClient {
    service: ServiceClient,
}

impl BillsClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn list(&self, query: &BillQuery) -> Result<ItemsPage<Bill>> {
        self.service
            .invoke_page(&LIST, &[], query.to_query(), query.page)
            .await
    }

    pub fn list_all(&self, query: &BillQuery) -> PageStream<Bill> {
        self.service
            .paginate::<ItemsPage<Bill>>(LIST, Vec::new(), query.to_query(), query.page)
    }

    pub async fn get(&self, id: u32) -> Result<Bill> {
        self.service
            .invoke(&GET, &[&id.to_string()], &Query::new())
            .await
    }

    /// One page of a bill's stages
    pub async fn stages(&self, id: u32, skip: u32, take: u32) -> Result<ItemsPage<BillStage>> {
        self.service
            .invoke_page(
                &STAGES,
                &[&id.to_string()],
                Query::new(),
                PageRequest::new(skip, take),
            )
            .await
    }

    pub fn stages_all(&self, id: u32, page: PageRequest) -> PageStream<BillStage> {
        self.service
            .paginate::<ItemsPage<BillStage>>(STAGES, vec![id.to_string()], Query::new(), page)
    }

    pub async fn publications(&self, id: u32) -> Result<BillPublications> {
        self.service
            .invoke(&PUBLICATIONS, &[&id.to_string()], &Query::new())
            .await
    }

    pub async fn bill_types(&self) -> Result<Vec<BillType>> {
        let types: ItemsPage<BillType> = self.service.invoke(&BILL_TYPES, &[], &Query::new()).await?;
        Ok(types.into_items())
    }
}
