//! Committees API (`committees-api.parliament.uk`)
//!
//! Committees, their events (meetings, hearings, visits) and their
//! publications. Every list pages with `skip`/`take`.

mod types;

pub use types::{Committee, CommitteeEvent, CommitteePublication, NamedRef};

use super::ItemsPage;
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use crate::types::House;
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("Skip", "Take");

const LIST: Endpoint = Endpoint::get("committees.list", "/Committees").paged(PAGING);
const GET: Endpoint = Endpoint::get("committees.get", "/Committees/{}");
const EVENTS: Endpoint = Endpoint::get("committees.events", "/Events").paged(PAGING);
const PUBLICATIONS: Endpoint =
    Endpoint::get("committees.publications", "/Publications").paged(PAGING);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitteeStatus {
    Current,
    Former,
    All,
}

impl std::fmt::Display for CommitteeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CommitteeStatus::Current => "Current",
            CommitteeStatus::Former => "Former",
            CommitteeStatus::All => "All",
        })
    }
}

/// Filters for `/Committees`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitteeQuery {
    pub search_term: Option<String>,
    pub house: Option<House>,
    pub status: Option<CommitteeStatus>,
    pub page: PageRequest,
}

impl ToQuery for CommitteeQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("SearchTerm", self.search_term.as_deref())
            .push_opt("House", self.house)
            .push_opt("CommitteeStatus", self.status);
        query
    }
}

/// Filters for `/Events`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub committee_id: Option<u32>,
    pub house: Option<House>,
    pub start_date_from: Option<NaiveDate>,
    pub start_date_to: Option<NaiveDate>,
    pub page: PageRequest,
}

impl ToQuery for EventQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("CommitteeId", self.committee_id)
            .push_opt("House", self.house)
            .push_opt("StartDateFrom", self.start_date_from)
            .push_opt("StartDateTo", self.start_date_to);
        query
    }
}

/// Filters for `/Publications`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationQuery {
    pub committee_id: Option<u32>,
    pub search_term: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: PageRequest,
}

impl ToQuery for PublicationQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("CommitteeId", self.committee_id)
            .push_opt("SearchTerm", self.search_term.as_deref())
            .push_opt("StartDate", self.start_date)
            .push_opt("EndDate", self.end_date);
        query
    }
}

/// Client for the committees API
#[derive(Debug, Clone)]
pub struct CommitteesClient {
    service: ServiceClient,
}

impl CommitteesClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn list(&self, query: &CommitteeQuery) -> Result<ItemsPage<Committee>> {
        self.service
            .invoke_page(&LIST, &[], query.to_query(), query.page)
            .await
    }

    pub fn list_all(&self, query: &CommitteeQuery) -> PageStream<Committee> {
        self.service
            .paginate::<ItemsPage<Committee>>(LIST, Vec::new(), query.to_query(), query.page)
    }

    pub async fn get(&self, id: u32) -> Result<Committee> {
        self.service
            .invoke(&GET, &[&id.to_string()], &Query::new())
            .await
    }

    pub async fn events(&self, query: &EventQuery) -> Result<ItemsPage<CommitteeEvent>> {
        self.service
            .invoke_page(&EVENTS, &[], query.to_query(), query.page)
            .await
    }

    pub fn events_all(&self, query: &EventQuery) -> PageStream<CommitteeEvent> {
        self.service
            .paginate::<ItemsPage<CommitteeEvent>>(EVENTS, Vec::new(), query.to_query(), query.page)
    }

    pub async fn publications(
        &self,
        query: &PublicationQuery,
    ) -> Result<ItemsPage<CommitteePublication>> {
        self.service
            .invoke_page(&PUBLICATIONS, &[], query.to_query(), query.page)
            .await
    }

    pub fn publications_all(&self, query: &PublicationQuery) -> PageStream<CommitteePublication> {
        self.service.paginate::<ItemsPage<CommitteePublication>>(
            PUBLICATIONS,
            Vec::new(),
            query.to_query(),
            query.page,
        )
    }
}
