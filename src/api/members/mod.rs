//! Members API (`members-api.parliament.uk`)
//!
//! Members of both Houses, their contact details, parties and the
//! constituencies they represent. Lists page with `skip`/`take` and wrap
//! every item in `{ value, links }`.

mod types;

pub use types::{
    Constituency, ContactInfo, HouseMembership, Member, MembershipStatus, Party, Representation,
};

use super::{ItemsPage, ValueItemsPage};
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use crate::types::{House, ValueWrapper};
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("skip", "take");

const SEARCH: Endpoint = Endpoint::get("members.search", "/Members/Search").paged(PAGING);
const GET: Endpoint = Endpoint::get("members.get", "/Members/{}");
const CONTACT: Endpoint = Endpoint::get("members.contact", "/Members/{}/Contact");
const SYNOPSIS: Endpoint = Endpoint::get("members.synopsis", "/Members/{}/Synopsis");
const ACTIVE_PARTIES: Endpoint = Endpoint::get("members.active_parties", "/Parties/GetActive/{}");
const SEARCH_CONSTITUENCIES: Endpoint =
    Endpoint::get("members.search_constituencies", "/Location/Constituency/Search").paged(PAGING);
const CONSTITUENCY: Endpoint = Endpoint::get("members.constituency", "/Location/Constituency/{}");

/// Filters for `/Members/Search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSearch {
    pub name: Option<String>,
    /// Constituency or peerage
    pub location: Option<String>,
    pub party_id: Option<u32>,
    pub house: Option<House>,
    pub is_current_member: Option<bool>,
    pub page: PageRequest,
}

impl ToQuery for MemberSearch {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("Name", self.name.as_deref())
            .push_opt("Location", self.location.as_deref())
            .push_opt("PartyId", self.party_id)
            .push_opt("House", self.house.map(House::id))
            .push_opt("IsCurrentMember", self.is_current_member);
        query
    }
}

/// Filters for `/Location/Constituency/Search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstituencySearch {
    pub search_text: String,
    pub page: PageRequest,
}

impl ToQuery for ConstituencySearch {
    fn to_query(&self) -> Query {
        Query::new().with("searchText", &self.search_text)
    }
}

/// Client for the members API
#[derive(Debug, Clone)]
pub struct MembersClient {
    service: ServiceClient,
}

impl MembersClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn search(&self, search: &MemberSearch) -> Result<ItemsPage<ValueWrapper<Member>>> {
        self.service
            .invoke_page(&SEARCH, &[], search.to_query(), search.page)
            .await
    }

    pub fn search_all(&self, search: &MemberSearch) -> PageStream<Member> {
        self.service
            .paginate::<ValueItemsPage<Member>>(SEARCH, Vec::new(), search.to_query(), search.page)
    }

    pub async fn get(&self, id: u32) -> Result<Member> {
        let member: ValueWrapper<Member> = self
            .service
            .invoke(&GET, &[&id.to_string()], &Query::new())
            .await?;
        Ok(member.into_value())
    }

    pub async fn contact(&self, id: u32) -> Result<Vec<ContactInfo>> {
        let contact: ValueWrapper<Vec<ContactInfo>> = self
            .service
            .invoke(&CONTACT, &[&id.to_string()], &Query::new())
            .await?;
        Ok(contact.into_value())
    }

    /// Short biography, as HTML
    pub async fn synopsis(&self, id: u32) -> Result<String> {
        let synopsis: ValueWrapper<String> = self
            .service
            .invoke(&SYNOPSIS, &[&id.to_string()], &Query::new())
            .await?;
        Ok(synopsis.into_value())
    }

    pub async fn active_parties(&self, house: House) -> Result<Vec<Party>> {
        let parties: ItemsPage<ValueWrapper<Party>> = self
            .service
            .invoke(&ACTIVE_PARTIES, &[&house.id().to_string()], &Query::new())
            .await?;
        Ok(parties.into_values())
    }

    pub async fn search_constituencies(
        &self,
        search: &ConstituencySearch,
    ) -> Result<ItemsPage<ValueWrapper<Constituency>>> {
        self.service
            .invoke_page(&SEARCH_CONSTITUENCIES, &[], search.to_query(), search.page)
            .await
    }

    pub fn search_constituencies_all(&self, search: &ConstituencySearch) -> PageStream<Constituency> {
        self.service.paginate::<ValueItemsPage<Constituency>>(
            SEARCH_CONSTITUENCIES,
            Vec::new(),
            search.to_query(),
            search.page,
        )
    }

    pub async fn constituency(&self, id: u32) -> Result<Constituency> {
        let constituency: ValueWrapper<Constituency> = self
            .service
            .invoke(&CONSTITUENCY, &[&id.to_string()], &Query::new())
            .await?;
        Ok(constituency.into_value())
    }
}
