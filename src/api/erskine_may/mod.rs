//! Erskine May API (`erskinemay-api.parliament.uk`)
//!
//! The procedural reference text, browsable by part, chapter and section.
//! Browsing is unpaged; only the two searches page.

mod types;

pub use types::{
    Chapter, Footnote, ParagraphSearchResult, Part, SearchResults, Section, SectionOverview,
    SectionSearchResult,
};

use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("skip", "take");

const PARTS: Endpoint = Endpoint::get("erskine_may.parts", "/Part");
const PART: Endpoint = Endpoint::get("erskine_may.part", "/Part/{}");
const CHAPTER: Endpoint = Endpoint::get("erskine_may.chapter", "/Chapter/{}");
const SECTION: Endpoint = Endpoint::get("erskine_may.section", "/Section/{}");
const SEARCH_PARAGRAPHS: Endpoint = Endpoint::get(
    "erskine_may.search_paragraphs",
    "/Search/ParagraphSearchResults/{}",
)
.paged(PAGING);
const SEARCH_SECTIONS: Endpoint = Endpoint::get(
    "erskine_may.search_sections",
    "/Search/SectionSearchResults/{}",
)
.paged(PAGING);

/// Client for the Erskine May API
#[derive(Debug, Clone)]
pub struct ErskineMayClient {
    service: ServiceClient,
}

impl ErskineMayClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    /// Every part, in one response
    pub async fn parts(&self) -> Result<Vec<Part>> {
        self.service.invoke(&PARTS, &[], &Query::new()).await
    }

    pub async fn part(&self, number: u32) -> Result<Part> {
        self.service
            .invoke(&PART, &[&number.to_string()], &Query::new())
            .await
    }

    pub async fn chapter(&self, number: u32) -> Result<Chapter> {
        self.service
            .invoke(&CHAPTER, &[&number.to_string()], &Query::new())
            .await
    }

    pub async fn section(&self, id: u32) -> Result<Section> {
        self.service
            .invoke(&SECTION, &[&id.to_string()], &Query::new())
            .await
    }

    pub async fn search_paragraphs(
        &self,
        term: &str,
        skip: u32,
        take: u32,
    ) -> Result<SearchResults<ParagraphSearchResult>> {
        self.service
            .invoke_page(
                &SEARCH_PARAGRAPHS,
                &[term],
                Query::new(),
                PageRequest::new(skip, take),
            )
            .await
    }

    pub fn search_paragraphs_all(
        &self,
        term: &str,
        page: PageRequest,
    ) -> PageStream<ParagraphSearchResult> {
        self.service.paginate::<SearchResults<ParagraphSearchResult>>(
            SEARCH_PARAGRAPHS,
            vec![term.to_string()],
            Query::new(),
            page,
        )
    }

    pub async fn search_sections(
        &self,
        term: &str,
        skip: u32,
        take: u32,
    ) -> Result<SearchResults<SectionSearchResult>> {
        self.service
            .invoke_page(
                &SEARCH_SECTIONS,
                &[term],
                Query::new(),
                PageRequest::new(skip, take),
            )
            .await
    }

    pub fn search_sections_all(
        &self,
        term: &str,
        page: PageRequest,
    ) -> PageStream<SectionSearchResult> {
        self.service.paginate::<SearchResults<SectionSearchResult>>(
            SEARCH_SECTIONS,
            vec![term.to_string()],
            Query::new(),
            page,
        )
    }
}
