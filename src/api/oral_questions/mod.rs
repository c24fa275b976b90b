//! Oral questions and motions API (`oralquestionsandmotions-api.parliament.uk`)

mod types;

pub use types::{ApiResponse, EarlyDayMotion, MotionMember, OralQuestion, PagingInfo};

use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("parameters.skip", "parameters.take");

const ORAL_QUESTIONS: Endpoint =
    Endpoint::get("oral_questions.list", "/oralquestions/list").paged(PAGING);
const EARLY_DAY_MOTIONS: Endpoint =
    Endpoint::get("oral_questions.early_day_motions", "/EarlyDayMotions/list").paged(PAGING);
const EARLY_DAY_MOTION: Endpoint =
    Endpoint::get("oral_questions.early_day_motion", "/EarlyDayMotion/{}");

/// Filters for `/oralquestions/list`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OralQuestionQuery {
    pub answering_date_start: Option<NaiveDate>,
    pub answering_date_end: Option<NaiveDate>,
    pub asking_member_ids: Vec<u32>,
    pub answering_body_ids: Vec<u32>,
    pub page: PageRequest,
}

impl ToQuery for OralQuestionQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("parameters.answeringDateStart", self.answering_date_start)
            .push_opt("parameters.answeringDateEnd", self.answering_date_end)
            .push_all("parameters.askingMemberIds", &self.asking_member_ids)
            .push_all("parameters.answeringBodyIds", &self.answering_body_ids);
        query
    }
}

/// Filters for `/EarlyDayMotions/list`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdmQuery {
    pub search_term: Option<String>,
    pub member_id: Option<u32>,
    pub tabled_start_date: Option<NaiveDate>,
    pub tabled_end_date: Option<NaiveDate>,
    pub is_prayer: Option<bool>,
    pub page: PageRequest,
}

impl ToQuery for EdmQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("parameters.searchTerm", self.search_term.as_deref())
            .push_opt("parameters.memberId", self.member_id)
            .push_opt("parameters.tabledStartDate", self.tabled_start_date)
            .push_opt("parameters.tabledEndDate", self.tabled_end_date)
            .push_opt("parameters.isPrayer", self.is_prayer);
        query
    }
}

/// Client for oral questions and early day motions
#[derive(Debug, Clone)]
pub struct OralQuestionsClient {
    service: ServiceClient,
}

impl OralQuestionsClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn oral_questions(
        &self,
        query: &OralQuestionQuery,
    ) -> Result<ApiResponse<Vec<OralQuestion>>> {
        self.service
            .invoke_page(&ORAL_QUESTIONS, &[], query.to_query(), query.page)
            .await
    }

    pub fn oral_questions_all(&self, query: &OralQuestionQuery) -> PageStream<OralQuestion> {
        self.service.paginate::<ApiResponse<Vec<OralQuestion>>>(
            ORAL_QUESTIONS,
            Vec::new(),
            query.to_query(),
            query.page,
        )
    }

    pub async fn early_day_motions(
        &self,
        query: &EdmQuery,
    ) -> Result<ApiResponse<Vec<EarlyDayMotion>>> {
        self.service
            .invoke_page(&EARLY_DAY_MOTIONS, &[], query.to_query(), query.page)
            .await
    }

    pub fn early_day_motions_all(&self, query: &EdmQuery) -> PageStream<EarlyDayMotion> {
        self.service.paginate::<ApiResponse<Vec<EarlyDayMotion>>>(
            EARLY_DAY_MOTIONS,
            Vec::new(),
            query.to_query(),
            query.page,
        )
    }

    pub async fn early_day_motion(&self, id: u32) -> Result<EarlyDayMotion> {
        let response: ApiResponse<EarlyDayMotion> = self
            .service
            .invoke(&EARLY_DAY_MOTION, &[&id.to_string()], &Query::new())
            .await?;
        Ok(response.into_response())
    }
}
