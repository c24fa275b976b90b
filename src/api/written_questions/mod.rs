//! Written questions and statements API (`writtenquestions-api.parliament.uk`)

mod types;

pub use types::{QuestionMember, WrittenQuestion, WrittenStatement};

use super::{ItemsPage, ValueItemsPage};
use crate::error::Result;
use crate::http::{Endpoint, Query, ServiceClient, ToQuery};
use crate::pagination::{PageRequest, PageStream, PaginationStyle};
use crate::types::{House, ValueWrapper};
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

const PAGING: PaginationStyle = PaginationStyle::skip_take("skip", "take");

const QUESTIONS: Endpoint =
    Endpoint::get("written_questions.questions", "/writtenquestions/questions").paged(PAGING);
const QUESTION: Endpoint =
    Endpoint::get("written_questions.question", "/writtenquestions/questions/{}");
const STATEMENTS: Endpoint =
    Endpoint::get("written_questions.statements", "/writtenstatements/statements").paged(PAGING);
const STATEMENT: Endpoint =
    Endpoint::get("written_questions.statement", "/writtenstatements/statements/{}");

/// Filters for `/writtenquestions/questions`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrittenQuestionQuery {
    pub search_term: Option<String>,
    pub asking_member_id: Option<u32>,
    pub answering_member_id: Option<u32>,
    pub answering_bodies: Vec<u32>,
    pub answered: Option<bool>,
    pub tabled_when_from: Option<NaiveDate>,
    pub tabled_when_to: Option<NaiveDate>,
    pub house: Option<House>,
    pub uin: Option<String>,
    pub page: PageRequest,
}

impl ToQuery for WrittenQuestionQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("searchTerm", self.search_term.as_deref())
            .push_opt("askingMemberId", self.asking_member_id)
            .push_opt("answeringMemberId", self.answering_member_id)
            .push_all("answeringBodies", &self.answering_bodies)
            .push_opt(
                "answered",
                self.answered
                    .map(|answered| if answered { "Answered" } else { "Unanswered" }),
            )
            .push_opt("tabledWhenFrom", self.tabled_when_from)
            .push_opt("tabledWhenTo", self.tabled_when_to)
            .push_opt("house", self.house)
            .push_opt("uIN", self.uin.as_deref());
        query
    }
}

/// Filters for `/writtenstatements/statements`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrittenStatementQuery {
    pub search_term: Option<String>,
    pub member_id: Option<u32>,
    pub answering_bodies: Vec<u32>,
    pub made_when_from: Option<NaiveDate>,
    pub made_when_to: Option<NaiveDate>,
    pub house: Option<House>,
    pub page: PageRequest,
}

impl ToQuery for WrittenStatementQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("searchTerm", self.search_term.as_deref())
            .push_opt("members", self.member_id)
            .push_all("answeringBodies", &self.answering_bodies)
            .push_opt("madeWhenFrom", self.made_when_from)
            .push_opt("madeWhenTo", self.made_when_to)
            .push_opt("house", self.house);
        query
    }
}

/// Client for written questions and written statements
#[derive(Debug, Clone)]
pub struct WrittenQuestionsClient {
    service: ServiceClient,
}

impl WrittenQuestionsClient {
    pub(crate) fn new(service: ServiceClient) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::new(self.service.with_cancellation(token))
    }

    pub async fn questions(
        &self,
        query: &WrittenQuestionQuery,
    ) -> Result<ItemsPage<ValueWrapper<WrittenQuestion>>> {
        self.service
            .invoke_page(&QUESTIONS, &[], query.to_query(), query.page)
            .await
    }

    pub fn questions_all(&self, query: &WrittenQuestionQuery) -> PageStream<WrittenQuestion> {
        self.service.paginate::<ValueItemsPage<WrittenQuestion>>(
            QUESTIONS,
            Vec::new(),
            query.to_query(),
            query.page,
        )
    }

    pub async fn question(&self, id: u32) -> Result<WrittenQuestion> {
        let question: ValueWrapper<WrittenQuestion> = self
            .service
            .invoke(&QUESTION, &[&id.to_string()], &Query::new())
            .await?;
        Ok(question.into_value())
    }

    pub async fn statements(
        &self,
        query: &WrittenStatementQuery,
    ) -> Result<ItemsPage<ValueWrapper<WrittenStatement>>> {
        self.service
            .invoke_page(&STATEMENTS, &[], query.to_query(), query.page)
            .await
    }

    pub fn statements_all(&self, query: &WrittenStatementQuery) -> PageStream<WrittenStatement> {
        self.service.paginate::<ValueItemsPage<WrittenStatement>>(
            STATEMENTS,
            Vec::new(),
            query.to_query(),
            query.page,
        )
    }

    pub async fn statement(&self, id: u32) -> Result<WrittenStatement> {
        let statement: ValueWrapper<WrittenStatement> = self
            .service
            .invoke(&STATEMENT, &[&id.to_string()], &Query::new())
            .await?;
        Ok(statement.into_value())
    }
}
