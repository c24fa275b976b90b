//! Commons and Lords divisions (votes)
//!
//! The upstream schemas for both vote APIs are undocumented and have been
//! seen returning server errors, so division payloads stay untyped:
//! every division is a [`DivisionDocument`] over the raw JSON. Both APIs
//! page with skip/take over flat arrays that carry no total, so streams
//! end on the first short page. A separate endpoint reports the total.

mod commons;
mod lords;

pub use commons::CommonsDivisionsClient;
pub use lords::LordsDivisionsClient;

use crate::http::Query;
use crate::pagination::PageRequest;
use crate::types::JsonValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One division, as the raw JSON the API returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DivisionDocument(JsonValue);

impl DivisionDocument {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Division id, if the document has a recognisable one
    pub fn id(&self) -> Option<u64> {
        ["DivisionId", "divisionId"]
            .iter()
            .find_map(|key| self.0.get(*key))
            .and_then(JsonValue::as_u64)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

/// Filters shared by both division searches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DivisionSearch {
    pub search_term: Option<String>,
    pub member_id: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub division_number: Option<u32>,
    pub page: PageRequest,
}

/// Query parameter names of one House's vote API
struct ParamNames {
    search_term: &'static str,
    member_id: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    division_number: &'static str,
}

impl DivisionSearch {
    fn query(&self, names: &ParamNames) -> Query {
        let mut query = Query::new();
        query
            .push_opt(names.search_term, self.search_term.as_deref())
            .push_opt(names.member_id, self.member_id)
            .push_opt(names.start_date, self.start_date)
            .push_opt(names.end_date, self.end_date)
            .push_opt(names.division_number, self.division_number);
        query
    }
}
