//! Oral questions and early day motions models
//!
//! This API uses PascalCase field names and wraps every response in an
//! envelope that carries its own paging block.

use crate::pagination::{Page, PageRequest, Paginated};
use crate::types::{JsonValue, Timestamp};
use serde::{Deserialize, Serialize};

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub paging_info: Option<PagingInfo>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub errors: Vec<JsonValue>,
    pub response: T,
}

impl<T> ApiResponse<T> {
    pub fn into_response(self) -> T {
        self.response
    }
}

impl<T> Paginated for ApiResponse<Vec<T>> {
    type Item = T;

    fn into_page(self, _request: &PageRequest) -> Page<T> {
        Page {
            items: self.response,
            total: self.paging_info.map(|p| p.total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PagingInfo {
    pub skip: u32,
    pub take: u32,
    /// Results matching the query
    pub total: u64,
    #[serde(default)]
    pub global_start: Option<u32>,
    #[serde(default)]
    pub global_total: Option<u64>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OralQuestion {
    pub id: u32,
    #[serde(default)]
    pub question_type: Option<u32>,
    pub question_text: String,
    #[serde(default)]
    pub status: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub tabled_when: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub removed_from_to_be_asked_when: Option<Timestamp>,
    #[serde(default)]
    pub declarable_interest_detail: Option<String>,
    #[serde(default)]
    pub hansard_link: Option<String>,
    #[serde(rename = "UIN", default)]
    pub uin: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub answering_when: Option<Timestamp>,
    #[serde(default)]
    pub answering_body_id: Option<u32>,
    #[serde(default)]
    pub answering_body: Option<String>,
    #[serde(default)]
    pub answering_minister_title: Option<String>,
    #[serde(default)]
    pub asking_member_id: Option<u32>,
    #[serde(default)]
    pub asking_member: Option<MotionMember>,
    #[serde(default)]
    pub answering_minister_id: Option<u32>,
    #[serde(default)]
    pub answering_minister: Option<MotionMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MotionMember {
    pub mnis_id: u32,
    #[serde(default)]
    pub pims_id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub list_as: Option<String>,
    #[serde(default)]
    pub constituency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub party_id: Option<u32>,
    #[serde(default)]
    pub party_colour: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EarlyDayMotion {
    pub id: u32,
    #[serde(default)]
    pub status: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub status_date: Option<Timestamp>,
    #[serde(default)]
    pub member_id: Option<u32>,
    #[serde(default)]
    pub primary_sponsor: Option<MotionMember>,
    pub title: String,
    #[serde(default)]
    pub motion_text: Option<String>,
    #[serde(default)]
    pub amendment_to_motion_id: Option<u32>,
    #[serde(rename = "UIN", default)]
    pub uin: Option<u32>,
    #[serde(default)]
    pub amendment_suffix: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_tabled: Option<Timestamp>,
    #[serde(default)]
    pub prayer_type: Option<JsonValue>,
    #[serde(default)]
    pub sponsors_count: Option<u32>,
    /// Only present on the single-motion view
    #[serde(default)]
    pub sponsors: Vec<JsonValue>,
    #[serde(default)]
    pub amendments: Vec<JsonValue>,
}
