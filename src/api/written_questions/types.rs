//! Written questions and statements models

use crate::types::{JsonValue, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenQuestion {
    pub id: u32,
    #[serde(default)]
    pub asking_member_id: Option<u32>,
    #[serde(default)]
    pub asking_member: Option<QuestionMember>,
    pub house: String,
    #[serde(default)]
    pub member_has_interest: bool,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_tabled: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_for_answer: Option<Timestamp>,
    /// Unique identification number, e.g. `"HL1234"`
    pub uin: String,
    pub question_text: String,
    #[serde(default)]
    pub answering_body_id: Option<u32>,
    #[serde(default)]
    pub answering_body_name: Option<String>,
    #[serde(default)]
    pub is_withdrawn: bool,
    #[serde(default)]
    pub is_named_day: bool,
    #[serde(default)]
    pub grouped_questions: Vec<String>,
    #[serde(default)]
    pub answer_is_holding: Option<bool>,
    #[serde(default)]
    pub answer_is_correction: Option<bool>,
    #[serde(default)]
    pub answering_member_id: Option<u32>,
    #[serde(default)]
    pub answering_member: Option<QuestionMember>,
    #[serde(default)]
    pub correcting_member_id: Option<u32>,
    #[serde(default)]
    pub correcting_member: Option<QuestionMember>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_answered: Option<Timestamp>,
    #[serde(default)]
    pub answer_text: Option<String>,
    #[serde(default)]
    pub original_answer_text: Option<String>,
    #[serde(default)]
    pub comparable_answer_text: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_answer_corrected: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_holding_answer: Option<Timestamp>,
    #[serde(default)]
    pub attachment_count: u32,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub attachments: Vec<JsonValue>,
    #[serde(default)]
    pub grouped_questions_dates: Vec<JsonValue>,
}

impl WrittenQuestion {
    pub fn is_answered(&self) -> bool {
        self.date_answered.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionMember {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub party_colour: Option<String>,
    #[serde(default)]
    pub party_abbreviation: Option<String>,
    #[serde(default)]
    pub member_from: Option<String>,
    #[serde(default)]
    pub list_as: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenStatement {
    pub id: u32,
    #[serde(default)]
    pub member_id: Option<u32>,
    #[serde(default)]
    pub member: Option<QuestionMember>,
    #[serde(default)]
    pub member_role: Option<String>,
    pub uin: String,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date_made: Option<Timestamp>,
    #[serde(default)]
    pub answering_body_id: Option<u32>,
    #[serde(default)]
    pub answering_body_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    pub house: String,
    #[serde(default)]
    pub notice_number: Option<u32>,
    #[serde(default)]
    pub has_attachments: bool,
    #[serde(default)]
    pub has_linked_statements: bool,
    #[serde(default)]
    pub linked_statements: Vec<JsonValue>,
    #[serde(default)]
    pub attachments: Vec<JsonValue>,
}
