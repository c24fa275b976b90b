//! Committees API models

use crate::types::{JsonValue, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub parent_committee: Option<Box<Committee>>,
    #[serde(default)]
    pub committee_types: Vec<NamedRef>,
    #[serde(default)]
    pub is_lead_committee: Option<bool>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub start_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub scrutinising_departments: Vec<JsonValue>,
    #[serde(default)]
    pub show_on_website: Option<bool>,
    #[serde(default)]
    pub website_legacy_url: Option<String>,
}

/// `{ id, name }` references used for categories and types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeEvent {
    pub id: u32,
    #[serde(default, with = "crate::types::datetime::option")]
    pub start_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub event_type: Option<NamedRef>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub originator: Option<String>,
    #[serde(default)]
    pub cancelled_date: Option<String>,
    #[serde(default)]
    pub committees: Vec<NamedRef>,
    #[serde(default)]
    pub event_sources: Vec<JsonValue>,
    #[serde(default)]
    pub activities: Vec<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteePublication {
    pub id: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<NamedRef>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub publication_start_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub publication_end_date: Option<Timestamp>,
    #[serde(default)]
    pub committee: Option<NamedRef>,
    #[serde(default)]
    pub documents: Vec<JsonValue>,
    #[serde(default)]
    pub additional_content_url: Option<String>,
    #[serde(default)]
    pub hc_number: Option<String>,
}
