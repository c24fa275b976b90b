//! Bills API models

use crate::types::{JsonValue, Timestamp};
use serde::{Deserialize, Serialize};

/// A bill as listed by `/Bills`; the detail view fills in the rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_id: u32,
    pub short_title: String,
    #[serde(default)]
    pub long_title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub current_house: Option<String>,
    #[serde(default)]
    pub originating_house: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub last_update: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub bill_withdrawn: Option<Timestamp>,
    #[serde(default)]
    pub is_defeated: bool,
    #[serde(default)]
    pub bill_type_id: Option<u32>,
    #[serde(default)]
    pub introduced_session_id: Option<u32>,
    #[serde(default)]
    pub included_session_ids: Vec<u32>,
    #[serde(default)]
    pub is_act: bool,
    #[serde(default)]
    pub current_stage: Option<BillStage>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub promoters: Vec<JsonValue>,
    #[serde(default)]
    pub petitioning_period: Option<String>,
    #[serde(default)]
    pub petition_information: Option<String>,
    #[serde(default)]
    pub agent: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillStage {
    pub id: u32,
    #[serde(default)]
    pub stage_id: Option<u32>,
    #[serde(default)]
    pub session_id: Option<u32>,
    pub description: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub stage_sittings: Vec<StageSitting>,
    #[serde(default)]
    pub sort_order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSitting {
    pub id: u32,
    #[serde(default)]
    pub stage_id: Option<u32>,
    #[serde(default)]
    pub bill_stage_id: Option<u32>,
    #[serde(default)]
    pub bill_id: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(default)]
    pub member: Option<SponsorMember>,
    #[serde(default)]
    pub organisation: Option<Organisation>,
    #[serde(default)]
    pub sort_order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorMember {
    pub member_id: u32,
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub party_colour: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub member_photo: Option<String>,
    #[serde(default)]
    pub member_page: Option<String>,
    #[serde(default)]
    pub member_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// `/Bills/{id}/Publications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPublications {
    #[serde(default)]
    pub bill_id: Option<u32>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub documents: Vec<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub display_date: Option<Timestamp>,
    #[serde(default)]
    pub publication_type: Option<PublicationType>,
    #[serde(default)]
    pub files: Vec<PublicationFile>,
    #[serde(default)]
    pub links: Vec<PublicationLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationType {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationFile {
    pub id: u32,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationLink {
    pub id: u32,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillType {
    pub id: u32,
    #[serde(default)]
    pub category: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
