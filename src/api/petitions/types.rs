//! Petition models
//!
//! The petitions site speaks JSON:API: a `{ links, data }` document whose
//! resources carry snake_case `attributes`.

use crate::pagination::{Page, PageRequest, Paginated};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Petition state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetitionState {
    #[default]
    All,
    Open,
    Closed,
    Rejected,
    AwaitingResponse,
    WithResponse,
    AwaitingDebate,
    Debated,
    NotDebated,
}

impl PetitionState {
    pub fn as_str(self) -> &'static str {
        match self {
            PetitionState::All => "all",
            PetitionState::Open => "open",
            PetitionState::Closed => "closed",
            PetitionState::Rejected => "rejected",
            PetitionState::AwaitingResponse => "awaiting_response",
            PetitionState::WithResponse => "with_response",
            PetitionState::AwaitingDebate => "awaiting_debate",
            PetitionState::Debated => "debated",
            PetitionState::NotDebated => "not_debated",
        }
    }
}

impl std::fmt::Display for PetitionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level JSON:API links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentLinks {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of petitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetitionList {
    #[serde(default)]
    pub links: DocumentLinks,
    pub data: Vec<Petition>,
}

/// A single petition document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetitionDocument {
    #[serde(default)]
    pub links: DocumentLinks,
    pub data: Petition,
}

/// The site pages by number and never reports a total; a missing `next`
/// link marks the last page.
impl Paginated for PetitionList {
    type Item = Petition;

    fn into_page(self, request: &PageRequest) -> Page<Petition> {
        let total = match self.links.next {
            Some(_) => None,
            None => Some(u64::from(request.offset()) + self.data.len() as u64),
        };
        Page {
            items: self.data,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A petition resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Petition {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u64,
    #[serde(default)]
    pub links: Option<ResourceLinks>,
    pub attributes: PetitionAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetitionAttributes {
    pub action: String,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub additional_details: Option<String>,
    #[serde(default)]
    pub committee_note: Option<String>,
    pub state: String,
    #[serde(default)]
    pub signature_count: u64,
    #[serde(default, with = "crate::types::datetime::option")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub rejected_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub opened_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub closed_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub moderation_threshold_reached_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub response_threshold_reached_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub government_response_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub debate_threshold_reached_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub scheduled_debate_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub debate_outcome_at: Option<Timestamp>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub rejection: Option<Rejection>,
    #[serde(default)]
    pub government_response: Option<GovernmentResponse>,
    #[serde(default)]
    pub debate: Option<Debate>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Only present on single-petition documents
    #[serde(default)]
    pub signatures_by_country: Vec<CountrySignatures>,
    #[serde(default)]
    pub signatures_by_constituency: Vec<ConstituencySignatures>,
    #[serde(default)]
    pub signatures_by_region: Vec<RegionSignatures>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub code: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentResponse {
    #[serde(default)]
    pub responded_on: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debate {
    #[serde(default)]
    pub debated_on: Option<String>,
    #[serde(default)]
    pub transcript_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub debate_pack_url: Option<String>,
    #[serde(default)]
    pub public_engagement_url: Option<String>,
    #[serde(default)]
    pub debate_summary_url: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub acronym: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySignatures {
    pub name: String,
    pub code: String,
    pub signature_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencySignatures {
    pub name: String,
    pub ons_code: String,
    #[serde(default)]
    pub mp: Option<String>,
    pub signature_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSignatures {
    pub name: String,
    pub ons_code: String,
    pub signature_count: u64,
}
