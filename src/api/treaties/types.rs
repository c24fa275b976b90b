//! Treaties API models

use crate::types::{JsonValue, Link, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treaty {
    /// Opaque identifier, e.g. `"Qm5Y3xQc"`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country_signatory: Option<String>,
    #[serde(default)]
    pub command_paper_prefix: Option<String>,
    #[serde(default)]
    pub command_paper_number: Option<u32>,
    #[serde(default)]
    pub lead_department: Option<GovernmentOrganisation>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub web_link: Option<String>,
    #[serde(default)]
    pub laying_body_department: Option<String>,
    #[serde(default)]
    pub laying_body_department_id: Option<u32>,
    #[serde(default)]
    pub treaty_series_membership: Option<JsonValue>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub commons_laid_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub lords_laid_date: Option<Timestamp>,
    #[serde(default)]
    pub laid_date: Option<String>,
    #[serde(default)]
    pub parliamentary_process: Option<JsonValue>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A step in a treaty's parliamentary scrutiny
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessItem {
    pub id: String,
    #[serde(default)]
    pub treaty_id: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub step_name: Option<String>,
    #[serde(default)]
    pub step_id: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub sort_order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentOrganisation {
    pub id: u32,
    pub name: String,
}
