//! Registered interests models

use crate::types::{JsonValue, Link, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: u32,
    pub summary: String,
    #[serde(default)]
    pub parent_interest_id: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub registration_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub published_date: Option<Timestamp>,
    #[serde(default)]
    pub updated_dates: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub member: Option<InterestMember>,
    /// Category-specific fields (donor, amount, dates...)
    #[serde(default)]
    pub fields: Vec<InterestField>,
    #[serde(default)]
    pub child_interests: Vec<Interest>,
    #[serde(default)]
    pub rectified: bool,
    #[serde(default)]
    pub rectified_details: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    #[serde(default)]
    pub number: Option<String>,
    pub name: String,
    #[serde(default)]
    pub parent_category_ids: Vec<u32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestMember {
    pub id: u32,
    pub name_display_as: String,
    #[serde(default)]
    pub name_list_as: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub member_from: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Scalar value; its JSON type depends on `kind`
    #[serde(default)]
    pub value: Option<JsonValue>,
    #[serde(default)]
    pub values: Option<JsonValue>,
}

impl InterestField {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(JsonValue::as_str)
    }
}

/// A published edition of the register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    pub id: u32,
    #[serde(default, with = "crate::types::datetime::option")]
    pub published_date: Option<Timestamp>,
    #[serde(default)]
    pub links: Vec<Link>,
}
