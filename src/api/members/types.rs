//! Members API models

use crate::types::{House, JsonValue, Timestamp, ValueWrapper};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: u32,
    pub name_list_as: String,
    pub name_display_as: String,
    #[serde(default)]
    pub name_full_title: Option<String>,
    #[serde(default)]
    pub name_address_as: Option<String>,
    #[serde(default)]
    pub latest_party: Option<Party>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub latest_house_membership: Option<HouseMembership>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Member {
    /// House of the member's most recent membership
    pub fn house(&self) -> Option<House> {
        self.latest_house_membership.as_ref().map(|m| m.house)
    }

    pub fn is_current(&self) -> bool {
        self.latest_house_membership
            .as_ref()
            .and_then(|m| m.membership_status.as_ref())
            .is_some_and(|s| s.status_is_active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub background_colour: Option<String>,
    #[serde(default)]
    pub foreground_colour: Option<String>,
    #[serde(default)]
    pub is_lords_main_party: bool,
    #[serde(default)]
    pub is_lords_spiritual_party: bool,
    #[serde(default)]
    pub government_type: Option<u32>,
    #[serde(default)]
    pub is_independent_party: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseMembership {
    /// Constituency (Commons) or peerage type (Lords)
    pub membership_from: String,
    #[serde(default)]
    pub membership_from_id: Option<u32>,
    pub house: House,
    #[serde(default, with = "crate::types::datetime::option")]
    pub membership_start_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub membership_end_date: Option<Timestamp>,
    #[serde(default)]
    pub membership_end_reason: Option<String>,
    #[serde(default)]
    pub membership_end_reason_notes: Option<String>,
    #[serde(default)]
    pub membership_end_reason_id: Option<u32>,
    #[serde(default)]
    pub membership_status: Option<MembershipStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatus {
    pub status_is_active: bool,
    #[serde(default)]
    pub status_description: Option<String>,
    #[serde(default)]
    pub status_notes: Option<String>,
    #[serde(default)]
    pub status_id: Option<u32>,
    #[serde(default)]
    pub status: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub status_start_date: Option<Timestamp>,
}

/// One way of contacting a member (office address, website, social)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub type_description: Option<String>,
    #[serde(default)]
    pub type_id: Option<u32>,
    #[serde(default)]
    pub is_preferred: bool,
    #[serde(default)]
    pub is_web_address: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub line3: Option<String>,
    #[serde(default)]
    pub line4: Option<String>,
    #[serde(default)]
    pub line5: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituency {
    pub id: u32,
    pub name: String,
    #[serde(default, with = "crate::types::datetime::option")]
    pub start_date: Option<Timestamp>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub current_representation: Option<Representation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representation {
    pub member: ValueWrapper<Member>,
    /// Membership detail, shape varies between Houses
    #[serde(default)]
    pub representation: Option<JsonValue>,
}
