//! Annunciator models

use crate::types::{JsonValue, Timestamp};
use serde::{Deserialize, Serialize};

/// What an annunciator screen showed at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u32,
    #[serde(default)]
    pub annunciator_type: Option<String>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub publish_time: Option<Timestamp>,
    #[serde(default)]
    pub is_security_override: bool,
    #[serde(default)]
    pub show_commons_bell: bool,
    #[serde(default)]
    pub show_lords_bell: bool,
    #[serde(default)]
    pub scrolling_messages: Vec<JsonValue>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub carousel_order: Option<u32>,
    #[serde(default)]
    pub carousel_display_seconds: Option<u32>,
    #[serde(default, with = "crate::types::datetime::option")]
    pub speaker_time: Option<Timestamp>,
    #[serde(default)]
    pub sound_to_play: Option<String>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: u32,
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub member: Option<JsonValue>,
    #[serde(default)]
    pub horizontal_alignment: Option<String>,
    #[serde(default)]
    pub vertical_alignment: Option<String>,
    #[serde(default)]
    pub text_colour: Option<String>,
    #[serde(default)]
    pub background_colour: Option<String>,
    #[serde(default)]
    pub force_capitalisation: bool,
}
