//! Common types used throughout the Parliament client
//!
//! This module contains shared type definitions, response envelopes
//! and serde helpers used across multiple domain modules.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Timestamp type used by every model
pub type Timestamp = chrono::NaiveDateTime;

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// House
// ============================================================================

/// A House of Parliament
///
/// Some APIs send the house as a number (1 = Commons, 2 = Lords), others
/// as a name. Both forms deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum House {
    Commons,
    Lords,
}

impl House {
    /// Numeric id used by the members and interests APIs
    pub fn id(self) -> u8 {
        match self {
            House::Commons => 1,
            House::Lords => 2,
        }
    }

    /// Name used by the bills, committees and questions APIs
    pub fn as_str(self) -> &'static str {
        match self {
            House::Commons => "Commons",
            House::Lords => "Lords",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "commons" | "1" => Some(House::Commons),
            "lords" | "2" => Some(House::Lords),
            _ => None,
        }
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for House {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(u8),
            Name(String),
        }

        let house = match Repr::deserialize(deserializer)? {
            Repr::Id(1) => Some(House::Commons),
            Repr::Id(2) => Some(House::Lords),
            Repr::Id(_) => None,
            Repr::Name(name) => House::from_name(&name),
        };
        house.ok_or_else(|| serde::de::Error::custom("expected Commons/Lords or 1/2"))
    }
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// A hypermedia link attached to a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub rel: Option<String>,
    pub href: Option<String>,
    pub method: Option<String>,
}

/// The `{ value, links }` wrapper the members, treaties and written
/// questions APIs put around every resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueWrapper<T> {
    pub value: T,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl<T> ValueWrapper<T> {
    /// Discard the links and keep the resource
    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// Date Handling
// ============================================================================

/// Tolerant timestamp (de)serialization
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00.000Z`), naive ISO-8601
/// (`2024-01-15T10:00:00`, optional fraction) and bare dates.
pub mod datetime {
    use super::Timestamp;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Parse any of the timestamp shapes the Parliament APIs emit
    pub fn parse(value: &str) -> Option<Timestamp> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Render a timestamp the way the query strings expect
    pub fn format(value: &Timestamp) -> String {
        value.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
    }

    /// Same as the parent module, for `Option<Timestamp>`
    pub mod option {
        use super::Timestamp;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<Timestamp>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Timestamp>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) if raw.is_empty() => Ok(None),
                Some(raw) => super::parse(&raw).map(Some).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid timestamp '{raw}'"))
                }),
            }
        }
    }
}
