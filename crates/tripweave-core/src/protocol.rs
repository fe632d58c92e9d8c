// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! JSON shapes exchanged with the chat backend. Every reply field is optional
//! and decoding is lenient, since the backend fills in only what it knows.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tripweave_lexicon::RawFlightResult;

const AMENITY_PREVIEW: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatReply {
    pub response: Option<String>,
    pub message: Option<String>,
    pub intent: Option<String>,
    pub itinerary: Option<Vec<DayPlan>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub flight_results: Vec<RawFlightResult>,
    #[serde(deserialize_with = "null_as_empty")]
    pub hotel_results: Vec<HotelResult>,
}

impl ChatReply {
    /// The narrative part of the reply, whichever key the backend used.
    pub fn text(&self) -> Option<&str> {
        self.response
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.message.as_deref().filter(|s| !s.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    pub day: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slots: Option<DaySlots>,
}

impl DayPlan {
    pub fn title_or_default(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Exploring")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySlots {
    #[serde(deserialize_with = "null_as_empty")]
    pub morning: Vec<Activity>,
    #[serde(deserialize_with = "null_as_empty")]
    pub afternoon: Vec<Activity>,
    #[serde(deserialize_with = "null_as_empty")]
    pub evening: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub name: String,
    pub description: Option<String>,
}

/// A `hotel_results` entry: a structured listing or a line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelResult {
    Text(String),
    Listing(HotelRecord),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelRecord {
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub amenities: Vec<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl HotelRecord {
    /// First few amenities, with a "+N more" suffix when the list is longer.
    pub fn amenity_preview(&self) -> String {
        let shown = self
            .amenities
            .iter()
            .take(AMENITY_PREVIEW)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if self.amenities.len() > AMENITY_PREVIEW {
            format!("{} +{} more", shown, self.amenities.len() - AMENITY_PREVIEW)
        } else {
            shown
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Prices arrive as "$120" from some providers and as bare numbers from others.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
