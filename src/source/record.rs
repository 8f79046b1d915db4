//! Feed record types.
//!
//! These types match the JSON array published by the APOD feed. Field names
//! on the wire follow the feed (`media_type`, `hdurl`, `thumbnail_url`).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FetchError;
use crate::data::filter::parse_calendar_date;

/// Kind of media a record points at.
///
/// Anything other than `image` or `video` is kept as [`MediaType::Unknown`]
/// so a single odd entry never fails the whole feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    Video,
    Unknown(String),
}

impl MediaType {
    /// Returns the wire name of this media type.
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Unknown(other) => other,
        }
    }
}

impl Default for MediaType {
    fn default() -> Self {
        MediaType::Unknown(String::new())
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Unknown(value),
        }
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Image => "image".to_string(),
            MediaType::Video => "video".to_string(),
            MediaType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One astronomy-picture-of-the-day entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date, `YYYY-MM-DD`. Used as the filter key.
    pub date: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub media_type: MediaType,

    /// Image URL, or the embed URL for videos. Missing on some `other` entries.
    #[serde(default)]
    pub url: String,

    /// Higher-resolution image, preferred in the detail overlay.
    #[serde(rename = "hdurl", default, skip_serializing_if = "Option::is_none")]
    pub hd_url: Option<String>,

    /// Still image for video entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Record {
    /// Parse the record's date as a calendar date.
    ///
    /// Returns `None` when the feed carries something that isn't a date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// Parse a feed body into records, keeping feed order.
pub fn parse_records(body: &[u8]) -> Result<Vec<Record>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
