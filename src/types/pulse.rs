//! News: pulses (articles aggregated from outside sources), their groupings, and feed items.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};

/// A single news article.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Pulse {
    pub id: i64,
    #[builder(into)]
    pub author: Option<String>,
    pub category: Option<i32>,
    pub ignored: Option<bool>,
    #[builder(into)]
    pub image: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub published_at: Option<DateTime<Utc>>,
    pub pulse_image: Option<i64>,
    pub pulse_source: Option<i64>,
    #[builder(into)]
    pub summary: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<i64>,
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub uid: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub videos: Vec<String>,
    pub website: Option<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pulses grouped around a single game or topic.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PulseGroup {
    pub id: i64,
    pub game: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[builder(default)]
    pub pulses: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A news outlet pulses are collected from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PulseSource {
    pub id: i64,
    pub game: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    pub page: Option<i64>,
}

/// Link to the original article of a pulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PulseUrl {
    pub id: i64,
    pub trusted: Option<bool>,
    #[builder(into)]
    pub url: Option<String>,
}

#[non_exhaustive]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize_repr,
    Deserialize_repr,
    strum_macros::Display,
)]
#[repr(u8)]
pub enum FeedCategory {
    #[strum(serialize = "pulse_article")]
    PulseArticle = 1,
    #[strum(serialize = "coming_soon")]
    ComingSoon = 2,
    #[strum(serialize = "new_trailer")]
    NewTrailer = 3,
    #[strum(serialize = "user_contributed_item")]
    UserContributedItem = 5,
    #[strum(serialize = "user_contributions_item")]
    UserContributionsItem = 6,
    #[strum(serialize = "page_contributed_item")]
    PageContributedItem = 7,
}

/// An item of the IGDB news feed.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Feed {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<FeedCategory>,
    #[builder(into)]
    pub content: Option<String>,
    pub feed_likes_count: Option<i64>,
    pub feed_video: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub games: Vec<i64>,
    #[builder(into)]
    pub meta: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub published_at: Option<DateTime<Utc>>,
    pub pulse: Option<i64>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub uid: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    pub user: Option<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Pulse {
    const ENDPOINT: &'static str = endpoint::PULSES;
    const NAME: &'static str = "Pulse";
}

impl Searchable for Pulse {}

impl Entity for PulseGroup {
    const ENDPOINT: &'static str = endpoint::PULSE_GROUPS;
    const NAME: &'static str = "PulseGroup";
}

impl Entity for PulseSource {
    const ENDPOINT: &'static str = endpoint::PULSE_SOURCES;
    const NAME: &'static str = "PulseSource";
}

impl Entity for PulseUrl {
    const ENDPOINT: &'static str = endpoint::PULSE_URLS;
    const NAME: &'static str = "PulseUrl";
}

impl Entity for Feed {
    const ENDPOINT: &'static str = endpoint::FEEDS;
    const NAME: &'static str = "Feed";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_should_decode_category() {
        let feed: Feed =
            serde_json::from_str(r#"{"id": 31, "category": 3, "games": [1942]}"#).unwrap();

        assert_eq!(feed.category, Some(FeedCategory::NewTrailer));
        assert_eq!(FeedCategory::NewTrailer.to_string(), "new_trailer");
    }
}
