use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::Entity;
use crate::types::{DateCategory, Region};

/// Release of a game on a platform in a region. `category` tells how precise `date` is.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ReleaseDate {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<DateCategory>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub date: Option<DateTime<Utc>>,
    pub game: Option<i64>,
    #[builder(into)]
    pub human: Option<String>,
    pub m: Option<i32>,
    pub platform: Option<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub region: Option<Region>,
    pub y: Option<i32>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for ReleaseDate {
    const ENDPOINT: &'static str = endpoint::RELEASE_DATES;
    const NAME: &'static str = "ReleaseDate";
}
