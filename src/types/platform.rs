//! Platforms (consoles, operating systems, arcade boards) and their hardware versions.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};
use crate::types::media::Image;
use crate::types::website::WebsiteCategory;
use crate::types::{DateCategory, Region};

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
pub enum PlatformCategory {
    Console = 1,
    Arcade = 2,
    Platform = 3,
    #[strum(serialize = "Operating System")]
    OperatingSystem = 4,
    #[strum(serialize = "Portable Console")]
    PortableConsole = 5,
    Computer = 6,
}

/// The hardware or software a game runs on.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Platform {
    pub id: i64,
    #[builder(into)]
    pub abbreviation: Option<String>,
    #[builder(into)]
    pub alternative_name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<PlatformCategory>,
    /// Console generation, e.g. `8` for the PlayStation 4.
    pub generation: Option<i32>,
    #[builder(into)]
    pub name: Option<String>,
    pub platform_family: Option<i64>,
    pub platform_logo: Option<i64>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub summary: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub versions: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub websites: Vec<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A family of platforms, e.g. PlayStation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlatformFamily {
    pub id: i64,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
}

/// Logo of a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlatformLogo {
    pub id: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

/// A hardware revision of a platform, e.g. the PlayStation 4 Pro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlatformVersion {
    pub id: i64,
    #[serde(default)]
    #[builder(default)]
    pub companies: Vec<i64>,
    #[builder(into)]
    pub connectivity: Option<String>,
    #[builder(into)]
    pub cpu: Option<String>,
    #[builder(into)]
    pub graphics: Option<String>,
    pub main_manufacturer: Option<i64>,
    #[builder(into)]
    pub media: Option<String>,
    #[builder(into)]
    pub memory: Option<String>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub os: Option<String>,
    #[builder(into)]
    pub output: Option<String>,
    pub platform_logo: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub platform_version_release_dates: Vec<i64>,
    #[builder(into)]
    pub resolutions: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub sound: Option<String>,
    #[builder(into)]
    pub storage: Option<String>,
    #[builder(into)]
    pub summary: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
}

/// A company that built or developed a platform version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlatformVersionCompany {
    pub id: i64,
    #[builder(into)]
    pub comment: Option<String>,
    pub company: Option<i64>,
    pub developer: Option<bool>,
    pub manufacturer: Option<bool>,
}

/// Launch date of a platform version in a region.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlatformVersionReleaseDate {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<DateCategory>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub date: Option<DateTime<Utc>>,
    /// Human-readable form of `date`, e.g. `2013-Nov-15`.
    #[builder(into)]
    pub human: Option<String>,
    pub m: Option<i32>,
    pub platform_version: Option<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub region: Option<Region>,
    pub y: Option<i32>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A website of a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlatformWebsite {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<WebsiteCategory>,
    pub trusted: Option<bool>,
    #[builder(into)]
    pub url: Option<String>,
}

impl Entity for Platform {
    const ENDPOINT: &'static str = endpoint::PLATFORMS;
    const NAME: &'static str = "Platform";
}

impl Searchable for Platform {}

impl Entity for PlatformFamily {
    const ENDPOINT: &'static str = endpoint::PLATFORM_FAMILIES;
    const NAME: &'static str = "PlatformFamily";
}

impl Entity for PlatformLogo {
    const ENDPOINT: &'static str = endpoint::PLATFORM_LOGOS;
    const NAME: &'static str = "PlatformLogo";
}

impl Entity for PlatformVersion {
    const ENDPOINT: &'static str = endpoint::PLATFORM_VERSIONS;
    const NAME: &'static str = "PlatformVersion";
}

impl Entity for PlatformVersionCompany {
    const ENDPOINT: &'static str = endpoint::PLATFORM_VERSION_COMPANIES;
    const NAME: &'static str = "PlatformVersionCompany";
}

impl Entity for PlatformVersionReleaseDate {
    const ENDPOINT: &'static str = endpoint::PLATFORM_VERSION_RELEASE_DATES;
    const NAME: &'static str = "PlatformVersionReleaseDate";
}

impl Entity for PlatformWebsite {
    const ENDPOINT: &'static str = endpoint::PLATFORM_WEBSITES;
    const NAME: &'static str = "PlatformWebsite";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_should_decode() {
        let platform: Platform = serde_json::from_str(
            r#"{
                "id": 48,
                "abbreviation": "PS4",
                "alternative_name": "PS4",
                "category": 1,
                "generation": 8,
                "name": "PlayStation 4",
                "platform_family": 1,
                "versions": [12]
            }"#,
        )
        .unwrap();

        assert_eq!(platform.category, Some(PlatformCategory::Console));
        assert_eq!(platform.generation, Some(8));
        assert_eq!(platform.versions, vec![12]);
    }

    #[test]
    fn release_date_should_decode_region() {
        let release: PlatformVersionReleaseDate = serde_json::from_str(
            r#"{"id": 7, "category": 0, "date": 1384473600, "human": "2013-Nov-15", "m": 11, "y": 2013, "region": 2}"#,
        )
        .unwrap();

        assert_eq!(release.region, Some(Region::NorthAmerica));
        assert_eq!(release.category, Some(DateCategory::YearMonthDay));
        assert_eq!(release.y, Some(2013));
    }
}
