//! Companies, their logos and websites, their involvement in games, and game engines.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};
use crate::types::DateCategory;
use crate::types::media::Image;
use crate::types::website::WebsiteCategory;

/// A video game company: developer, publisher, or both.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Company {
    pub id: i64,
    /// Date the company got a new ID (acquisition, rename).
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub change_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub change_date_category: Option<DateCategory>,
    pub changed_company_id: Option<i64>,
    /// ISO 3166-1 numeric country code.
    pub country: Option<i32>,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub developed: Vec<i64>,
    pub logo: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    pub parent: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub published: Vec<i64>,
    #[builder(into)]
    pub slug: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub start_date_category: Option<DateCategory>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub websites: Vec<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Logo of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CompanyLogo {
    pub id: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

/// A website of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CompanyWebsite {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<WebsiteCategory>,
    pub trusted: Option<bool>,
    #[builder(into)]
    pub url: Option<String>,
}

/// The role a company played in a game.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct InvolvedCompany {
    pub id: i64,
    pub company: Option<i64>,
    pub developer: Option<bool>,
    pub game: Option<i64>,
    pub porting: Option<bool>,
    pub publisher: Option<bool>,
    pub supporting: Option<bool>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A video game engine such as Unreal Engine.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameEngine {
    pub id: i64,
    #[serde(default)]
    #[builder(default)]
    pub companies: Vec<i64>,
    #[builder(into)]
    pub description: Option<String>,
    pub logo: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub platforms: Vec<i64>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Logo of a game engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameEngineLogo {
    pub id: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

impl Entity for Company {
    const ENDPOINT: &'static str = endpoint::COMPANIES;
    const NAME: &'static str = "Company";
}

impl Searchable for Company {}

impl Entity for CompanyLogo {
    const ENDPOINT: &'static str = endpoint::COMPANY_LOGOS;
    const NAME: &'static str = "CompanyLogo";
}

impl Entity for CompanyWebsite {
    const ENDPOINT: &'static str = endpoint::COMPANY_WEBSITES;
    const NAME: &'static str = "CompanyWebsite";
}

impl Entity for InvolvedCompany {
    const ENDPOINT: &'static str = endpoint::INVOLVED_COMPANIES;
    const NAME: &'static str = "InvolvedCompany";
}

impl Entity for GameEngine {
    const ENDPOINT: &'static str = endpoint::GAME_ENGINES;
    const NAME: &'static str = "GameEngine";
}

impl Searchable for GameEngine {}

impl Entity for GameEngineLogo {
    const ENDPOINT: &'static str = endpoint::GAME_ENGINE_LOGOS;
    const NAME: &'static str = "GameEngineLogo";
}
