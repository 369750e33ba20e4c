use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};
use crate::types::character::CharacterGender;
use crate::types::media::Image;
use crate::types::website::WebsiteCategory;

/// A person involved in game development: developer, voice actor, composer.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Person {
    pub id: i64,
    #[builder(into)]
    pub bio: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub characters: Vec<i64>,
    /// ISO 3166-1 numeric country code.
    pub country: Option<i32>,
    #[serde(default)]
    #[builder(default)]
    pub credited_games: Vec<i64>,
    #[builder(into)]
    pub description: Option<String>,
    /// Date of birth.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub dob: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub gender: Option<CharacterGender>,
    pub loves: Option<i64>,
    pub mug_shot: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub nicknames: Vec<String>,
    pub parent: Option<i64>,
    #[builder(into)]
    pub slug: Option<String>,
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

/// Portrait of a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PersonMugShot {
    pub id: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

/// A website of a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PersonWebsite {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<WebsiteCategory>,
    pub trusted: Option<bool>,
    #[builder(into)]
    pub url: Option<String>,
}

/// A credit line of a game: who did what, for which company.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Credit {
    pub id: i64,
    pub character: Option<i64>,
    #[builder(into)]
    pub character_credited_name: Option<String>,
    #[builder(into)]
    pub comment: Option<String>,
    pub company: Option<i64>,
    pub country: Option<i32>,
    #[builder(into)]
    pub credited_name: Option<String>,
    pub game: Option<i64>,
    pub person: Option<i64>,
    pub person_title: Option<i64>,
    pub position: Option<i32>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Person {
    const ENDPOINT: &'static str = endpoint::PEOPLE;
    const NAME: &'static str = "Person";
}

impl Searchable for Person {}

impl Entity for PersonMugShot {
    const ENDPOINT: &'static str = endpoint::PERSON_MUG_SHOTS;
    const NAME: &'static str = "PersonMugShot";
}

impl Entity for PersonWebsite {
    const ENDPOINT: &'static str = endpoint::PERSON_WEBSITES;
    const NAME: &'static str = "PersonWebsite";
}

impl Entity for Credit {
    const ENDPOINT: &'static str = endpoint::CREDITS;
    const NAME: &'static str = "Credit";
}
