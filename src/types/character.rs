use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};
use crate::types::media::Image;

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
pub enum CharacterGender {
    Male = 0,
    Female = 1,
    Other = 2,
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
pub enum CharacterSpecies {
    Human = 1,
    Alien = 2,
    Animal = 3,
    Android = 4,
    Unknown = 5,
}

/// A video game character.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Character {
    pub id: i64,
    /// Alternative names.
    #[serde(default)]
    #[builder(default)]
    pub akas: Vec<String>,
    #[builder(into)]
    pub country_name: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub games: Vec<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub gender: Option<CharacterGender>,
    pub mug_shot: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    /// People who voiced or portrayed the character.
    #[serde(default)]
    #[builder(default)]
    pub people: Vec<i64>,
    #[builder(into)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub species: Option<CharacterSpecies>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Portrait of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CharacterMugShot {
    pub id: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

impl Entity for Character {
    const ENDPOINT: &'static str = endpoint::CHARACTERS;
    const NAME: &'static str = "Character";
}

impl Searchable for Character {}

impl Entity for CharacterMugShot {
    const ENDPOINT: &'static str = endpoint::CHARACTER_MUG_SHOTS;
    const NAME: &'static str = "CharacterMugShot";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_should_decode() {
        let character: Character = serde_json::from_str(
            r#"{
                "id": 2,
                "akas": ["White Wolf", "Gwynbleidd"],
                "gender": 0,
                "species": 1,
                "games": [80, 478, 1942],
                "name": "Geralt of Rivia",
                "created_at": 1412121600
            }"#,
        )
        .unwrap();

        assert_eq!(character.akas.len(), 2);
        assert_eq!(character.gender, Some(CharacterGender::Male));
        assert_eq!(character.species, Some(CharacterSpecies::Human));
        assert!(character.people.is_empty());
        assert!(character.created_at.is_some());
    }
}
