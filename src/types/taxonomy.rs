//! Classification resources: genres, themes, keywords, game modes, player perspectives,
//! collections and franchises.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};

/// Genre of a game, e.g. "Role-playing (RPG)".
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Genre {
    pub id: i64,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Theme of a game, e.g. "Open world".
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Theme {
    pub id: i64,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Free-form word or phrase attached to games.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Keyword {
    pub id: i64,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Single player, multiplayer, co-operative and so on.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameMode {
    pub id: i64,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Camera view the player has, e.g. "First person".
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerPerspective {
    pub id: i64,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A series of related games.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Collection {
    pub id: i64,
    #[serde(default)]
    #[builder(default)]
    pub games: Vec<i64>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A list of video game franchises such as Star Wars.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Franchise {
    pub id: i64,
    #[serde(default)]
    #[builder(default)]
    pub games: Vec<i64>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Genre {
    const ENDPOINT: &'static str = endpoint::GENRES;
    const NAME: &'static str = "Genre";
}

impl Searchable for Genre {}

impl Entity for Theme {
    const ENDPOINT: &'static str = endpoint::THEMES;
    const NAME: &'static str = "Theme";
}

impl Searchable for Theme {}

impl Entity for Keyword {
    const ENDPOINT: &'static str = endpoint::KEYWORDS;
    const NAME: &'static str = "Keyword";
}

impl Searchable for Keyword {}

impl Entity for GameMode {
    const ENDPOINT: &'static str = endpoint::GAME_MODES;
    const NAME: &'static str = "GameMode";
}

impl Searchable for GameMode {}

impl Entity for PlayerPerspective {
    const ENDPOINT: &'static str = endpoint::PLAYER_PERSPECTIVES;
    const NAME: &'static str = "PlayerPerspective";
}

impl Searchable for PlayerPerspective {}

impl Entity for Collection {
    const ENDPOINT: &'static str = endpoint::COLLECTIONS;
    const NAME: &'static str = "Collection";
}

impl Searchable for Collection {}

impl Entity for Franchise {
    const ENDPOINT: &'static str = endpoint::FRANCHISES;
    const NAME: &'static str = "Franchise";
}

impl Searchable for Franchise {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_timestamps_should_decode_from_unix_seconds() {
        let genre: Genre = serde_json::from_str(
            r#"{"id": 12, "name": "Role-playing (RPG)", "slug": "role-playing-rpg", "created_at": 1297555200, "updated_at": 1323216000}"#,
        )
        .unwrap();

        assert_eq!(genre.name.as_deref(), Some("Role-playing (RPG)"));
        assert_eq!(
            genre.created_at.map(|t| t.to_rfc3339()),
            Some("2011-02-13T00:00:00+00:00".to_owned())
        );
    }

    #[test]
    fn collection_without_games_should_default_to_empty() {
        let collection: Collection =
            serde_json::from_str(r#"{"id": 106, "name": "The Witcher"}"#).unwrap();

        assert!(collection.games.is_empty());
        assert_eq!(collection.created_at, None);
    }
}
