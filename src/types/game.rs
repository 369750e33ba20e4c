//! Games and the resources that only make sense next to one: alternative names, external store
//! entries, editions, multiplayer capabilities and completion times.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::{Entity, Searchable};

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
pub enum GameCategory {
    #[strum(serialize = "Main Game")]
    MainGame = 0,
    #[strum(serialize = "DLC / Addon")]
    DlcAddon = 1,
    Expansion = 2,
    Bundle = 3,
    #[strum(serialize = "Standalone Expansion")]
    StandaloneExpansion = 4,
    Mod = 5,
    Episode = 6,
    Season = 7,
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
pub enum GameStatus {
    Released = 0,
    Alpha = 2,
    Beta = 3,
    #[strum(serialize = "Early Access")]
    EarlyAccess = 4,
    Offline = 5,
    Cancelled = 6,
    Rumored = 7,
}

/// A video game, the central resource of the API.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Game {
    pub id: i64,
    #[serde(default)]
    #[builder(default)]
    pub age_ratings: Vec<i64>,
    /// Rating based on external critic scores.
    pub aggregated_rating: Option<f64>,
    pub aggregated_rating_count: Option<i32>,
    #[serde(default)]
    #[builder(default)]
    pub alternative_names: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub artworks: Vec<i64>,
    /// Games this bundle contains.
    #[serde(default)]
    #[builder(default)]
    pub bundles: Vec<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<GameCategory>,
    pub collection: Option<i64>,
    pub cover: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub dlcs: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub expansions: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub external_games: Vec<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub first_release_date: Option<DateTime<Utc>>,
    pub follows: Option<i64>,
    /// Main franchise.
    pub franchise: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub franchises: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub game_engines: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub game_modes: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub genres: Vec<i64>,
    /// Follows before release.
    pub hypes: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub involved_companies: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub keywords: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub multiplayer_modes: Vec<i64>,
    #[builder(into)]
    pub name: Option<String>,
    /// The main game, when this is a DLC or expansion.
    pub parent_game: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub platforms: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub player_perspectives: Vec<i64>,
    pub popularity: Option<f64>,
    pub pulse_count: Option<i64>,
    /// Average IGDB user rating.
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    #[serde(default)]
    #[builder(default)]
    pub release_dates: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub screenshots: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub similar_games: Vec<i64>,
    #[builder(into)]
    pub slug: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub standalone_expansions: Vec<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub status: Option<GameStatus>,
    #[builder(into)]
    pub storyline: Option<String>,
    #[builder(into)]
    pub summary: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub themes: Vec<i64>,
    pub time_to_beat: Option<i64>,
    /// Average of `rating` and `aggregated_rating`.
    pub total_rating: Option<f64>,
    pub total_rating_count: Option<i32>,
    #[builder(into)]
    pub url: Option<String>,
    /// The game this is an edition of.
    pub version_parent: Option<i64>,
    #[builder(into)]
    pub version_title: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub videos: Vec<i64>,
    #[serde(default)]
    #[builder(default)]
    pub websites: Vec<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Another name a game is known by, e.g. an acronym or a regional title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AlternativeName {
    pub id: i64,
    #[builder(into)]
    pub comment: Option<String>,
    pub game: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
}

/// The service an [`ExternalGame`] entry lives on.
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
pub enum ExternalGameCategory {
    Steam = 1,
    #[strum(serialize = "GOG")]
    Gog = 5,
    #[strum(serialize = "YouTube")]
    Youtube = 10,
    Microsoft = 11,
    Apple = 13,
    Twitch = 14,
    Android = 15,
}

/// A game's entry on a third-party service such as Steam.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ExternalGame {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<ExternalGameCategory>,
    pub game: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    /// Identifier on the external service, e.g. the Steam app ID.
    #[builder(into)]
    pub uid: Option<String>,
    #[builder(into)]
    pub url: Option<String>,
    pub year: Option<i32>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The editions of a game and the features that tell them apart.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameVersion {
    pub id: i64,
    #[serde(default)]
    #[builder(default)]
    pub features: Vec<i64>,
    pub game: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub games: Vec<i64>,
    #[builder(into)]
    pub url: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
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
pub enum GameVersionFeatureCategory {
    Boolean = 0,
    Description = 1,
}

/// A feature that differs between editions, e.g. "Soundtrack".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameVersionFeature {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<GameVersionFeatureCategory>,
    #[builder(into)]
    pub description: Option<String>,
    pub position: Option<i32>,
    #[builder(into)]
    pub title: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub values: Vec<i64>,
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
pub enum IncludedFeature {
    #[strum(serialize = "Not included")]
    NotIncluded = 0,
    Included = 1,
    #[strum(serialize = "Pre-order only")]
    PreOrderOnly = 2,
}

/// Whether a given edition has a given feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameVersionFeatureValue {
    pub id: i64,
    pub game: Option<i64>,
    pub game_feature: Option<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub included_feature: Option<IncludedFeature>,
    #[builder(into)]
    pub note: Option<String>,
}

/// Multiplayer capabilities of a game on a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct MultiplayerMode {
    pub id: i64,
    pub campaigncoop: Option<bool>,
    pub dropin: Option<bool>,
    pub game: Option<i64>,
    pub lancoop: Option<bool>,
    pub offlinecoop: Option<bool>,
    pub offlinecoopmax: Option<i32>,
    pub offlinemax: Option<i32>,
    pub onlinecoop: Option<bool>,
    pub onlinecoopmax: Option<i32>,
    pub onlinemax: Option<i32>,
    pub platform: Option<i64>,
    pub splitscreen: Option<bool>,
    pub splitscreenonline: Option<bool>,
}

/// Average completion times, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TimeToBeat {
    pub id: i64,
    /// 100% completion.
    pub completely: Option<i64>,
    pub game: Option<i64>,
    /// Main story only, rushed.
    pub hastly: Option<i64>,
    /// Main story plus some extras.
    pub normally: Option<i64>,
}

impl Entity for Game {
    const ENDPOINT: &'static str = endpoint::GAMES;
    const NAME: &'static str = "Game";
}

impl Searchable for Game {}

impl Entity for AlternativeName {
    const ENDPOINT: &'static str = endpoint::ALTERNATIVE_NAMES;
    const NAME: &'static str = "AlternativeName";
}

impl Entity for ExternalGame {
    const ENDPOINT: &'static str = endpoint::EXTERNAL_GAMES;
    const NAME: &'static str = "ExternalGame";
}

impl Entity for GameVersion {
    const ENDPOINT: &'static str = endpoint::GAME_VERSIONS;
    const NAME: &'static str = "GameVersion";
}

impl Entity for GameVersionFeature {
    const ENDPOINT: &'static str = endpoint::GAME_VERSION_FEATURES;
    const NAME: &'static str = "GameVersionFeature";
}

impl Entity for GameVersionFeatureValue {
    const ENDPOINT: &'static str = endpoint::GAME_VERSION_FEATURE_VALUES;
    const NAME: &'static str = "GameVersionFeatureValue";
}

impl Entity for MultiplayerMode {
    const ENDPOINT: &'static str = endpoint::MULTIPLAYER_MODES;
    const NAME: &'static str = "MultiplayerMode";
}

impl Entity for TimeToBeat {
    const ENDPOINT: &'static str = endpoint::TIME_TO_BEATS;
    const NAME: &'static str = "TimeToBeat";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_should_decode_partial_fields() {
        let game: Game = serde_json::from_str(
            r#"{
                "id": 1942,
                "category": 0,
                "first_release_date": 1431993600,
                "genres": [12, 31],
                "name": "The Witcher 3: Wild Hunt",
                "platforms": [6, 48, 49],
                "rating": 93.5,
                "status": 0,
                "total_rating_count": 2400
            }"#,
        )
        .unwrap();

        assert_eq!(game.category, Some(GameCategory::MainGame));
        assert_eq!(game.status, Some(GameStatus::Released));
        assert_eq!(game.platforms, vec![6, 48, 49]);
        assert_eq!(
            game.first_release_date.map(|t| t.date_naive().to_string()),
            Some("2015-05-19".to_owned())
        );
        assert!(game.dlcs.is_empty());
        assert_eq!(game.summary, None);
    }

    #[test]
    fn unknown_category_code_should_decode_as_none() {
        let game: Game = serde_json::from_str(
            r#"{"id": 1942, "name": "The Witcher 3: Wild Hunt", "category": 99, "status": 0}"#,
        )
        .unwrap();

        assert_eq!(game.category, None);
        assert_eq!(game.status, Some(GameStatus::Released));
        assert_eq!(game.name.as_deref(), Some("The Witcher 3: Wild Hunt"));

        serde_json::from_str::<Game>(r#"{"id": 1942, "category": "main"}"#).unwrap_err();
    }

    #[test]
    fn game_should_decode_id_only() {
        let game: Game = serde_json::from_str(r#"{"id": 7}"#).unwrap();

        assert_eq!(game, Game::builder().id(7).build());
    }

    #[test]
    fn game_should_serialize_timestamps_as_seconds() {
        let game: Game =
            serde_json::from_str(r#"{"id": 1, "created_at": 1297555200}"#).unwrap();

        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["created_at"], serde_json::json!(1_297_555_200));
    }

    #[test]
    fn category_should_render_display_name() {
        assert_eq!(GameCategory::DlcAddon.to_string(), "DLC / Addon");
        assert_eq!(GameStatus::EarlyAccess.to_string(), "Early Access");
        assert_eq!(ExternalGameCategory::Gog.to_string(), "GOG");
    }

    #[test]
    fn multiplayer_mode_should_decode() {
        let mode: MultiplayerMode = serde_json::from_str(
            r#"{"id": 3, "campaigncoop": true, "onlinecoopmax": 4, "platform": 48}"#,
        )
        .unwrap();

        assert_eq!(mode.campaigncoop, Some(true));
        assert_eq!(mode.onlinecoopmax, Some(4));
        assert_eq!(mode.splitscreen, None);
    }
}
