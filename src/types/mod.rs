//! Entity types for the IGDB v3 API.
//!
//! Every resource the API exposes is a flat struct here. Relationships between resources are
//! plain IDs (`i64`) or ID lists; resolving them takes another request through the matching
//! [`Service`](crate::service::Service).
//!
//! Only `id` is always present: everything else is populated according to the `fields`
//! directive of the request, so all other fields are `Option`s or default to empty lists.
//!
//! Timestamps are Unix seconds on the wire and decode into [`DateTime<Utc>`].
//!
//! # Example
//!
//! ```
//! use igdb_client::types::{Game, GameCategory};
//!
//! let game: Game = serde_json::from_str(r#"{"id": 1942, "name": "The Witcher 3", "category": 0}"#)?;
//!
//! assert_eq!(game.name.as_deref(), Some("The Witcher 3"));
//! assert_eq!(game.category, Some(GameCategory::MainGame));
//! # Ok::<(), serde_json::Error>(())
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

pub mod achievement;
pub mod character;
pub mod company;
pub mod game;
pub mod media;
pub mod person;
pub mod platform;
pub mod pulse;
pub mod rating;
pub mod release;
pub mod status;
pub mod taxonomy;
pub mod website;

/// Date and time types used for entity timestamps.
pub use chrono::{DateTime, NaiveDate, Utc};

pub use achievement::{Achievement, AchievementCategory, AchievementIcon, AchievementRank};
pub use character::{Character, CharacterGender, CharacterMugShot, CharacterSpecies};
pub use company::{Company, CompanyLogo, CompanyWebsite, GameEngine, GameEngineLogo, InvolvedCompany};
pub use game::{
    AlternativeName, ExternalGame, ExternalGameCategory, Game, GameCategory, GameStatus,
    GameVersion, GameVersionFeature, GameVersionFeatureCategory, GameVersionFeatureValue,
    IncludedFeature, MultiplayerMode, TimeToBeat,
};
pub use media::{Artwork, Cover, GameVideo, Image, ImageSize, Screenshot, UnknownFields};
pub use person::{Credit, Person, PersonMugShot, PersonWebsite};
pub use platform::{
    Platform, PlatformCategory, PlatformFamily, PlatformLogo, PlatformVersion,
    PlatformVersionCompany, PlatformVersionReleaseDate, PlatformWebsite,
};
pub use pulse::{Feed, FeedCategory, Pulse, PulseGroup, PulseSource, PulseUrl};
pub use rating::{AgeRating, AgeRatingCategory, AgeRatingContentDescription, AgeRatingRating};
pub use release::ReleaseDate;
pub use status::{ApiStatus, UsageReport, UsageReports};
pub use taxonomy::{Collection, Franchise, GameMode, Genre, Keyword, PlayerPerspective, Theme};
pub use website::{Website, WebsiteCategory};

/// Response of every `{endpoint}count` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Count {
    pub count: u64,
}

/// Precision of a partial date, e.g. a release known only to the quarter.
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
pub enum DateCategory {
    #[strum(serialize = "YYYYMMMMDD")]
    YearMonthDay = 0,
    #[strum(serialize = "YYYYMMMM")]
    YearMonth = 1,
    #[strum(serialize = "YYYY")]
    Year = 2,
    #[strum(serialize = "YYYYQ1")]
    YearQ1 = 3,
    #[strum(serialize = "YYYYQ2")]
    YearQ2 = 4,
    #[strum(serialize = "YYYYQ3")]
    YearQ3 = 5,
    #[strum(serialize = "YYYYQ4")]
    YearQ4 = 6,
    #[strum(serialize = "TBD")]
    Tbd = 7,
}

/// Release region.
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
pub enum Region {
    Europe = 1,
    #[strum(serialize = "North America")]
    NorthAmerica = 2,
    Australia = 3,
    #[strum(serialize = "New Zealand")]
    NewZealand = 4,
    Japan = 5,
    China = 6,
    Asia = 7,
    Worldwide = 8,
    Korea = 9,
    Brazil = 10,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_category_should_decode_from_code() {
        let category: DateCategory = serde_json::from_str("3").unwrap();

        assert_eq!(category, DateCategory::YearQ1);
        assert_eq!(category.to_string(), "YYYYQ1");
    }

    #[test]
    fn region_should_encode_as_code() {
        assert_eq!(serde_json::to_string(&Region::NorthAmerica).unwrap(), "2");
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
    }

    #[test]
    fn unknown_region_code_should_fail() {
        serde_json::from_str::<Region>("42").unwrap_err();
    }

    #[test]
    fn count_should_decode() {
        let count: Count = serde_json::from_str(r#"{"count": 100}"#).unwrap();

        assert_eq!(count.count, 100);
    }
}
