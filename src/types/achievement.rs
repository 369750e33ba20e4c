use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{TimestampSeconds, serde_as};

use crate::endpoint;
use crate::service::Entity;
use crate::types::media::Image;

/// The platform network an achievement belongs to.
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
pub enum AchievementCategory {
    #[strum(serialize = "PlayStation")]
    Playstation = 1,
    Xbox = 2,
    Steam = 3,
}

/// Trophy tier (PlayStation) of an achievement.
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
pub enum AchievementRank {
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
}

/// An in-game achievement or trophy.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Achievement {
    pub id: i64,
    pub achievement_icon: Option<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<AchievementCategory>,
    #[builder(into)]
    pub description: Option<String>,
    /// Identifier of the achievement on its own network.
    #[builder(into)]
    pub external_id: Option<String>,
    pub game: Option<i64>,
    pub language: Option<i32>,
    #[builder(into)]
    pub name: Option<String>,
    /// Number of players who unlocked it.
    pub owners: Option<i64>,
    pub owners_percentage: Option<f64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub rank: Option<AchievementRank>,
    #[builder(into)]
    pub slug: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<i64>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Icon of an achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AchievementIcon {
    pub id: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

impl Entity for Achievement {
    const ENDPOINT: &'static str = endpoint::ACHIEVEMENTS;
    const NAME: &'static str = "Achievement";
}

impl Entity for AchievementIcon {
    const ENDPOINT: &'static str = endpoint::ACHIEVEMENT_ICONS;
    const NAME: &'static str = "AchievementIcon";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_should_decode() {
        let achievement: Achievement = serde_json::from_str(
            r#"{
                "id": 8734,
                "achievement_icon": 8734,
                "category": 1,
                "description": "Finish the game on any difficulty",
                "game": 1942,
                "name": "Passed the Trial",
                "owners_percentage": 31.4,
                "rank": 3,
                "tags": [1, 268435461]
            }"#,
        )
        .unwrap();

        assert_eq!(achievement.category, Some(AchievementCategory::Playstation));
        assert_eq!(achievement.rank, Some(AchievementRank::Gold));
        assert_eq!(achievement.tags, vec![1, 268_435_461]);
        assert_eq!(achievement.owners, None);
    }
}
