use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::endpoint;
use crate::service::Entity;

/// The kind of site a website URL points to. Shared by game, company, platform and person
/// websites.
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
pub enum WebsiteCategory {
    Official = 1,
    Wikia = 2,
    Wikipedia = 3,
    Facebook = 4,
    Twitter = 5,
    Twitch = 6,
    Instagram = 8,
    #[strum(serialize = "YouTube")]
    Youtube = 9,
    #[strum(serialize = "iPhone")]
    Iphone = 10,
    #[strum(serialize = "iPad")]
    Ipad = 11,
    Android = 12,
    Steam = 13,
    Reddit = 14,
    Itch = 15,
    #[strum(serialize = "Epic Games")]
    EpicGames = 16,
    #[strum(serialize = "GOG")]
    Gog = 17,
    Discord = 18,
}

/// A website associated with a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Website {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<WebsiteCategory>,
    pub game: Option<i64>,
    pub trusted: Option<bool>,
    #[builder(into)]
    pub url: Option<String>,
}

impl Entity for Website {
    const ENDPOINT: &'static str = endpoint::WEBSITES;
    const NAME: &'static str = "Website";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_should_decode() {
        let website: Website = serde_json::from_str(
            r#"{"id": 13411, "category": 13, "game": 1942, "trusted": true, "url": "https://store.steampowered.com/app/292030"}"#,
        )
        .unwrap();

        assert_eq!(website.category, Some(WebsiteCategory::Steam));
        assert_eq!(website.trusted, Some(true));
    }

    #[test]
    fn category_should_render_display_name() {
        assert_eq!(WebsiteCategory::Gog.to_string(), "GOG");
        assert_eq!(WebsiteCategory::EpicGames.to_string(), "Epic Games");
        assert_eq!(WebsiteCategory::Official.to_string(), "Official");
    }
}
