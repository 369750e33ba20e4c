//! Resource paths, relative to the client host.
//!
//! Every path ends in `/`, so the count and schema endpoints are derived by appending to it (see
//! [`count`] and [`meta`]).

pub const ACHIEVEMENTS: &str = "achievements/";
pub const ACHIEVEMENT_ICONS: &str = "achievement_icons/";
pub const AGE_RATINGS: &str = "age_ratings/";
pub const AGE_RATING_CONTENT_DESCRIPTIONS: &str = "age_rating_content_descriptions/";
pub const ALTERNATIVE_NAMES: &str = "alternative_names/";
pub const ARTWORKS: &str = "artworks/";
pub const CHARACTERS: &str = "characters/";
pub const CHARACTER_MUG_SHOTS: &str = "character_mug_shots/";
pub const COLLECTIONS: &str = "collections/";
pub const COMPANIES: &str = "companies/";
pub const COMPANY_LOGOS: &str = "company_logos/";
pub const COMPANY_WEBSITES: &str = "company_websites/";
pub const COVERS: &str = "covers/";
pub const CREDITS: &str = "credits/";
pub const EXTERNAL_GAMES: &str = "external_games/";
pub const FEEDS: &str = "feeds/";
pub const FRANCHISES: &str = "franchises/";
pub const GAMES: &str = "games/";
pub const GAME_ENGINES: &str = "game_engines/";
pub const GAME_ENGINE_LOGOS: &str = "game_engine_logos/";
pub const GAME_MODES: &str = "game_modes/";
pub const GAME_VERSIONS: &str = "game_versions/";
pub const GAME_VERSION_FEATURES: &str = "game_version_features/";
pub const GAME_VERSION_FEATURE_VALUES: &str = "game_version_feature_values/";
pub const GAME_VIDEOS: &str = "game_videos/";
pub const GENRES: &str = "genres/";
pub const INVOLVED_COMPANIES: &str = "involved_companies/";
pub const KEYWORDS: &str = "keywords/";
pub const MULTIPLAYER_MODES: &str = "multiplayer_modes/";
pub const PEOPLE: &str = "people/";
pub const PERSON_MUG_SHOTS: &str = "person_mug_shots/";
pub const PERSON_WEBSITES: &str = "person_websites/";
pub const PLATFORMS: &str = "platforms/";
pub const PLATFORM_FAMILIES: &str = "platform_families/";
pub const PLATFORM_LOGOS: &str = "platform_logos/";
pub const PLATFORM_VERSIONS: &str = "platform_versions/";
pub const PLATFORM_VERSION_COMPANIES: &str = "platform_version_companies/";
pub const PLATFORM_VERSION_RELEASE_DATES: &str = "platform_version_release_dates/";
pub const PLATFORM_WEBSITES: &str = "platform_websites/";
pub const PLAYER_PERSPECTIVES: &str = "player_perspectives/";
pub const PULSES: &str = "pulses/";
pub const PULSE_GROUPS: &str = "pulse_groups/";
pub const PULSE_SOURCES: &str = "pulse_sources/";
pub const PULSE_URLS: &str = "pulse_urls/";
pub const RELEASE_DATES: &str = "release_dates/";
pub const SCREENSHOTS: &str = "screenshots/";
pub const THEMES: &str = "themes/";
pub const TIME_TO_BEATS: &str = "time_to_beats/";
pub const WEBSITES: &str = "websites/";

/// Plan and usage information for the API key in use.
pub const API_STATUS: &str = "api_status";

/// The count endpoint for `endpoint`, e.g. `games/count`.
#[must_use]
pub fn count(endpoint: &str) -> String {
    format!("{endpoint}count")
}

/// The schema endpoint for `endpoint`, e.g. `games/meta`.
#[must_use]
pub fn meta(endpoint: &str) -> String {
    format!("{endpoint}meta")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_should_append_suffix() {
        assert_eq!(count(GAMES), "games/count");
        assert_eq!(meta(PLATFORM_VERSION_RELEASE_DATES), "platform_version_release_dates/meta");
    }
}
