use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::endpoint;
use crate::service::Entity;

/// The rating board issuing an [`AgeRating`].
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
#[strum(serialize_all = "UPPERCASE")]
pub enum AgeRatingCategory {
    Esrb = 1,
    Pegi = 2,
}

/// The rating itself. Values 1 to 5 belong to PEGI, 6 to 12 to the ESRB.
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
pub enum AgeRatingRating {
    #[strum(serialize = "3")]
    Three = 1,
    #[strum(serialize = "7")]
    Seven = 2,
    #[strum(serialize = "12")]
    Twelve = 3,
    #[strum(serialize = "16")]
    Sixteen = 4,
    #[strum(serialize = "18")]
    Eighteen = 5,
    #[strum(serialize = "RP")]
    RatingPending = 6,
    #[strum(serialize = "EC")]
    EarlyChildhood = 7,
    #[strum(serialize = "E")]
    Everyone = 8,
    #[strum(serialize = "E10+")]
    EveryoneTenPlus = 9,
    #[strum(serialize = "T")]
    Teen = 10,
    #[strum(serialize = "M")]
    Mature = 11,
    #[strum(serialize = "AO")]
    AdultsOnly = 12,
}

/// An age rating such as PEGI 16.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AgeRating {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub category: Option<AgeRatingCategory>,
    #[serde(default)]
    #[builder(default)]
    pub content_descriptions: Vec<i64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::known_code")]
    pub rating: Option<AgeRatingRating>,
    #[builder(into)]
    pub rating_cover_url: Option<String>,
    #[builder(into)]
    pub synopsis: Option<String>,
}

/// A content descriptor attached to an age rating, e.g. "Blood and Gore".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AgeRatingContentDescription {
    pub id: i64,
    /// Board-specific descriptor code.
    pub category: Option<i32>,
    #[builder(into)]
    pub description: Option<String>,
}

impl Entity for AgeRating {
    const ENDPOINT: &'static str = endpoint::AGE_RATINGS;
    const NAME: &'static str = "AgeRating";
}

impl Entity for AgeRatingContentDescription {
    const ENDPOINT: &'static str = endpoint::AGE_RATING_CONTENT_DESCRIPTIONS;
    const NAME: &'static str = "AgeRatingContentDescription";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_rating_should_decode() {
        let rating: AgeRating = serde_json::from_str(
            r#"{"id": 3654, "category": 2, "rating": 5, "content_descriptions": [4203, 4204]}"#,
        )
        .unwrap();

        assert_eq!(rating.category, Some(AgeRatingCategory::Pegi));
        assert_eq!(rating.rating, Some(AgeRatingRating::Eighteen));
        assert_eq!(
            format!("{} {}", AgeRatingCategory::Pegi, AgeRatingRating::Eighteen),
            "PEGI 18"
        );
    }

    #[test]
    fn esrb_rating_should_render_letter() {
        assert_eq!(AgeRatingCategory::Esrb.to_string(), "ESRB");
        assert_eq!(AgeRatingRating::EveryoneTenPlus.to_string(), "E10+");
    }
}
