//! Images and videos.
//!
//! Every image resource shares the [`Image`] payload: the `image_id` identifies the picture on
//! the IGDB image CDN and [`Image::sized_url`] builds a link to any of its pre-rendered sizes.

use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;
use crate::endpoint;
use crate::error::InvalidArgument;
use crate::service::Entity;

const IMAGE_BASE: &str = "https://images.igdb.com/igdb/image/upload/";

/// Pre-rendered sizes available on the image CDN.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ImageSize {
    /// 90 x 128, fit
    CoverSmall,
    /// 264 x 374, fit
    CoverBig,
    /// 569 x 320, lfill, center gravity
    ScreenshotMed,
    /// 889 x 500, lfill, center gravity
    ScreenshotBig,
    /// 1280 x 720, lfill, center gravity
    ScreenshotHuge,
    /// 284 x 160, fit
    LogoMed,
    /// 90 x 90, thumb, center gravity
    Thumb,
    /// 35 x 35, thumb, center gravity
    Micro,
    /// 1280 x 720, fit, center gravity
    #[strum(serialize = "720p")]
    Hd720,
    /// 1920 x 1080, fit, center gravity
    #[strum(serialize = "1080p")]
    Hd1080,
}

/// Fields shared by every image resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Image {
    pub alpha_channel: Option<bool>,
    pub animated: Option<bool>,
    pub height: Option<i32>,
    pub width: Option<i32>,
    /// CDN identifier, used by [`Image::sized_url`].
    #[builder(into)]
    pub image_id: Option<String>,
    /// Thumbnail URL as returned by the API (protocol relative).
    #[builder(into)]
    pub url: Option<String>,
    /// Keys of the enclosing resource that no field accounts for.
    #[serde(flatten)]
    #[builder(default)]
    pub unknown: UnknownFields,
}

/// Leftover keys of an image resource.
///
/// [`Image`] is flattened into its parent resources, and flattening hides unknown keys from the
/// usual unknown-field reporting in decoding. They are collected here instead, and with the
/// `tracing` feature each one is logged at `warn` level as it is decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UnknownFields(BTreeMap<String, Value>);

impl UnknownFields {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for UnknownFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields = BTreeMap::<String, Value>::deserialize(deserializer)?;

        #[cfg(feature = "tracing")]
        for (field, value) in &fields {
            tracing::warn!(
                type_name = "Image",
                field = %field,
                value = %value,
                "unknown field in API response"
            );
        }

        Ok(Self(fields))
    }
}

impl Image {
    /// Builds the CDN URL for this image at `size`. `ratio` selects the pixel density and must be
    /// `1` or `2` (retina).
    ///
    /// ```
    /// use igdb_client::types::{Image, ImageSize};
    ///
    /// let image = Image::builder().image_id("co1wyy").build();
    /// assert_eq!(
    ///     image.sized_url(ImageSize::CoverBig, 2)?,
    ///     "https://images.igdb.com/igdb/image/upload/t_cover_big_2x/co1wyy.jpg"
    /// );
    /// # Ok::<(), igdb_client::error::Error>(())
    /// ```
    pub fn sized_url(&self, size: ImageSize, ratio: u8) -> Result<String> {
        let image_id = self
            .image_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| InvalidArgument::Other {
                reason: "image has no image_id".to_owned(),
            })?;

        let density = match ratio {
            1 => "",
            2 => "_2x",
            _ => {
                return Err(InvalidArgument::OutOfRange {
                    option: "ratio",
                    value: i64::from(ratio),
                    min: 1,
                    max: 2,
                }
                .into());
            }
        };

        Ok(format!("{IMAGE_BASE}t_{size}{density}/{image_id}.jpg"))
    }
}

/// Cover art of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Cover {
    pub id: i64,
    pub game: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

/// Official artwork for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Artwork {
    pub id: i64,
    pub game: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

/// In-game screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Screenshot {
    pub id: i64,
    pub game: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub image: Image,
}

/// A video (trailer, gameplay) hosted on YouTube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameVideo {
    pub id: i64,
    pub game: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    /// YouTube video ID.
    #[builder(into)]
    pub video_id: Option<String>,
}

impl GameVideo {
    /// The YouTube watch URL, when the video ID is known.
    #[must_use]
    pub fn youtube_url(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(|id| format!("https://www.youtube.com/watch?v={id}"))
    }
}

impl Entity for Cover {
    const ENDPOINT: &'static str = endpoint::COVERS;
    const NAME: &'static str = "Cover";
}

impl Entity for Artwork {
    const ENDPOINT: &'static str = endpoint::ARTWORKS;
    const NAME: &'static str = "Artwork";
}

impl Entity for Screenshot {
    const ENDPOINT: &'static str = endpoint::SCREENSHOTS;
    const NAME: &'static str = "Screenshot";
}

impl Entity for GameVideo {
    const ENDPOINT: &'static str = endpoint::GAME_VIDEOS;
    const NAME: &'static str = "GameVideo";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn sized_url_should_succeed() {
        let image = Image::builder().image_id("sc6lfa").build();

        assert_eq!(
            image.sized_url(ImageSize::ScreenshotHuge, 1).unwrap(),
            "https://images.igdb.com/igdb/image/upload/t_screenshot_huge/sc6lfa.jpg"
        );
        assert_eq!(
            image.sized_url(ImageSize::Hd1080, 2).unwrap(),
            "https://images.igdb.com/igdb/image/upload/t_1080p_2x/sc6lfa.jpg"
        );
    }

    #[test]
    fn sized_url_with_bad_ratio_should_fail() {
        let image = Image::builder().image_id("sc6lfa").build();

        for ratio in [0, 3] {
            let err = image.sized_url(ImageSize::Thumb, ratio).unwrap_err();
            assert_eq!(err.kind(), Kind::Validation);
        }
    }

    #[test]
    fn sized_url_without_image_id_should_fail() {
        let err = Image::default()
            .sized_url(ImageSize::Micro, 1)
            .unwrap_err();
        assert_eq!(err.kind(), Kind::Validation);

        let err = Image::builder()
            .image_id(" ")
            .build()
            .sized_url(ImageSize::Micro, 1)
            .unwrap_err();
        assert_eq!(err.kind(), Kind::Validation);
    }

    #[test]
    fn image_size_should_render_cdn_names() {
        assert_eq!(ImageSize::CoverSmall.to_string(), "cover_small");
        assert_eq!(ImageSize::LogoMed.to_string(), "logo_med");
        assert_eq!(ImageSize::Hd720.to_string(), "720p");
    }

    #[test]
    fn cover_should_flatten_image_fields() {
        let cover: Cover = serde_json::from_str(
            r#"{
                "id": 89386,
                "game": 1942,
                "alpha_channel": false,
                "animated": false,
                "height": 1559,
                "width": 1170,
                "image_id": "co1wyy",
                "url": "//images.igdb.com/igdb/image/upload/t_thumb/co1wyy.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(cover.id, 89386);
        assert_eq!(cover.game, Some(1942));
        assert_eq!(cover.image.height, Some(1559));
        assert_eq!(cover.image.image_id.as_deref(), Some("co1wyy"));
        assert!(cover.image.unknown.is_empty(), "no leftover keys expected");
    }

    #[test]
    fn cover_should_collect_unknown_fields() {
        let json = serde_json::json!({
            "id": 89386,
            "game": 1942,
            "image_id": "co1wyy",
            "checksum": "4a1ce5e3-9d52-4e3c-a7be-d1a4f5d0a2d1"
        });

        let cover: Cover = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(cover.image.image_id.as_deref(), Some("co1wyy"));
        assert_eq!(cover.image.unknown.keys().collect::<Vec<_>>(), ["checksum"]);
        assert_eq!(
            cover.image.unknown.get("checksum"),
            Some(&serde_json::json!("4a1ce5e3-9d52-4e3c-a7be-d1a4f5d0a2d1"))
        );
        assert_eq!(serde_json::to_value(&cover).unwrap()["checksum"], json["checksum"]);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn unknown_cover_field_should_be_logged() {
        let body = br#"[{"id": 89386, "game": 1942, "image_id": "co1wyy", "checksum": "4a1c"}]"#;

        let output = crate::serde_helpers::capture_logs(|| {
            let covers: Vec<Cover> =
                crate::serde_helpers::decode("covers/", body).expect("decoding failed");
            assert_eq!(covers[0].image.image_id.as_deref(), Some("co1wyy"));
        });

        assert!(
            output.contains("unknown field in API response"),
            "no warning in {output}"
        );
        assert!(output.contains("checksum"), "field not named in {output}");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn unknown_logo_field_should_be_logged() {
        let json = serde_json::json!({ "id": 1, "image_id": "pl6f", "checksum": "77e2" });

        let output = crate::serde_helpers::capture_logs(|| {
            let logo: crate::types::PlatformLogo = serde_json::from_value(json).unwrap();
            assert_eq!(logo.image.unknown.keys().collect::<Vec<_>>(), ["checksum"]);
        });

        assert!(output.contains("checksum"), "field not named in {output}");
    }

    #[test]
    fn youtube_url_should_use_video_id() {
        let video = GameVideo::builder().id(1).video_id("XHrskkHf958").build();

        assert_eq!(
            video.youtube_url().as_deref(),
            Some("https://www.youtube.com/watch?v=XHrskkHf958")
        );
    }
}
