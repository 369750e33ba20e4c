//! Response decoding.
//!
//! Bodies are first parsed as untyped JSON, so that an empty or garbled body is reported as
//! [`MalformedResponse`](crate::error::MalformedResponse) regardless of the target type. With the
//! `tracing` feature enabled, fields the API returns but the entity structs do not know about are
//! logged as warnings, which is how schema additions on the IGDB side get noticed.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize as _, Deserializer};
use serde_json::Value;

use crate::Result;
use crate::error::Error;

/// Decodes a raw response body from `path` into `T`.
///
/// An empty (or whitespace only) body, invalid JSON, or JSON of the wrong shape all surface as
/// [`Kind::MalformedResponse`](crate::error::Kind::MalformedResponse).
pub(crate) fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::malformed(path.to_owned(), "empty body"));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::malformed(path.to_owned(), e.to_string()))?;

    from_value(path, &value)
}

/// Decodes an already parsed response in a single pass that records both the keys `T` skips and,
/// on failure, the JSON path that broke. Both are logged against the endpoint `path`.
///
/// The malformed reason carries the JSON path, e.g. `[0].category: invalid value`.
#[cfg(feature = "tracing")]
fn from_value<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T> {
    let mut skipped = Vec::new();
    let mut record = |field: serde_ignored::Path<'_>| skipped.push(field.to_string());
    let ignored = serde_ignored::Deserializer::new(value, &mut record);

    match serde_path_to_error::deserialize::<_, T>(ignored) {
        Ok(decoded) => {
            for field in skipped {
                tracing::warn!(
                    endpoint = path,
                    field = %field,
                    value = %format_value(lookup_value(value, &field)),
                    "unknown field in API response"
                );
            }
            Ok(decoded)
        }
        Err(e) => {
            let location = e.path().to_string();
            tracing::error!(
                endpoint = path,
                location = %location,
                value = %format_value(lookup_value(value, &location)),
                error = %e.inner(),
                "cannot decode API response"
            );
            Err(Error::malformed(path.to_owned(), e.to_string()))
        }
    }
}

#[cfg(not(feature = "tracing"))]
fn from_value<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| Error::malformed(path.to_owned(), e.to_string()))
}

/// Decodes an optional integer-coded enum, turning a code this crate does not know yet into
/// `None` instead of failing the whole response. Values that are not numbers still fail.
///
/// Use with `#[serde(default, deserialize_with = "crate::serde_helpers::known_code")]`.
pub(crate) fn known_code<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match T::deserialize(&value) {
        Ok(code) => Ok(Some(code)),
        Err(_) if value.is_number() => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                type_name = %std::any::type_name::<T>(),
                code = %value,
                "unknown code in API response, treating as absent"
            );
            Ok(None)
        }
        Err(e) => Err(D::Error::custom(e)),
    }
}

/// Look up a value by a `serde_ignored` or `serde_path_to_error` path such as `?.0.cover` or
/// `[3].platforms[1]`. `?` segments mark `Option` wrappers and are skipped.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in path
        .split(['.', '[', ']'])
        .filter(|s| !s.is_empty() && *s != "?")
    {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<unable to retrieve>".to_owned(),
    }
}

/// Runs `f` with a subscriber that records formatted events, returning everything it logged.
#[cfg(all(test, feature = "tracing"))]
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing_subscriber::layer::SubscriberExt as _;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let writer = sink.clone();
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(move || writer.clone())
        .with_ansi(false);

    tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);

    let bytes = sink.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::error::{Kind, MalformedResponse};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Genre {
        id: i64,
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn decode_array_should_succeed() {
        let body = br#"[{"id": 5, "name": "Shooter"}, {"id": 12}]"#;

        let genres: Vec<Genre> = decode("genres/", body).expect("decoding failed");

        assert_eq!(
            genres,
            vec![
                Genre {
                    id: 5,
                    name: Some("Shooter".to_owned())
                },
                Genre { id: 12, name: None }
            ]
        );
    }

    #[test]
    fn decode_empty_body_should_be_malformed() {
        for body in [&b""[..], b"  \n"] {
            let err = decode::<Vec<Genre>>("genres/", body).unwrap_err();

            assert_eq!(err.kind(), Kind::MalformedResponse);
            let inner = err.downcast_ref::<MalformedResponse>().expect("wrong source");
            assert_eq!(inner.path, "genres/");
            assert_eq!(inner.reason, "empty body");
        }
    }

    #[test]
    fn decode_invalid_json_should_be_malformed() {
        let err = decode::<Vec<Genre>>("genres/", b"<html>502</html>").unwrap_err();

        assert_eq!(err.kind(), Kind::MalformedResponse);
    }

    #[test]
    fn decode_wrong_shape_should_be_malformed() {
        let err = decode::<Vec<Genre>>("genres/", br#"{"count": 3}"#).unwrap_err();

        assert_eq!(err.kind(), Kind::MalformedResponse);
    }

    #[test]
    fn decode_with_unknown_fields_should_succeed() {
        let body = br#"[{"id": 5, "name": "Shooter", "checksum": "abc"}]"#;

        let genres: Vec<Genre> = decode("genres/", body).expect("decoding failed");

        assert_eq!(genres.len(), 1);
        assert_eq!(genres[0].id, 5);
    }

    #[test]
    fn known_code_should_fall_back_to_none() {
        #[derive(Debug, Deserialize)]
        struct Release {
            #[serde(default, deserialize_with = "known_code")]
            region: Option<crate::types::Region>,
        }

        let known: Release = serde_json::from_str(r#"{"region": 2}"#).unwrap();
        let unknown: Release = serde_json::from_str(r#"{"region": 250}"#).unwrap();
        let null: Release = serde_json::from_str(r#"{"region": null}"#).unwrap();
        let missing: Release = serde_json::from_str("{}").unwrap();

        assert_eq!(known.region, Some(crate::types::Region::NorthAmerica));
        assert_eq!(unknown.region, None);
        assert_eq!(null.region, None);
        assert_eq!(missing.region, None);
        serde_json::from_str::<Release>(r#"{"region": "europe"}"#).unwrap_err();
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn unknown_fields_should_be_logged_with_endpoint() {
        let body = br#"[{"id": 8, "name": "Puzzle", "checksum": "9f3c"}]"#;

        let output = capture_logs(|| {
            let genres: Vec<Genre> = decode("genres/", body).expect("decoding failed");
            assert_eq!(genres[0].id, 8);
        });

        assert!(output.contains("unknown field in API response"), "got {output}");
        assert!(output.contains("endpoint=\"genres/\""), "got {output}");
        assert!(output.contains("checksum"), "got {output}");
        assert!(output.contains("\"9f3c\""), "value not logged in {output}");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn decode_failure_should_name_endpoint_and_location() {
        let body = br#"[{"id": 5}, {"id": "twelve"}]"#;

        let mut result = None;
        let output = capture_logs(|| result = Some(decode::<Vec<Genre>>("genres/", body)));
        let err = result.expect("closure ran").unwrap_err();

        let inner = err.downcast_ref::<MalformedResponse>().expect("wrong source");
        assert_eq!(inner.path, "genres/");
        assert!(inner.reason.starts_with("[1].id"), "got {}", inner.reason);
        assert!(output.contains("cannot decode API response"), "got {output}");
        assert!(output.contains("endpoint=\"genres/\""), "got {output}");
        assert!(output.contains("\"twelve\""), "value not logged in {output}");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_should_follow_paths() {
        let json = serde_json::json!([{ "id": 1, "platforms": [6, 48] }]);

        assert_eq!(
            lookup_value(&json, "0.platforms.1"),
            Some(&serde_json::json!(48))
        );
        assert_eq!(
            lookup_value(&json, "[0].platforms[0]"),
            Some(&serde_json::json!(6))
        );
        assert_eq!(lookup_value(&json, "?.0.?.id"), Some(&serde_json::json!(1)));
        assert_eq!(lookup_value(&json, "0.id.deeper"), None);
        assert_eq!(lookup_value(&json, "7"), None);
        assert_eq!(lookup_value(&json, ""), Some(&json));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn format_none_shows_placeholder() {
        assert_eq!(format_value(None), "<unable to retrieve>");
        assert_eq!(format_value(Some(&serde_json::json!([1, 2]))), "[1,2]");
    }
}
