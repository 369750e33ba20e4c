#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod options;
pub(crate) mod serde_helpers;
pub mod service;
pub mod types;

use reqwest::Request;

pub use crate::client::{Client, Config};
use crate::error::Error;
pub use crate::service::{Entity, Searchable, Service};

pub type Result<T> = std::result::Result<T, Error>;

/// The public IGDB v3 API.
pub const DEFAULT_HOST: &str = "https://api-v3.igdb.com/";

/// Environment variable the demos read the API key from.
pub const API_KEY_VAR: &str = "IGDB_API_KEY";

/// Sends `request` and returns the raw body of a successful response.
///
/// Non-success statuses become [`Kind::Status`](crate::error::Kind::Status) errors carrying the
/// response text.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<Vec<u8>> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    Ok(response.bytes().await?.to_vec())
}
