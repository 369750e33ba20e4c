//! HTTP client for the IGDB API.
//!
//! The [`Client`] owns the connection pool and the API key. Typed operations live on
//! [`Service`], which borrows a client; the transport helpers here are shared by all of them.

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Status};
use crate::options::Options;
use crate::serde_helpers::decode;
use crate::service::{Entity, Service};
use crate::types::{ApiStatus, Count};
use crate::{DEFAULT_HOST, Result, endpoint};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "user-key";

const DEFAULT_USER_AGENT: &str = "igdb_client";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Key sent in the [`API_KEY_HEADER`] header.
    #[builder(into)]
    api_key: SecretString,
    /// Send options as a form-encoded POST body instead of a query string. Useful when long ID
    /// lists or field selections would overflow the URL.
    #[builder(default)]
    use_post: bool,
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    user_agent: String,
}

/// Client for the IGDB API.
///
/// Cheap to clone; clones share one connection pool. Safe to use from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use igdb_client::{Client, Config};
///
/// // Default host
/// let client = Client::with_key("my-key")?;
///
/// // Custom host, options sent as POST bodies
/// let config = Config::builder().api_key("my-key").use_post(true).build();
/// let client = Client::new("https://igdb.example.com/", config)?;
/// # Ok::<(), igdb_client::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    config: Config,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client against `host` with the given [`Config`].
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host,
            config,
            client,
        })
    }

    /// Creates a client against [`DEFAULT_HOST`] with default settings.
    pub fn with_key<K: Into<String>>(api_key: K) -> Result<Client> {
        let config = Config::builder().api_key(api_key.into()).build();
        Client::new(DEFAULT_HOST, config)
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Typed operations for entity `E`.
    #[must_use]
    pub fn service<E: Entity>(&self) -> Service<'_, E> {
        Service::new(self)
    }

    /// Plan and usage information for the configured key.
    pub async fn status(&self) -> Result<Vec<ApiStatus>> {
        self.get(endpoint::API_STATUS, &Options::default())
            .await
            .map_err(|e| e.with_context("cannot get API status"))
    }

    /// Fetches a non-empty array of `T`, using GET or POST as configured.
    pub(crate) async fn entities<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &Options,
    ) -> Result<Vec<T>> {
        if self.config.use_post {
            self.post(path, options).await
        } else {
            self.get(path, options).await
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &Options,
    ) -> Result<Vec<T>> {
        let body = self.send(Method::GET, path, options).await?;
        non_empty(path, &body)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &Options,
    ) -> Result<Vec<T>> {
        let body = self.send(Method::POST, path, options).await?;
        non_empty(path, &body)
    }

    /// Decodes a `{"count": n}` response.
    pub(crate) async fn count(&self, path: &str, options: &Options) -> Result<u64> {
        let method = if self.config.use_post {
            Method::POST
        } else {
            Method::GET
        };
        let body = self.send(method, path, options).await?;
        let count: Count = decode(path, &body)?;

        Ok(count.count)
    }

    /// Fetches the field names of a resource. A 404 with an empty body means the resource has no
    /// fields.
    pub(crate) async fn fields(&self, path: &str) -> Result<Vec<String>> {
        let body = match self.send(Method::GET, path, &Options::default()).await {
            Err(e) if is_empty_not_found(&e) => return Ok(Vec::new()),
            result => result?,
        };

        decode(path, &body)
    }

    async fn send(&self, method: Method, path: &str, options: &Options) -> Result<Vec<u8>> {
        let encoded = options.encode()?;
        let mut url = format!("{}{path}", self.host);

        let request = if method == Method::POST {
            self.client
                .request(method, strip_spaces(&url))
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded)
                .build()?
        } else {
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
            self.client.request(method, strip_spaces(&url)).build()?
        };

        crate::request(&self.client, request).await
    }
}

fn non_empty<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<Vec<T>> {
    let items: Vec<T> = decode(path, body)?;
    if items.is_empty() {
        return Err(Error::no_results(path.to_owned()));
    }

    Ok(items)
}

fn is_empty_not_found(error: &Error) -> bool {
    error.downcast_ref::<Status>().is_some_and(|status| {
        status.status_code == reqwest::StatusCode::NOT_FOUND && status.message.trim().is_empty()
    })
}

/// The API rejects URLs containing literal spaces, so they are dropped rather than escaped.
fn strip_spaces(url: &str) -> String {
    url.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::builder().api_key("test-key").build()
    }

    #[test]
    fn host_should_gain_trailing_slash() {
        let client = Client::new("https://igdb.example.com/v3", config()).unwrap();

        assert_eq!(client.host().as_str(), "https://igdb.example.com/v3/");
    }

    #[test]
    fn invalid_host_should_fail() {
        let err = Client::new("not a url", config()).unwrap_err();

        assert_eq!(err.kind(), crate::error::Kind::Internal);
    }

    #[test]
    fn invalid_key_should_fail() {
        let config = Config::builder().api_key("bad\nkey").build();

        let err = Client::new(DEFAULT_HOST, config).unwrap_err();
        assert_eq!(err.kind(), crate::error::Kind::Internal);
    }

    #[test]
    fn debug_should_not_leak_key() {
        let client = Client::with_key("super-secret").unwrap();

        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[test]
    fn strip_spaces_should_remove_every_space() {
        assert_eq!(
            strip_spaces("https://h/games/?search=a b&fields= name"),
            "https://h/games/?search=ab&fields=name"
        );
    }

    #[test]
    fn config_defaults() {
        let config = config();

        assert!(!config.use_post);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
