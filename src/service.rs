//! Generic per-resource operations.
//!
//! A [`Service`] is a borrowed view of a [`Client`] specialised to one [`Entity`] type. It holds
//! no state of its own, so services are cheap to create and safe to share across tasks.
//!
//! ```no_run
//! use igdb_client::Client;
//! use igdb_client::options::QueryOption;
//! use igdb_client::types::Game;
//!
//! # async fn example() -> igdb_client::Result<()> {
//! let client = Client::with_key("my-key")?;
//! let games = client.service::<Game>();
//!
//! let witcher = games.get(1942, &[QueryOption::fields(["name", "rating"])]).await?;
//! let total = games.count(&[]).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::marker::PhantomData;

use async_stream::try_stream;
use futures::Stream;
use serde::de::DeserializeOwned;
#[cfg(feature = "tracing")]
use tracing::warn;

use crate::client::Client;
use crate::endpoint;
use crate::error::{Error, InvalidArgument};
use crate::options::{LIMIT_MAX, LIMIT_MIN, OFFSET_MAX, OFFSET_MIN, Operator, Options, QueryOption};
use crate::Result;

/// A resource type exposed by the API.
pub trait Entity: DeserializeOwned {
    /// Resource path relative to the host, ending in `/`.
    const ENDPOINT: &'static str;
    /// Human readable type name used in error context.
    const NAME: &'static str;
}

/// Marker for resources that support full-text search.
pub trait Searchable: Entity {}

/// Operations on one resource type. Obtain one with [`Client::service`].
pub struct Service<'client, E> {
    client: &'client Client,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Service<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Service<'_, E> {}

impl<E: Entity> fmt::Debug for Service<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("entity", &E::NAME)
            .field("endpoint", &E::ENDPOINT)
            .finish_non_exhaustive()
    }
}

impl<'client, E: Entity> Service<'client, E> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self {
            client,
            entity: PhantomData,
        }
    }

    /// Fetches the entity with the given ID.
    ///
    /// Fails with [`Kind::Validation`](crate::error::Kind::Validation) for a negative ID, before
    /// any request is made, and with [`Kind::NoResults`](crate::error::Kind::NoResults) when
    /// nothing matches.
    pub async fn get(&self, id: i64, options: &[QueryOption]) -> Result<E> {
        self.try_get(id, options)
            .await
            .map_err(|e| e.with_context(format!("cannot get {} with ID {id}", E::NAME)))
    }

    async fn try_get(&self, id: i64, options: &[QueryOption]) -> Result<E> {
        if id < 0 {
            return Err(InvalidArgument::NegativeId { id }.into());
        }

        let options = with_directive(
            options,
            QueryOption::filter("id", Operator::Equals, [id]),
        )?;
        let entities: Vec<E> = self.client.entities(E::ENDPOINT, &options).await?;

        entities
            .into_iter()
            .next()
            .ok_or_else(|| Error::no_results(E::ENDPOINT.to_owned()))
    }

    /// Fetches every entity matching one of `ids`.
    ///
    /// IDs without a match are skipped; the call only fails with
    /// [`Kind::NoResults`](crate::error::Kind::NoResults) when none of them match.
    pub async fn list(&self, ids: &[i64], options: &[QueryOption]) -> Result<Vec<E>> {
        self.try_list(ids, options)
            .await
            .map_err(|e| e.with_context(format!("cannot list {} with IDs {ids:?}", E::NAME)))
    }

    async fn try_list(&self, ids: &[i64], options: &[QueryOption]) -> Result<Vec<E>> {
        if ids.is_empty() {
            return Err(InvalidArgument::EmptyIds.into());
        }
        if let Some(&id) = ids.iter().find(|id| **id < 0) {
            return Err(InvalidArgument::NegativeId { id }.into());
        }

        let options = with_directive(
            options,
            QueryOption::filter("id", Operator::ContainsAtLeast, ids),
        )?;
        self.client.entities(E::ENDPOINT, &options).await
    }

    /// Fetches whatever `options` select, without any ID filter.
    pub async fn index(&self, options: &[QueryOption]) -> Result<Vec<E>> {
        self.try_index(options)
            .await
            .map_err(|e| e.with_context(format!("cannot get index of {}", E::NAME)))
    }

    async fn try_index(&self, options: &[QueryOption]) -> Result<Vec<E>> {
        let options = Options::new(options)?;
        self.client.entities(E::ENDPOINT, &options).await
    }

    /// Counts the entities `options` select.
    pub async fn count(&self, options: &[QueryOption]) -> Result<u64> {
        self.try_count(options)
            .await
            .map_err(|e| e.with_context(format!("cannot count {}", E::NAME)))
    }

    async fn try_count(&self, options: &[QueryOption]) -> Result<u64> {
        let options = Options::new(options)?;
        self.client
            .count(&endpoint::count(E::ENDPOINT), &options)
            .await
    }

    /// Lists the field names the API currently exposes for this resource.
    pub async fn fields(&self) -> Result<Vec<String>> {
        self.client
            .fields(&endpoint::meta(E::ENDPOINT))
            .await
            .map_err(|e| e.with_context(format!("cannot get {} fields", E::NAME)))
    }

    /// Full-text search.
    ///
    /// Fails with [`Kind::Validation`](crate::error::Kind::Validation) for a blank query.
    pub async fn search(&self, query: &str, options: &[QueryOption]) -> Result<Vec<E>>
    where
        E: Searchable,
    {
        self.try_search(query, options).await.map_err(|e| {
            e.with_context(format!("cannot search {} with query {query:?}", E::NAME))
        })
    }

    async fn try_search(&self, query: &str, options: &[QueryOption]) -> Result<Vec<E>> {
        if query.trim().is_empty() {
            return Err(InvalidArgument::EmptyQuery.into());
        }

        let options = with_directive(options, QueryOption::search(query))?;
        self.client.entities(E::ENDPOINT, &options).await
    }

    /// Walks every entity `options` select, one page of `page_size` at a time.
    ///
    /// Any `limit` or `offset` in `options` is overridden. `page_size` is clamped to
    /// [`LIMIT_MIN`]..=[`LIMIT_MAX`]. The stream ends after a short page, an empty page, or once
    /// the offset passes [`OFFSET_MAX`], the deepest page the API serves.
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use igdb_client::Client;
    /// use igdb_client::options::{Direction, QueryOption};
    /// use igdb_client::types::Platform;
    ///
    /// # async fn example() -> igdb_client::Result<()> {
    /// let client = Client::with_key("my-key")?;
    /// let platforms = client.service::<Platform>();
    ///
    /// let stream = platforms.stream(&[QueryOption::order("name", Direction::Asc)], 50);
    /// futures::pin_mut!(stream);
    ///
    /// while let Some(platform) = stream.next().await {
    ///     println!("{:?}", platform?.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream(
        &self,
        options: &[QueryOption],
        page_size: i64,
    ) -> impl Stream<Item = Result<E>> + use<'client, E> {
        let client = self.client;
        let base = options.to_vec();
        let page_size = if (LIMIT_MIN..=LIMIT_MAX).contains(&page_size) {
            page_size
        } else {
            #[cfg(feature = "tracing")]
            warn!(
                "Supplied {page_size} page size, the API only allows {LIMIT_MIN}..={LIMIT_MAX}, clamping"
            );

            page_size.clamp(LIMIT_MIN, LIMIT_MAX)
        };

        try_stream! {
            let mut offset = OFFSET_MIN;

            loop {
                let mut directives = base.clone();
                directives.push(QueryOption::limit(page_size));
                directives.push(QueryOption::offset(offset));
                let options = Options::new(&directives)?;

                let page: Vec<E> = match client.entities(E::ENDPOINT, &options).await {
                    Err(e) if e.is_no_results() => break,
                    result => result.map_err(|e| {
                        e.with_context(format!("cannot stream {} at offset {offset}", E::NAME))
                    })?,
                };
                let count = i64::try_from(page.len()).unwrap_or(i64::MAX);

                for item in page {
                    yield item;
                }

                if count < page_size {
                    break;
                }

                offset += count;
                if offset > OFFSET_MAX {
                    break;
                }
            }
        }
    }
}

/// Applies the caller's `options` followed by `directive`, which therefore wins on a shared key.
fn with_directive(options: &[QueryOption], directive: QueryOption) -> Result<Options> {
    let mut directives = Vec::with_capacity(options.len() + 1);
    directives.extend_from_slice(options);
    directives.push(directive);

    Options::new(&directives)
}
