//! Fetches a handful of games and the resources they reference.
//!
//! Run with tracing enabled:
//! ```sh
//! IGDB_API_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example games --features tracing
//! ```

use igdb_client::options::{Direction, Operator, QueryOption};
use igdb_client::types::{Cover, Game, Genre, ImageSize};
use igdb_client::{API_KEY_VAR, Client};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::with_key(std::env::var(API_KEY_VAR)?)?;
    let games = client.service::<Game>();

    match games.get(1942, &[QueryOption::fields(["*"])]).await {
        Ok(game) => {
            info!(
                endpoint = "get",
                id = game.id,
                name = ?game.name,
                rating = ?game.total_rating,
                genres = ?game.genres
            );

            if !game.genres.is_empty() {
                match client
                    .service::<Genre>()
                    .list(&game.genres, &[QueryOption::fields(["name"])])
                    .await
                {
                    Ok(genres) => {
                        for genre in genres {
                            info!(endpoint = "list", genre = ?genre.name);
                        }
                    }
                    Err(e) => debug!(endpoint = "list", error = %e),
                }
            }

            if let Some(cover_id) = game.cover {
                match client
                    .service::<Cover>()
                    .get(cover_id, &[QueryOption::fields(["image_id"])])
                    .await
                {
                    Ok(cover) => {
                        info!(
                            endpoint = "cover",
                            url = ?cover.image.sized_url(ImageSize::CoverBig, 2)
                        );
                    }
                    Err(e) => debug!(endpoint = "cover", error = %e),
                }
            }
        }
        Err(e) => debug!(endpoint = "get", error = %e),
    }

    match games
        .index(&[
            QueryOption::fields(["name", "total_rating"]),
            QueryOption::filter("total_rating_count", Operator::GreaterThan, [500]),
            QueryOption::order("total_rating", Direction::Desc),
            QueryOption::limit(10),
        ])
        .await
    {
        Ok(top) => {
            for game in top {
                info!(endpoint = "index", name = ?game.name, rating = ?game.total_rating);
            }
        }
        Err(e) => debug!(endpoint = "index", error = %e),
    }

    match games.count(&[]).await {
        Ok(count) => info!(endpoint = "count", count),
        Err(e) => debug!(endpoint = "count", error = %e),
    }

    match games.fields().await {
        Ok(fields) => info!(endpoint = "fields", count = fields.len(), fields = ?fields),
        Err(e) => debug!(endpoint = "fields", error = %e),
    }

    match client.status().await {
        Ok(status) => {
            for account in status {
                info!(endpoint = "status", plan = ?account.plan, authorized = account.authorized);
                if let Some(reports) = account.usage_reports {
                    info!(
                        endpoint = "status",
                        metric = %reports.usage_report.metric,
                        remaining = reports.usage_report.remaining()
                    );
                }
            }
        }
        Err(e) => debug!(endpoint = "status", error = %e),
    }

    Ok(())
}
