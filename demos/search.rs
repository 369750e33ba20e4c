//! Searches games, platforms and companies for the query given on the command line.
//!
//! ```sh
//! IGDB_API_KEY=... RUST_LOG=info cargo run --example search --features tracing -- "mario kart"
//! ```

use igdb_client::options::QueryOption;
use igdb_client::types::{Company, Game, Platform};
use igdb_client::{API_KEY_VAR, Client};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let client = Client::with_key(std::env::var(API_KEY_VAR)?)?;
    let fields = [QueryOption::fields(["name", "slug"]), QueryOption::limit(5)];

    match client.service::<Game>().search(&query, &fields).await {
        Ok(games) => {
            for game in games {
                info!(resource = "games", id = game.id, name = ?game.name);
            }
        }
        Err(e) if e.is_no_results() => info!(resource = "games", "no match"),
        Err(e) => warn!(resource = "games", error = %e),
    }

    match client.service::<Platform>().search(&query, &fields).await {
        Ok(platforms) => {
            for platform in platforms {
                info!(resource = "platforms", id = platform.id, name = ?platform.name);
            }
        }
        Err(e) if e.is_no_results() => info!(resource = "platforms", "no match"),
        Err(e) => warn!(resource = "platforms", error = %e),
    }

    match client.service::<Company>().search(&query, &fields).await {
        Ok(companies) => {
            for company in companies {
                info!(resource = "companies", id = company.id, name = ?company.name);
            }
        }
        Err(e) if e.is_no_results() => info!(resource = "companies", "no match"),
        Err(e) => warn!(resource = "companies", error = %e),
    }

    Ok(())
}
