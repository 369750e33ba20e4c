//! Walks every platform page by page, sending options as POST bodies.
//!
//! ```sh
//! IGDB_API_KEY=... RUST_LOG=info cargo run --example paging --features tracing
//! ```

use futures::StreamExt as _;
use igdb_client::options::{Direction, QueryOption};
use igdb_client::types::Platform;
use igdb_client::{API_KEY_VAR, Client, Config, DEFAULT_HOST};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::builder()
        .api_key(std::env::var(API_KEY_VAR)?)
        .use_post(true)
        .build();
    let client = Client::new(DEFAULT_HOST, config)?;
    let platforms = client.service::<Platform>();

    let stream = platforms.stream(
        &[
            QueryOption::fields(["name", "abbreviation"]),
            QueryOption::order("name", Direction::Asc),
        ],
        50,
    );
    futures::pin_mut!(stream);

    let mut seen = 0_usize;
    while let Some(platform) = stream.next().await {
        let platform = platform?;
        seen += 1;
        info!(id = platform.id, name = ?platform.name, abbreviation = ?platform.abbreviation);
    }

    info!(total = seen, "done");

    Ok(())
}
