#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Each test binary uses a different subset of the helpers"
)]

use httpmock::MockServer;
use igdb_client::{Client, Config};

pub const API_KEY: &str = "test-key";
pub const API_KEY_HEADER: &str = "user-key";

/// A client against `server` sending options as query strings.
pub fn client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder().api_key(API_KEY).build();
    Ok(Client::new(&server.base_url(), config)?)
}

/// A client against `server` sending options as form bodies.
pub fn post_client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder().api_key(API_KEY).use_post(true).build();
    Ok(Client::new(&server.base_url(), config)?)
}
