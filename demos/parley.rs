#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use parley::Client;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let body = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hello from parley".to_owned());

    let client = Client::from_env()?;
    let response = client.posts().create(&body, &[]).await?;
    println!("{:#}", response.body());

    Ok(())
}
