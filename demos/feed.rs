#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use parley::{Client, Paging};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let client = Client::from_env()?;
    let pages = client
        .feed()
        .get(Paging {
            limit: Some(20),
            ..Paging::default()
        })
        .await?;
    println!("{:#}", pages[0].body());

    Ok(())
}
