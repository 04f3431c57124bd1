//! HTTP server exposing `POST /api/scrape`.
//!
//! Configuration comes from the environment (and `.env`):
//! `SITEPROFILE_ADDR`, `SITEPROFILE_USER_AGENT`, `SITEPROFILE_TIMEOUT_SECS`.
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Context;
use rs_siteprofile::server::{self, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rs_siteprofile=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(addr = %config.addr, "starting siteprofile server");

    server::serve(config).await.context("Server error")
}
