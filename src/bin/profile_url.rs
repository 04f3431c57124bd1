//! Profile one URL and print the result.
//!
//! Usage: `profile_url <url> [json|csv|text]`

use anyhow::{bail, Context};
use chrono::Utc;
use rs_siteprofile::export::{self, ExportFormat};
use rs_siteprofile::{profile_url, HttpFetcher, Options};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(url) = args.next() else {
        bail!("usage: profile_url <url> [json|csv|text]");
    };
    let format = match args.next() {
        Some(raw) => raw.parse::<ExportFormat>().map_err(anyhow::Error::msg)?,
        None => ExportFormat::Json,
    };

    let options = Options::from_env();
    let fetcher = HttpFetcher::new(&options)?;
    let record = profile_url(&fetcher, &url, &options)
        .await
        .with_context(|| format!("Failed to profile {url}"))?;

    println!("{}", export::render(&record, format, &Utc::now())?);
    Ok(())
}
