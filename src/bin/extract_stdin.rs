//! Reads HTML from stdin and prints the profile record as JSON.
//!
//! No network access: the markup serves as both primary and index page and
//! no response headers are available.

use std::io::{self, Read};

use anyhow::Context;
use rs_siteprofile::{export, extract_profile_from_html, ResponseHeaders};

fn main() -> anyhow::Result<()> {
    let mut html = String::new();
    io::stdin()
        .read_to_string(&mut html)
        .context("Failed to read from stdin")?;

    let record = extract_profile_from_html(&html, &ResponseHeaders::new());
    println!("{}", export::to_json(&record)?);
    Ok(())
}
