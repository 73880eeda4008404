//! # Blog Pulse
//!
//! A CLI that scrapes the CodeRabbit blog listing, caches the posts as
//! structured JSON, and analyzes theme coverage: which topics the blog
//! writes about, how often, and which ones are under-served.
//!
//! ## Usage
//!
//! ```sh
//! blog_pulse scrape    # fetch the listing into data/blogs_cache.json
//! blog_pulse themes    # bar chart of theme coverage
//! blog_pulse gaps      # suggested topics to write about
//! blog_pulse report    # full report to data/report.json
//! ```
//!
//! ## Architecture
//!
//! A strict pipeline with no feedback loop:
//! 1. **Scrape**: fetch the listing page and parse it into blog records
//! 2. **Cache**: persist the records verbatim to a flat JSON file
//! 3. **Analyze**: pure keyword-based theme detection and gap analysis
//! 4. **Present**: render to the terminal or write `report.json`

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cache;
mod cli;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod themes;
mod utils;

use cli::{Cli, Command};
use models::BlogRecord;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("blog_pulse starting up");

    let args = Cli::parse();
    debug!(?args.data_dir, ?args.command, "Parsed CLI arguments");

    match args.command {
        Command::Scrape => run_scrape(&args.data_dir).await?,
        Command::Themes => run_themes(&args.data_dir).await?,
        Command::Gaps => run_gaps(&args.data_dir).await?,
        Command::Report => run_report(&args.data_dir).await?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Fetch the blog listing and overwrite the local cache.
async fn run_scrape(data_dir: &str) -> Result<(), Box<dyn Error>> {
    println!("🔄 Scraping CodeRabbit blogs...");
    let blogs = scrapers::coderabbit::scrape_listing().await?;

    if blogs.is_empty() {
        warn!("Listing page yielded no blog posts; cache left untouched");
        println!("✗ No blogs found");
        return Ok(());
    }

    cache::save_blogs(&blogs, data_dir).await?;
    println!("✓ Successfully scraped {} blogs", blogs.len());
    Ok(())
}

/// Load the cache, or tell the user to scrape first.
async fn load_cached(data_dir: &str) -> Result<Option<Vec<BlogRecord>>, Box<dyn Error>> {
    let blogs = cache::load_blogs(data_dir).await?;
    if blogs.is_empty() {
        println!("✗ No cached blogs found. Run 'scrape' first.");
        return Ok(None);
    }
    Ok(Some(blogs))
}

/// Print the theme distribution bar chart for the cached posts.
async fn run_themes(data_dir: &str) -> Result<(), Box<dyn Error>> {
    println!("📊 Analyzing blog themes...");
    let Some(blogs) = load_cached(data_dir).await? else {
        return Ok(());
    };
    let report = analysis::generate_report(&blogs);
    print!("{}", outputs::text::render_distribution(&report));
    Ok(())
}

/// Print content-gap suggestions for the cached posts.
async fn run_gaps(data_dir: &str) -> Result<(), Box<dyn Error>> {
    println!("🔍 Finding content gaps...");
    let Some(blogs) = load_cached(data_dir).await? else {
        return Ok(());
    };
    let report = analysis::generate_report(&blogs);
    print!("{}", outputs::text::render_gaps(&report));
    Ok(())
}

/// Generate the full report, persist it, and print the summary.
async fn run_report(data_dir: &str) -> Result<(), Box<dyn Error>> {
    println!("📋 Generating full report...");
    let Some(blogs) = load_cached(data_dir).await? else {
        return Ok(());
    };
    let report = analysis::generate_report(&blogs);
    let path = outputs::json::write_report(&report, data_dir).await?;
    println!("✓ Report saved to {path}");
    print!("{}", outputs::text::render_summary(&report));
    Ok(())
}
