//! Flat-file JSON cache for scraped blog records.
//!
//! One file, `blogs_cache.json`, fully overwritten on each successful
//! scrape and fully read on each analysis run. Records round-trip verbatim.

use crate::models::BlogRecord;
use crate::utils::ensure_writable_dir;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Cache file name inside the data directory.
pub const CACHE_FILE: &str = "blogs_cache.json";

/// Write the scraped records to `{data_dir}/blogs_cache.json`, replacing
/// any previous cache.
#[instrument(level = "info", skip_all, fields(data_dir = %data_dir, count = blogs.len()))]
pub async fn save_blogs(blogs: &[BlogRecord], data_dir: &str) -> Result<(), Box<dyn Error>> {
    ensure_writable_dir(data_dir).await?;
    let path = format!("{}/{}", data_dir.trim_end_matches('/'), CACHE_FILE);
    let json = serde_json::to_string_pretty(blogs)?;
    fs::write(&path, json).await?;
    info!(%path, "Wrote blog cache");
    Ok(())
}

/// Load cached records from `{data_dir}/blogs_cache.json`.
///
/// A missing cache file is not an error; it returns an empty vector so the
/// caller can tell the user to scrape first. A present but unreadable or
/// malformed file is an error.
#[instrument(level = "info", skip_all, fields(data_dir = %data_dir))]
pub async fn load_blogs(data_dir: &str) -> Result<Vec<BlogRecord>, Box<dyn Error>> {
    let path = format!("{}/{}", data_dir.trim_end_matches('/'), CACHE_FILE);
    if !Path::new(&path).exists() {
        info!(%path, "No blog cache present");
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(&path).await?;
    let blogs: Vec<BlogRecord> = serde_json::from_str(&contents)?;
    info!(%path, count = blogs.len(), "Loaded blog cache");
    Ok(blogs)
}
