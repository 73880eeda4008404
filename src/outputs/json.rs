//! JSON persistence for analysis reports.

use crate::models::ThemeReport;
use crate::utils::ensure_writable_dir;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Report file name inside the data directory.
pub const REPORT_FILE: &str = "report.json";

/// Write a [`ThemeReport`] to `{data_dir}/report.json`, pretty-printed.
///
/// # Returns
///
/// The path the report was written to.
#[instrument(level = "info", skip_all, fields(data_dir = %data_dir))]
pub async fn write_report(report: &ThemeReport, data_dir: &str) -> Result<String, Box<dyn Error>> {
    ensure_writable_dir(data_dir).await?;
    let path = format!("{}/{}", data_dir.trim_end_matches('/'), REPORT_FILE);
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).await?;
    info!(%path, total_blogs = report.total_blogs, "Wrote analysis report");
    Ok(path)
}
