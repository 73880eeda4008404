//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and subcommands using the `clap`
//! crate. One data directory holds both the blog cache and generated
//! reports; every subcommand shares it.

use clap::{Parser, Subcommand};

/// Command-line arguments for the blog analyzer.
///
/// # Examples
///
/// ```sh
/// # Refresh the local cache from the blog listing
/// blog_pulse scrape
///
/// # Analyze the cached posts
/// blog_pulse themes
/// blog_pulse gaps
/// blog_pulse --data-dir ./data report
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory for the blog cache and generated reports
    #[arg(short, long, default_value = "data")]
    pub data_dir: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape the CodeRabbit blog listing and refresh the local cache
    Scrape,
    /// Show the theme distribution of the cached posts
    Themes,
    /// Suggest under-covered themes (content gaps)
    Gaps,
    /// Generate the full analysis report and write it to report.json
    Report,
}
