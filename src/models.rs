//! Data models for scraped blog posts and the analysis report.
//!
//! This module defines the core data structures used throughout the application:
//! - [`BlogRecord`]: Raw scraped post metadata, persisted verbatim to the cache
//! - [`BlogSummary`]: Compact per-post entry used inside report buckets
//! - [`ContentGap`]: An under-covered theme with a writing suggestion
//! - [`ThemeReport`]: The full analysis output, serializable to `report.json`
//!
//! Missing fields never fail deserialization: title and date fall back to
//! the `"Unknown"` sentinel and the preview to an empty string, so a cache
//! file written by an older run always loads.

use crate::themes::Theme;
use crate::utils::truncate_chars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel used when a listing entry carries no title or date.
pub const UNKNOWN: &str = "Unknown";

/// Maximum preview length (in characters) kept inside report buckets.
pub const SUMMARY_PREVIEW_CHARS: usize = 150;

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// One scraped blog post, as parsed from the listing page.
///
/// Records are written to the cache file exactly as scraped and reloaded
/// verbatim; the analyzer consumes them read-only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlogRecord {
    /// The post title, or `"Unknown"` when the listing had no heading.
    #[serde(default = "unknown")]
    pub title: String,
    /// Absolute URL of the post, when a link was found.
    #[serde(default)]
    pub url: Option<String>,
    /// Free-form publication date text; never parsed or normalized.
    #[serde(default = "unknown")]
    pub date: String,
    /// Truncated content excerpt from the listing.
    #[serde(default)]
    pub preview: String,
    /// RFC-3339 capture timestamp. Informational only; not used in analysis.
    #[serde(default)]
    pub scraped_at: String,
}

impl BlogRecord {
    /// Compact summary for report buckets, with the preview cut to
    /// [`SUMMARY_PREVIEW_CHARS`] characters.
    pub fn summary(&self) -> BlogSummary {
        BlogSummary {
            title: self.title.clone(),
            url: self.url.clone(),
            date: self.date.clone(),
            preview: truncate_chars(&self.preview, SUMMARY_PREVIEW_CHARS),
        }
    }
}

/// Compact per-post entry listed under each theme in the report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlogSummary {
    pub title: String,
    pub url: Option<String>,
    pub date: String,
    pub preview: String,
}

/// An under-covered theme: below 10% of total theme mentions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentGap {
    pub theme: Theme,
    /// Number of cached posts matching the theme.
    pub count: usize,
    /// Share of total theme mentions, 0.0..=100.0.
    pub percentage: f64,
    /// Human-readable writing suggestion.
    pub suggestion: String,
}

/// The full analysis report produced by one run over the cached posts.
///
/// Immutable once produced; it is either rendered to the terminal or
/// serialized to `report.json`. The maps are keyed by [`Theme`], whose
/// `Ord` follows taxonomy declaration order, so JSON key order is stable
/// across runs.
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeReport {
    /// Number of cached posts analyzed.
    pub total_blogs: usize,
    /// Taxonomy themes with at least one matching post ("other" excluded).
    pub themes_found: usize,
    /// Post count per taxonomy theme. A post matching several themes
    /// increments each of them, so the sum may exceed `total_blogs`.
    pub theme_distribution: BTreeMap<Theme, usize>,
    /// Post summaries per theme, taxonomy themes plus the "other" bucket,
    /// every bucket present even when empty.
    pub blogs_by_theme: BTreeMap<Theme, Vec<BlogSummary>>,
    /// Under-covered themes, sorted ascending by count.
    pub content_gaps: Vec<ContentGap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, preview: &str) -> BlogRecord {
        BlogRecord {
            title: title.to_string(),
            url: Some("https://coderabbit.ai/blog/post".to_string()),
            date: "Jan 1, 2026".to_string(),
            preview: preview.to_string(),
            scraped_at: "2026-08-26T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_blog_record_roundtrip() {
        let blog = record("A Post", "Some preview text");
        let json = serde_json::to_string(&blog).unwrap();
        let back: BlogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "A Post");
        assert_eq!(back.url.as_deref(), Some("https://coderabbit.ai/blog/post"));
        assert_eq!(back.date, "Jan 1, 2026");
    }

    #[test]
    fn test_blog_record_defaults_on_missing_fields() {
        let blog: BlogRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(blog.title, UNKNOWN);
        assert_eq!(blog.date, UNKNOWN);
        assert_eq!(blog.url, None);
        assert_eq!(blog.preview, "");
        assert_eq!(blog.scraped_at, "");
    }

    #[test]
    fn test_summary_truncates_preview() {
        let blog = record("Long", &"x".repeat(400));
        let summary = blog.summary();
        assert_eq!(summary.preview.chars().count(), SUMMARY_PREVIEW_CHARS);
        assert_eq!(summary.title, "Long");
    }

    #[test]
    fn test_summary_keeps_short_preview_intact() {
        let blog = record("Short", "tiny");
        assert_eq!(blog.summary().preview, "tiny");
    }

    #[test]
    fn test_report_serializes_expected_shape() {
        let report = ThemeReport {
            total_blogs: 0,
            themes_found: 0,
            theme_distribution: BTreeMap::new(),
            blogs_by_theme: BTreeMap::new(),
            content_gaps: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("total_blogs").is_some());
        assert!(json.get("themes_found").is_some());
        assert!(json.get("theme_distribution").is_some());
        assert!(json.get("blogs_by_theme").is_some());
        assert!(json.get("content_gaps").is_some());
    }

    #[test]
    fn test_content_gap_serializes_theme_as_snake_case() {
        let gap = ContentGap {
            theme: Theme::CodeReview,
            count: 0,
            percentage: 0.0,
            suggestion: "Write more about code_review (0 posts found)".to_string(),
        };
        let json = serde_json::to_value(&gap).unwrap();
        assert_eq!(json["theme"], "code_review");
        assert_eq!(json["count"], 0);
    }
}
