//! Theme detection, aggregation, and content-gap analysis.
//!
//! This is the core of the application: a pure, deterministic transformation
//! from a sequence of [`BlogRecord`]s to a [`ThemeReport`]. It performs no
//! I/O and cannot fail; malformed records degrade to their field defaults
//! upstream and an empty input yields an empty report.
//!
//! The detected-theme set travels alongside each record as a [`TaggedBlog`],
//! so two posts sharing a title are counted and bucketed independently.

use crate::models::{BlogRecord, BlogSummary, ContentGap, ThemeReport};
use crate::themes::Theme;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Fraction of total theme mentions below which a theme counts as a gap.
const GAP_THRESHOLD: f64 = 0.1;

/// A blog record paired with the themes detected for it.
#[derive(Debug)]
pub struct TaggedBlog<'a> {
    pub blog: &'a BlogRecord,
    /// Matched taxonomy themes in taxonomy order, or `[Other]` when none matched.
    pub themes: Vec<Theme>,
}

/// Detect the themes of a single blog post.
///
/// Title and preview are concatenated, lowercased, and tested against each
/// taxonomy theme's keywords in taxonomy order. A post can match any number
/// of themes; zero matches assigns the singleton `[Theme::Other]`.
pub fn detect_themes(blog: &BlogRecord) -> Vec<Theme> {
    let text = format!("{} {}", blog.title, blog.preview).to_lowercase();
    let detected: Vec<Theme> = Theme::TAXONOMY
        .into_iter()
        .filter(|theme| theme.matches(&text))
        .collect();

    if detected.is_empty() {
        vec![Theme::Other]
    } else {
        detected
    }
}

/// Run theme detection over every post, pairing each record with its result.
pub fn tag_blogs(blogs: &[BlogRecord]) -> Vec<TaggedBlog<'_>> {
    blogs
        .iter()
        .map(|blog| {
            let themes = detect_themes(blog);
            debug!(title = %blog.title, ?themes, "Detected themes");
            TaggedBlog { blog, themes }
        })
        .collect()
}

/// Count posts per taxonomy theme.
///
/// Every taxonomy theme is present with a count of at least 0; `Other`
/// assignments are not counted. A post matching several themes increments
/// each of them.
pub fn count_themes(tagged: &[TaggedBlog<'_>]) -> BTreeMap<Theme, usize> {
    let mut counts: BTreeMap<Theme, usize> =
        Theme::TAXONOMY.into_iter().map(|theme| (theme, 0)).collect();

    for entry in tagged {
        for theme in &entry.themes {
            if let Some(count) = counts.get_mut(theme) {
                *count += 1;
            }
        }
    }

    counts
}

/// Group post summaries under each of their detected themes.
///
/// Buckets exist for every taxonomy theme plus `Other`, even when empty,
/// and input order is preserved within each bucket.
pub fn group_by_theme(tagged: &[TaggedBlog<'_>]) -> BTreeMap<Theme, Vec<BlogSummary>> {
    let mut buckets: BTreeMap<Theme, Vec<BlogSummary>> = Theme::TAXONOMY
        .into_iter()
        .chain([Theme::Other])
        .map(|theme| (theme, Vec::new()))
        .collect();

    for entry in tagged {
        let summary = entry.blog.summary();
        for theme in &entry.themes {
            if let Some(bucket) = buckets.get_mut(theme) {
                bucket.push(summary.clone());
            }
        }
    }

    buckets
}

/// Identify under-covered themes.
///
/// A theme is a gap when its count is below [`GAP_THRESHOLD`] of the total
/// theme mentions. With zero mentions overall there is nothing to compare
/// against and no gaps are reported. Gaps are sorted ascending by count,
/// ties broken by theme name for deterministic output.
pub fn identify_gaps(counts: &BTreeMap<Theme, usize>) -> Vec<ContentGap> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let threshold = total as f64 * GAP_THRESHOLD;
    let mut gaps: Vec<ContentGap> = counts
        .iter()
        .filter(|&(_, &count)| (count as f64) < threshold)
        .map(|(&theme, &count)| ContentGap {
            theme,
            count,
            percentage: count as f64 / total as f64 * 100.0,
            suggestion: format!("Write more about {theme} ({count} posts found)"),
        })
        .collect();

    gaps.sort_by(|a, b| a.count.cmp(&b.count).then(a.theme.name().cmp(b.theme.name())));
    gaps
}

/// Generate the full analysis report for a sequence of cached posts.
///
/// Deterministic and side-effect free: the same input always produces the
/// same report, including for the empty sequence.
#[instrument(level = "debug", skip_all, fields(blogs = blogs.len()))]
pub fn generate_report(blogs: &[BlogRecord]) -> ThemeReport {
    let tagged = tag_blogs(blogs);
    let theme_distribution = count_themes(&tagged);
    let blogs_by_theme = group_by_theme(&tagged);
    let content_gaps = identify_gaps(&theme_distribution);
    let themes_found = theme_distribution.values().filter(|&&count| count > 0).count();

    ThemeReport {
        total_blogs: blogs.len(),
        themes_found,
        theme_distribution,
        blogs_by_theme,
        content_gaps,
    }
}
