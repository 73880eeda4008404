//! Terminal rendering for analysis reports.
//!
//! Output format follows the shape of the CLI's original reports: a bar
//! chart of theme coverage (one `█` per 5 percentage points), a bulleted
//! list of gap suggestions, and a short summary block. Rendering builds a
//! `String` so the formats are testable without capturing stdout.

use crate::models::ThemeReport;
use itertools::Itertools;

/// How many gap suggestions to surface in the terminal.
const MAX_GAP_SUGGESTIONS: usize = 5;

/// Render the theme distribution bar chart.
///
/// Themes with zero matches are omitted; rows are sorted descending by
/// count, taxonomy order on ties. Percentages are relative to the number
/// of analyzed posts, so a multi-theme post pushes the column sum past 100%.
pub fn render_distribution(report: &ThemeReport) -> String {
    let mut out = format!("\n📈 Theme Distribution ({} blogs):\n", report.total_blogs);

    let rows = report
        .theme_distribution
        .iter()
        .filter(|&(_, &count)| count > 0)
        .sorted_by(|a, b| b.1.cmp(a.1));

    for (theme, &count) in rows {
        let pct = if report.total_blogs > 0 {
            count as f64 / report.total_blogs as f64 * 100.0
        } else {
            0.0
        };
        let bar = "█".repeat((pct / 5.0) as usize);
        out.push_str(&format!("  {:<20} {:>3} ({:>5.1}%) {}\n", theme.name(), count, pct, bar));
    }

    out
}

/// Render the content-gap suggestions, at most [`MAX_GAP_SUGGESTIONS`].
pub fn render_gaps(report: &ThemeReport) -> String {
    if report.content_gaps.is_empty() {
        return "✓ All topics are well covered!\n".to_string();
    }

    let mut out = String::from("\n💡 Suggested Topics to Cover:\n");
    for gap in report.content_gaps.iter().take(MAX_GAP_SUGGESTIONS) {
        out.push_str(&format!("  • {}\n", gap.suggestion));
    }
    out
}

/// Render the short report summary block.
pub fn render_summary(report: &ThemeReport) -> String {
    format!(
        "\n📊 Summary:\n  Total blogs: {}\n  Themes covered: {}\n  Content gaps found: {}\n",
        report.total_blogs,
        report.themes_found,
        report.content_gaps.len()
    )
}
