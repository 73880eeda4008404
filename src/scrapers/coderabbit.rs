//! CodeRabbit blog listing scraper.
//!
//! Scrapes post metadata from the [CodeRabbit blog](https://coderabbit.ai/blog)
//! listing page. Only the listing is fetched; titles, links, dates, and
//! content previews are all present on it, so no per-post requests are made.
//!
//! # Selectors
//!
//! Posts are expected as `article.blog-post` elements. When the primary
//! selector matches nothing (the site has reshuffled its markup before),
//! `div.post` is tried as a fallback. Relative hrefs are resolved against
//! the listing URL.

use crate::fetch::fetch_with_backoff;
use crate::models::{BlogRecord, UNKNOWN};
use crate::utils::truncate_chars;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// The blog listing page.
pub const LISTING_URL: &str = "https://coderabbit.ai/blog";

/// Characters of excerpt text kept per post at scrape time.
const PREVIEW_CHARS: usize = 300;

/// Fetch and parse the blog listing.
///
/// # Returns
///
/// The scraped posts in listing order. An empty vector means the page was
/// fetched but no post markup was recognized; fetch failures (after the
/// retry policy is exhausted) are returned as errors.
#[instrument(level = "info")]
pub async fn scrape_listing() -> Result<Vec<BlogRecord>, Box<dyn Error>> {
    let html = fetch_with_backoff(LISTING_URL).await?;
    let blogs = parse_listing(&html);
    info!(count = blogs.len(), source = LISTING_URL, "Scraped blog posts");
    Ok(blogs)
}

/// Parse listing HTML into blog records.
pub fn parse_listing(html: &str) -> Vec<BlogRecord> {
    let document = Html::parse_document(html);
    let primary = Selector::parse("article.blog-post").unwrap();
    let fallback = Selector::parse("div.post").unwrap();
    let base_url = Url::parse(LISTING_URL).unwrap();

    let mut entries: Vec<ElementRef> = document.select(&primary).collect();
    if entries.is_empty() {
        debug!("Primary selector matched nothing; trying fallback");
        entries = document.select(&fallback).collect();
    }
    if entries.is_empty() {
        warn!("No blog post markup recognized on listing page");
    }

    entries
        .into_iter()
        .map(|entry| parse_entry(entry, &base_url))
        .collect()
}

/// Parse one listing entry, substituting defaults for missing fields.
fn parse_entry(entry: ElementRef<'_>, base_url: &Url) -> BlogRecord {
    let h2_selector = Selector::parse("h2").unwrap();
    let h3_selector = Selector::parse("h3").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();
    let date_selector = Selector::parse("time").unwrap();
    let paragraph_selector = Selector::parse("p").unwrap();
    let content_selector = Selector::parse("div.content").unwrap();

    // h2 preferred over h3, like p over div.content below
    let title = entry
        .select(&h2_selector)
        .next()
        .or_else(|| entry.select(&h3_selector).next())
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let url = entry
        .select(&link_selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| base_url.join(href).ok())
        .map(|resolved| resolved.to_string());

    let date = entry
        .select(&date_selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let preview = entry
        .select(&paragraph_selector)
        .next()
        .or_else(|| entry.select(&content_selector).next())
        .map(|element| truncate_chars(&element_text(element), PREVIEW_CHARS))
        .unwrap_or_default();

    debug!(%title, url = ?url, %date, "Parsed listing entry");

    BlogRecord {
        title,
        url,
        date,
        preview,
        scraped_at: Utc::now().to_rfc3339(),
    }
}

/// Collapse an element's text nodes into one whitespace-normalized string.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_FIXTURE: &str = r#"
        <html><body>
          <article class="blog-post">
            <h2>Better Code Review with AI</h2>
            <a href="/blog/better-code-review">Read more</a>
            <time>Jan 5, 2026</time>
            <p>Our AI reviewer improves pull request quality.</p>
          </article>
          <article class="blog-post">
            <h3>Docker tips</h3>
            <a href="https://coderabbit.ai/blog/docker-tips">Read more</a>
            <p>Hardening container builds.</p>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_parse_listing_primary_selector() {
        let blogs = parse_listing(LISTING_FIXTURE);
        assert_eq!(blogs.len(), 2);

        assert_eq!(blogs[0].title, "Better Code Review with AI");
        assert_eq!(
            blogs[0].url.as_deref(),
            Some("https://coderabbit.ai/blog/better-code-review")
        );
        assert_eq!(blogs[0].date, "Jan 5, 2026");
        assert_eq!(blogs[0].preview, "Our AI reviewer improves pull request quality.");
        assert!(!blogs[0].scraped_at.is_empty());

        // h3 titles and absolute hrefs work too; missing <time> degrades
        assert_eq!(blogs[1].title, "Docker tips");
        assert_eq!(
            blogs[1].url.as_deref(),
            Some("https://coderabbit.ai/blog/docker-tips")
        );
        assert_eq!(blogs[1].date, UNKNOWN);
    }

    #[test]
    fn test_parse_listing_fallback_selector() {
        let html = r#"
            <html><body>
              <div class="post">
                <h2>Fallback markup</h2>
                <a href="/blog/fallback">link</a>
                <div class="content">Preview from the fallback layout.</div>
              </div>
            </body></html>
        "#;
        let blogs = parse_listing(html);
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].title, "Fallback markup");
        assert_eq!(blogs[0].preview, "Preview from the fallback layout.");
    }

    #[test]
    fn test_parse_listing_unrecognized_markup() {
        let blogs = parse_listing("<html><body><p>nothing here</p></body></html>");
        assert!(blogs.is_empty());
    }

    #[test]
    fn test_parse_entry_missing_everything() {
        let html = r#"<html><body><article class="blog-post"></article></body></html>"#;
        let blogs = parse_listing(html);
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].title, UNKNOWN);
        assert_eq!(blogs[0].date, UNKNOWN);
        assert_eq!(blogs[0].url, None);
        assert_eq!(blogs[0].preview, "");
    }

    #[test]
    fn test_preview_truncated_to_300_chars() {
        let long = "word ".repeat(200);
        let html = format!(
            r#"<html><body><article class="blog-post"><h2>t</h2><p>{long}</p></article></body></html>"#
        );
        let blogs = parse_listing(&html);
        assert_eq!(blogs[0].preview.chars().count(), 300);
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = r#"<html><body><article class="blog-post">
            <h2>  Spaced
                 out   title </h2>
        </article></body></html>"#;
        let blogs = parse_listing(html);
        assert_eq!(blogs[0].title, "Spaced out title");
    }
}
