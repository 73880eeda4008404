//! Blog source scrapers.
//!
//! Each scraper fetches one listing page and parses it into a sequence of
//! [`crate::models::BlogRecord`]s. Parsing is tolerant: entries missing a
//! title or date fall back to the `"Unknown"` sentinel instead of being
//! dropped, and a page whose primary selector matches nothing is retried
//! with a fallback selector before giving up.
//!
//! # Supported Sources
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | CodeRabbit blog | [`coderabbit`] | `article.blog-post` entries, `div.post` fallback |

pub mod coderabbit;
