//! The theme taxonomy used for blog classification.
//!
//! Themes form a closed set: each variant of [`Theme`] carries a fixed list
//! of lowercase keywords, and a blog is assigned a theme when any of its
//! keywords occurs as a literal substring of the blog's title + preview.
//! Matching is deliberately substring-based with no word boundaries, so
//! e.g. "java" also matches inside "javascript". That keyword overlap is
//! part of the taxonomy's behavior, not an accident.
//!
//! [`Theme::Other`] is the catch-all for blogs matching no taxonomy theme.
//! It is never part of [`Theme::TAXONOMY`] and never counts toward the
//! theme distribution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A blog theme identifier.
///
/// Variant order is the taxonomy declaration order; `Ord` follows it, so
/// maps keyed by `Theme` iterate and serialize in taxonomy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    CodeReview,
    AiMl,
    Testing,
    Security,
    Performance,
    Documentation,
    Devops,
    Frontend,
    Backend,
    Git,
    /// Catch-all bucket for blogs matching no taxonomy keywords.
    Other,
}

impl Theme {
    /// The real taxonomy themes, in declaration order. Excludes [`Theme::Other`].
    pub const TAXONOMY: [Theme; 10] = [
        Theme::CodeReview,
        Theme::AiMl,
        Theme::Testing,
        Theme::Security,
        Theme::Performance,
        Theme::Documentation,
        Theme::Devops,
        Theme::Frontend,
        Theme::Backend,
        Theme::Git,
    ];

    /// The snake_case name used in JSON output and terminal rendering.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::CodeReview => "code_review",
            Theme::AiMl => "ai_ml",
            Theme::Testing => "testing",
            Theme::Security => "security",
            Theme::Performance => "performance",
            Theme::Documentation => "documentation",
            Theme::Devops => "devops",
            Theme::Frontend => "frontend",
            Theme::Backend => "backend",
            Theme::Git => "git",
            Theme::Other => "other",
        }
    }

    /// Lowercase keywords that mark a blog as belonging to this theme.
    ///
    /// [`Theme::Other`] has no keywords; it is assigned by exclusion.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::CodeReview => &["code review", "review", "reviewer", "pull request", "pr"],
            Theme::AiMl => &["ai", "machine learning", "ml", "neural", "gpt", "llm", "llama"],
            Theme::Testing => &["test", "testing", "pytest", "unit test", "test case"],
            Theme::Security => &["security", "vulnerability", "secure", "cve", "auth", "encryption"],
            Theme::Performance => &["performance", "optimization", "speed", "latency", "benchmark"],
            Theme::Documentation => &["documentation", "docs", "readme", "comment"],
            Theme::Devops => &["devops", "docker", "kubernetes", "ci/cd", "deployment", "deploy"],
            Theme::Frontend => &["frontend", "react", "vue", "angular", "javascript", "css", "html"],
            Theme::Backend => &["backend", "api", "database", "python", "node", "java"],
            Theme::Git => &["git", "github", "gitlab", "version control", "commit"],
            Theme::Other => &[],
        }
    }

    /// True when any keyword of this theme occurs in `text` as a substring.
    ///
    /// `text` is expected to be lowercased by the caller.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords().iter().any(|keyword| text.contains(keyword))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
