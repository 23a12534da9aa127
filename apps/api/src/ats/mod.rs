// ATS score checker
// Implements: keyword extraction, keyword matching, structure/formatting checks,
// suggestion generation, and the HTTP handlers around stored scores.

pub mod handlers;
pub mod keywords;
pub mod matching;
pub mod resume_text;
pub mod scorer;
pub mod structure;
pub mod suggestions;

use thiserror::Error;

/// Raised inside a scoring run. Never escapes `ResumeScorer::analyze`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid pattern for keyword '{keyword}': {source}")]
    Pattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}
