//! Keyword extraction from a raw job description.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Words never treated as keywords.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "a", "to", "of", "in", "for", "with", "on", "at", "from", "by",
];

/// Keywords kept per job description.
pub const MAX_KEYWORDS: usize = 20;

/// Tokens of this many characters or fewer are dropped.
const MAX_DROPPED_TOKEN_CHARS: usize = 2;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid pattern"));

/// Coarse importance bucket derived from raw frequency in the job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// count > 5 → high, count > 2 → medium, otherwise low.
    pub fn from_count(count: u32) -> Self {
        match count {
            c if c > 5 => Importance::High,
            c if c > 2 => Importance::Medium,
            _ => Importance::Low,
        }
    }

    pub fn weight(self) -> u32 {
        match self {
            Importance::High => 3,
            Importance::Medium => 2,
            Importance::Low => 1,
        }
    }
}

/// A job-description keyword and whether the resume covers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub count: u32,
    pub importance: Importance,
    pub found: bool,
    pub context: String,
}

impl Keyword {
    pub fn new(keyword: impl Into<String>, count: u32) -> Self {
        Self {
            keyword: keyword.into(),
            count,
            importance: Importance::from_count(count),
            found: false,
            context: String::new(),
        }
    }
}

/// Extracts up to [`MAX_KEYWORDS`] keywords ordered by descending frequency.
/// Equal counts keep the order in which the words first appear.
pub fn extract_keywords(job_description: &str) -> Vec<Keyword> {
    let lowered = job_description.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, "");

    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.retain(|(word, _)| {
        !STOPWORDS.contains(word) && word.chars().count() > MAX_DROPPED_TOKEN_CHARS
    });
    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, count)| Keyword::new(word, count))
        .collect()
}
