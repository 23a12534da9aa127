//! Whole-word keyword matching against the flattened resume text.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::keywords::Keyword;
use crate::ats::AnalysisError;

/// Outcome of matching every keyword against the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchAnalysis {
    /// 0.0 – 100.0, weighted by importance.
    pub score: f64,
    pub matched_keywords: usize,
    pub total_keywords: usize,
    pub details: Vec<Keyword>,
}

/// Marks each keyword found/not found and scores the weighted coverage.
///
/// score = 100 × Σ(weight of found) / Σ(weight of all), 0 when there is no weight.
pub fn match_keywords(
    keywords: Vec<Keyword>,
    resume_text: &str,
) -> Result<KeywordMatchAnalysis, AnalysisError> {
    let mut total_weight = 0u32;
    let mut matched_weight = 0u32;
    let mut details = Vec::with_capacity(keywords.len());

    for mut keyword in keywords {
        let weight = keyword.importance.weight();
        total_weight += weight;

        let escaped = regex::escape(&keyword.keyword);
        let word = compile(&keyword.keyword, &format!(r"(?i)\b{escaped}\b"))?;

        if word.is_match(resume_text) {
            matched_weight += weight;
            keyword.found = true;
            // context is the period-delimited fragment around the first hit
            let fragment = compile(&keyword.keyword, &format!(r"(?i)[^.]*\b{escaped}\b[^.]*"))?;
            keyword.context = fragment
                .find(resume_text)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
        } else {
            keyword.found = false;
            keyword.context.clear();
        }

        details.push(keyword);
    }

    let score = if total_weight > 0 {
        f64::from(matched_weight) / f64::from(total_weight) * 100.0
    } else {
        0.0
    };

    Ok(KeywordMatchAnalysis {
        score,
        matched_keywords: details.iter().filter(|k| k.found).count(),
        total_keywords: details.len(),
        details,
    })
}

fn compile(keyword: &str, pattern: &str) -> Result<Regex, AnalysisError> {
    Regex::new(pattern).map_err(|source| AnalysisError::Pattern {
        keyword: keyword.to_string(),
        source,
    })
}
