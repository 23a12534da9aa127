//! Resume Scorer — pluggable scorer that rates a resume against a job description.
//!
//! Default: `KeywordResumeScorer` (pure-Rust, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::ats::keywords::{extract_keywords, Keyword};
use crate::ats::matching::match_keywords;
use crate::ats::resume_text::{flatten_resume_text, ResumeNode};
use crate::ats::structure::{analyze_formatting, analyze_structure};
use crate::ats::suggestions::{generate_suggestions, Suggestion};
use crate::ats::AnalysisError;

const KEYWORD_WEIGHT: f64 = 0.6;
const STRUCTURE_WEIGHT: f64 = 0.25;
const FORMATTING_WEIGHT: f64 = 0.15;

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ScoreRequest {
    pub content: ResumeNode,
    pub job_title: String,
    pub job_description: String,
}

/// Full score report. A result with `error` set means scoring failed; its zero
/// score is not a real score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: u32, // 0 – 100
    pub keyword_match_score: f64,
    pub structure_score: f64,
    pub formatting_score: f64,
    pub keywords: Vec<Keyword>,
    pub found_sections: Vec<String>,
    pub missing_sections: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreResult {
    pub fn failed(err: &AnalysisError) -> Self {
        Self {
            overall_score: 0,
            keyword_match_score: 0.0,
            structure_score: 0.0,
            formatting_score: 0.0,
            keywords: vec![],
            found_sections: vec![],
            missing_sections: vec![],
            formatting_issues: vec![],
            suggestions: vec![],
            error: Some(err.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// round(0.6·keyword + 0.25·structure + 0.15·formatting), clamped to 0 – 100.
pub fn overall_score(keyword: f64, structure: f64, formatting: f64) -> u32 {
    let weighted =
        KEYWORD_WEIGHT * keyword + STRUCTURE_WEIGHT * structure + FORMATTING_WEIGHT * formatting;
    weighted.round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the handlers.
pub trait ResumeScorer: Send + Sync {
    /// "keyword" etc. — recorded alongside each stored score.
    fn backend(&self) -> &'static str;

    fn try_analyze(&self, request: &ScoreRequest) -> Result<ScoreResult, AnalysisError>;

    /// Never fails: an analysis error is logged and reported as a zero score
    /// with `error` set.
    fn analyze(&self, request: &ScoreRequest) -> ScoreResult {
        match self.try_analyze(request) {
            Ok(result) => result,
            Err(e) => {
                error!(job_title = %request.job_title, "Error analyzing resume: {e}");
                ScoreResult::failed(&e)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordResumeScorer
// ────────────────────────────────────────────────────────────────────────────

/// Word-frequency scorer.
///
/// 1. Extract the top job-description keywords and tier them by frequency.
/// 2. Match them whole-word against the flattened resume text (weights 3/2/1).
/// 3. Check the required sections; formatting is a fixed score.
/// 4. overall = 0.6·keyword + 0.25·structure + 0.15·formatting.
pub struct KeywordResumeScorer;

impl ResumeScorer for KeywordResumeScorer {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    fn try_analyze(&self, request: &ScoreRequest) -> Result<ScoreResult, AnalysisError> {
        let keywords = extract_keywords(&request.job_description);
        debug!(count = keywords.len(), "Extracted job description keywords");

        let resume_text = flatten_resume_text(&request.content);
        debug!(
            sections = ?request.content.section_names(),
            chars = resume_text.len(),
            "Flattened resume content"
        );
        let keyword_match = match_keywords(keywords, &resume_text)?;
        let structure = analyze_structure(&request.content);
        let formatting = analyze_formatting(&request.content);

        let overall = overall_score(keyword_match.score, structure.score, formatting.score);
        let suggestions = generate_suggestions(&keyword_match.details, &structure);

        info!(
            job_title = %request.job_title,
            overall_score = overall,
            matched = keyword_match.matched_keywords,
            total = keyword_match.total_keywords,
            "ATS analysis complete"
        );

        Ok(ScoreResult {
            overall_score: overall,
            keyword_match_score: keyword_match.score,
            structure_score: structure.score,
            formatting_score: formatting.score,
            keywords: keyword_match.details,
            found_sections: structure.found_sections,
            missing_sections: structure.missing_sections,
            formatting_issues: formatting.issues,
            suggestions,
            error: None,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
