use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ats::keywords::{Importance, Keyword};
use crate::ats::scorer::ScoreResult;
use crate::ats::suggestions::OptimizationSuggestion;

/// A stored ATS score together with its keyword rows and suggestion rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScoreRow {
    pub id: Uuid,
    pub resume_id: Option<Uuid>,
    pub job_title: String,
    pub job_description: String,
    pub score: u32,
    pub scorer_backend: String,
    pub analysis: ScoreResult,
    pub keyword_matches: Vec<KeywordMatchRow>,
    pub optimization_suggestions: Vec<OptimizationSuggestion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchRow {
    pub id: Uuid,
    pub keyword: String,
    pub found: bool,
    pub importance: Importance,
    pub context: String,
}

impl From<&Keyword> for KeywordMatchRow {
    fn from(keyword: &Keyword) -> Self {
        Self {
            id: Uuid::new_v4(),
            keyword: keyword.keyword.clone(),
            found: keyword.found,
            importance: keyword.importance,
            context: keyword.context.clone(),
        }
    }
}
