use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::ats::suggestions::OptimizationSuggestion;
use crate::errors::AppError;
use crate::models::ats::AtsScoreRow;

/// In-process store for scored resumes, shared across handlers.
#[derive(Clone, Default)]
pub struct ScoreStore {
    scores: Arc<RwLock<HashMap<Uuid, AtsScoreRow>>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, row: AtsScoreRow) {
        self.scores.write().await.insert(row.id, row);
    }

    pub async fn get(&self, id: Uuid) -> Result<AtsScoreRow, AppError> {
        self.scores
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("ATS score {id} not found")))
    }

    /// Newest first; rows created at the same instant are ordered by id.
    pub async fn list(&self) -> Vec<AtsScoreRow> {
        let mut rows: Vec<AtsScoreRow> = self.scores.read().await.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        rows
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.scores
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("ATS score {id} not found")))
    }

    /// Marks a suggestion of the given score as applied. A suggestion can only
    /// be applied once.
    pub async fn apply_suggestion(
        &self,
        score_id: Uuid,
        suggestion_id: Uuid,
    ) -> Result<OptimizationSuggestion, AppError> {
        let mut scores = self.scores.write().await;
        let row = scores
            .get_mut(&score_id)
            .ok_or_else(|| AppError::NotFound(format!("ATS score {score_id} not found")))?;

        let suggestion = row
            .optimization_suggestions
            .iter_mut()
            .find(|s| s.id == suggestion_id)
            .ok_or_else(|| AppError::NotFound(format!("Suggestion {suggestion_id} not found")))?;

        if suggestion.applied {
            return Err(AppError::Validation(
                "This suggestion has already been applied.".to_string(),
            ));
        }

        suggestion.applied = true;
        let applied = suggestion.clone();
        row.updated_at = Utc::now();

        info!(%score_id, %suggestion_id, "Suggestion applied");
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::scorer::{KeywordResumeScorer, ResumeScorer, ScoreRequest};
    use crate::ats::suggestions::expand_suggestions;
    use crate::models::ats::KeywordMatchRow;
    use chrono::Duration;
    use serde_json::json;

    fn make_row(created_offset_secs: i64) -> AtsScoreRow {
        let request = ScoreRequest {
            content: serde_json::from_value(json!({"summary": "Go developer"})).unwrap(),
            job_title: "Engineer".to_string(),
            job_description: "Kafka Kafka Kafka Rust".to_string(),
        };
        let analysis = KeywordResumeScorer.analyze(&request);
        let now = Utc::now() + Duration::seconds(created_offset_secs);
        AtsScoreRow {
            id: Uuid::new_v4(),
            resume_id: None,
            job_title: request.job_title,
            job_description: request.job_description,
            score: analysis.overall_score,
            scorer_backend: "keyword".to_string(),
            keyword_matches: analysis.keywords.iter().map(KeywordMatchRow::from).collect(),
            optimization_suggestions: expand_suggestions(&analysis.suggestions),
            analysis,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = ScoreStore::new();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = ScoreStore::new();
        let old = make_row(-60);
        let new = make_row(0);
        store.insert(old.clone()).await;
        store.insert(new.clone()).await;

        let ids: Vec<Uuid> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![new.id, old.id]);
    }

    #[tokio::test]
    async fn test_list_orders_same_timestamp_by_id() {
        let store = ScoreStore::new();
        let first = make_row(0);
        let rows: Vec<AtsScoreRow> = (0..5)
            .map(|_| AtsScoreRow {
                id: Uuid::new_v4(),
                ..first.clone()
            })
            .collect();
        for row in &rows {
            store.insert(row.clone()).await;
        }

        let mut expected: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        expected.sort();
        let listed: Vec<Uuid> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = ScoreStore::new();
        let row = make_row(0);
        store.insert(row.clone()).await;

        store.remove(row.id).await.unwrap();
        assert!(store.get(row.id).await.is_err());
        assert!(matches!(
            store.remove(row.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_apply_suggestion_only_once() {
        let store = ScoreStore::new();
        let row = make_row(0);
        // kafka (medium) missing + three missing sections
        assert_eq!(row.optimization_suggestions.len(), 4);
        let suggestion_id = row.optimization_suggestions[0].id;
        store.insert(row.clone()).await;

        let applied = store.apply_suggestion(row.id, suggestion_id).await.unwrap();
        assert!(applied.applied);
        assert!(store.get(row.id).await.unwrap().optimization_suggestions[0].applied);

        let again = store.apply_suggestion(row.id, suggestion_id).await;
        assert!(matches!(again, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_apply_suggestion_from_other_score_is_not_found() {
        let store = ScoreStore::new();
        let first = make_row(0);
        let second = make_row(0);
        let foreign = second.optimization_suggestions[0].id;
        store.insert(first.clone()).await;
        store.insert(second).await;

        let result = store.apply_suggestion(first.id, foreign).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
