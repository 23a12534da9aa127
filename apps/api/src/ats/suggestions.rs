//! Suggestion generation: aggregate suggestions for the score report, and the
//! per-item optimization suggestions a user can mark as applied.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ats::keywords::{Importance, Keyword};
use crate::ats::structure::StructureAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    MissingKeywords,
    MissingSections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub section: String,
    pub description: String,
    pub related_items: Vec<String>,
}

/// A single actionable change, derived from one item of a [`Suggestion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    pub id: Uuid,
    pub section: String,
    pub original_text: String,
    pub suggested_text: String,
    pub reason: String,
    pub applied: bool,
}

/// At most one missing-keywords suggestion (high/medium keywords only) and
/// one missing-sections suggestion.
pub fn generate_suggestions(keywords: &[Keyword], structure: &StructureAnalysis) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let missing_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| !k.found && matches!(k.importance, Importance::High | Importance::Medium))
        .map(|k| k.keyword.clone())
        .collect();

    if !missing_keywords.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionKind::MissingKeywords,
            section: "general".to_string(),
            description: format!(
                "Add these important keywords to your resume: {}",
                missing_keywords.join(", ")
            ),
            related_items: missing_keywords,
        });
    }

    if !structure.missing_sections.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionKind::MissingSections,
            section: "structure".to_string(),
            description: format!(
                "Add these missing sections to your resume: {}",
                structure.missing_sections.join(", ")
            ),
            related_items: structure.missing_sections.clone(),
        });
    }

    suggestions
}

/// Splits aggregate suggestions into one optimization suggestion per keyword or section.
pub fn expand_suggestions(suggestions: &[Suggestion]) -> Vec<OptimizationSuggestion> {
    suggestions
        .iter()
        .flat_map(|suggestion| {
            suggestion
                .related_items
                .iter()
                .map(move |item| match suggestion.kind {
                    SuggestionKind::MissingKeywords => OptimizationSuggestion {
                        id: Uuid::new_v4(),
                        section: "general".to_string(),
                        original_text: String::new(),
                        suggested_text: format!("Consider adding the keyword '{item}' to your resume"),
                        reason: format!(
                            "The keyword '{item}' is important for this job but was not found in your resume"
                        ),
                        applied: false,
                    },
                    SuggestionKind::MissingSections => OptimizationSuggestion {
                        id: Uuid::new_v4(),
                        section: item.clone(),
                        original_text: String::new(),
                        suggested_text: format!("Add a {item} section to your resume"),
                        reason: format!("A {item} section is expected in resumes for this type of job"),
                        applied: false,
                    },
                })
        })
        .collect()
}
