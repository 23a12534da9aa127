use serde::{Deserialize, Serialize};

use crate::ats::resume_text::ResumeNode;

/// Top-level sections every resume is expected to carry.
pub const REQUIRED_SECTIONS: &[&str] = &["education", "experience", "skills"];

/// Formatting is not inspected yet; every resume gets this score.
pub const DEFAULT_FORMATTING_SCORE: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub score: f64,
    pub found_sections: Vec<String>,
    pub missing_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingAnalysis {
    pub score: f64,
    pub issues: Vec<String>,
}

/// score = 100 × present / required, sections matched by exact top-level key.
pub fn analyze_structure(content: &ResumeNode) -> StructureAnalysis {
    let (found, missing): (Vec<&str>, Vec<&str>) = REQUIRED_SECTIONS
        .iter()
        .partition(|section| content.has_section(section));

    let score = found.len() as f64 / REQUIRED_SECTIONS.len() as f64 * 100.0;

    StructureAnalysis {
        score,
        found_sections: found.into_iter().map(String::from).collect(),
        missing_sections: missing.into_iter().map(String::from).collect(),
    }
}

pub fn analyze_formatting(_content: &ResumeNode) -> FormattingAnalysis {
    FormattingAnalysis {
        score: DEFAULT_FORMATTING_SCORE,
        issues: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: serde_json::Value) -> ResumeNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_all_sections_present() {
        let analysis = analyze_structure(&content(json!({
            "education": [], "experience": [], "skills": [], "summary": "hi"
        })));
        assert_eq!(analysis.score, 100.0);
        assert!(analysis.missing_sections.is_empty());
        assert_eq!(analysis.found_sections, vec!["education", "experience", "skills"]);
    }

    #[test]
    fn test_no_sections_present() {
        let analysis = analyze_structure(&content(json!({"summary": "hi"})));
        assert_eq!(analysis.score, 0.0);
        assert_eq!(
            analysis.missing_sections,
            vec!["education", "experience", "skills"]
        );
    }

    #[test]
    fn test_partial_sections() {
        let one = analyze_structure(&content(json!({"skills": "Rust"})));
        assert_eq!(one.score.round(), 33.0);
        assert_eq!(one.missing_sections, vec!["education", "experience"]);

        let two = analyze_structure(&content(json!({"skills": "Rust", "education": "BSc"})));
        assert_eq!(two.score.round(), 67.0);
        assert_eq!(two.missing_sections, vec!["experience"]);
    }

    #[test]
    fn test_section_keys_are_case_sensitive() {
        let analysis = analyze_structure(&content(json!({"Education": "BSc"})));
        assert_eq!(analysis.score, 0.0);
    }

    #[test]
    fn test_text_content_has_no_structure() {
        let analysis = analyze_structure(&ResumeNode::Text("education experience".into()));
        assert_eq!(analysis.score, 0.0);
    }

    #[test]
    fn test_formatting_is_constant() {
        let analysis = analyze_formatting(&ResumeNode::default());
        assert_eq!(analysis.score, DEFAULT_FORMATTING_SCORE);
        assert!(analysis.issues.is_empty());
    }
}
