//! Resume content model and the flattening step that turns it into a search corpus.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured resume content: free text, lists of entries, or keyed sections.
///
/// Deserializes from arbitrary JSON. Numbers and booleans are kept as their
/// display form, `null` becomes empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum ResumeNode {
    Text(String),
    List(Vec<ResumeNode>),
    Map(BTreeMap<String, ResumeNode>),
}

impl ResumeNode {
    /// Top-level section names. Empty unless the content is a map.
    pub fn section_names(&self) -> Vec<&str> {
        match self {
            ResumeNode::Map(sections) => sections.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_section(&self, name: &str) -> bool {
        matches!(self, ResumeNode::Map(sections) if sections.contains_key(name))
    }
}

impl Default for ResumeNode {
    fn default() -> Self {
        ResumeNode::Map(BTreeMap::new())
    }
}

impl From<Value> for ResumeNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ResumeNode::Text(String::new()),
            Value::Bool(b) => ResumeNode::Text(b.to_string()),
            Value::Number(n) => ResumeNode::Text(n.to_string()),
            Value::String(s) => ResumeNode::Text(s),
            Value::Array(items) => ResumeNode::List(items.into_iter().map(Into::into).collect()),
            Value::Object(fields) => {
                ResumeNode::Map(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Joins every text leaf with single spaces, depth-first. Case is preserved;
/// matching against the corpus is case-insensitive.
pub fn flatten_resume_text(content: &ResumeNode) -> String {
    let mut leaves = Vec::new();
    collect_leaves(content, &mut leaves);
    leaves.join(" ")
}

fn collect_leaves<'a>(node: &'a ResumeNode, out: &mut Vec<&'a str>) {
    match node {
        ResumeNode::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                out.push(text);
            }
        }
        ResumeNode::List(items) => items.iter().for_each(|item| collect_leaves(item, out)),
        ResumeNode::Map(fields) => fields.values().for_each(|v| collect_leaves(v, out)),
    }
}
