use serde::{Deserialize, Serialize};

/// A single question asked during an interview, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub question: String,
    /// Suggested way to answer; `null` or absent when the report gives none.
    #[serde(default)]
    pub approach: Option<String>,
}

impl QuestionEntry {
    pub fn new(question: impl Into<String>, approach: Option<&str>) -> Self {
        Self {
            question: question.into(),
            approach: approach.map(str::to_string),
        }
    }
}

/// One interview report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: String,
    pub company: String,
    pub role: String,
    pub experience: String,
    pub date: String,
    /// Relative path of the supplementary text resource for this report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionEntry>,
    /// Raw text attached by enrichment. Never part of the definition.
    #[serde(skip)]
    pub raw_content: Option<String>,
}

impl InterviewRecord {
    pub fn is_enriched(&self) -> bool {
        self.raw_content.is_some()
    }

    /// Notes, treating an empty string the same as no notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}
