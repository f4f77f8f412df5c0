//! Question/Answer records
//!
//! Turns raw OCR text into `{question, answer}` pairs and assembles the
//! JSON document written at the end of a run.

pub mod splitter;

pub use splitter::split_question_answer;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One question/answer pair, produced per image
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Output document: records in image collection order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionDocument {
    pub questions: Vec<QaRecord>,
}

impl QuestionDocument {
    /// Serialize as pretty JSON with `indent` spaces per nesting level.
    /// Non-ASCII text is written as-is.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        let indent_str = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent_str.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionDocument {
        QuestionDocument {
            questions: vec![QaRecord::new("What is 2+2?", "4")],
        }
    }

    #[test]
    fn test_default_indent_layout() {
        let json = sample().to_json(2).unwrap();
        let expected = "{\n  \"questions\": [\n    {\n      \"question\": \"What is 2+2?\",\n      \"answer\": \"4\"\n    }\n  ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_custom_indent() {
        let json = sample().to_json(4).unwrap();
        assert!(json.contains("\n    \"questions\": ["));
        assert!(json.contains("\n            \"answer\": \"4\""));
    }

    #[test]
    fn test_zero_indent_keeps_newlines() {
        let json = sample().to_json(0).unwrap();
        assert!(json.starts_with("{\n\"questions\": [\n{\n\"question\""));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let doc = QuestionDocument {
            questions: vec![QaRecord::new("¿Qué es la entropía?", "Désordre — 混乱")],
        };
        let json = doc.to_json(2).unwrap();
        assert!(json.contains("¿Qué es la entropía?"));
        assert!(json.contains("Désordre — 混乱"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_empty_document() {
        let json = QuestionDocument::default().to_json(2).unwrap();
        assert_eq!(json, "{\n  \"questions\": []\n}");
    }

    #[test]
    fn test_json_parses_back() {
        let doc = sample();
        let parsed: QuestionDocument = serde_json::from_str(&doc.to_json(2).unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
