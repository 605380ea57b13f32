//! Question module - the records handed back to callers

use std::fmt;

/// Question text of the record produced when a reply could not be recovered
pub const SENTINEL_QUESTION: &str =
    "Error: Could not generate questions. The response format was unexpected.";

/// Rationale text of the sentinel record
pub const SENTINEL_RATIONALE: &str =
    "Please try again with different parameters or check the input text.";

/// Prefix of a sentinel record's question
pub const SENTINEL_PREFIX: &str = "Error:";

/// Prefix of a sentinel record's answer, ahead of the failure detail
const SENTINEL_DETAIL_PREFIX: &str = "Technical details: ";

/// Rationale used when an answer reply does not follow the two-field format
pub const DEFAULT_ANSWER_RATIONALE: &str = "Generated answer based on the context.";

/// One interview question with its rationale and reference answer
///
/// Fields are trimmed but may be empty: acceptance only requires that the model
/// supplied all three keys. Use [`QuestionRecord::has_blank_fields`] where blank
/// content matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// The question
    pub question: String,

    /// Why the question is relevant to the text
    pub rationale: String,

    /// Reference answer
    pub answer: String,
}

impl QuestionRecord {
    /// Create a record, trimming every field
    pub fn new(
        question: impl AsRef<str>,
        rationale: impl AsRef<str>,
        answer: impl AsRef<str>,
    ) -> Self {
        Self {
            question: question.as_ref().trim().to_string(),
            rationale: rationale.as_ref().trim().to_string(),
            answer: answer.as_ref().trim().to_string(),
        }
    }

    /// The displayable record standing in for an unusable reply.
    ///
    /// `detail` ends up in the answer field so operators can see what went wrong.
    pub fn sentinel(detail: impl fmt::Display) -> Self {
        Self {
            question: SENTINEL_QUESTION.to_string(),
            rationale: SENTINEL_RATIONALE.to_string(),
            answer: format!("{}{}", SENTINEL_DETAIL_PREFIX, detail),
        }
    }

    /// Whether this record has the exact shape built by [`QuestionRecord::sentinel`].
    ///
    /// A model question that merely starts with `Error:` is not a sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.question == SENTINEL_QUESTION
            && self.rationale == SENTINEL_RATIONALE
            && self.answer.starts_with(SENTINEL_DETAIL_PREFIX)
    }

    /// Whether any field is empty
    pub fn has_blank_fields(&self) -> bool {
        self.question.is_empty() || self.rationale.is_empty() || self.answer.is_empty()
    }
}

/// A single generated answer with its rationale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// The answer
    pub answer: String,

    /// How the answer was arrived at
    pub rationale: String,
}

impl AnswerRecord {
    /// Create an answer record
    pub fn new(answer: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            rationale: rationale.into(),
        }
    }

    /// Record for a reply that ignored the `Answer:`/`Rationale:` format
    pub fn unstructured(reply: &str) -> Self {
        Self::new(reply.trim(), DEFAULT_ANSWER_RATIONALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let record = QuestionRecord::new("  q ", "\tr\n", " a");
        assert_eq!(record, QuestionRecord::new("q", "r", "a"));
        assert!(!record.is_sentinel());
    }

    #[test]
    fn test_sentinel_carries_detail() {
        let record = QuestionRecord::sentinel("ValueError: boom");
        assert!(record.is_sentinel());
        assert!(record.question.starts_with("Error:"));
        assert_eq!(record.answer, "Technical details: ValueError: boom");
        assert_eq!(record.rationale, SENTINEL_RATIONALE);
    }

    #[test]
    fn test_error_prefixed_question_is_not_sentinel() {
        let record = QuestionRecord::new("Error: what does HTTP 404 mean?", "r", "Not found");
        assert!(record.question.starts_with(SENTINEL_PREFIX));
        assert!(!record.is_sentinel());
    }

    #[test]
    fn test_blank_fields_detected() {
        assert!(QuestionRecord::new("q", "", "a").has_blank_fields());
        assert!(!QuestionRecord::new("q", "r", "a").has_blank_fields());
    }

    #[test]
    fn test_unstructured_answer_uses_default_rationale() {
        let record = AnswerRecord::unstructured("  Paris  ");
        assert_eq!(record.answer, "Paris");
        assert_eq!(record.rationale, DEFAULT_ANSWER_RATIONALE);
    }
}
