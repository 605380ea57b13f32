//! Request and response types for generation

use crate::error::{GeneratorError, ParseFailure};
use quizforge_domain::{QuestionRecord, RequestId};

/// Separator placed between segments when the document is reassembled
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Normalized document text, ready for prompting
///
/// Every segment is the trimmed, non-empty content of one chunk, in chunk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    segments: Vec<String>,
}

impl DocumentText {
    /// Trim chunks, drop empty ones, and reject the document if nothing is left
    pub fn from_chunks<I, S>(chunks: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = chunks
            .into_iter()
            .filter_map(|chunk| {
                let trimmed = chunk.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        if segments.is_empty() {
            return Err(GeneratorError::EmptyDocument);
        }
        Ok(Self { segments })
    }

    /// The segments in chunk order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: an empty document cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments joined by a blank line
    pub fn joined(&self) -> String {
        self.segments.join(SEGMENT_SEPARATOR)
    }
}

/// Result of a question generation call
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Recovered records, in model order; a single sentinel if the reply was unusable
    pub questions: Vec<QuestionRecord>,

    /// Metadata about the generation
    pub metadata: GenerationMetadata,
}

impl GenerationResult {
    /// Whether the reply could not be recovered and `questions` holds the sentinel
    pub fn is_degraded(&self) -> bool {
        self.metadata.parse_failure.is_some()
    }
}

/// Metadata about a generation call
#[derive(Debug, Clone)]
pub struct GenerationMetadata {
    /// Identifier of the request that was served
    pub request_id: RequestId,

    /// Timestamp when generation finished (seconds since Unix epoch)
    pub timestamp: u64,

    /// Name of the LLM model used
    pub model_name: String,

    /// Length of the prompt sent (characters)
    pub prompt_chars: usize,

    /// Length of the raw reply received (characters)
    pub reply_chars: usize,

    /// Why the reply was unusable, when `questions` holds the sentinel record
    pub parse_failure: Option<ParseFailure>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chunks_trims_and_drops_blank() {
        let document = DocumentText::from_chunks(["  alpha ", "\n\n", "beta\n"]).unwrap();
        assert_eq!(document.segments(), ["alpha", "beta"]);
        assert_eq!(document.len(), 2);
        assert!(!document.is_empty());
    }

    #[test]
    fn test_joined_uses_blank_line() {
        let document = DocumentText::from_chunks(vec!["one".to_string(), "two".to_string()]).unwrap();
        assert_eq!(document.joined(), "one\n\ntwo");
    }

    #[test]
    fn test_all_blank_is_rejected() {
        let result = DocumentText::from_chunks(Vec::<String>::new());
        assert!(matches!(result, Err(GeneratorError::EmptyDocument)));

        let result = DocumentText::from_chunks([" ", "\t"]);
        assert!(matches!(result, Err(GeneratorError::EmptyDocument)));
    }
}
