//! Request module - an immutable question-generation request

use crate::level::{Difficulty, QuestionType};
use std::fmt;

/// Unique identifier for a generation request based on UUIDv7
///
/// Used to correlate log lines of one generation across the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u128);

impl RequestId {
    /// Generate a new UUIDv7-based RequestId
    ///
    /// # Examples
    ///
    /// ```
    /// use quizforge_domain::RequestId;
    ///
    /// let id = RequestId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RequestId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Milliseconds since Unix epoch at which the id was minted
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A request to generate interview questions from source text
///
/// Fields are private so a request cannot change after [`GenerationRequest::new`]
/// has checked it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    id: RequestId,
    source_text: String,
    count: u32,
    difficulty: Difficulty,
    question_type: QuestionType,
}

impl GenerationRequest {
    /// Build a request. `count` must be at least 1.
    pub fn new(
        source_text: impl Into<String>,
        count: u32,
        difficulty: Difficulty,
        question_type: QuestionType,
    ) -> Result<Self, String> {
        if count == 0 {
            return Err("count must be at least 1".to_string());
        }
        Ok(Self {
            id: RequestId::new(),
            source_text: source_text.into(),
            count,
            difficulty,
            question_type,
        })
    }

    /// Request identifier
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Text the questions must be grounded in
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Number of questions asked of the model
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Requested difficulty
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Requested question type
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }
}
