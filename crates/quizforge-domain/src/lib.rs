//! Quizforge Domain Layer
//!
//! This crate contains the value types shared by every other Quizforge crate.
//! Apart from `uuid` for request identifiers it has no external dependencies,
//! and it defines the trait interface behind which the language model lives.
//!
//! ## Key Concepts
//!
//! - **GenerationRequest**: source text plus how many questions, how hard, and of what kind
//! - **QuestionRecord**: a question/rationale/answer triple recovered from a model reply
//! - **Sentinel record**: a well-formed QuestionRecord that reports an unusable reply
//! - **AnswerRecord**: an answer/rationale pair for a single question
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod level;
pub mod question;
pub mod request;
pub mod traits;

// Re-exports for convenience
pub use level::{Difficulty, QuestionType};
pub use question::{
    AnswerRecord, QuestionRecord, DEFAULT_ANSWER_RATIONALE, SENTINEL_PREFIX, SENTINEL_QUESTION,
    SENTINEL_RATIONALE,
};
pub use request::{GenerationRequest, RequestId};
