//! Quizforge Generator
//!
//! Turns document text into interview questions through a language model, and
//! recovers structured records from whatever the model replies.
//!
//! # Overview
//!
//! Source text is chunked into bounded, overlapping windows and reassembled
//! into a single normalized blob. A deterministic prompt asks the model for a
//! JSON list of question/rationale/answer objects. The reply goes through a
//! fixed fallback chain (normalize, direct parse, extraction, trailing-comma
//! repair) and every element is validated.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → PromptBuilder → LLM → ResponseParser → Validator → QuestionRecords
//! ```
//!
//! # Failure model
//!
//! - **Hard failures** ([`GeneratorError`]): no usable document text, the model
//!   could not be reached or timed out, invalid request or configuration.
//! - **Soft failures** ([`ParseFailure`]): the model replied but nothing could
//!   be recovered. The result then holds a single sentinel record whose
//!   question starts with `Error:` and whose answer carries the diagnostic.
//!
//! # Example Usage
//!
//! ```no_run
//! use quizforge_generator::{QuestionGenerator, GeneratorConfig};
//! use quizforge_domain::{Difficulty, QuestionType};
//! use quizforge_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"[{"question":"q","rationale":"r","answer":"a"}]"#);
//! let generator = QuestionGenerator::new(llm, GeneratorConfig::default())?;
//!
//! let result = generator
//!     .generate_from_document(
//!         "Alice founded Acme in 1999.",
//!         5,
//!         Difficulty::Medium,
//!         QuestionType::Comprehension,
//!     )
//!     .await?;
//!
//! for record in &result.questions {
//!     println!("{}", record.question);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod answer;
mod chunking;
mod config;
mod error;
mod generator;
mod parser;
mod prompt;
mod types;
mod validator;


pub use answer::{parse_answer, ANSWER_MARKER, RATIONALE_MARKER};
pub use chunking::TextChunker;
pub use config::GeneratorConfig;
pub use error::{GeneratorError, ParseFailure};
pub use generator::QuestionGenerator;
pub use parser::{
    decode, extract_array, normalize, parse_questions, repair_trailing_commas,
    try_parse_questions, Decoded, ParseStage,
};
pub use prompt::{AnswerPromptBuilder, QuestionPromptBuilder};
pub use types::{DocumentText, GenerationMetadata, GenerationResult, SEGMENT_SEPARATOR};
pub use validator::{missing_fields, validate, REQUIRED_FIELDS};
