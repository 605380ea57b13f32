//! Error types for the generator

use thiserror::Error;

/// Hard failures of a generation call
///
/// A reply that arrives but cannot be recovered is not an error here: the
/// parser turns it into a sentinel record instead (see [`ParseFailure`]).
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Chunking left no usable text
    #[error("No readable content found in the document")]
    EmptyDocument,

    /// The model gateway failed or returned nothing
    #[error("Transport error: {0}")]
    Transport(String),

    /// The model gateway did not answer in time
    #[error("Generation timeout after {0}s")]
    Timeout(u64),

    /// Request values outside their contract
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a reply could not be turned into question records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// No parse strategy produced JSON
    #[error("Could not parse response as JSON: {0}")]
    Malformed(String),

    /// JSON parsed but no element carried question, rationale and answer
    #[error("No valid questions were generated")]
    NoValidQuestions,
}
