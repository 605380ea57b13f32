//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for language-model gateway operations
///
/// One call is one blocking request/response exchange: a prompt goes in, the
/// model's raw reply text comes out, or the call fails. Implementations must not
/// stream partial replies.
///
/// Implemented by the infrastructure layer (quizforge-llm)
pub trait LlmProvider {
    /// Error type for gateway failures
    type Error;

    /// Generate a reply for the prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
