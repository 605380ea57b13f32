//! Core QuestionGenerator implementation

use crate::answer::parse_answer;
use crate::chunking::TextChunker;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::parser::try_parse_questions;
use crate::prompt::{AnswerPromptBuilder, QuestionPromptBuilder};
use crate::types::{DocumentText, GenerationMetadata, GenerationResult};
use quizforge_domain::traits::LlmProvider;
use quizforge_domain::{AnswerRecord, Difficulty, GenerationRequest, QuestionRecord, QuestionType};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Turns documents into interview questions through a language model
pub struct QuestionGenerator<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    chunker: TextChunker,
    config: GeneratorConfig,
}

impl<L> QuestionGenerator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new QuestionGenerator, rejecting invalid configuration
    pub fn new(llm_provider: L, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate().map_err(GeneratorError::Config)?;
        let chunker = TextChunker::from_config(&config)?;

        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            chunker,
            config,
        })
    }

    /// Record a specific model name in result metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.config.model_name = model_name.into();
        self
    }

    /// Configuration in effect
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Chunk extracted document text and reassemble it for prompting
    pub fn prepare_document(&self, text: &str) -> Result<DocumentText, GeneratorError> {
        let document = self.chunker.chunk(text)?;
        info!(
            "Successfully processed document. Extracted {} chunks.",
            document.len()
        );
        Ok(document)
    }

    /// Chunk a document, then generate questions from it
    pub async fn generate_from_document(
        &self,
        text: &str,
        count: u32,
        difficulty: Difficulty,
        question_type: QuestionType,
    ) -> Result<GenerationResult, GeneratorError> {
        let document = self.prepare_document(text)?;
        let request = GenerationRequest::new(document.joined(), count, difficulty, question_type)
            .map_err(GeneratorError::InvalidRequest)?;
        self.generate_questions(&request).await
    }

    /// Generate questions for a request.
    ///
    /// A reply that cannot be recovered is not an error: the result then holds
    /// one sentinel record and is flagged as degraded.
    pub async fn generate_questions(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GeneratorError> {
        if request.count() > self.config.max_questions {
            return Err(GeneratorError::InvalidRequest(format!(
                "count {} exceeds the maximum of {}",
                request.count(),
                self.config.max_questions
            )));
        }

        let start_time = Instant::now();

        info!(
            "Starting generation {}: {} {} {} questions from {} chars",
            request.id(),
            request.count(),
            request.difficulty(),
            request.question_type(),
            request.source_text().chars().count()
        );

        let prompt = QuestionPromptBuilder::new(request).build();
        let prompt_chars = prompt.chars().count();
        debug!("Prompt length: {} chars", prompt_chars);

        let reply = self.call_llm_with_timeout(prompt).await?;
        let reply_chars = reply.chars().count();
        debug!("LLM response length: {} chars", reply_chars);

        let (questions, parse_failure) = match try_parse_questions(&reply) {
            Ok(questions) => {
                info!(
                    "Generation {} complete: {} questions",
                    request.id(),
                    questions.len()
                );
                (questions, None)
            }
            Err(failure) => {
                warn!(
                    "Generation {} produced no usable questions: {}",
                    request.id(),
                    failure
                );
                (vec![QuestionRecord::sentinel(&failure)], Some(failure))
            }
        };

        let metadata = GenerationMetadata {
            request_id: request.id(),
            timestamp: unix_timestamp(),
            model_name: self.config.model_name.clone(),
            prompt_chars,
            reply_chars,
            parse_failure,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(GenerationResult {
            questions,
            metadata,
        })
    }

    /// Generate an answer to one question from the given context
    pub async fn generate_answer(
        &self,
        question: &str,
        context: &str,
    ) -> Result<AnswerRecord, GeneratorError> {
        if question.trim().is_empty() {
            return Err(GeneratorError::InvalidRequest(
                "question must not be empty".to_string(),
            ));
        }

        let prompt = AnswerPromptBuilder::new(question, context).build();
        debug!("Answer prompt length: {} chars", prompt.chars().count());

        let reply = self.call_llm_with_timeout(prompt).await?;
        Ok(parse_answer(&reply))
    }

    async fn call_llm_with_timeout(&self, prompt: String) -> Result<String, GeneratorError> {
        let reply = timeout(self.config.generation_timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| GeneratorError::Timeout(self.config.generation_timeout_secs))??;

        if reply.trim().is_empty() {
            return Err(GeneratorError::Transport(
                "LLM returned empty content".to_string(),
            ));
        }
        Ok(reply)
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<String, GeneratorError> {
        let llm = Arc::clone(&self.llm_provider);

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| GeneratorError::Transport(e.to_string()))
        })
        .await
        .map_err(|e| GeneratorError::Transport(format!("Task join error: {}", e)))?
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
