//! Generate command implementation.

use super::read_text;
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::output::Formatter;
use quizforge_domain::traits::LlmProvider;
use quizforge_generator::{GenerationResult, QuestionGenerator};
use tracing::info;

/// Execute the generate command.
pub async fn execute_generate<L>(
    args: GenerateArgs,
    generator: &QuestionGenerator<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let text = read_text(&args.input)?;
    let result = generate(&text, args, generator).await?;

    println!("{}", formatter.format_questions(&result.questions)?);

    // The diagnostic record is still the artifact; flag it without failing.
    if result.is_degraded() {
        eprintln!(
            "{}",
            formatter.warning("The model reply could not be turned into questions")
        );
    }

    Ok(())
}

/// Run generation over already-read document text.
pub async fn generate<L>(
    text: &str,
    args: GenerateArgs,
    generator: &QuestionGenerator<L>,
) -> Result<GenerationResult>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let result = generator
        .generate_from_document(
            text,
            args.count,
            args.difficulty.into(),
            args.question_type.into(),
        )
        .await?;

    info!(
        "Request {} answered in {} ms",
        result.metadata.request_id, result.metadata.processing_time_ms
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliDifficulty, CliQuestionType};
    use crate::error::CliError;
    use quizforge_generator::{GeneratorConfig, GeneratorError};
    use quizforge_llm::MockProvider;

    fn args(count: u32) -> GenerateArgs {
        GenerateArgs {
            input: "-".to_string(),
            count,
            difficulty: CliDifficulty::Easy,
            question_type: CliQuestionType::Analysis,
        }
    }

    fn generator(reply: &str) -> QuestionGenerator<MockProvider> {
        QuestionGenerator::new(MockProvider::new(reply), GeneratorConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_records() {
        let generator = generator(r#"[{"question":"q","rationale":"r","answer":"a"}]"#);
        let result = generate("Some document text.", args(1), &generator)
            .await
            .unwrap();
        assert_eq!(result.questions.len(), 1);
        assert!(!result.is_degraded());
    }

    #[tokio::test]
    async fn test_unusable_reply_is_not_an_error() {
        let generator = generator("no json here");
        let result = generate("Some document text.", args(1), &generator)
            .await
            .unwrap();
        assert!(result.is_degraded());
    }

    #[tokio::test]
    async fn test_error_prefixed_question_is_a_normal_result() {
        let generator =
            generator(r#"[{"question":"Error: what does HTTP 404 mean?","rationale":"r","answer":"Not found"}]"#);
        let result = generate("Some document text.", args(1), &generator)
            .await
            .unwrap();
        assert!(!result.is_degraded());
        assert_eq!(result.questions[0].answer, "Not found");
    }

    #[tokio::test]
    async fn test_empty_document_is_an_error() {
        let generator = generator("[]");
        let result = generate("   ", args(1), &generator).await;
        assert!(matches!(
            result,
            Err(CliError::Generator(GeneratorError::EmptyDocument))
        ));
    }

    #[tokio::test]
    async fn test_zero_count_is_an_error() {
        let generator = generator("[]");
        let result = generate("text", args(0), &generator).await;
        assert!(matches!(
            result,
            Err(CliError::Generator(GeneratorError::InvalidRequest(_)))
        ));
    }
}
