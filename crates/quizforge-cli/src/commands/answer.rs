//! Answer command implementation.

use crate::cli::AnswerArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quizforge_domain::traits::LlmProvider;
use quizforge_generator::QuestionGenerator;
use std::fs;

/// Execute the answer command.
pub async fn execute_answer<L>(
    args: AnswerArgs,
    generator: &QuestionGenerator<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let context = resolve_context(&args)?;
    let answer = generator.generate_answer(&args.question, &context).await?;

    println!("{}", formatter.format_answer(&answer)?);
    Ok(())
}

/// Inline context wins; otherwise the context file is read.
fn resolve_context(args: &AnswerArgs) -> Result<String> {
    if let Some(context) = &args.context {
        Ok(context.clone())
    } else if let Some(path) = &args.context_file {
        Ok(fs::read_to_string(path)?)
    } else {
        Err(CliError::InvalidInput(
            "Must specify either --context or --context-file".to_string(),
        ))
    }
}
