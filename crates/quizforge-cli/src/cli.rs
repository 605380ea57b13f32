//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use quizforge_domain::{Difficulty, QuestionType};
use std::path::PathBuf;

/// Quizforge - Turn documents into interview questions with a language model.
#[derive(Debug, Parser)]
#[command(name = "quizforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model server endpoint (overrides the config file)
    #[arg(long, global = true, env = "QUIZFORGE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Model name (overrides the config file)
    #[arg(short, long, global = true, env = "QUIZFORGE_MODEL")]
    pub model: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (questions only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate interview questions from a text document
    Generate(GenerateArgs),

    /// Answer a single question from a context
    Answer(AnswerArgs),
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Plain-text document to read, or `-` for stdin
    pub input: String,

    /// Number of questions to ask for
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: u32,

    /// Question difficulty
    #[arg(short, long, value_enum, default_value = "medium")]
    pub difficulty: CliDifficulty,

    /// Kind of question
    #[arg(short = 't', long = "type", value_enum, default_value = "comprehension")]
    pub question_type: CliQuestionType,
}

/// Arguments for the answer command.
#[derive(Debug, Parser)]
pub struct AnswerArgs {
    /// Question to answer
    #[arg(short, long)]
    pub question: String,

    /// File holding the context text
    #[arg(long, conflicts_with = "context", required_unless_present = "context")]
    pub context_file: Option<PathBuf>,

    /// Context text given inline
    #[arg(long)]
    pub context: Option<String>,
}

/// Difficulty options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliDifficulty {
    /// Recall and basic understanding
    Easy,
    /// Application and analysis
    Medium,
    /// Evaluation and synthesis
    Hard,
}

impl From<CliDifficulty> for Difficulty {
    fn from(difficulty: CliDifficulty) -> Self {
        match difficulty {
            CliDifficulty::Easy => Difficulty::Easy,
            CliDifficulty::Medium => Difficulty::Medium,
            CliDifficulty::Hard => Difficulty::Hard,
        }
    }
}

/// Question type options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliQuestionType {
    /// Understanding of the material
    Comprehension,
    /// Breaking information into components
    Analysis,
    /// Applying knowledge to new situations
    Application,
    /// Judging against criteria
    Evaluation,
}

impl From<CliQuestionType> for QuestionType {
    fn from(question_type: CliQuestionType) -> Self {
        match question_type {
            CliQuestionType::Comprehension => QuestionType::Comprehension,
            CliQuestionType::Analysis => QuestionType::Analysis,
            CliQuestionType::Application => QuestionType::Application,
            CliQuestionType::Evaluation => QuestionType::Evaluation,
        }
    }
}
