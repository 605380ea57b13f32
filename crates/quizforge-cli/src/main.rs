//! Quizforge CLI - Generate interview questions from documents.

use clap::Parser;
use quizforge_cli::commands;
use quizforge_cli::{logging, Cli, Command, Config, Formatter};
use quizforge_generator::QuestionGenerator;
use quizforge_llm::OllamaProvider;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> quizforge_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.endpoint, cli.model);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let provider =
        OllamaProvider::with_timeout(&config.llm.endpoint, &config.llm.model, config.llm.timeout())?
            .with_temperature(config.llm.temperature);
    let generator = QuestionGenerator::new(provider, config.generator.clone())?
        .with_model_name(config.llm.model.clone());

    match cli.command {
        Command::Generate(args) => {
            commands::execute_generate(args, &generator, &formatter).await?;
        }
        Command::Answer(args) => {
            commands::execute_answer(args, &generator, &formatter).await?;
        }
    }

    Ok(())
}
