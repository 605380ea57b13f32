//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use quizforge_domain::{AnswerRecord, QuestionRecord};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Column width for free text in table output.
const TEXT_COLUMN_WIDTH: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format generated question records.
    pub fn format_questions(&self, questions: &[QuestionRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_questions_json(questions),
            OutputFormat::Table => self.format_questions_table(questions),
            OutputFormat::Quiet => Ok(self.format_questions_quiet(questions)),
        }
    }

    /// Format a single generated answer.
    pub fn format_answer(&self, answer: &AnswerRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "answer": answer.answer,
                    "rationale": answer.rationale,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Answer", answer.answer.as_str()]);
                builder.push_record(["Rationale", answer.rationale.as_str()]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Width::wrap(TEXT_COLUMN_WIDTH * 2));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(answer.answer.clone()),
        }
    }

    /// Format records as the JSON artifact: objects with exactly
    /// `question`, `rationale` and `answer`.
    fn format_questions_json(&self, questions: &[QuestionRecord]) -> Result<String> {
        let json_questions: Vec<serde_json::Value> = questions
            .iter()
            .map(|q| {
                serde_json::json!({
                    "question": q.question,
                    "rationale": q.rationale,
                    "answer": q.answer,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_questions)?)
    }

    /// Format records as a table.
    fn format_questions_table(&self, questions: &[QuestionRecord]) -> Result<String> {
        if questions.is_empty() {
            return Ok(self.info("No questions generated"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Question", "Rationale", "Answer"]);

        for (index, record) in questions.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                record.question.clone(),
                record.rationale.clone(),
                record.answer.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Width::wrap(TEXT_COLUMN_WIDTH)))
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Questions only, one per line.
    fn format_questions_quiet(&self, questions: &[QuestionRecord]) -> String {
        questions
            .iter()
            .map(|q| q.question.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_questions() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new(
                "Who founded Acme?",
                "Checks recall of the founder.",
                "Alice.",
            ),
            QuestionRecord::new("When?", "Checks dates.", "In 1999."),
        ]
    }

    #[test]
    fn test_json_format_is_the_artifact_schema() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_questions(&create_test_questions()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        let first = items[0].as_object().unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first["question"], "Who founded Acme?");
        assert_eq!(first["rationale"], "Checks recall of the founder.");
        assert_eq!(first["answer"], "Alice.");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_questions(&create_test_questions()).unwrap();
        assert_eq!(output, "Who founded Acme?\nWhen?");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_questions(&create_test_questions()).unwrap();
        assert!(output.contains("Question"));
        assert!(output.contains("Rationale"));
        assert!(output.contains("Who founded Acme?"));
    }

    #[test]
    fn test_empty_questions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_questions(&[]).unwrap();
        assert!(output.contains("No questions generated"));
    }

    #[test]
    fn test_answer_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_answer(&AnswerRecord::new("Paris", "It is the capital"))
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["answer"], "Paris");
        assert_eq!(object["rationale"], "It is the capital");
    }

    #[test]
    fn test_answer_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_answer(&AnswerRecord::new("Paris", "It is the capital"))
            .unwrap();
        assert_eq!(output, "Paris");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
