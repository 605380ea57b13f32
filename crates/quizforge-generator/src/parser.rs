//! Recover question records from a model reply
//!
//! The reply is run through a fixed chain, each stage tried only when the
//! previous one failed:
//!
//! 1. normalize: trim, strip markdown fences and stray backticks
//! 2. parse the normalized text directly
//! 3. parse the first `[{ ... }]` span found in it
//! 4. drop trailing commas before `}` / `]` and parse once more
//!
//! The decoded value is then wrapped into an array if needed and every element
//! is checked by the [validator](crate::validator). The same input always takes
//! the same path.

use crate::error::ParseFailure;
use crate::validator::{missing_fields, validate};
use quizforge_domain::QuestionRecord;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

const FENCE: &str = "```";

/// A fence and the whitespace after it. A `json` tag is always part of the
/// fence; any other word only when it ends the fence line, so text glued to a
/// closing fence survives.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:(?i:json)\b|[A-Za-z][A-Za-z0-9_+-]*[ \t]*\r?\n)?\s*")
        .expect("fence pattern is valid")
});

/// Greedy span from the first `[{` to the last `}]`
static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("array pattern is valid")
});

static TRAILING_COMMA_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}").expect("object comma pattern is valid"));

static TRAILING_COMMA_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]").expect("array comma pattern is valid"));

/// Which stage of the chain produced the JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// The normalized reply was valid JSON
    Direct,
    /// A `[{ ... }]` span inside the reply was valid JSON
    Extracted,
    /// Valid JSON only after trailing commas were removed
    Repaired,
}

/// A decoded reply and the stage that decoded it
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The JSON value
    pub value: Value,
    /// Stage that succeeded
    pub stage: ParseStage,
}

/// Parse a reply into question records, never failing.
///
/// An unusable reply yields exactly one sentinel record whose answer carries
/// the failure detail.
pub fn parse_questions(raw: &str) -> Vec<QuestionRecord> {
    match try_parse_questions(raw) {
        Ok(questions) => questions,
        Err(failure) => {
            warn!("Returning sentinel record: {}", failure);
            warn!("Response content: {}", preview(raw, 500));
            vec![QuestionRecord::sentinel(&failure)]
        }
    }
}

/// Parse a reply into question records, reporting why it could not be used
pub fn try_parse_questions(raw: &str) -> Result<Vec<QuestionRecord>, ParseFailure> {
    debug!("Raw response content: {}", preview(raw, 200));

    let normalized = normalize(raw);
    let decoded = decode(&normalized)?;
    info!("Reply decoded at stage {:?}", decoded.stage);

    let candidates = into_candidates(decoded.value);
    let total = candidates.len();

    let questions: Vec<QuestionRecord> = candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, candidate)| {
            let record = validate(candidate);
            if record.is_none() {
                warn!(
                    "Dropping candidate {}: missing {:?}",
                    idx,
                    missing_fields(candidate)
                );
            }
            record
        })
        .collect();

    if questions.is_empty() {
        return Err(ParseFailure::NoValidQuestions);
    }

    info!("Recovered {} of {} candidates", questions.len(), total);
    Ok(questions)
}

/// Trim the reply and strip code fences and leading/trailing backticks.
///
/// Idempotent: normalizing already-normalized text changes nothing.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    // Removing one fence can join backticks into a new one.
    while text.contains(FENCE) {
        text = FENCE_RE.replace_all(&text, "").into_owned();
    }

    text.trim_matches(|c: char| c == '`' || c.is_whitespace())
        .to_string()
}

/// Run the parse stages in order on normalized text
pub fn decode(text: &str) -> Result<Decoded, ParseFailure> {
    let direct_error = match parse_direct(text) {
        Ok(value) => {
            return Ok(Decoded {
                value,
                stage: ParseStage::Direct,
            })
        }
        Err(e) => e,
    };
    warn!("Initial JSON parse failed: {}", direct_error);

    let extracted = extract_array(text);
    if let Some(span) = extracted {
        match parse_direct(span) {
            Ok(value) => {
                return Ok(Decoded {
                    value,
                    stage: ParseStage::Extracted,
                })
            }
            Err(e) => warn!("Failed to parse extracted JSON: {}", e),
        }
    } else {
        debug!("No JSON array of objects found in reply");
    }

    let repaired = repair_trailing_commas(extracted.unwrap_or(text));
    match parse_direct(&repaired) {
        Ok(value) => Ok(Decoded {
            value,
            stage: ParseStage::Repaired,
        }),
        Err(e) => {
            warn!("Failed to parse even after fixing: {}", e);
            Err(ParseFailure::Malformed(e.to_string()))
        }
    }
}

fn parse_direct(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Find the widest `[{ ... }]` span in the text
pub fn extract_array(text: &str) -> Option<&str> {
    ARRAY_RE.find(text).map(|m| m.as_str())
}

/// Remove commas directly before a closing brace or bracket
pub fn repair_trailing_commas(text: &str) -> String {
    let without_object_commas = TRAILING_COMMA_OBJECT_RE.replace_all(text, "}");
    TRAILING_COMMA_ARRAY_RE
        .replace_all(&without_object_commas, "]")
        .into_owned()
}

/// A lone value is treated as a one-element list
fn into_candidates(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let mut preview: String = text.chars().take(max_chars).collect();
    if text.chars().nth(max_chars).is_some() {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"[{"question":"q","rationale":"r","answer":"a"}]"#;

    fn record(q: &str, r: &str, a: &str) -> QuestionRecord {
        QuestionRecord::new(q, r, a)
    }

    #[test]
    fn test_parse_valid_json() {
        let response = r#"[
            {
                "question": "Who founded Acme?",
                "rationale": "Tests recall of the founder.",
                "answer": "Alice, as stated in 'Alice founded Acme'."
            },
            {
                "question": "When was Acme founded?",
                "rationale": "Tests recall of dates.",
                "answer": "In 1999."
            }
        ]"#;

        let questions = parse_questions(response);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "Who founded Acme?");
        assert_eq!(questions[1].answer, "In 1999.");
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = format!("```json\n{}\n```", ONE);
        assert_eq!(parse_questions(&response), parse_questions(ONE));
        assert_eq!(parse_questions(&response), vec![record("q", "r", "a")]);
    }

    #[test]
    fn test_parse_json_with_untagged_fence() {
        let response = format!("```\n{}\n```", ONE);
        let decoded = decode(&normalize(&response)).unwrap();
        assert_eq!(decoded.stage, ParseStage::Direct);
    }

    #[test]
    fn test_trailing_comma_is_repaired() {
        let response = r#"[{"question":"q","rationale":"r","answer":"a"},]"#;
        let decoded = decode(&normalize(response)).unwrap();
        assert_eq!(decoded.stage, ParseStage::Repaired);
        assert_eq!(parse_questions(response), vec![record("q", "r", "a")]);
    }

    #[test]
    fn test_trailing_comma_inside_object_is_repaired() {
        let response = "[\n  {\"question\": \"q\", \"rationale\": \"r\", \"answer\": \"a\",\n  }\n]";
        assert_eq!(parse_questions(response), vec![record("q", "r", "a")]);
    }

    #[test]
    fn test_array_extracted_from_prose() {
        let response = format!("Sure! Here are your questions:\n{}\nHope this helps.", ONE);
        let decoded = decode(&normalize(&response)).unwrap();
        assert_eq!(decoded.stage, ParseStage::Extracted);
        assert_eq!(parse_questions(&response), vec![record("q", "r", "a")]);
    }

    #[test]
    fn test_repair_applies_to_extracted_span() {
        let response = r#"Here you go: [{"question":"q","rationale":"r","answer":"a",}] Done."#;
        let decoded = decode(&normalize(response)).unwrap();
        assert_eq!(decoded.stage, ParseStage::Repaired);
        assert_eq!(parse_questions(response), vec![record("q", "r", "a")]);
    }

    #[test]
    fn test_missing_fields_are_filtered() {
        let response = r#"[{"question":"q"},{"question":"q2","rationale":"r2","answer":"a2"}]"#;
        assert_eq!(parse_questions(response), vec![record("q2", "r2", "a2")]);
    }

    #[test]
    fn test_order_is_preserved() {
        let response = r#"[
            {"question":"z","rationale":"r","answer":"a"},
            {"question":"a","rationale":"r","answer":"a"},
            {"question":"m","rationale":"r","answer":"a"}
        ]"#;
        let order: Vec<String> = parse_questions(response)
            .into_iter()
            .map(|q| q.question)
            .collect();
        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_single_object_is_wrapped() {
        let response = r#"{"question":"q","rationale":"r","answer":"a"}"#;
        assert_eq!(parse_questions(response), vec![record("q", "r", "a")]);
    }

    #[test]
    fn test_not_json_yields_sentinel() {
        let questions = parse_questions("not json at all");
        assert_eq!(questions.len(), 1);
        assert!(questions[0].question.starts_with("Error:"));
        assert!(questions[0].is_sentinel());
        assert!(questions[0].answer.starts_with("Technical details: Could not parse response as JSON"));
    }

    #[test]
    fn test_no_valid_elements_yields_distinct_sentinel() {
        let failure = try_parse_questions(r#"[{"question":"q"}]"#).unwrap_err();
        assert_eq!(failure, ParseFailure::NoValidQuestions);

        let questions = parse_questions(r#"[{"question":"q"}]"#);
        assert_eq!(questions.len(), 1);
        assert!(questions[0].is_sentinel());
        assert_eq!(
            questions[0].answer,
            "Technical details: No valid questions were generated"
        );
    }

    #[test]
    fn test_empty_array_yields_sentinel() {
        assert_eq!(try_parse_questions("[]"), Err(ParseFailure::NoValidQuestions));
    }

    #[test]
    fn test_scalar_json_yields_sentinel() {
        assert_eq!(try_parse_questions("42"), Err(ParseFailure::NoValidQuestions));
        assert_eq!(try_parse_questions("\"hello\""), Err(ParseFailure::NoValidQuestions));
    }

    #[test]
    fn test_empty_reply_is_malformed() {
        assert!(matches!(try_parse_questions("   "), Err(ParseFailure::Malformed(_))));
    }

    #[test]
    fn test_unrepairable_extracted_span_is_malformed() {
        let response = r#"prefix [{"question": "q", "rationale": } ] suffix"#;
        assert!(matches!(try_parse_questions(response), Err(ParseFailure::Malformed(_))));
    }

    #[test]
    fn test_normalize_strips_fences_and_backticks() {
        assert_eq!(normalize("  ```json\n[1]\n```  "), "[1]");
        assert_eq!(normalize("`[1]`"), "[1]");
        assert_eq!(normalize("```JSON [1] ```"), "[1]");
    }

    #[test]
    fn test_normalize_keeps_text_glued_to_fence() {
        assert_eq!(normalize("```json\n[1]\n```Done"), "[1]\nDone");
        assert_eq!(normalize("```python\nprint(1)\n```"), "print(1)");
        assert_eq!(normalize("```jsonify me```"), "jsonify me");
    }

    #[test]
    fn test_normalize_keeps_inner_backticks() {
        let text = r#"[{"question":"What does `ls` do?","rationale":"r","answer":"a"}]"#;
        assert_eq!(normalize(text), text);
        assert_eq!(parse_questions(text)[0].question, "What does `ls` do?");
    }

    #[test]
    fn test_extract_array_is_greedy() {
        let text = r#"a [{"x":1}] b [{"y":2}] c"#;
        assert_eq!(extract_array(text), Some(r#"[{"x":1}] b [{"y":2}]"#));
        assert_eq!(extract_array("no array here"), None);
    }

    #[test]
    fn test_repair_trailing_commas() {
        assert_eq!(repair_trailing_commas("{\"a\":1,\n}"), "{\"a\":1}");
        assert_eq!(repair_trailing_commas("[1, 2 , ]"), "[1, 2 ]");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
