//! Structural check applied to every decoded candidate
//!
//! Acceptance only requires the three keys to be present. Values are coerced
//! to strings and trimmed, and blank values are kept: callers that need
//! non-empty content should check [`QuestionRecord::has_blank_fields`].

use quizforge_domain::QuestionRecord;
use serde_json::Value;

/// Keys every candidate must carry
pub const REQUIRED_FIELDS: [&str; 3] = ["question", "rationale", "answer"];

/// Turn a decoded candidate into a record, or `None` if a key is missing
pub fn validate(candidate: &Value) -> Option<QuestionRecord> {
    let object = candidate.as_object()?;
    let question = object.get("question")?;
    let rationale = object.get("rationale")?;
    let answer = object.get("answer")?;

    Some(QuestionRecord::new(
        coerce(question),
        coerce(rationale),
        coerce(answer),
    ))
}

/// Required keys the candidate lacks; all of them if it is not an object
pub fn missing_fields(candidate: &Value) -> Vec<&'static str> {
    match candidate.as_object() {
        Some(object) => REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !object.contains_key(*field))
            .collect(),
        None => REQUIRED_FIELDS.to_vec(),
    }
}

/// Strings are taken verbatim, anything else in compact JSON form
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_candidate_is_accepted() {
        let candidate = json!({"question": " q ", "rationale": "r\n", "answer": "\ta"});
        assert_eq!(validate(&candidate), Some(QuestionRecord::new("q", "r", "a")));
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let candidate = json!({"question": "q", "answer": "a"});
        assert_eq!(validate(&candidate), None);
        assert_eq!(missing_fields(&candidate), vec!["rationale"]);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert_eq!(validate(&json!("question rationale answer")), None);
        assert_eq!(validate(&json!(["question", "rationale", "answer"])), None);
        assert_eq!(missing_fields(&json!(7)), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_blank_values_are_accepted() {
        let candidate = json!({"question": "q", "rationale": "   ", "answer": ""});
        let record = validate(&candidate).unwrap();
        assert_eq!(record.rationale, "");
        assert!(record.has_blank_fields());
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let candidate = json!({"question": 42, "rationale": true, "answer": null});
        let record = validate(&candidate).unwrap();
        assert_eq!(record.question, "42");
        assert_eq!(record.rationale, "true");
        assert_eq!(record.answer, "null");
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let candidate = json!({"question": "q", "rationale": "r", "answer": "a", "difficulty": "hard"});
        assert_eq!(validate(&candidate), Some(QuestionRecord::new("q", "r", "a")));
    }
}
