//! Parse a single-answer reply

use quizforge_domain::{AnswerRecord, DEFAULT_ANSWER_RATIONALE};

/// Marker opening the answer part of a reply
pub const ANSWER_MARKER: &str = "Answer:";

/// Marker opening the rationale part of a reply
pub const RATIONALE_MARKER: &str = "Rationale:";

/// Split an `Answer: ... Rationale: ...` reply into its two fields.
///
/// Total: a reply that does not follow the format, or whose answer part is
/// blank, becomes the answer as a whole with the default rationale. A blank
/// rationale part is replaced by the default rationale.
pub fn parse_answer(raw: &str) -> AnswerRecord {
    if let Some((head, rationale)) = raw.split_once(RATIONALE_MARKER) {
        if head.contains(ANSWER_MARKER) {
            let answer = head.replace(ANSWER_MARKER, "");
            let answer = answer.trim();
            if !answer.is_empty() {
                let rationale = match rationale.trim() {
                    "" => DEFAULT_ANSWER_RATIONALE,
                    rationale => rationale,
                };
                return AnswerRecord::new(answer, rationale);
            }
        }
    }
    AnswerRecord::unstructured(raw)
}
