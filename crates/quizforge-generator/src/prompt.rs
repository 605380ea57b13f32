//! LLM prompt engineering for question and answer generation

use quizforge_domain::{Difficulty, GenerationRequest, QuestionType};

/// Builds the prompt asking the model for a set of questions
pub struct QuestionPromptBuilder<'a> {
    text: &'a str,
    count: u32,
    difficulty: Difficulty,
    question_type: QuestionType,
}

impl<'a> QuestionPromptBuilder<'a> {
    /// Create a prompt builder for a request
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self {
            text: request.source_text(),
            count: request.count(),
            difficulty: request.difficulty(),
            question_type: request.question_type(),
        }
    }

    /// Build the complete question-generation prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and task
        prompt.push_str(QUESTION_ROLE);
        prompt.push_str("\n\n");
        prompt.push_str(&format!(
            "TASK: Generate {} interview questions based EXACTLY on the following text. \
             Each question MUST be directly tied to specific content from the text.\n\n",
            self.count
        ));

        // 2. The text to analyze
        prompt.push_str("TEXT TO ANALYZE:\n");
        prompt.push_str(self.text);
        prompt.push_str("\n\n");

        // 3. Difficulty and type
        prompt.push_str("INSTRUCTIONS:\n");
        prompt.push_str(&format!(
            "1. DIFFICULTY: {} - {}\n",
            self.difficulty.label(),
            self.difficulty.description()
        ));
        prompt.push_str(&format!(
            "2. QUESTION TYPE: {} - {}\n\n",
            self.question_type.label(),
            self.question_type.description()
        ));

        // 4. Per-question guidance, example and output format
        prompt.push_str(QUESTION_GUIDANCE);
        prompt.push_str("\n\n");
        prompt.push_str(QUESTION_OUTPUT_FORMAT);

        prompt
    }
}

/// Builds the prompt asking the model to answer one question
pub struct AnswerPromptBuilder<'a> {
    question: &'a str,
    context: &'a str,
}

impl<'a> AnswerPromptBuilder<'a> {
    /// Create a prompt builder for a question and its context
    pub fn new(question: &'a str, context: &'a str) -> Self {
        Self { question, context }
    }

    /// Build the complete answer prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();
        prompt.push_str(ANSWER_ROLE);
        prompt.push_str("\n\n");
        prompt.push_str("Context:\n");
        prompt.push_str(self.context);
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Question: {}\n\n", self.question));
        prompt.push_str(ANSWER_OUTPUT_FORMAT);
        prompt
    }
}

const QUESTION_ROLE: &str =
    "You are an expert at generating high-quality, context-specific interview questions.";

const QUESTION_GUIDANCE: &str = r#"FOR EACH QUESTION:
- Formulate a question that can ONLY be answered by someone who has read and understood the text
- Include specific references to people, events, or concepts mentioned in the text
- For the answer, directly quote relevant parts of the text to support your response

EXAMPLE (for reference):
Question: "How does the author describe the impact of [specific concept] in the text?"
Rationale: "This question tests the reader's comprehension of a key concept and its significance as presented in the text."
Answer: "The author describes the impact as 'quote from text' (paragraph X), emphasizing [specific detail]. This is further supported by their mention of 'another quote' (paragraph Y).""#;

const QUESTION_OUTPUT_FORMAT: &str = r#"YOUR RESPONSE MUST BE VALID JSON with this exact structure:
[
  {
    "question": "Your specific question about the text",
    "rationale": "Why this question is relevant to the text",
    "answer": "Detailed answer with direct quotes from the text"
  }
]

CRITICAL REQUIREMENTS:
1. Questions MUST be answerable using ONLY the provided text
2. Answers MUST include direct quotes from the text
3. Each question should focus on a different aspect of the text
4. Do NOT generate generic questions that could apply to any text
5. Maintain the exact JSON structure - no markdown formatting"#;

const ANSWER_ROLE: &str = r#"You are an expert at providing high-quality answers to interview questions.
Provide a clear, concise, and accurate answer to the given question based on the provided context.
Include a brief rationale explaining how you arrived at the answer."#;

const ANSWER_OUTPUT_FORMAT: &str = r#"Please provide a detailed answer and a brief rationale.
Format your response as:
Answer: [your answer here]
Rationale: [your rationale here]"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: u32, difficulty: Difficulty, kind: QuestionType) -> GenerationRequest {
        GenerationRequest::new("Alice founded Acme in 1999.", count, difficulty, kind).unwrap()
    }

    #[test]
    fn test_prompt_includes_text_and_count() {
        let req = request(7, Difficulty::Medium, QuestionType::Comprehension);
        let prompt = QuestionPromptBuilder::new(&req).build();
        assert!(prompt.contains("Alice founded Acme in 1999."));
        assert!(prompt.contains("Generate 7 interview questions"));
    }

    #[test]
    fn test_prompt_includes_difficulty_and_type() {
        let req = request(3, Difficulty::Hard, QuestionType::Evaluation);
        let prompt = QuestionPromptBuilder::new(&req).build();
        assert!(prompt.contains("1. DIFFICULTY: Hard - evaluation, synthesis, and critical thinking"));
        assert!(prompt.contains(
            "2. QUESTION TYPE: Evaluation - make judgments based on criteria and standards"
        ));
    }

    #[test]
    fn test_prompt_demands_json_fields() {
        let req = request(1, Difficulty::Easy, QuestionType::Analysis);
        let prompt = QuestionPromptBuilder::new(&req).build();
        assert!(prompt.contains("\"question\""));
        assert!(prompt.contains("\"rationale\""));
        assert!(prompt.contains("\"answer\""));
        assert!(prompt.contains("VALID JSON"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request(5, Difficulty::Medium, QuestionType::Application);
        let first = QuestionPromptBuilder::new(&req).build();
        let second = QuestionPromptBuilder::new(&req).build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_answer_prompt_layout() {
        let prompt = AnswerPromptBuilder::new("What is the capital?", "France's capital is Paris.")
            .build();
        assert!(prompt.contains("Context:\nFrance's capital is Paris."));
        assert!(prompt.contains("Question: What is the capital?"));
        assert!(prompt.ends_with("Rationale: [your rationale here]"));
    }
}
