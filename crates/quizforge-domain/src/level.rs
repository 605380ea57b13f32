//! Level module - difficulty and question-type selectors for a generation request

/// How demanding the generated questions should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Recall-oriented questions
    Easy,

    /// Application and analysis questions
    #[default]
    Medium,

    /// Evaluation and synthesis questions
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Get the difficulty name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// What the model should aim for at this difficulty
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "basic understanding and recall of the material",
            Difficulty::Medium => "application of concepts and analysis",
            Difficulty::Hard => "evaluation, synthesis, and critical thinking",
        }
    }

    /// Parse a difficulty from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("Invalid difficulty level: {}. Choose from: easy, medium, hard", s)
        })
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The cognitive skill a question should exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuestionType {
    /// Understanding of the material
    #[default]
    Comprehension,

    /// Breaking information into components
    Analysis,

    /// Applying knowledge to new situations
    Application,

    /// Judging against criteria and standards
    Evaluation,
}

impl QuestionType {
    /// All question types
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Comprehension,
        QuestionType::Analysis,
        QuestionType::Application,
        QuestionType::Evaluation,
    ];

    /// Get the question type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Comprehension => "comprehension",
            QuestionType::Analysis => "analysis",
            QuestionType::Application => "application",
            QuestionType::Evaluation => "evaluation",
        }
    }

    /// Capitalized label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Comprehension => "Comprehension",
            QuestionType::Analysis => "Analysis",
            QuestionType::Application => "Application",
            QuestionType::Evaluation => "Evaluation",
        }
    }

    /// What questions of this type should require
    pub fn description(&self) -> &'static str {
        match self {
            QuestionType::Comprehension => "test understanding of the material",
            QuestionType::Analysis => "require breaking down information into components",
            QuestionType::Application => "apply knowledge to new situations",
            QuestionType::Evaluation => "make judgments based on criteria and standards",
        }
    }

    /// Parse a question type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "comprehension" => Some(QuestionType::Comprehension),
            "analysis" => Some(QuestionType::Analysis),
            "application" => Some(QuestionType::Application),
            "evaluation" => Some(QuestionType::Evaluation),
            _ => None,
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid question type: {}. Choose from: comprehension, analysis, application, evaluation",
                s
            )
        })
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("MEDIUM"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse(" hard "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("brutal"), None);
    }

    #[test]
    fn test_difficulty_from_str_error_lists_choices() {
        let err = "brutal".parse::<Difficulty>().unwrap_err();
        assert!(err.contains("easy, medium, hard"));
    }

    #[test]
    fn test_question_type_round_trip_names() {
        for kind in QuestionType::ALL {
            assert_eq!(QuestionType::parse(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(QuestionType::default(), QuestionType::Comprehension);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Difficulty::Hard.description(), "evaluation, synthesis, and critical thinking");
        assert_eq!(QuestionType::Application.description(), "apply knowledge to new situations");
        assert_eq!(Difficulty::Easy.label(), "Easy");
    }
}
