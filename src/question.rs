use serde::{Deserialize, Serialize};

/// A single multiple-choice question from the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub year: i32,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(year: i32, text: &str, options: &[&str], correct_answer: &str) -> Self {
        Question {
            year,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }

    pub fn check_answer(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    /// The correct answer must match exactly one of the options
    pub fn validate(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err(format!("'{}' has no options", self.text));
        }

        match self
            .options
            .iter()
            .filter(|o| **o == self.correct_answer)
            .count()
        {
            1 => Ok(()),
            0 => Err(format!(
                "'{}': correct answer '{}' is not one of the options",
                self.text, self.correct_answer
            )),
            n => Err(format!(
                "'{}': correct answer '{}' appears {} times among the options",
                self.text, self.correct_answer, n
            )),
        }
    }
}

/// A question as it was answered; appended to the history and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredRecord {
    #[serde(flatten)]
    pub question: Question,
    #[serde(rename = "userAnswer")]
    pub user_answer: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    pub timestamp: String,
}

/// A question that was answered incorrectly, unique by question text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswerRecord {
    #[serde(flatten)]
    pub question: Question,
    #[serde(rename = "userAnswer")]
    pub user_answer: String,
    pub timestamp: String,
}
