use crate::error::LoadError;
use crate::question::Question;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Read-only provider of the full question corpus, consumed once at load time
pub trait QuestionSource {
    fn fetch(&self) -> Result<Vec<Question>, LoadError>;
}

/// Reads the corpus from a static JSON file (an array of questions)
pub struct JsonFileQuestionSource {
    path: PathBuf,
}

impl JsonFileQuestionSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl QuestionSource for JsonFileQuestionSource {
    fn fetch(&self) -> Result<Vec<Question>, LoadError> {
        debug!("Reading questions from {}", self.path.display());
        let body = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Unreachable {
            path: self.path.clone(),
            source,
        })?;

        let questions = parse_questions(&body)?;
        info!(
            "Loaded {} question(s) from {}",
            questions.len(),
            self.path.display()
        );
        Ok(questions)
    }
}

impl QuestionSource for Vec<Question> {
    fn fetch(&self) -> Result<Vec<Question>, LoadError> {
        validate_all(self)?;
        Ok(self.clone())
    }
}

/// Parses and validates a JSON array of questions
pub fn parse_questions(body: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(body)?;
    validate_all(&questions)?;
    Ok(questions)
}

fn validate_all(questions: &[Question]) -> Result<(), LoadError> {
    for (index, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|reason| LoadError::InvalidQuestion { index, reason })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "quiz_practice_source_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).expect("Failed to write temp file");
        path
    }

    #[test]
    fn test_parse_questions_valid() {
        let body = r#"[
            {"year":2023,"question":"A?","options":["1","2"],"correct_answer":"1"},
            {"year":2024,"question":"B?","options":["3","4"],"correct_answer":"4"}
        ]"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].text, "B?");
    }

    #[test]
    fn test_parse_questions_not_an_array() {
        let err = parse_questions(r#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_parse_questions_invalid_question() {
        let body = r#"[
            {"year":2023,"question":"A?","options":["1","2"],"correct_answer":"1"},
            {"year":2023,"question":"B?","options":["1","2"],"correct_answer":"9"}
        ]"#;
        let err = parse_questions(body).unwrap_err();
        assert!(matches!(err, LoadError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn test_file_source_reads_file() {
        let path = temp_file(
            "valid",
            r#"[{"year":2022,"question":"Q","options":["a","b"],"correct_answer":"b"}]"#,
        );
        let source = JsonFileQuestionSource::new(&path);
        let questions = source.fetch().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].year, 2022);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_file_source_missing_file_is_unreachable() {
        let source = JsonFileQuestionSource::new("/nonexistent/quiz_practice/questions.json");
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, LoadError::Unreachable { .. }));
    }

    #[test]
    fn test_vec_source_validates() {
        let corpus = vec![Question::new(2023, "Q", &["a"], "b")];
        assert!(corpus.fetch().is_err());
    }
}
