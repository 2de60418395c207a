use crate::question::{AnsweredRecord, Question};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Practice,
    Review,
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Practice => "practice",
            Mode::Review => "review",
        }
    }
}

/// Everything the session controller tracks between operations
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Full corpus, loaded once
    pub all_questions: Vec<Question>,
    /// Current shuffled working set
    pub active_queue: Vec<Question>,
    pub current_index: usize,
    pub selected_answer: Option<String>,
    pub is_answered: bool,
    pub correct_count: usize,
    pub mode: Mode,
}

impl SessionState {
    pub fn new(all_questions: Vec<Question>, active_queue: Vec<Question>) -> Self {
        SessionState {
            all_questions,
            active_queue,
            current_index: 0,
            selected_answer: None,
            is_answered: false,
            correct_count: 0,
            mode: Mode::Practice,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active_queue.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.active_queue.len()
    }

    /// Installs a fresh working set and clears counters and per-question state
    pub fn reset_for(&mut self, queue: Vec<Question>, mode: Mode) {
        self.active_queue = queue;
        self.current_index = 0;
        self.correct_count = 0;
        self.mode = mode;
        self.clear_transient();
    }

    pub fn clear_transient(&mut self) {
        self.selected_answer = None;
        self.is_answered = false;
    }
}

/// Outcome of a submitted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Questions whose text does not appear anywhere in the history.
///
/// Matching is by question text only, so questions sharing text across years
/// are treated as one.
pub fn unsolved_questions(all: &[Question], history: &[AnsweredRecord]) -> Vec<Question> {
    let solved: HashSet<&str> = history.iter().map(|r| r.question.text.as_str()).collect();
    all.iter()
        .filter(|q| !solved.contains(q.text.as_str()))
        .cloned()
        .collect()
}

/// Displayed progress: `(total - unsolved + 1) / total`, 0 for an empty corpus
pub fn progress_fraction(total: usize, unsolved: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    question_position(total, unsolved) as f64 / total as f64
}

/// The 1-based "Question X of N" number shown next to the progress bar
pub fn question_position(total: usize, unsolved: usize) -> usize {
    (total + 1).saturating_sub(unsolved)
}

/// Session accuracy shown in the footer, rounded to a whole percent
pub fn accuracy_percent(correct_count: usize, current_index: usize) -> u32 {
    ((correct_count as f64 / (current_index + 1) as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Question {
        Question::new(2023, text, &["a", "b"], "a")
    }

    fn answered(text: &str) -> AnsweredRecord {
        AnsweredRecord {
            question: q(text),
            user_answer: "a".to_string(),
            is_correct: true,
            timestamp: "2024-05-01T08:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(Mode::Practice.as_str(), "practice");
        assert_eq!(Mode::Review.as_str(), "review");
    }


    #[test]
    fn test_unsolved_excludes_history() {
        let all = vec![q("A"), q("B"), q("C")];
        let history = vec![answered("B")];
        let unsolved = unsolved_questions(&all, &history);
        let texts: Vec<&str> = unsolved.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[test]
    fn test_unsolved_collapses_duplicate_text_across_years() {
        let mut other_year = q("A");
        other_year.year = 2020;
        let all = vec![q("A"), other_year];
        let unsolved = unsolved_questions(&all, &[answered("A")]);
        assert!(unsolved.is_empty());
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(10, 10), 0.1);
        assert_eq!(progress_fraction(4, 2), 0.75);
        assert_eq!(progress_fraction(4, 0), 1.25);
        assert_eq!(progress_fraction(0, 0), 0.0);
    }

    #[test]
    fn test_question_position() {
        assert_eq!(question_position(10, 10), 1);
        assert_eq!(question_position(10, 3), 8);
        assert_eq!(question_position(10, 0), 11);
    }

    #[test]
    fn test_accuracy_percent_rounds() {
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(1, 0), 100);
        assert_eq!(accuracy_percent(2, 2), 67);
        assert_eq!(accuracy_percent(1, 2), 33);
        assert_eq!(accuracy_percent(1, 7), 13);
    }

    #[test]
    fn test_reset_for_clears_counters() {
        let mut state = SessionState::new(vec![q("A"), q("B")], vec![q("A"), q("B")]);
        state.current_index = 1;
        state.correct_count = 2;
        state.selected_answer = Some("a".to_string());
        state.is_answered = true;

        state.reset_for(vec![q("B")], Mode::Review);

        assert_eq!(state.current_index, 0);
        assert_eq!(state.correct_count, 0);
        assert_eq!(state.selected_answer, None);
        assert!(!state.is_answered);
        assert_eq!(state.mode, Mode::Review);
        assert_eq!(state.active_queue, vec![q("B")]);
    }

    #[test]
    fn test_current_and_last_question() {
        let mut state = SessionState::new(vec![], vec![q("A"), q("B")]);
        assert_eq!(state.current_question().map(|q| q.text.as_str()), Some("A"));
        assert!(!state.is_last_question());
        state.current_index = 1;
        assert!(state.is_last_question());

        let empty = SessionState::new(vec![], vec![]);
        assert!(empty.current_question().is_none());
        assert!(empty.is_last_question());
    }
}
