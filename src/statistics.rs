use crate::question::AnsweredRecord;
use std::collections::BTreeMap;

/// Answer counts for one exam year
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSummary {
    pub total_answers: usize,
    pub correct_answers: usize,
}

impl YearSummary {
    pub fn accuracy_percentage(&self) -> f64 {
        percentage(self.correct_answers, self.total_answers)
    }
}

/// Aggregate view over the answer history
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub total_answers: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    /// Distinct question texts answered at least once
    pub distinct_questions: usize,
    pub accuracy_percentage: f64,
    pub by_year: BTreeMap<i32, YearSummary>,
}

impl HistorySummary {
    pub fn from_history(history: &[AnsweredRecord]) -> Self {
        let total_answers = history.len();
        let correct_answers = history.iter().filter(|r| r.is_correct).count();

        let mut by_year: BTreeMap<i32, YearSummary> = BTreeMap::new();
        for record in history {
            let year = by_year.entry(record.question.year).or_default();
            year.total_answers += 1;
            if record.is_correct {
                year.correct_answers += 1;
            }
        }

        let mut texts: Vec<&str> = history.iter().map(|r| r.question.text.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();

        HistorySummary {
            total_answers,
            correct_answers,
            incorrect_answers: total_answers - correct_answers,
            distinct_questions: texts.len(),
            accuracy_percentage: percentage(correct_answers, total_answers),
            by_year,
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Question;

    fn record(year: i32, text: &str, correct: bool) -> AnsweredRecord {
        AnsweredRecord {
            question: Question::new(year, text, &["a", "b"], "a"),
            user_answer: if correct { "a" } else { "b" }.to_string(),
            is_correct: correct,
            timestamp: "2024-05-01T08:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_summary_calculation() {
        let history = vec![
            record(2023, "Q1", true),
            record(2023, "Q2", false),
            record(2024, "Q3", true),
            record(2024, "Q4", true),
        ];

        let summary = HistorySummary::from_history(&history);

        assert_eq!(summary.total_answers, 4);
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.incorrect_answers, 1);
        assert_eq!(summary.accuracy_percentage, 75.0);
        assert_eq!(summary.by_year.len(), 2);
        assert_eq!(summary.by_year[&2023].accuracy_percentage(), 50.0);
        assert_eq!(summary.by_year[&2024].accuracy_percentage(), 100.0);
    }

    #[test]
    fn test_repeated_questions_counted_once_as_distinct() {
        let history = vec![
            record(2023, "Q1", false),
            record(2023, "Q1", true),
            record(2023, "Q2", true),
        ];
        let summary = HistorySummary::from_history(&history);
        assert_eq!(summary.total_answers, 3);
        assert_eq!(summary.distinct_questions, 2);
    }

    #[test]
    fn test_summary_empty() {
        let summary = HistorySummary::from_history(&[]);
        assert_eq!(summary.total_answers, 0);
        assert_eq!(summary.accuracy_percentage, 0.0);
        assert!(summary.by_year.is_empty());
    }

    #[test]
    fn test_years_are_ordered() {
        let history = vec![
            record(2024, "Q1", true),
            record(2021, "Q2", true),
            record(2022, "Q3", true),
        ];
        let summary = HistorySummary::from_history(&history);
        let years: Vec<i32> = summary.by_year.keys().copied().collect();
        assert_eq!(years, vec![2021, 2022, 2024]);
    }
}
