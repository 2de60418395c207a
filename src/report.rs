use crate::question::{AnsweredRecord, WrongAnswerRecord};
use crate::session::{AnswerResult, Mode};
use crate::statistics::HistorySummary;
use crate::time_format::{format_timestamp, format_timestamp_since};
use chrono::{DateTime, FixedOffset, Utc};
use colored::Colorize;

pub fn feedback_message(result: &AnswerResult) -> String {
    if result.is_correct {
        "Correct!".to_string()
    } else {
        format!("Wrong! The correct answer is: {}", result.correct_answer)
    }
}

pub fn session_title(mode: Mode, unsolved_count: usize) -> String {
    match mode {
        Mode::Practice => format!("Practice ({} unanswered)", unsolved_count),
        Mode::Review => "Wrong-answer review".to_string(),
    }
}

pub fn position_label(position: usize, total: usize) -> String {
    format!("Question {} / {}", position, total)
}

pub fn accuracy_label(percent: u32) -> String {
    format!("Accuracy: {}%", percent)
}

/// Local timestamp followed by its age, e.g. "2024-05-01 08:30:00 (2 hours ago)"
fn timestamp_line(timestamp: &str, offset: &FixedOffset, now: DateTime<Utc>) -> String {
    let shown = format_timestamp(timestamp, offset);
    match format_timestamp_since(timestamp, now) {
        Some(since) => format!("{} ({})", shown, since),
        None => shown,
    }
}

/// Lines shown for one entry of the history tab
pub fn history_entry_lines(
    record: &AnsweredRecord,
    offset: &FixedOffset,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut lines = vec![
        timestamp_line(&record.timestamp, offset, now),
        record.question.text.clone(),
        if record.is_correct { "Correct" } else { "Wrong" }.to_string(),
        format!("Your answer: {}", record.user_answer),
    ];
    if !record.is_correct {
        lines.push(format!("Correct answer: {}", record.question.correct_answer));
    }
    lines
}

/// Lines shown for one entry of the wrong-answers tab
pub fn wrong_answer_entry_lines(
    record: &WrongAnswerRecord,
    offset: &FixedOffset,
    now: DateTime<Utc>,
) -> Vec<String> {
    vec![
        timestamp_line(&record.timestamp, offset, now),
        record.question.text.clone(),
        format!("Your answer: {}", record.user_answer),
        format!("Correct answer: {}", record.question.correct_answer),
    ]
}

/// Multi-line history report used by the `quiz_stats` binary
pub fn render_summary(
    summary: &HistorySummary,
    wrong_answer_count: usize,
    use_color: bool,
) -> String {
    let title = "Quiz History Report";
    let mut lines = vec![
        paint(title, use_color, |s| s.bold().to_string()),
        "=".repeat(title.len()),
        String::new(),
    ];

    if summary.total_answers == 0 {
        lines.push("No answers recorded yet.".to_string());
        lines.push(format!("Wrong answers to review: {}", wrong_answer_count));
        return lines.join("\n");
    }

    lines.push(format!(
        "Answers: {} ({} correct, {} wrong)",
        summary.total_answers, summary.correct_answers, summary.incorrect_answers
    ));
    lines.push(format!(
        "Distinct questions answered: {}",
        summary.distinct_questions
    ));
    let accuracy = format!("{:.1}%", summary.accuracy_percentage);
    lines.push(format!(
        "Accuracy: {}",
        paint(&accuracy, use_color, |s| accuracy_color(s, summary.accuracy_percentage))
    ));
    lines.push(format!("Wrong answers to review: {}", wrong_answer_count));
    lines.push(String::new());
    lines.push("By year:".to_string());

    for (year, stats) in &summary.by_year {
        let pct = format!("{:.1}%", stats.accuracy_percentage());
        lines.push(format!(
            "  {} - {} answer(s), {} correct",
            year,
            stats.total_answers,
            paint(&pct, use_color, |s| accuracy_color(s, stats.accuracy_percentage()))
        ));
    }

    lines.join("\n")
}

fn paint(text: &str, use_color: bool, style: impl Fn(&str) -> String) -> String {
    if use_color {
        style(text)
    } else {
        text.to_string()
    }
}

fn accuracy_color(text: &str, percentage: f64) -> String {
    if percentage >= 80.0 {
        text.green().to_string()
    } else if percentage >= 50.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
