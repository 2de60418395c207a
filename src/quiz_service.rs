use crate::date_provider::{DateProvider, iso_timestamp};
use crate::error::SessionError;
use crate::question::{AnsweredRecord, Question, WrongAnswerRecord};
use crate::question_source::QuestionSource;
use crate::session::{
    AnswerResult, Mode, SessionState, accuracy_percent, progress_fraction, question_position,
    unsolved_questions,
};
use crate::shuffle::{Shuffle, shuffled_with};
use crate::storage::{
    HISTORY_KEY, KeyValueStore, WRONG_ANSWERS_KEY, erase_collection, load_collection,
    save_collection,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// Caller-supplied decision on whether to wipe history once every question is solved
pub trait RestartConfirmation {
    fn confirm_restart(&mut self) -> bool;
}

impl RestartConfirmation for bool {
    fn confirm_restart(&mut self) -> bool {
        *self
    }
}

impl<F: FnMut() -> bool> RestartConfirmation for F {
    fn confirm_restart(&mut self) -> bool {
        self()
    }
}

/// What `start_practice` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeStart {
    /// Unsolved questions were queued
    Started,
    /// Corpus was exhausted; history was cleared and the full corpus queued
    Restarted,
    /// Corpus was exhausted and the restart was declined; nothing changed
    Declined,
}

/// Quiz session controller: owns the session state and the two persisted collections
pub struct QuizService {
    state: SessionState,
    history: Vec<AnsweredRecord>,
    wrong_answers: Vec<WrongAnswerRecord>,
    store: Box<dyn KeyValueStore>,
    shuffler: Box<dyn Shuffle>,
    date_provider: Arc<dyn DateProvider>,
}

impl QuizService {
    /// Fetches the corpus, restores persisted collections and queues the unsolved questions
    pub fn load(
        source: &dyn QuestionSource,
        store: Box<dyn KeyValueStore>,
        mut shuffler: Box<dyn Shuffle>,
        date_provider: Arc<dyn DateProvider>,
    ) -> Result<Self, SessionError> {
        let all_questions = source.fetch()?;

        let history: Vec<AnsweredRecord> = load_collection(store.as_ref(), HISTORY_KEY);
        let wrong_answers = dedup_by_question(load_collection(store.as_ref(), WRONG_ANSWERS_KEY));

        let unsolved = unsolved_questions(&all_questions, &history);
        let queue = shuffled_with(shuffler.as_mut(), &unsolved);

        info!(
            "Session loaded: {} question(s), {} answered, {} unsolved, {} wrong answer(s)",
            all_questions.len(),
            history.len(),
            unsolved.len(),
            wrong_answers.len()
        );

        Ok(QuizService {
            state: SessionState::new(all_questions, queue),
            history,
            wrong_answers,
            store,
            shuffler,
            date_provider,
        })
    }

    /// Records an answer to the current question.
    ///
    /// Returns `None` without touching anything when the question was already
    /// answered or the queue is empty.
    pub fn submit_answer(&mut self, option: &str) -> Option<AnswerResult> {
        if self.state.is_answered {
            return None;
        }
        let question = self.state.current_question()?.clone();
        let is_correct = question.check_answer(option);
        let timestamp = iso_timestamp(self.date_provider.as_ref());

        self.state.is_answered = true;
        self.state.selected_answer = Some(option.to_string());

        if is_correct {
            self.state.correct_count += 1;
        } else {
            self.record_wrong_answer(WrongAnswerRecord {
                question: question.clone(),
                user_answer: option.to_string(),
                timestamp: timestamp.clone(),
            });
        }

        debug!(
            "Answered '{}' with '{}' ({}) in {} mode",
            question.text,
            option,
            if is_correct { "correct" } else { "wrong" },
            self.state.mode.as_str()
        );

        let correct_answer = question.correct_answer.clone();
        self.history.push(AnsweredRecord {
            question,
            user_answer: option.to_string(),
            is_correct,
            timestamp,
        });
        self.persist_history();

        Some(AnswerResult {
            is_correct,
            correct_answer,
        })
    }

    /// Moves to the next question; does nothing at the last one
    pub fn advance(&mut self) {
        if self.state.is_last_question() {
            return;
        }
        self.state.current_index += 1;
        self.state.clear_transient();
    }

    /// Starts (or restarts) practice on the questions not yet in history.
    ///
    /// When every question has been answered, `confirm` decides whether history is
    /// wiped and the whole corpus queued again; if it declines the session is untouched.
    pub fn start_practice(&mut self, confirm: &mut dyn RestartConfirmation) -> PracticeStart {
        let unsolved = unsolved_questions(&self.state.all_questions, &self.history);

        if unsolved.is_empty() {
            if !confirm.confirm_restart() {
                info!("All questions answered; restart declined");
                return PracticeStart::Declined;
            }
            self.clear_history();
            let queue = shuffled_with(self.shuffler.as_mut(), &self.state.all_questions);
            self.state.reset_for(queue, Mode::Practice);
            info!(
                "All questions answered; restarted with {} question(s)",
                self.state.active_queue.len()
            );
            return PracticeStart::Restarted;
        }

        let queue = shuffled_with(self.shuffler.as_mut(), &unsolved);
        self.state.reset_for(queue, Mode::Practice);
        info!("Practice started with {} unsolved question(s)", unsolved.len());
        PracticeStart::Started
    }

    /// Starts a review of every recorded wrong answer
    pub fn start_review(&mut self) -> Result<(), SessionError> {
        if self.wrong_answers.is_empty() {
            return Err(SessionError::EmptyReviewSet);
        }

        let questions: Vec<Question> = self
            .wrong_answers
            .iter()
            .map(|r| r.question.clone())
            .collect();
        let queue = shuffled_with(self.shuffler.as_mut(), &questions);
        self.state.reset_for(queue, Mode::Review);
        info!("Review started with {} question(s)", questions.len());
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        if let Err(e) = erase_collection(self.store.as_ref(), HISTORY_KEY) {
            warn!("Failed to erase persisted history: {}", e);
        }
        info!("History cleared");
    }

    pub fn clear_wrong_answers(&mut self) {
        self.wrong_answers.clear();
        if let Err(e) = erase_collection(self.store.as_ref(), WRONG_ANSWERS_KEY) {
            warn!("Failed to erase persisted wrong answers: {}", e);
        }
        info!("Wrong answers cleared");
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question()
    }

    pub fn history(&self) -> &[AnsweredRecord] {
        &self.history
    }

    pub fn wrong_answers(&self) -> &[WrongAnswerRecord] {
        &self.wrong_answers
    }

    pub fn total_questions(&self) -> usize {
        self.state.all_questions.len()
    }

    pub fn unsolved_count(&self) -> usize {
        unsolved_questions(&self.state.all_questions, &self.history).len()
    }

    pub fn progress(&self) -> f64 {
        progress_fraction(self.total_questions(), self.unsolved_count())
    }

    pub fn question_position(&self) -> usize {
        question_position(self.total_questions(), self.unsolved_count())
    }

    pub fn accuracy_percent(&self) -> u32 {
        accuracy_percent(self.state.correct_count, self.state.current_index)
    }

    /// Current time according to the injected clock
    pub fn now(&self) -> DateTime<Utc> {
        self.date_provider.get_current_time()
    }

    fn record_wrong_answer(&mut self, record: WrongAnswerRecord) {
        if self
            .wrong_answers
            .iter()
            .any(|r| r.question.text == record.question.text)
        {
            return;
        }
        self.wrong_answers.push(record);
        if let Err(e) = save_collection(self.store.as_ref(), WRONG_ANSWERS_KEY, &self.wrong_answers)
        {
            warn!("Failed to persist wrong answers: {}", e);
        }
    }

    fn persist_history(&self) {
        if let Err(e) = save_collection(self.store.as_ref(), HISTORY_KEY, &self.history) {
            warn!("Failed to persist history: {}", e);
        }
    }
}

/// Keeps the first record for each question text
fn dedup_by_question(records: Vec<WrongAnswerRecord>) -> Vec<WrongAnswerRecord> {
    let mut seen = HashSet::new();
    let before = records.len();
    let unique: Vec<WrongAnswerRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.question.text.clone()))
        .collect();
    if unique.len() != before {
        warn!(
            "Dropped {} duplicate wrong-answer record(s)",
            before - unique.len()
        );
    }
    unique
}
