use crate::error::SessionError;
use crate::quiz_service::{PracticeStart, QuizService};
use crate::report::{
    accuracy_label, feedback_message, history_entry_lines, position_label, session_title,
    wrong_answer_entry_lines,
};
use crate::session::{AnswerResult, Mode};
use chrono::{FixedOffset, Local};
use eframe::egui;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Practice,
    WrongAnswers,
    History,
}

impl Tab {
    fn label(&self) -> &str {
        match self {
            Tab::Practice => "Practice",
            Tab::WrongAnswers => "Wrong answers",
            Tab::History => "History",
        }
    }
}

/// Everything the user can do; rendering only records actions, `apply` performs them
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Select(String),
    Next,
    /// Button shown at the last question: review after practice, practice after review
    Finish,
    StartPractice,
    ConfirmRestart(bool),
    StartReview,
    ClearHistory,
    ClearWrongAnswers,
    DismissNotice,
    ShowTab(Tab),
}

pub struct QuizApp {
    service: QuizService,
    tab: Tab,
    last_result: Option<AnswerResult>,
    notice: Option<String>,
    confirming_restart: bool,
    offset: FixedOffset,
}

impl QuizApp {
    pub fn new(service: QuizService) -> Self {
        Self {
            service,
            tab: Tab::Practice,
            last_result: None,
            notice: None,
            confirming_restart: false,
            offset: *Local::now().offset(),
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(option) => {
                if let Some(result) = self.service.submit_answer(&option) {
                    self.last_result = Some(result);
                }
            }
            Action::Next => {
                if self.service.state().is_answered {
                    self.service.advance();
                    self.last_result = None;
                }
            }
            Action::Finish => {
                let mode = self.service.state().mode;
                match mode {
                    Mode::Practice => self.apply(Action::StartReview),
                    Mode::Review => self.apply(Action::StartPractice),
                }
            }
            Action::StartPractice => {
                if self.service.unsolved_count() == 0 {
                    self.confirming_restart = true;
                } else {
                    self.service.start_practice(&mut false);
                    self.enter_session();
                }
            }
            Action::ConfirmRestart(confirmed) => {
                self.confirming_restart = false;
                let mut decision = confirmed;
                if self.service.start_practice(&mut decision) != PracticeStart::Declined {
                    self.enter_session();
                }
            }
            Action::StartReview => match self.service.start_review() {
                Ok(()) => self.enter_session(),
                Err(e) => {
                    info!("Review not started: {}", e);
                    self.notice = Some(e.to_string());
                }
            },
            Action::ClearHistory => self.service.clear_history(),
            Action::ClearWrongAnswers => self.service.clear_wrong_answers(),
            Action::DismissNotice => self.notice = None,
            Action::ShowTab(tab) => self.tab = tab,
        }
    }

    fn enter_session(&mut self) {
        self.tab = Tab::Practice;
        self.last_result = None;
        self.notice = None;
    }

    // Helper methods for testing
    pub fn service(&self) -> &QuizService {
        &self.service
    }

    pub fn get_current_tab(&self) -> Tab {
        self.tab
    }

    pub fn get_last_result(&self) -> Option<&AnswerResult> {
        self.last_result.as_ref()
    }

    pub fn get_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_confirming_restart(&self) -> bool {
        self.confirming_restart
    }

    fn show_practice(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let state = self.service.state();

        ui.horizontal(|ui| {
            ui.heading(session_title(state.mode, self.service.unsolved_count()));
            if state.mode == Mode::Review && ui.button("Back to practice").clicked() {
                actions.push(Action::StartPractice);
            }
        });
        ui.label(position_label(
            self.service.question_position(),
            self.service.total_questions(),
        ));
        ui.add(egui::ProgressBar::new(
            self.service.progress().clamp(0.0, 1.0) as f32,
        ));
        ui.add_space(10.0);

        let Some(question) = self.service.current_question() else {
            ui.label("Every question has been answered.");
            if ui.button("Start over").clicked() {
                actions.push(Action::StartPractice);
            }
            return;
        };

        ui.weak(format!("{} exam", question.year));
        ui.label(egui::RichText::new(&question.text).size(18.0));
        ui.add_space(10.0);

        for option in &question.options {
            let selected = state.selected_answer.as_deref() == Some(option.as_str());
            let text = if selected && question.check_answer(option) {
                egui::RichText::new(format!("✓ {}", option)).color(egui::Color32::GREEN)
            } else if selected {
                egui::RichText::new(format!("✗ {}", option)).color(egui::Color32::RED)
            } else {
                egui::RichText::new(option)
            };
            if ui
                .add_enabled(!state.is_answered, egui::Button::new(text))
                .clicked()
            {
                actions.push(Action::Select(option.clone()));
            }
        }

        if let Some(result) = &self.last_result {
            ui.add_space(10.0);
            let color = if result.is_correct {
                egui::Color32::GREEN
            } else {
                egui::Color32::RED
            };
            ui.colored_label(color, feedback_message(result));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(accuracy_label(self.service.accuracy_percent()));
            if state.is_last_question() {
                let label = match state.mode {
                    Mode::Review => "Back to practice",
                    Mode::Practice => "Restart",
                };
                if ui.button(label).clicked() {
                    actions.push(Action::Finish);
                }
            } else if ui
                .add_enabled(state.is_answered, egui::Button::new("Next →"))
                .clicked()
            {
                actions.push(Action::Next);
            }
        });
    }

    fn show_wrong_answers(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let wrong_answers = self.service.wrong_answers();
        let now = self.service.now();
        ui.heading("Wrong answers");
        ui.label(format!("{} question(s) to review", wrong_answers.len()));
        ui.horizontal(|ui| {
            if ui.button("Start review").clicked() {
                actions.push(Action::StartReview);
            }
            if ui.button("Clear wrong answers").clicked() {
                actions.push(Action::ClearWrongAnswers);
            }
        });
        ui.add_space(10.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for record in wrong_answers {
                ui.group(|ui| {
                    let lines = wrong_answer_entry_lines(record, &self.offset, now);
                    show_entry(ui, &lines, &[(2, egui::Color32::RED), (3, egui::Color32::GREEN)]);
                });
            }
        });
    }

    fn show_history(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let now = self.service.now();
        ui.horizontal(|ui| {
            ui.heading("Answer history");
            if ui.button("Clear history").clicked() {
                actions.push(Action::ClearHistory);
            }
        });
        ui.add_space(10.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for record in self.service.history() {
                ui.group(|ui| {
                    let lines = history_entry_lines(record, &self.offset, now);
                    let verdict = if record.is_correct {
                        egui::Color32::GREEN
                    } else {
                        egui::Color32::RED
                    };
                    show_entry(ui, &lines, &[(2, verdict), (4, egui::Color32::GREEN)]);
                });
            }
        });
    }
}

/// Renders entry lines; the first is the timestamp, `colors` tints lines by index
fn show_entry(ui: &mut egui::Ui, lines: &[String], colors: &[(usize, egui::Color32)]) {
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            ui.small(line.as_str());
        } else if let Some((_, color)) = colors.iter().find(|(idx, _)| *idx == i) {
            ui.colored_label(*color, line.as_str());
        } else {
            ui.label(line.as_str());
        }
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in [Tab::Practice, Tab::WrongAnswers, Tab::History] {
                    if ui.selectable_label(self.tab == tab, tab.label()).clicked() {
                        actions.push(Action::ShowTab(tab));
                    }
                }
            });
            ui.separator();

            if let Some(notice) = &self.notice {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::YELLOW, notice.as_str());
                    if ui.small_button("✕").clicked() {
                        actions.push(Action::DismissNotice);
                    }
                });
                ui.add_space(6.0);
            }

            match self.tab {
                Tab::Practice => self.show_practice(ui, &mut actions),
                Tab::WrongAnswers => self.show_wrong_answers(ui, &mut actions),
                Tab::History => self.show_history(ui, &mut actions),
            }
        });

        if self.confirming_restart {
            egui::Window::new("All questions answered")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("You have answered every question. Clear history and start over?");
                    ui.horizontal(|ui| {
                        if ui.button("Start over").clicked() {
                            actions.push(Action::ConfirmRestart(true));
                        }
                        if ui.button("Cancel").clicked() {
                            actions.push(Action::ConfirmRestart(false));
                        }
                    });
                });
        }

        for action in actions {
            self.apply(action);
        }
    }
}

/// Blocking screen shown when the question corpus could not be loaded
pub struct LoadFailureApp {
    message: String,
}

impl LoadFailureApp {
    pub fn new(error: &SessionError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

impl eframe::App for LoadFailureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(egui::RichText::new("Could not load questions").color(egui::Color32::RED));
            ui.add_space(10.0);
            ui.label(self.message.as_str());
            ui.label("Check the question file and restart the application.");
        });
    }
}

pub fn run_app(session: Result<QuizService, SessionError>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    let app: Box<dyn eframe::App> = match session {
        Ok(service) => Box::new(QuizApp::new(service)),
        Err(e) => Box::new(LoadFailureApp::new(&e)),
    };

    eframe::run_native("Quiz Practice", options, Box::new(|_cc| Ok(app)))
}
