use chrono::{DateTime, Local};

use crate::session::exercise::{Exercise, current_word_index};
use crate::session::timer::{Timer, words_per_minute};
use crate::text::scorer::{CheckReport, score};
use crate::text::tokenizer::{compose, tokenize};

/// Lifecycle of one practice session. `Checked` keeps the verdicts on screen;
/// editing the input drops them and resumes typing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Ready,
    InProgress,
    Checked,
}

/// Everything that can change the session, funneled through a single
/// transition function so illegal moves (checking with no exercise, typing
/// with nothing loaded) are rejected in one place.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    LoadExercise(Exercise),
    ClearExercise,
    InputChanged(String),
    Check,
    Reset,
}

pub struct Session {
    phase: Phase,
    exercise: Option<Exercise>,
    input: String,
    current_word: usize,
    report: Option<CheckReport>,
    checked_at: Option<DateTime<Local>>,
    timer: Timer,
    wpm: u32,
    case_sensitive: bool,
}

impl Session {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            phase: Phase::Empty,
            exercise: None,
            input: String::new(),
            current_word: 0,
            report: None,
            checked_at: None,
            timer: Timer::default(),
            wpm: 0,
            case_sensitive,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn exercise(&self) -> Option<&Exercise> {
        self.exercise.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn current_word(&self) -> usize {
        self.current_word
    }

    pub fn report(&self) -> Option<&CheckReport> {
        self.report.as_ref()
    }

    pub fn checked_at(&self) -> Option<DateTime<Local>> {
        self.checked_at
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.timer.elapsed_secs()
    }

    /// The input area is enabled only when the exercise has tokens to type.
    pub fn can_type(&self) -> bool {
        self.exercise.as_ref().is_some_and(Exercise::is_typable)
    }

    /// Check is an explicit action; empty input never produces a report.
    pub fn can_check(&self) -> bool {
        matches!(self.phase, Phase::InProgress | Phase::Checked) && !self.input.is_empty()
    }

    /// Case sensitivity applies at comparison time only; flipping it does not
    /// disturb in-progress typing.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::LoadExercise(exercise) => {
                self.exercise = Some(exercise);
                self.clear_progress();
                self.phase = Phase::Ready;
            }
            SessionEvent::ClearExercise => {
                self.exercise = None;
                self.clear_progress();
                self.phase = Phase::Empty;
            }
            SessionEvent::InputChanged(raw) => self.input_changed(raw),
            SessionEvent::Check => self.check(),
            SessionEvent::Reset => {
                self.clear_progress();
                self.phase = if self.exercise.is_some() {
                    Phase::Ready
                } else {
                    Phase::Empty
                };
            }
        }
    }

    fn input_changed(&mut self, raw: String) {
        let Some(exercise) = self.exercise.as_ref() else {
            return;
        };
        let mode = exercise.mode;
        let typable = exercise.is_typable();

        self.input = compose(&raw);
        // Recomputed on every keystroke regardless of phase.
        self.current_word = current_word_index(&self.input, mode);

        match self.phase {
            Phase::Empty => {}
            Phase::Ready => {
                if !self.input.is_empty() && typable {
                    self.timer.start();
                    self.phase = Phase::InProgress;
                }
            }
            Phase::InProgress => {
                if self.input.is_empty() {
                    self.timer.reset();
                    self.wpm = 0;
                    self.phase = Phase::Ready;
                }
            }
            Phase::Checked => {
                self.report = None;
                self.checked_at = None;
                self.wpm = 0;
                self.timer.reset();
                if self.input.is_empty() {
                    self.phase = Phase::Ready;
                } else {
                    self.timer.start();
                    self.phase = Phase::InProgress;
                }
            }
        }
    }

    fn check(&mut self) {
        if !self.can_check() {
            return;
        }
        let Some(exercise) = self.exercise.as_ref() else {
            return;
        };

        self.timer.stop();
        let typed = tokenize(&self.input, exercise.mode);
        // Always the full sequences, not just the typed prefix.
        let report = score(exercise.tokens(), &typed, self.case_sensitive);
        self.wpm = words_per_minute(typed.len(), self.timer.elapsed_secs());
        self.report = Some(report);
        self.checked_at = Some(Local::now());
        self.phase = Phase::Checked;
    }

    fn clear_progress(&mut self) {
        self.input.clear();
        self.current_word = 0;
        self.report = None;
        self.checked_at = None;
        self.timer.reset();
        self.wpm = 0;
    }
}
