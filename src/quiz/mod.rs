use chrono::Utc;
use log::warn;
use std::time::Duration;

use crate::catalog::question::OPTION_COUNT;
use crate::catalog::{Catalog, CategoryFilter, Question};
use crate::output::{Notification, QuizOutput};
use crate::score::{ScoreRecord, ScoreStore};

mod timer;


use timer::AdvanceTimer;

/// Delay between revealing an answer and moving to the next question.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub enum Phase {
    NotStarted,
    InProgress(ActiveQuiz),
    Complete(QuizSummary),
}

/// State of a quiz attempt in flight. The question list is fixed at start;
/// `current_index` walks it forward only. Answers are recorded per question
/// at submit time and are the sole scoring authority.
#[derive(Debug)]
pub struct ActiveQuiz {
    filter: CategoryFilter,
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<usize>,
    revealed: bool,
    score: u32,
    answered: Vec<bool>,
    user_answers: Vec<Option<usize>>,
    advance_timer: Option<AdvanceTimer>,
}

impl ActiveQuiz {
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    /// True once the current question's correctness is on display and
    /// further input on it is locked.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> &[bool] {
        &self.answered
    }

    pub fn user_answers(&self) -> &[Option<usize>] {
        &self.user_answers
    }

    /// Completion ratio for the progress bar. A revealed question counts
    /// as done.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + self.revealed as usize) as f32 / self.questions.len() as f32
    }

    fn cancel_advance(&mut self) {
        if let Some(timer) = &mut self.advance_timer {
            timer.cancel();
        }
        self.advance_timer = None;
    }

    fn final_record(&self) -> ScoreRecord {
        let total = self.questions.len() as u32;
        let percentage = if total == 0 {
            0
        } else {
            (f64::from(self.score) * 100.0 / f64::from(total)).round() as u32
        };
        ScoreRecord {
            correct: self.score,
            total,
            percentage,
            category: self.filter.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Outcome of a completed attempt, kept for the results screen. The
/// matching [`ScoreRecord`] has already been handed to the store.
#[derive(Debug)]
pub struct QuizSummary {
    record: ScoreRecord,
}

impl QuizSummary {
    pub fn record(&self) -> &ScoreRecord {
        &self.record
    }

    pub fn correct(&self) -> u32 {
        self.record.correct
    }

    pub fn total(&self) -> u32 {
        self.record.total
    }

    pub fn percentage(&self) -> u32 {
        self.record.percentage
    }
}

/// One quiz attempt from category selection to completion.
///
/// All operations run to completion on the caller's thread. Calls that are
/// invalid for the current phase (double submits, selecting after reveal)
/// are silent no-ops: they come from ordinary UI races, not bugs.
pub struct QuizSession<S: ScoreStore, O: QuizOutput> {
    phase: Phase,
    store: S,
    output: O,
}

impl<S: ScoreStore, O: QuizOutput> QuizSession<S, O> {
    pub fn new(store: S, output: O) -> Self {
        QuizSession {
            phase: Phase::NotStarted,
            store,
            output,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Complete(_))
    }

    /// Begins a new attempt over the questions matching `filter`, in
    /// catalog order. Always permitted; any attempt in flight is discarded
    /// first, along with its pending auto-advance. A filter matching no
    /// questions still starts a (trivially completable) session.
    pub fn start(&mut self, catalog: &Catalog, filter: CategoryFilter) {
        self.reset();
        let questions = catalog.questions_for(&filter);
        let count = questions.len();
        self.phase = Phase::InProgress(ActiveQuiz {
            filter,
            questions,
            current_index: 0,
            selected_answer: None,
            revealed: false,
            score: 0,
            answered: vec![false; count],
            user_answers: vec![None; count],
            advance_timer: None,
        });
    }

    /// Picks an option for the current question. Ignored once the answer
    /// is revealed: the question is frozen until the auto-advance fires.
    pub fn select_option(&mut self, index: usize) {
        debug_assert!(index < OPTION_COUNT, "option index out of range");
        if let Phase::InProgress(quiz) = &mut self.phase {
            if !quiz.revealed && !quiz.questions.is_empty() {
                quiz.selected_answer = Some(index);
            }
        }
    }

    /// Locks in the current selection: records it, scores it, reveals
    /// correctness and schedules the auto-advance. A no-op without a
    /// selection, or if this question was already submitted.
    pub fn submit(&mut self) {
        let quiz = match &mut self.phase {
            Phase::InProgress(quiz) => quiz,
            _ => return,
        };
        if quiz.revealed || quiz.questions.is_empty() {
            return;
        }
        let selected = match quiz.selected_answer {
            Some(selected) => selected,
            None => return,
        };

        quiz.answered[quiz.current_index] = true;
        quiz.user_answers[quiz.current_index] = Some(selected);
        if quiz.questions[quiz.current_index].is_correct(selected) {
            quiz.score += 1;
        }
        quiz.revealed = true;
        quiz.advance_timer = Some(AdvanceTimer::new(AUTO_ADVANCE_DELAY));
    }

    /// Moves past a revealed question, or completes the session after the
    /// last one. Normally invoked by the auto-advance timer via [`tick`],
    /// but callable directly (and the only way to complete an empty
    /// session).
    ///
    /// [`tick`]: QuizSession::tick
    pub fn advance(&mut self) {
        let record = match &mut self.phase {
            Phase::InProgress(quiz) => {
                if !quiz.revealed && !quiz.questions.is_empty() {
                    return;
                }
                quiz.cancel_advance();
                if quiz.current_index + 1 < quiz.questions.len() {
                    quiz.current_index += 1;
                    quiz.selected_answer = None;
                    quiz.revealed = false;
                    return;
                }
                quiz.final_record()
            }
            _ => return,
        };

        // Losing a score record must not keep the user from seeing their
        // result.
        if let Err(e) = self.store.append(&record) {
            warn!("Could not save quiz score: {:#}", e);
        }
        self.output.notify(&Notification::QuizComplete {
            correct: record.correct,
            total: record.total,
            percentage: record.percentage,
            category: record.category.clone(),
        });
        self.phase = Phase::Complete(QuizSummary { record });
    }

    /// Feeds elapsed wall-clock time into the pending auto-advance, if any.
    pub fn tick(&mut self, dt: Duration) {
        let fire = match &mut self.phase {
            Phase::InProgress(quiz) => match &mut quiz.advance_timer {
                Some(timer) => {
                    timer.tick(dt);
                    timer.is_over()
                }
                None => false,
            },
            _ => false,
        };
        if fire {
            self.advance();
        }
    }

    /// Abandons the current attempt. Cancels any pending auto-advance so a
    /// stale timer cannot touch a later session. Score records already
    /// persisted are untouched.
    pub fn reset(&mut self) {
        if let Phase::InProgress(quiz) = &mut self.phase {
            quiz.cancel_advance();
        }
        self.phase = Phase::NotStarted;
    }
}
