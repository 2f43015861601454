use rand::Rng;

use quiz_core::model::{AnswerOutcome, Question, QuestionPool, SessionEnd, SessionState};
use quiz_core::scoring;

use crate::error::PromptError;
use crate::selector;

//
// ─── PROMPTER SEAM ─────────────────────────────────────────────────────────────
//

/// The I/O collaborator: renders one question and captures a classified
/// answer. Implementations own all user-facing text; the runner never
/// assumes a transport.
pub trait Prompter {
    /// Presents `question` for `points` and blocks for the player's answer.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` when the answer cannot be captured. The runner
    /// treats this as an incorrect, unassigned answer.
    fn present(&mut self, question: &Question, points: i64)
        -> Result<AnswerOutcome, PromptError>;

    /// Reports the running score after an answered question.
    fn progress(&mut self, score: i64, max_score: i64);
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Final accounting for one finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub end: SessionEnd,
    pub score: i64,
    pub max_score: i64,
    pub questions_asked: u32,
    pub wrong_answers: u32,
    pub answered_correctly: usize,
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// Drives one quiz session to a terminal state.
///
/// Owns the session state, borrows the immutable pool, and loops:
/// select → present → score → check termination. Strictly synchronous; each
/// iteration blocks on the prompter.
pub struct QuizRunner<'a, R: Rng> {
    pool: &'a QuestionPool,
    rng: R,
    max_score: i64,
    state: SessionState,
}

impl<'a, R: Rng> QuizRunner<'a, R> {
    #[must_use]
    pub fn new(pool: &'a QuestionPool, rng: R) -> Self {
        Self {
            pool,
            rng,
            max_score: scoring::max_score(pool.len()),
            state: SessionState::new(),
        }
    }

    /// Theoretical maximum for this pool, fixed at construction.
    #[must_use]
    pub fn max_score(&self) -> i64 {
        self.max_score
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs the session until a terminal state is reached.
    ///
    /// Never fails: capture errors degrade to incorrect answers, and pool
    /// exhaustion is a normal ending.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> SessionReport {
        loop {
            let Some((id, question)) = selector::pick(self.pool, self.state.used(), &mut self.rng)
            else {
                return self.report(SessionEnd::Exhausted);
            };

            let points = scoring::points_for(self.state.questions_asked());

            let outcome = match prompter.present(question, points) {
                Ok(outcome) => outcome,
                Err(err) => {
                    // Capture faults consume an attempt but never abort the session.
                    log::warn!("{err}");
                    AnswerOutcome::Incorrect
                }
            };

            match outcome {
                AnswerOutcome::UserExit => {
                    // The pending question leaves no trace: no score change,
                    // no counters, not marked used.
                    return self.report(SessionEnd::ExitedByUser);
                }
                AnswerOutcome::Correct => self.state.record_correct(id, points),
                AnswerOutcome::Incorrect => {
                    if self.state.record_incorrect(points) {
                        return self.report(SessionEnd::TooManyWrong);
                    }
                }
            }

            prompter.progress(self.state.score(), self.max_score);
        }
    }

    fn report(&self, end: SessionEnd) -> SessionReport {
        SessionReport {
            end,
            score: self.state.score(),
            max_score: self.max_score,
            questions_asked: self.state.questions_asked(),
            wrong_answers: self.state.wrong_answers(),
            answered_correctly: self.state.used().len(),
        }
    }
}
