use std::collections::HashSet;

use crate::model::ids::QuestionId;

/// Number of incorrect answers that ends a session.
pub const WRONG_ANSWER_LIMIT: u32 = 10;

/// Classified result of presenting one question to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The selected option was the designated correct one.
    Correct,
    /// The selected option was wrong, unrecognized, or capture failed.
    Incorrect,
    /// The player typed an exit token instead of answering.
    UserExit,
}

/// Terminal states of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every question in the pool has been answered correctly.
    Exhausted,
    /// The player quit mid-session.
    ExitedByUser,
    /// The wrong-answer limit was reached.
    TooManyWrong,
}

/// Mutable per-session counters and used-question history.
///
/// Owned by the runner for exactly one session; there is no global state.
/// Each answered question mutates it exactly once, via `record_correct` or
/// `record_incorrect`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    score: i64,
    wrong_answers: u32,
    questions_asked: u32,
    used: HashSet<QuestionId>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Running score. May go negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    /// Count of questions asked so far, correct and incorrect alike.
    #[must_use]
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Questions answered correctly so far, ineligible for reselection.
    #[must_use]
    pub fn used(&self) -> &HashSet<QuestionId> {
        &self.used
    }

    #[must_use]
    pub fn is_used(&self, id: QuestionId) -> bool {
        self.used.contains(&id)
    }

    /// Records a correct answer worth `points`: the score grows and the
    /// question is retired into the used-set.
    pub fn record_correct(&mut self, id: QuestionId, points: i64) {
        self.score += points;
        self.used.insert(id);
        self.questions_asked += 1;
    }

    /// Records an incorrect answer: `points` are lost, matching the message
    /// the player sees. The question is not retired and may be drawn again.
    ///
    /// Returns true when this answer reached the wrong-answer limit,
    /// checked strictly after incrementing.
    #[must_use]
    pub fn record_incorrect(&mut self, points: i64) -> bool {
        self.score -= points;
        self.wrong_answers += 1;
        self.questions_asked += 1;
        self.wrong_answers >= WRONG_ANSWER_LIMIT
    }
}
