use quiz_core::model::Question;

use crate::json::BankError;

/// A supplier of well-formed questions for one session.
///
/// Implementations own the storage concern; the core assumes every returned
/// `Question` already satisfies its invariants (the `Question` constructor
/// enforces them, so a source cannot hand out a malformed record).
pub trait QuestionSource {
    /// Loads the full question bank.
    ///
    /// # Errors
    ///
    /// Returns `BankError` when the bank cannot be read or fails validation.
    fn load(&self) -> Result<Vec<Question>, BankError>;
}

/// Question source backed by an in-memory list. Used in tests and for
/// embedding a fixed bank.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    questions: Vec<Question>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl QuestionSource for InMemorySource {
    fn load(&self) -> Result<Vec<Question>, BankError> {
        Ok(self.questions.clone())
    }
}
