use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while building a `Question`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no answer options")]
    NoOptions,

    #[error("duplicate option label: {label}")]
    DuplicateLabel { label: String },

    #[error("correct label {label} is not among the offered options")]
    UnknownCorrectLabel { label: String },
}

//
// ─── LABELS ────────────────────────────────────────────────────────────────────
//

/// Canonicalizes an option label: trims whitespace, strips a trailing dot,
/// uppercases. The bank's wire format writes labels as `"A."`; user input
/// arrives as anything from `a` to ` b. `.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    raw.trim().trim_end_matches('.').to_ascii_uppercase()
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    label: String,
    text: String,
}

impl AnswerOption {
    /// Creates an option, canonicalizing the label.
    #[must_use]
    pub fn new(label: &str, text: impl Into<String>) -> Self {
        Self {
            label: normalize_label(label),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An immutable multiple-choice question.
///
/// The designated correct label is guaranteed to exist among the offered
/// options; `new` refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
    correct: String,
}

impl Question {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` for an empty option list,
    /// `QuestionError::DuplicateLabel` when two options share a label, and
    /// `QuestionError::UnknownCorrectLabel` when the correct label does not
    /// match any offered option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
        correct_label: &str,
    ) -> Result<Self, QuestionError> {
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.label == option.label) {
                return Err(QuestionError::DuplicateLabel {
                    label: option.label.clone(),
                });
            }
        }

        let correct = normalize_label(correct_label);
        if !options.iter().any(|o| o.label == correct) {
            return Err(QuestionError::UnknownCorrectLabel { label: correct });
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_label(&self) -> &str {
        &self.correct
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.label == self.correct)
            .map(|o| o.text())
            .unwrap_or_default()
    }

    /// Looks up an option by (canonicalized) label.
    #[must_use]
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        let label = normalize_label(label);
        self.options.iter().find(|o| o.label == label)
    }

    /// Returns true when the given label names the correct option.
    #[must_use]
    pub fn is_correct(&self, label: &str) -> bool {
        normalize_label(label) == self.correct
    }
}

//
// ─── POOL ──────────────────────────────────────────────────────────────────────
//

/// The full set of questions for a session, immutable once built.
///
/// Ids are assigned positionally, so a pool hands out stable
/// `(QuestionId, &Question)` pairs for the selector and used-set to key on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        usize::try_from(id.value())
            .ok()
            .and_then(|i| self.questions.get(i))
    }

    /// Iterates over every question with its id.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| (QuestionId::new(i as u64), q))
    }
}
