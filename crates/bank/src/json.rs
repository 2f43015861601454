use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use quiz_core::model::{AnswerOption, Question, QuestionError};

use crate::source::QuestionSource;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors surfaced while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("failed to read question bank")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question bank")]
    Parse(#[from] serde_json::Error),

    #[error("question {index} has no options")]
    MissingOptions { index: usize },

    #[error("question {index} has no answer")]
    MissingAnswer { index: usize },

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        source: QuestionError,
    },
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

// The bank file is `{"questions": [...]}` where each record carries its
// options and answer as single-element arrays of label→text maps, labels
// written with a trailing dot ("A.").

#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    options: Vec<BTreeMap<String, String>>,
    answer: Vec<BTreeMap<String, String>>,
}

impl QuestionRecord {
    /// Converts the wire record into a validated domain `Question`.
    fn into_question(self, index: usize) -> Result<Question, BankError> {
        let options = self
            .options
            .into_iter()
            .next()
            .ok_or(BankError::MissingOptions { index })?;
        let answer = self
            .answer
            .into_iter()
            .next()
            .and_then(|map| map.into_keys().next())
            .ok_or(BankError::MissingAnswer { index })?;

        let options: Vec<AnswerOption> = options
            .into_iter()
            .map(|(label, text)| AnswerOption::new(&label, text))
            .collect();

        Question::new(self.question, options, &answer)
            .map_err(|source| BankError::Question { index, source })
    }
}

//
// ─── JSON BANK ─────────────────────────────────────────────────────────────────
//

/// Question source backed by a JSON bank file on disk.
#[derive(Debug, Clone)]
pub struct JsonBank {
    path: PathBuf,
}

impl JsonBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a bank from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns `BankError` on malformed JSON or on any record that fails
    /// question validation.
    pub fn parse(raw: &str) -> Result<Vec<Question>, BankError> {
        let file: BankFile = serde_json::from_str(raw)?;
        file.questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_question(index))
            .collect()
    }
}

impl QuestionSource for JsonBank {
    fn load(&self) -> Result<Vec<Question>, BankError> {
        let raw = fs::read_to_string(&self.path)?;
        Self::parse(&raw)
    }
}
