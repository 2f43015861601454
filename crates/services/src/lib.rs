#![forbid(unsafe_code)]

pub mod error;
pub mod runner;
pub mod selector;

pub use error::PromptError;
pub use runner::{Prompter, QuizRunner, SessionReport};
